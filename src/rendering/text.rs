//! Text snapshot of a grid, one line per module row

use std::fmt;

use crate::{Grid, MAX_QUIET_ZONE};

/// Glyphs used for filled and empty modules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub dark: String,
    pub light: String,
    /// Blank modules added on every side, capped at `MAX_QUIET_ZONE`
    pub quiet_zone: usize,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            dark: "\u{2588}\u{2588}".to_string(),
            light: "  ".to_string(),
            quiet_zone: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSnapshot {
    pub lines: Vec<String>,
}

impl fmt::Display for TextSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

pub fn render_text(grid: &Grid, style: &TextStyle) -> TextSnapshot {
    let q = style.quiet_zone.min(MAX_QUIET_ZONE);
    let width = grid.module_count() + 2 * q;
    let blank = style.light.repeat(width);

    let mut lines = Vec::with_capacity(width);
    lines.extend(std::iter::repeat(blank.clone()).take(q));
    for row in grid.rows() {
        let mut line = style.light.repeat(q);
        for &dark in row {
            line.push_str(if dark { &style.dark } else { &style.light });
        }
        line.push_str(&style.light.repeat(q));
        lines.push(line);
    }
    lines.extend(std::iter::repeat(blank).take(q));
    TextSnapshot { lines }
}
