//! Paint commands for a synthesized grid

use serde::Serialize;

use crate::rendering::layout::pixel_span;
use crate::{Error, Grid, PatternConfig, Result, Rgba};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PaintCommand {
    /// Fill the whole surface
    Clear { rgba: Rgba },
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgba: Rgba,
    },
}

/// Background clear followed by one foreground rect per filled module.
///
/// Rect edges are snapped to whole pixels; `config.size` must be at least the
/// module count so no module collapses to zero width.
pub fn paint_pattern(grid: &Grid, config: &PatternConfig) -> Result<Vec<PaintCommand>> {
    let n = grid.module_count();
    if (config.size as usize) < n {
        return Err(Error::RenderError(format!(
            "size {}px cannot hold {} modules per side",
            config.size, n
        )));
    }

    let mut commands = Vec::with_capacity(grid.dark_count() + 1);
    commands.push(PaintCommand::Clear {
        rgba: config.colors.background,
    });
    for (row, col) in grid.dark_modules() {
        let (x0, x1) = pixel_span(col, n, config.size);
        let (y0, y1) = pixel_span(row, n, config.size);
        commands.push(PaintCommand::SolidRect {
            x: x0 as i32,
            y: y0 as i32,
            width: x1 - x0,
            height: y1 - y0,
            rgba: config.colors.foreground,
        });
    }
    log::debug!("painted {} modules into {}px", commands.len() - 1, config.size);
    Ok(commands)
}
