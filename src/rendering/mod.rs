//! Rendering of synthesized grids
//!
//! The synthesizer only emits booleans. This module turns a grid into
//! per-module geometry, paint commands, an RGBA raster or a text snapshot.

pub mod layout;
pub mod paint;
pub mod raster;
pub mod text;

pub use layout::{layout_modules, ModuleLayout, Rect};
pub use paint::{paint_pattern, PaintCommand};
pub use raster::{rasterize, Screenshot};
pub use text::{render_text, TextSnapshot, TextStyle};

use crate::{PatternConfig, Result};

/// Synthesize `value` with `config` and rasterize it into a square image.
pub fn render_pattern(value: &str, config: &PatternConfig) -> Result<Screenshot> {
    config.validate()?;
    let grid = config.synthesizer()?.synthesize(value);
    let commands = paint_pattern(&grid, config)?;
    rasterize(&commands, config.size, config.size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_pattern_produces_square_image() {
        let cfg = PatternConfig {
            size: 50,
            ..Default::default()
        };
        let s = render_pattern("QPON-OCSV-2501", &cfg).unwrap();
        assert_eq!(s.width, 50);
        assert_eq!(s.height, 50);
        assert_eq!(s.rgba.len(), 50 * 50 * 4);
        // top-left finder ring is dark
        assert_eq!(s.pixel(0, 0), Some(cfg.colors.foreground));
    }
}
