//! Qpon pattern synthesizer
//!
//! Turns a coupon redemption code into a deterministic, scan-style grid of
//! modules and renders it as rectangles, pixels or text.
//!
//! # Features
//!
//! - **Deterministic**: the same code always yields the same grid
//! - **Total**: every string (including `""`) produces a valid grid
//! - **Render-ready**: per-module geometry, paint commands and an RGBA raster
//!
//! The grid is decorative. It looks like a scan code (three corner finder
//! regions, dense data modules) but carries no error correction and cannot be
//! decoded back into the code.
//!
//! # Example
//!
//! ```
//! use qpon_pattern::{synthesize, PatternConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let grid = synthesize("QPON-OCSV-2501");
//! assert_eq!(grid.module_count(), 25);
//! assert!(grid.get(0, 0));
//!
//! let config = PatternConfig {
//!     size: 100,
//!     ..Default::default()
//! };
//! let shot = qpon_pattern::rendering::render_pattern("QPON-OCSV-2501", &config)?;
//! assert_eq!(shot.width, 100);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod synth;
pub use synth::{
    synthesize, synthesize_with, FinderCorner, Grid, PatternSynthesizer, Seed,
    DEFAULT_MODULE_COUNT,
};

// Geometry, paint commands, raster and text output for synthesized grids
pub mod rendering;

/// Largest rendered side length, in pixels
pub const MAX_SIZE: u32 = 4096;

/// Largest quiet zone, in modules
pub const MAX_QUIET_ZONE: usize = 64;

/// An RGBA color
pub type Rgba = (u8, u8, u8, u8);

/// Two-color palette used when painting a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    /// Color of empty modules and of the area outside the grid
    pub background: Rgba,
    /// Color of filled modules
    pub foreground: Rgba,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            background: (255, 255, 255, 255),
            foreground: (0, 0, 0, 255),
        }
    }
}

/// Configuration for synthesizing and rendering a pattern
///
/// The defaults match the coupon wallet: a 25x25 grid drawn into a
/// 250px square, black modules on white.
///
/// Missing fields in a JSON config fall back to these defaults.
///
/// # Examples
///
/// ```
/// let cfg = qpon_pattern::PatternConfig::default();
/// assert_eq!(cfg.module_count, 25);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Modules per side; odd and at least 21
    pub module_count: usize,
    /// Rendered side length in pixels
    pub size: u32,
    /// Module colors
    pub colors: Colors,
    /// Blank modules added around text output
    pub quiet_zone: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            module_count: DEFAULT_MODULE_COUNT,
            size: 250,
            colors: Colors::default(),
            quiet_zone: 0,
        }
    }
}

impl PatternConfig {
    /// Parse a config from JSON. Fields that are absent keep their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: PatternConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading pattern config from {}", path.display());
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn validate(&self) -> Result<()> {
        synth::validate_module_count(self.module_count)?;
        if self.size == 0 {
            return Err(Error::ConfigError("size must be greater than zero".into()));
        }
        if self.size > MAX_SIZE {
            return Err(Error::ConfigError(format!(
                "size {} exceeds the maximum of {}",
                self.size, MAX_SIZE
            )));
        }
        if self.quiet_zone > MAX_QUIET_ZONE {
            return Err(Error::ConfigError(format!(
                "quiet zone {} exceeds the maximum of {}",
                self.quiet_zone, MAX_QUIET_ZONE
            )));
        }
        Ok(())
    }

    /// Build a synthesizer for this config's module count.
    pub fn synthesizer(&self) -> Result<PatternSynthesizer> {
        PatternSynthesizer::new(self.module_count)
    }
}
