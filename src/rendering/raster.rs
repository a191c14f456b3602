//! Software rasterizer for paint commands

use sha2::{Digest, Sha256};

use crate::rendering::paint::PaintCommand;
use crate::{Error, Result, Rgba, MAX_SIZE};

/// An RGBA8 image, row-major, 4 bytes per pixel
#[derive(Debug, Clone, PartialEq)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Screenshot {
    /// Transparent image of the given size. Each side is capped at `MAX_SIZE`.
    pub fn empty(width: u32, height: u32) -> Result<Self> {
        if width > MAX_SIZE || height > MAX_SIZE {
            return Err(Error::RenderError(format!(
                "{}x{} image exceeds the {}px limit",
                width, height, MAX_SIZE
            )));
        }
        let len = width as usize * height as usize * 4;
        Ok(Self {
            width,
            height,
            rgba: vec![0; len],
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let p = &self.rgba[i..i + 4];
        Some((p[0], p[1], p[2], p[3]))
    }

    /// Hex SHA-256 of the pixel buffer, prefixed with the dimensions.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width.to_le_bytes());
        hasher.update(self.height.to_le_bytes());
        hasher.update(&self.rgba);
        hex::encode(hasher.finalize())
    }

    fn fill(&mut self, x: i32, y: i32, width: u32, height: u32, rgba: Rgba) {
        // clip to the surface
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + width as i64).min(self.width as i64);
        let y1 = (y as i64 + height as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let color = [rgba.0, rgba.1, rgba.2, rgba.3];
        let stride = self.width as usize * 4;
        for py in y0 as usize..y1 as usize {
            let row = &mut self.rgba[py * stride..(py + 1) * stride];
            for px in row[x0 as usize * 4..x1 as usize * 4].chunks_exact_mut(4) {
                px.copy_from_slice(&color);
            }
        }
    }
}

/// Execute `commands` in order on a `width x height` surface.
pub fn rasterize(commands: &[PaintCommand], width: u32, height: u32) -> Result<Screenshot> {
    let mut shot = Screenshot::empty(width, height)?;
    for cmd in commands {
        match *cmd {
            PaintCommand::Clear { rgba } => shot.fill(0, 0, width, height, rgba),
            PaintCommand::SolidRect { x, y, width, height, rgba } => {
                shot.fill(x, y, width, height, rgba)
            }
        }
    }
    Ok(shot)
}
