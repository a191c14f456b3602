//! Module geometry for a synthesized grid
//!
//! Each module is a square of side `size / module_count`. Module `(row, col)`
//! sits at `(col * cell_size, row * cell_size)`.

use serde::Serialize;

use crate::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Filled modules of a grid laid out in a `size x size` square.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleLayout {
    pub size: u32,
    pub module_count: usize,
    pub cell_size: f32,
    /// One rect per filled module, row-major
    pub rects: Vec<Rect>,
}

impl ModuleLayout {
    /// Rect of the module at `(row, col)` whether or not it is filled.
    pub fn module_rect(&self, row: usize, col: usize) -> Rect {
        Rect {
            x: col as f32 * self.cell_size,
            y: row as f32 * self.cell_size,
            width: self.cell_size,
            height: self.cell_size,
        }
    }
}

pub fn layout_modules(grid: &Grid, size: u32) -> ModuleLayout {
    let module_count = grid.module_count();
    let cell_size = size as f32 / module_count as f32;
    let mut layout = ModuleLayout {
        size,
        module_count,
        cell_size,
        rects: Vec::with_capacity(grid.dark_count()),
    };
    for (row, col) in grid.dark_modules() {
        let rect = layout.module_rect(row, col);
        layout.rects.push(rect);
    }
    layout
}

/// Integer pixel span `[start, end)` of module `index` along one axis.
///
/// Edges land on `floor(index * size / module_count)`, so adjacent modules
/// share an edge and the spans tile `[0, size)` exactly.
pub fn pixel_span(index: usize, module_count: usize, size: u32) -> (u32, u32) {
    let size = size as u64;
    let n = module_count as u64;
    let i = index as u64;
    ((i * size / n) as u32, ((i + 1) * size / n) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesize;

    #[test]
    fn layout_places_rects_at_cell_offsets() {
        let grid = synthesize("QPON-OCSV-2501");
        let layout = layout_modules(&grid, 250);
        assert_eq!(layout.cell_size, 10.0);
        assert_eq!(layout.rects.len(), grid.dark_count());
        assert_eq!(
            layout.rects[0],
            Rect {
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 10.0
            }
        );
        let r = layout.module_rect(3, 7);
        assert_eq!((r.x, r.y), (70.0, 30.0));
    }

    #[test]
    fn pixel_spans_tile_the_axis() {
        let mut prev_end = 0;
        for i in 0..25 {
            let (start, end) = pixel_span(i, 25, 100);
            assert_eq!(start, prev_end);
            assert!(end > start);
            prev_end = end;
        }
        assert_eq!(prev_end, 100);
    }
}
