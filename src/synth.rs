//! Pattern synthesizer: turns a coupon code into a scan-style module grid.
//!
//! The grid is decorative. Three finder regions anchor the corners the way a
//! real scan code's finder patterns do, and every other module is a pure
//! function of `(seed, row, col)`, where the seed is the sum of the code's
//! character values. No module depends on any other module.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::{Error, Result};

/// Module count used by the coupon wallet.
pub const DEFAULT_MODULE_COUNT: usize = 25;

/// Smallest module count accepted by [`PatternSynthesizer::new`].
pub const MIN_MODULE_COUNT: usize = 21;

/// Side length of a finder region.
pub const FINDER_SIZE: usize = 7;

// Modules with `hash > FILL_THRESHOLD` are filled (~54% of data modules).
const FILL_THRESHOLD: u64 = 45;
const HASH_MODULUS: u64 = 100;

/// Additive checksum of an input string.
///
/// Anagrams share a seed; that is accepted, the seed only drives decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Seed(u64);

impl Seed {
    /// Sum of the UTF-16 code units of `value`, left to right.
    ///
    /// A character outside the Basic Multilingual Plane contributes both of
    /// its surrogates, so the seed matches hosts that iterate `charCodeAt`.
    pub fn from_value(value: &str) -> Self {
        Seed(
            value
                .encode_utf16()
                .fold(0u64, |acc, unit| acc.wrapping_add(u64::from(unit))),
        )
    }

    /// Sum of raw UTF-16 code units.
    pub fn from_utf16_units(units: &[u16]) -> Self {
        Seed(
            units
                .iter()
                .fold(0u64, |acc, &unit| acc.wrapping_add(u64::from(unit))),
        )
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Seed {
    fn from(v: u64) -> Self {
        Seed(v)
    }
}

/// The three corners that carry a finder region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinderCorner {
    TopLeft,
    TopRight,
    BottomLeft,
}

impl FinderCorner {
    pub const ALL: [FinderCorner; 3] = [
        FinderCorner::TopLeft,
        FinderCorner::TopRight,
        FinderCorner::BottomLeft,
    ];

    /// Top-left module `(row, col)` of this corner's 7x7 block.
    pub fn origin(self, module_count: usize) -> (usize, usize) {
        let far = module_count - FINDER_SIZE;
        match self {
            FinderCorner::TopLeft => (0, 0),
            FinderCorner::TopRight => (0, far),
            FinderCorner::BottomLeft => (far, 0),
        }
    }

    pub fn contains(self, module_count: usize, row: usize, col: usize) -> bool {
        let far = module_count - FINDER_SIZE;
        match self {
            FinderCorner::TopLeft => row < FINDER_SIZE && col < FINDER_SIZE,
            FinderCorner::TopRight => row < FINDER_SIZE && col >= far,
            FinderCorner::BottomLeft => row >= far && col < FINDER_SIZE,
        }
    }
}

/// Which finder region, if any, covers `(row, col)`.
pub fn finder_corner_at(module_count: usize, row: usize, col: usize) -> Option<FinderCorner> {
    FinderCorner::ALL
        .into_iter()
        .find(|corner| corner.contains(module_count, row, col))
}

/// Value of a finder module given its position inside the 7x7 block.
///
/// Filled on the outer ring or in the centre 3x3 block.
pub fn finder_module(local_row: usize, local_col: usize) -> bool {
    let edge = FINDER_SIZE - 1;
    let on_ring = local_row == 0 || local_row == edge || local_col == 0 || local_col == edge;
    let in_center = (2..=4).contains(&local_row) && (2..=4).contains(&local_col);
    on_ring || in_center
}

/// Value of a data module: `(seed * (row+1) * (col+1) + row * col) mod 100 > 45`.
///
/// Every factor is reduced mod 100 first so the product never overflows; the
/// result is the same as with unbounded integers.
pub fn data_module(seed: Seed, row: usize, col: usize) -> bool {
    let m = HASH_MODULUS;
    let r = row as u64;
    let c = col as u64;
    let product = (seed.get() % m) * ((r + 1) % m) % m * ((c + 1) % m) % m;
    let hash = (product + (r % m) * (c % m)) % m;
    hash > FILL_THRESHOLD
}

fn module_at(module_count: usize, seed: Seed, row: usize, col: usize) -> bool {
    match finder_corner_at(module_count, row, col) {
        Some(corner) => {
            let (r0, c0) = corner.origin(module_count);
            finder_module(row - r0, col - c0)
        }
        None => data_module(seed, row, col),
    }
}

/// Square matrix of modules, `true` meaning filled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    module_count: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn module_count(&self) -> usize {
        self.module_count
    }

    /// Module at `(row, col)`. Panics when out of range, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.module_count && col < self.module_count,
            "module ({row}, {col}) outside {n}x{n} grid",
            n = self.module_count
        );
        self.cells[row * self.module_count + col]
    }

    /// Checked variant of [`Grid::get`].
    pub fn is_dark(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.module_count && col < self.module_count {
            Some(self.cells[row * self.module_count + col])
        } else {
            None
        }
    }

    /// Rows in top-to-bottom order.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.module_count)
    }

    /// Filled modules as `(row, col)`, row-major.
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.module_count;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, dark)| **dark)
            .map(move |(i, _)| (i / n, i % n))
    }

    pub fn dark_count(&self) -> usize {
        self.cells.iter().filter(|dark| **dark).count()
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Grid", 2)?;
        s.serialize_field("module_count", &self.module_count)?;
        s.serialize_field("rows", &self.to_rows())?;
        s.end()
    }
}

/// Builds grids of a fixed, validated module count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSynthesizer {
    module_count: usize,
}

impl PatternSynthesizer {
    /// Create a synthesizer for `module_count x module_count` grids.
    ///
    /// The count must be odd and at least 21 so the three finder regions fit
    /// without overlapping.
    pub fn new(module_count: usize) -> Result<Self> {
        validate_module_count(module_count)?;
        Ok(Self { module_count })
    }

    pub fn module_count(&self) -> usize {
        self.module_count
    }

    /// Build the grid for `value`. Total over all strings.
    pub fn synthesize(&self, value: &str) -> Grid {
        let n = self.module_count;
        let seed = Seed::from_value(value);
        log::trace!("synthesizing {}x{} grid, seed={}", n, n, seed.get());

        let mut cells = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                cells.push(module_at(n, seed, row, col));
            }
        }
        Grid {
            module_count: n,
            cells,
        }
    }
}

impl Default for PatternSynthesizer {
    fn default() -> Self {
        Self {
            module_count: DEFAULT_MODULE_COUNT,
        }
    }
}

pub(crate) fn validate_module_count(module_count: usize) -> Result<()> {
    if module_count < MIN_MODULE_COUNT {
        return Err(Error::ConfigError(format!(
            "module count {} is below the minimum of {}",
            module_count, MIN_MODULE_COUNT
        )));
    }
    if module_count % 2 == 0 {
        return Err(Error::ConfigError(format!(
            "module count {} must be odd",
            module_count
        )));
    }
    Ok(())
}

/// Synthesize the default 25x25 grid for `value`.
pub fn synthesize(value: &str) -> Grid {
    PatternSynthesizer::default().synthesize(value)
}

/// Synthesize a grid of `module_count` modules per side.
///
/// # Panics
///
/// Panics if `module_count` is even or below 21; use
/// [`PatternSynthesizer::new`] to get an error instead.
pub fn synthesize_with(value: &str, module_count: usize) -> Grid {
    assert!(
        validate_module_count(module_count).is_ok(),
        "invalid module count {}: must be odd and >= {}",
        module_count,
        MIN_MODULE_COUNT
    );
    PatternSynthesizer { module_count }.synthesize(value)
}
