//! Integration tests for the pattern synthesizer

use qpon_pattern::synth::{data_module, finder_corner_at, FINDER_SIZE};
use qpon_pattern::{synthesize, FinderCorner, Grid, PatternConfig, PatternSynthesizer, Seed};
use std::sync::Arc;

const CODES: &[&str] = &[
    "",
    "QPON-OCSV-2501",
    "SAVE20",
    "BOGO-PIZZA-7781",
    "café-crème",
    "\u{1F355}FREE",
];

fn corner_cells(grid: &Grid) -> Vec<(usize, usize, bool)> {
    let n = grid.module_count();
    let mut out = Vec::new();
    for corner in FinderCorner::ALL {
        let (r0, c0) = corner.origin(n);
        for r in r0..r0 + FINDER_SIZE {
            for c in c0..c0 + FINDER_SIZE {
                out.push((r, c, grid.get(r, c)));
            }
        }
    }
    out
}

#[test]
fn test_dimension_invariant() {
    for code in CODES {
        let grid = synthesize(code);
        assert_eq!(grid.module_count(), 25);
        let rows = grid.to_rows();
        assert_eq!(rows.len(), 25);
        assert!(rows.iter().all(|r| r.len() == 25), "ragged grid for {:?}", code);
    }
}

#[test]
fn test_determinism() {
    for code in CODES {
        assert_eq!(synthesize(code), synthesize(code), "grid changed for {:?}", code);
    }
}

#[test]
fn test_finder_regions_ignore_input() {
    let reference = corner_cells(&synthesize("QPON-OCSV-2501"));
    for code in CODES {
        assert_eq!(corner_cells(&synthesize(code)), reference, "corner differs for {:?}", code);
    }
}

#[test]
fn test_single_character_edit_only_touches_data_modules() {
    let base = synthesize("QPON-OCSV-2501");
    let edited = synthesize("QPON-OCSV-2502");
    assert_ne!(base, edited);
    for row in 0..25 {
        for col in 0..25 {
            if finder_corner_at(25, row, col).is_some() {
                assert_eq!(base.get(row, col), edited.get(row, col), "({row},{col})");
            }
        }
    }
}

#[test]
fn test_known_code_modules() {
    let grid = synthesize("QPON-OCSV-2501");
    assert!(grid.get(0, 0));
    assert!(grid.get(3, 3));
    // seed 923: (923 * 11 * 11 + 10 * 10) mod 100 = 83 > 45
    assert!(grid.get(10, 10));
    // separator column next to the top-left finder: (923 * 1 * 8 + 0) mod 100 = 84
    assert!(grid.get(0, 7));
    // (923 * 8 * 1 + 0) mod 100 = 84
    assert!(grid.get(7, 0));
    // (923 * 2 * 9 + 8) mod 100 = 22
    assert!(!grid.get(1, 8));
}

#[test]
fn test_non_bmp_code_seeds_from_utf16_units() {
    // U+1F600 is the surrogate pair D83D DE00: unit sum 112189, scalar 128512
    let code = "\u{1F600}";
    let units: Vec<u16> = code.encode_utf16().collect();
    let seed = Seed::from_utf16_units(&units);
    assert_eq!(seed.get(), 112189);

    let grid = synthesize(code);
    let mut checked = 0;
    for row in 0..25 {
        for col in 0..25 {
            if finder_corner_at(25, row, col).is_none() {
                assert_eq!(grid.get(row, col), data_module(seed, row, col), "({row},{col})");
                checked += 1;
            }
        }
    }
    assert_eq!(checked, 25 * 25 - 3 * 49);

    // the scalar-value sum lands on a different residue and a different grid
    let scalar = Seed::from(0x1F600);
    assert!((0..25).any(|c| data_module(scalar, 10, c) != grid.get(10, c)));
}

#[test]
fn test_anagrams_share_a_grid() {
    assert_eq!(synthesize("AB"), synthesize("BA"));
    assert_eq!(synthesize("SAVE20"), synthesize("02EVAS"));
}

#[test]
fn test_fill_rate_is_dense_but_not_solid() {
    let grid = synthesize("QPON-OCSV-2501");
    let total = 25 * 25;
    let dark = grid.dark_count();
    assert!(dark > total / 4, "too sparse: {}", dark);
    assert!(dark < total * 9 / 10, "too dense: {}", dark);
}

#[test]
fn test_concurrent_synthesis_agrees() {
    let synth = Arc::new(PatternSynthesizer::default());
    let expected = synth.synthesize("QPON-OCSV-2501");
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let synth = Arc::clone(&synth);
            std::thread::spawn(move || synth.synthesize("QPON-OCSV-2501"))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn test_config_driven_module_count() {
    let cfg = PatternConfig::from_json_str(r#"{ "module_count": 29 }"#).unwrap();
    let grid = cfg.synthesizer().unwrap().synthesize("QPON");
    assert_eq!(grid.module_count(), 29);
    assert!(grid.get(28, 0));
    assert!(grid.get(0, 28));
    assert!(grid.get(25, 3));
}
