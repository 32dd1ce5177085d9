// ─────────────────────────────────────────────────────────────────────
// Biprop Performance Map — Property-Based Tests (proptest) for biprop-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for biprop-types using proptest.
//!
//! Covers: Axis construction invariants, ResultGrid shape and
//! write-once behavior, configuration serialization roundtrip.

use biprop_types::config::SweepConfig;
use biprop_types::grid::{Axis, CellValue, ResultGrid};
use proptest::prelude::*;

// ── Axis construction invariants ─────────────────────────────────────

proptest! {
    /// Linspace axes honor length and endpoints.
    #[test]
    fn axis_linspace_endpoints(
        min in 0.1f64..10.0,
        span in 0.5f64..50.0,
        count in 2usize..128,
    ) {
        let max = min + span;
        let axis = Axis::linspace(min, max, count).unwrap();

        prop_assert_eq!(axis.len(), count);
        prop_assert!((axis.get(0).unwrap() - min).abs() < 1e-9);
        prop_assert!((axis.get(count - 1).unwrap() - max).abs() < 1e-9);
    }

    /// Linspace axes are strictly increasing.
    #[test]
    fn axis_linspace_strictly_increasing(
        min in 0.1f64..10.0,
        span in 0.5f64..50.0,
        count in 2usize..128,
    ) {
        let axis = Axis::linspace(min, min + span, count).unwrap();
        let mut prev = f64::NEG_INFINITY;
        for v in axis.iter() {
            prop_assert!(v > prev);
            prev = v;
        }
    }

    /// Out-of-range access always errors, in-range never does.
    #[test]
    fn axis_access_bounds(count in 1usize..64, beyond in 0usize..8) {
        let axis = Axis::linspace(1.0, 2.0, count).unwrap();
        for idx in 0..count {
            prop_assert!(axis.get(idx).is_ok());
        }
        prop_assert!(axis.get(count + beyond).is_err());
    }
}

// ── ResultGrid invariants ────────────────────────────────────────────

proptest! {
    /// A fresh grid has the requested shape and is all-Missing.
    #[test]
    fn grid_fresh_all_missing(n_mr in 1usize..32, n_eps in 1usize..32) {
        let grid = ResultGrid::new(n_mr, n_eps);
        prop_assert_eq!(grid.dim(), (n_mr, n_eps));
        prop_assert_eq!(grid.missing_count(), n_mr * n_eps);
        prop_assert_eq!(grid.populated_count(), 0);
    }

    /// Every in-bounds cell accepts exactly one write.
    #[test]
    fn grid_write_once_everywhere(n_mr in 1usize..12, n_eps in 1usize..12) {
        let mut grid = ResultGrid::new(n_mr, n_eps);
        let v = CellValue { isp_s: 200.0, t_comb_k: 3000.0 };
        for i in 0..n_mr {
            for j in 0..n_eps {
                prop_assert!(grid.record(i, j, v).is_ok());
                prop_assert!(grid.record(i, j, v).is_err());
            }
        }
        prop_assert_eq!(grid.populated_count(), n_mr * n_eps);
        prop_assert_eq!(grid.missing_count(), 0);
    }

    /// Surfaces mirror the grid: NaN exactly at Missing cells.
    #[test]
    fn grid_surfaces_mirror_population(
        n_mr in 1usize..10,
        n_eps in 1usize..10,
        skip in 0usize..100,
    ) {
        let mut grid = ResultGrid::new(n_mr, n_eps);
        for i in 0..n_mr {
            for j in 0..n_eps {
                if (i * n_eps + j) % (skip + 2) != 0 {
                    grid.record(i, j, CellValue {
                        isp_s: (i + j) as f64,
                        t_comb_k: 2000.0,
                    }).unwrap();
                }
            }
        }
        let isp = grid.isp_surface();
        for i in 0..n_mr {
            for j in 0..n_eps {
                let missing = grid.get(i, j).unwrap().is_missing();
                prop_assert_eq!(isp[[i, j]].is_nan(), missing);
            }
        }
    }
}

// ── Configuration roundtrip ──────────────────────────────────────────

proptest! {
    /// Any validated config survives a JSON roundtrip unchanged.
    #[test]
    fn config_json_roundtrip(
        mr_min in 1.0f64..4.0,
        mr_span in 1.0f64..8.0,
        mr_count in 1usize..64,
        eps_count in 1usize..64,
        drop in 0.0f64..0.95,
    ) {
        let cfg = SweepConfig {
            mr_min,
            mr_max: mr_min + mr_span,
            mr_count,
            eps_count,
            drop_fraction: drop,
            ..SweepConfig::default()
        };
        cfg.validate().unwrap();

        let json = serde_json::to_string(&cfg).unwrap();
        let back: SweepConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.mr_count, cfg.mr_count);
        prop_assert_eq!(back.eps_count, cfg.eps_count);
        prop_assert!((back.mr_min - cfg.mr_min).abs() < 1e-12);
        prop_assert!((back.drop_fraction - cfg.drop_fraction).abs() < 1e-12);
    }
}
