// ─────────────────────────────────────────────────────────────────────
// Biprop Performance Map — Optimum
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Optimum selection over a populated result grid.

use biprop_types::error::{PerfError, PerfResult};
use biprop_types::grid::{Axis, CellResult, OptimumRecord, ResultGrid};

/// The cell with the greatest specific impulse among valid cells.
///
/// Scans in sweep order (mixture-ratio major); a strictly-greater
/// comparison makes ties resolve to the first cell visited, so
/// repeated runs pick the same winner. Missing cells are skipped.
/// Fails with `NoValidData` when the whole grid is Missing.
pub fn select_optimum(
    grid: &ResultGrid,
    mr_axis: &Axis,
    eps_axis: &Axis,
) -> PerfResult<OptimumRecord> {
    let (n_mr, n_eps) = grid.dim();
    if mr_axis.len() != n_mr || eps_axis.len() != n_eps {
        return Err(PerfError::InvalidInput(format!(
            "axis lengths ({}, {}) disagree with grid dimensions ({n_mr}, {n_eps})",
            mr_axis.len(),
            eps_axis.len()
        )));
    }

    let mut best: Option<OptimumRecord> = None;
    for i in 0..n_mr {
        for j in 0..n_eps {
            let CellResult::Valid(value) = grid.get(i, j)? else {
                continue;
            };
            if best.as_ref().is_none_or(|b| value.isp_s > b.isp_s) {
                best = Some(OptimumRecord {
                    i,
                    j,
                    mixture_ratio: mr_axis.get(i)?,
                    expansion_ratio: eps_axis.get(j)?,
                    isp_s: value.isp_s,
                    t_comb_k: value.t_comb_k,
                });
            }
        }
    }

    best.ok_or(PerfError::NoValidData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use biprop_types::grid::CellValue;

    fn axes() -> (Axis, Axis) {
        (
            Axis::from_values(vec![2.0, 5.0, 8.0]).unwrap(),
            Axis::from_values(vec![1.0, 10.0, 20.0]).unwrap(),
        )
    }

    fn cell(isp: f64) -> CellValue {
        CellValue {
            isp_s: isp,
            t_comb_k: 2400.0,
        }
    }

    #[test]
    fn test_selects_maximum() {
        let (mr, eps) = axes();
        let mut grid = ResultGrid::new(3, 3);
        grid.record(0, 0, cell(110.0)).unwrap();
        grid.record(1, 2, cell(130.0)).unwrap();
        grid.record(2, 0, cell(179.0)).unwrap();

        let opt = select_optimum(&grid, &mr, &eps).unwrap();
        assert_eq!((opt.i, opt.j), (2, 0));
        assert!((opt.mixture_ratio - 8.0).abs() < 1e-12);
        assert!((opt.expansion_ratio - 1.0).abs() < 1e-12);
        assert!((opt.isp_s - 179.0).abs() < 1e-12);
    }

    #[test]
    fn test_skips_missing_cells() {
        let (mr, eps) = axes();
        let mut grid = ResultGrid::new(3, 3);
        grid.record(1, 1, cell(42.0)).unwrap();

        let opt = select_optimum(&grid, &mr, &eps).unwrap();
        assert_eq!((opt.i, opt.j), (1, 1), "only populated cell must win");
    }

    #[test]
    fn test_tie_break_first_in_sweep_order() {
        let (mr, eps) = axes();
        let mut grid = ResultGrid::new(3, 3);
        grid.record(0, 2, cell(150.0)).unwrap();
        grid.record(1, 0, cell(150.0)).unwrap();
        grid.record(2, 2, cell(150.0)).unwrap();

        let opt = select_optimum(&grid, &mr, &eps).unwrap();
        assert_eq!((opt.i, opt.j), (0, 2), "ties resolve to first visited");
    }

    #[test]
    fn test_non_finite_writes_cannot_win() {
        // A NaN metric is rejected at the grid boundary, so the best
        // finite cell wins even when the NaN write came first.
        let (mr, eps) = axes();
        let mut grid = ResultGrid::new(3, 3);
        assert!(grid
            .record(
                0,
                0,
                CellValue {
                    isp_s: f64::NAN,
                    t_comb_k: 2400.0,
                },
            )
            .is_err());
        grid.record(1, 1, cell(179.0)).unwrap();

        let opt = select_optimum(&grid, &mr, &eps).unwrap();
        assert_eq!((opt.i, opt.j), (1, 1));
        assert!(opt.isp_s.is_finite());
        assert!((opt.isp_s - 179.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_missing_is_no_valid_data() {
        let (mr, eps) = axes();
        let grid = ResultGrid::new(3, 3);
        assert!(matches!(
            select_optimum(&grid, &mr, &eps),
            Err(PerfError::NoValidData)
        ));
    }

    #[test]
    fn test_axis_mismatch_rejected() {
        let (mr, _) = axes();
        let short = Axis::from_values(vec![1.0, 2.0]).unwrap();
        let grid = ResultGrid::new(3, 3);
        assert!(matches!(
            select_optimum(&grid, &mr, &short),
            Err(PerfError::InvalidInput(_))
        ));
    }
}
