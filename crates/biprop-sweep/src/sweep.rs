// ─────────────────────────────────────────────────────────────────────
// Biprop Performance Map — Sweep
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Exhaustive design-space sweep.
//!
//! Visits every (mixture ratio, expansion ratio) cell exactly once,
//! outer loop over the mixture-ratio axis, inner loop over the
//! expansion-ratio axis. A failing cell is recorded as Missing and
//! never aborts the sweep; there are no retries.

use biprop_chem::PerformanceModel;
use biprop_types::error::{PerfError, PerfResult};
use biprop_types::grid::{Axis, CellValue, ResultGrid};

/// Evaluate the performance model over the full Cartesian product of
/// the two axes at one fixed chamber pressure, shifting equilibrium.
///
/// Postcondition: the returned grid has shape
/// `(mr_axis.len(), eps_axis.len())` and every cell is either Valid
/// or Missing; model failures and non-finite outputs are contained
/// here as Missing and never propagate.
pub fn run_sweep(
    model: &dyn PerformanceModel,
    mr_axis: &Axis,
    eps_axis: &Axis,
    chamber_pressure_pa: f64,
    ambient_pressure_pa: f64,
) -> PerfResult<ResultGrid> {
    if !chamber_pressure_pa.is_finite() || chamber_pressure_pa <= 0.0 {
        return Err(PerfError::InvalidInput(format!(
            "chamber pressure must be finite and positive: {chamber_pressure_pa} Pa"
        )));
    }
    if ambient_pressure_pa < 0.0 || !ambient_pressure_pa.is_finite() {
        return Err(PerfError::InvalidInput(format!(
            "ambient pressure must be finite and non-negative: {ambient_pressure_pa} Pa"
        )));
    }

    let mut grid = ResultGrid::new(mr_axis.len(), eps_axis.len());

    for (i, mr) in mr_axis.iter().enumerate() {
        for (j, eps) in eps_axis.iter().enumerate() {
            if let Some(value) =
                evaluate_cell(model, chamber_pressure_pa, mr, eps, ambient_pressure_pa)
            {
                // Fresh grid + single visit per cell: record cannot
                // hit the write-once guard or the bounds check.
                grid.record(i, j, value)?;
            }
        }
    }

    Ok(grid)
}

/// One cell: both metrics, or None on any failure tag or non-finite
/// output. This is the containment boundary of `ModelFailure`.
fn evaluate_cell(
    model: &dyn PerformanceModel,
    pc_pa: f64,
    mixture_ratio: f64,
    expansion_ratio: f64,
    ambient_pa: f64,
) -> Option<CellValue> {
    let isp_s = model
        .ambient_specific_impulse(pc_pa, mixture_ratio, expansion_ratio, ambient_pa, false)
        .ok()?;
    let t_comb_k = model.combustion_temperature(pc_pa, mixture_ratio).ok()?;
    if !isp_s.is_finite() || !t_comb_k.is_finite() {
        return None;
    }
    Some(CellValue { isp_s, t_comb_k })
}
