// ─────────────────────────────────────────────────────────────────────
// Biprop Performance Map — Grid
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sweep axes, the result grid, and the optimum record.
//!
//! Index convention, used everywhere in this workspace: row index `i`
//! follows the mixture-ratio axis, column index `j` follows the
//! expansion-ratio axis. The npz export writes both axes explicitly so
//! the plotting side cannot transpose silently.

use crate::error::{PerfError, PerfResult};
use ndarray::{Array1, Array2};

/// One sweep dimension: an ordered set of sample points.
///
/// Invariant: strictly increasing, at least one point. Enforced at
/// construction; an `Axis` in hand is always valid.
#[derive(Debug, Clone)]
pub struct Axis {
    values: Array1<f64>,
}

impl Axis {
    /// Evenly spaced axis over `[min, max]`, like `np.linspace`.
    ///
    /// `count == 1` collapses to the single point `min`.
    pub fn linspace(min: f64, max: f64, count: usize) -> PerfResult<Self> {
        if count == 0 {
            return Err(PerfError::InvalidInput("axis needs at least one point".into()));
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(PerfError::InvalidInput(format!(
                "axis bounds must be finite: [{min}, {max}]"
            )));
        }
        if count > 1 && max <= min {
            return Err(PerfError::InvalidInput(format!(
                "axis bounds must satisfy min < max: [{min}, {max}]"
            )));
        }
        Ok(Axis {
            values: Array1::linspace(min, max, count),
        })
    }

    /// Axis from explicit sample points. Rejects empty, non-finite,
    /// or non-strictly-increasing input.
    pub fn from_values(values: Vec<f64>) -> PerfResult<Self> {
        if values.is_empty() {
            return Err(PerfError::InvalidInput("axis needs at least one point".into()));
        }
        for w in values.windows(2) {
            if !(w[1] > w[0]) {
                return Err(PerfError::InvalidInput(format!(
                    "axis must be strictly increasing: {} then {}",
                    w[0], w[1]
                )));
            }
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(PerfError::InvalidInput("axis points must be finite".into()));
        }
        Ok(Axis {
            values: Array1::from(values),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bounds-checked sample access.
    pub fn get(&self, idx: usize) -> PerfResult<f64> {
        self.values
            .get(idx)
            .copied()
            .ok_or(PerfError::AxisOutOfBounds(idx))
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

/// A successfully evaluated cell: both metrics finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellValue {
    /// Sea-level-ambient specific impulse (s).
    pub isp_s: f64,
    /// Combustion temperature (K).
    pub t_comb_k: f64,
}

/// Outcome of one cell evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CellResult {
    /// Evaluation failed or has not happened; permanently absent data.
    #[default]
    Missing,
    Valid(CellValue),
}

impl CellResult {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellResult::Missing)
    }
}

/// Two-dimensional array of cell results, shape `(n_mr, n_eps)`.
///
/// Created all-Missing, populated write-once during a sweep, then
/// handed to readers by value. Rows follow the mixture-ratio axis,
/// columns the expansion-ratio axis.
#[derive(Debug, Clone)]
pub struct ResultGrid {
    cells: Array2<CellResult>,
}

impl ResultGrid {
    pub fn new(n_mr: usize, n_eps: usize) -> Self {
        ResultGrid {
            cells: Array2::from_elem((n_mr, n_eps), CellResult::Missing),
        }
    }

    /// (rows, cols) = (mixture-ratio samples, expansion-ratio samples).
    pub fn dim(&self) -> (usize, usize) {
        self.cells.dim()
    }

    pub fn get(&self, i: usize, j: usize) -> PerfResult<CellResult> {
        self.cells
            .get((i, j))
            .copied()
            .ok_or(PerfError::GridOutOfBounds { row: i, col: j })
    }

    /// Record a cell value. Each cell may be written at most once and
    /// only with finite metrics; failed evaluations stay Missing
    /// rather than carrying NaN into the grid.
    pub fn record(&mut self, i: usize, j: usize, value: CellValue) -> PerfResult<()> {
        if !value.isp_s.is_finite() || !value.t_comb_k.is_finite() {
            return Err(PerfError::InvalidInput(format!(
                "cell ({i}, {j}) metrics must be finite: isp={}, t_comb={}",
                value.isp_s, value.t_comb_k
            )));
        }
        let cell = self
            .cells
            .get_mut((i, j))
            .ok_or(PerfError::GridOutOfBounds { row: i, col: j })?;
        if !cell.is_missing() {
            return Err(PerfError::InvalidInput(format!(
                "cell ({i}, {j}) already written"
            )));
        }
        *cell = CellResult::Valid(value);
        Ok(())
    }

    /// Cells with a valid result.
    pub fn populated_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_missing()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_missing()).count()
    }

    /// The Isp surface with NaN at missing cells, for export/plotting.
    pub fn isp_surface(&self) -> Array2<f64> {
        self.cells.map(|c| match c {
            CellResult::Valid(v) => v.isp_s,
            CellResult::Missing => f64::NAN,
        })
    }

    /// The combustion-temperature surface with NaN at missing cells.
    pub fn t_comb_surface(&self) -> Array2<f64> {
        self.cells.map(|c| match c {
            CellResult::Valid(v) => v.t_comb_k,
            CellResult::Missing => f64::NAN,
        })
    }
}

/// The sweep's winning cell with its axis values and both metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimumRecord {
    pub i: usize,
    pub j: usize,
    pub mixture_ratio: f64,
    pub expansion_ratio: f64,
    pub isp_s: f64,
    pub t_comb_k: f64,
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone)]
pub struct PerformanceMap {
    pub tank_pressure_pa: f64,
    pub chamber_pressure_pa: f64,
    pub mr_axis: Axis,
    pub eps_axis: Axis,
    pub grid: ResultGrid,
    pub optimum: OptimumRecord,
}
