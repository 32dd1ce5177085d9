// ─────────────────────────────────────────────────────────────────────
// Biprop Performance Map — Nozzle
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Performance model: ideal-nozzle expansion of the equilibrium
//! chamber state.
//!
//! The model is a tagged-result capability: every physically invalid
//! or numerically unstable input comes back as `ModelFailure`, never
//! as a panic or a silent NaN. The sweep engine maps failures to
//! Missing cells.

use crate::combustion::{chamber_state, ChamberState};
use biprop_types::constants::G0;
use biprop_types::error::{PerfError, PerfResult};

/// Newton iteration cap for the area–Mach inversion.
const AREA_MACH_MAX_ITER: usize = 80;

/// Relative convergence tolerance on the area ratio.
const AREA_MACH_TOL: f64 = 1e-10;

/// Summerfield separation criterion: the flow detaches (and the
/// one-dimensional model stops being meaningful) once the exit
/// pressure drops below this fraction of ambient.
const SEPARATION_PRESSURE_RATIO: f64 = 0.3;

/// Frozen-composition knockdown on Isp relative to shifting
/// equilibrium; recombination energy is lost through the nozzle.
const FROZEN_KNOCKDOWN: f64 = 0.97;

/// Sea-level engine performance capability.
///
/// Units are fixed: pressures in Pa, temperatures in K, specific
/// impulse in seconds.
pub trait PerformanceModel {
    /// Ambient specific impulse (s) at the given operating point.
    /// `frozen = false` requests shifting equilibrium.
    fn ambient_specific_impulse(
        &self,
        pc_pa: f64,
        mixture_ratio: f64,
        expansion_ratio: f64,
        ambient_pa: f64,
        frozen: bool,
    ) -> PerfResult<f64>;

    /// Chamber combustion temperature (K).
    fn combustion_temperature(&self, pc_pa: f64, mixture_ratio: f64) -> PerfResult<f64>;
}

/// One-dimensional isentropic nozzle over the N2O/ethanol chamber fits.
#[derive(Debug, Clone, Default)]
pub struct IdealNozzleModel;

impl IdealNozzleModel {
    pub fn new() -> Self {
        IdealNozzleModel
    }
}

/// Isentropic area ratio A/A* at Mach `m`.
fn area_ratio(m: f64, gamma: f64) -> f64 {
    let e = (gamma + 1.0) / (2.0 * (gamma - 1.0));
    (1.0 / m) * ((2.0 / (gamma + 1.0)) * (1.0 + 0.5 * (gamma - 1.0) * m * m)).powf(e)
}

/// Supersonic exit Mach number for a given area ratio.
///
/// Newton on the area–Mach relation, analytic derivative
/// d(ln A)/dM = (M² − 1) / (M·(1 + (γ−1)/2·M²)). The sonic point is a
/// stationary point, so the iterate is kept strictly supersonic.
fn exit_mach(eps: f64, gamma: f64) -> PerfResult<f64> {
    if eps < 1.0 {
        return Err(PerfError::ModelFailure(format!(
            "expansion ratio {eps} below sonic throat limit"
        )));
    }
    if (eps - 1.0).abs() < 1e-12 {
        return Ok(1.0);
    }

    let mut m = 1.0 + (eps - 1.0).sqrt();
    for _ in 0..AREA_MACH_MAX_ITER {
        let a = area_ratio(m, gamma);
        let resid = a - eps;
        if resid.abs() < AREA_MACH_TOL * eps {
            return Ok(m);
        }
        let dlna_dm = (m * m - 1.0) / (m * (1.0 + 0.5 * (gamma - 1.0) * m * m));
        let step = resid / (a * dlna_dm);
        m = (m - step).max(1.0 + 1e-9);
        if !m.is_finite() {
            break;
        }
    }
    Err(PerfError::ModelFailure(format!(
        "area-Mach inversion did not converge for eps={eps}, gamma={gamma}"
    )))
}

/// Characteristic velocity c* (m/s) of the chamber state.
fn characteristic_velocity(state: &ChamberState) -> f64 {
    let gamma = state.gamma;
    let vandenkerckhove = gamma.sqrt()
        * (2.0 / (gamma + 1.0)).powf((gamma + 1.0) / (2.0 * (gamma - 1.0)));
    (state.gas_constant() * state.t_comb_k).sqrt() / vandenkerckhove
}

impl PerformanceModel for IdealNozzleModel {
    fn ambient_specific_impulse(
        &self,
        pc_pa: f64,
        mixture_ratio: f64,
        expansion_ratio: f64,
        ambient_pa: f64,
        frozen: bool,
    ) -> PerfResult<f64> {
        if ambient_pa < 0.0 {
            return Err(PerfError::ModelFailure(format!(
                "ambient pressure must be non-negative: {ambient_pa}"
            )));
        }

        let state = chamber_state(pc_pa, mixture_ratio)?;
        let gamma = state.gamma;
        let r_spec = state.gas_constant();

        let m_exit = exit_mach(expansion_ratio, gamma)?;
        let stagnation = 1.0 + 0.5 * (gamma - 1.0) * m_exit * m_exit;
        let t_exit = state.t_comb_k / stagnation;
        let p_exit = pc_pa * stagnation.powf(-gamma / (gamma - 1.0));

        if p_exit < SEPARATION_PRESSURE_RATIO * ambient_pa {
            return Err(PerfError::ModelFailure(format!(
                "flow separation: exit pressure {p_exit:.0} Pa below \
                 {SEPARATION_PRESSURE_RATIO} of ambient {ambient_pa:.0} Pa"
            )));
        }

        let v_exit = m_exit * (gamma * r_spec * t_exit).sqrt();

        // Pressure thrust per unit mass flow: ṁ = p_c·A_t/c*, A_e = ε·A_t
        let c_star = characteristic_velocity(&state);
        let v_equivalent = v_exit + (p_exit - ambient_pa) * expansion_ratio * c_star / pc_pa;

        let mut isp = v_equivalent / G0;
        if frozen {
            isp *= FROZEN_KNOCKDOWN;
        }

        if !isp.is_finite() || isp <= 0.0 {
            return Err(PerfError::ModelFailure(format!(
                "non-physical Isp {isp} s at pc={pc_pa}, MR={mixture_ratio}, eps={expansion_ratio}"
            )));
        }
        Ok(isp)
    }

    fn combustion_temperature(&self, pc_pa: f64, mixture_ratio: f64) -> PerfResult<f64> {
        Ok(chamber_state(pc_pa, mixture_ratio)?.t_comb_k)
    }
}
