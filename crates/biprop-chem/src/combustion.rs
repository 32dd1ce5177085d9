// ─────────────────────────────────────────────────────────────────────
// Biprop Performance Map — Combustion
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! N2O/ethanol chamber correlations.
//!
//! Shifting-equilibrium chamber properties fitted against CEA runs at
//! a 3 MPa reference pressure: combustion temperature, mean product
//! molar mass, and specific-heat ratio as functions of mixture ratio,
//! with a weak logarithmic pressure term on temperature.

use biprop_types::error::{PerfError, PerfResult};

/// Mixture-ratio validity window of the fits.
pub const MR_MIN_VALID: f64 = 1.0;
pub const MR_MAX_VALID: f64 = 12.0;

/// Chamber-pressure validity window (Pa).
pub const PC_MIN_VALID: f64 = 2.0e5;
pub const PC_MAX_VALID: f64 = 3.0e7;

/// Mixture ratio of peak flame temperature (near stoichiometric).
const MR_PEAK: f64 = 5.5;

/// Peak combustion temperature (K) at the 3 MPa reference.
const TC_PEAK: f64 = 3150.0;

/// Quadratic falloff coefficients (1/MR²), fuel-rich and ox-rich side.
/// Dissociated fuel-rich products hold temperature better.
const TC_FALL_RICH: f64 = 0.012;
const TC_FALL_LEAN: f64 = 0.020;

/// Reference pressure of the fits (Pa).
const PC_REF: f64 = 3.0e6;

/// Pressure sensitivity of the flame temperature (per ln unit).
/// Higher pressure suppresses dissociation slightly.
const TC_PRESSURE_COEFF: f64 = 0.012;

/// Equilibrium chamber state entering the nozzle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChamberState {
    /// Combustion (stagnation) temperature (K).
    pub t_comb_k: f64,
    /// Mean product molar mass (kg/mol).
    pub molar_mass_kg_mol: f64,
    /// Effective specific-heat ratio of the products.
    pub gamma: f64,
}

impl ChamberState {
    /// Specific gas constant of the product mix (J/(kg·K)).
    pub fn gas_constant(&self) -> f64 {
        biprop_types::constants::R_UNIVERSAL / self.molar_mass_kg_mol
    }
}

/// Evaluate the chamber correlations at one operating point.
///
/// Fails with `ModelFailure` outside the fitted envelope; the sweep
/// engine maps that to a Missing cell.
pub fn chamber_state(pc_pa: f64, mixture_ratio: f64) -> PerfResult<ChamberState> {
    if !(MR_MIN_VALID..=MR_MAX_VALID).contains(&mixture_ratio) {
        return Err(PerfError::ModelFailure(format!(
            "mixture ratio {mixture_ratio} outside fit range [{MR_MIN_VALID}, {MR_MAX_VALID}]"
        )));
    }
    if !(PC_MIN_VALID..=PC_MAX_VALID).contains(&pc_pa) {
        return Err(PerfError::ModelFailure(format!(
            "chamber pressure {pc_pa} Pa outside fit range [{PC_MIN_VALID}, {PC_MAX_VALID}]"
        )));
    }

    let d = mixture_ratio - MR_PEAK;
    let fall = if d < 0.0 { TC_FALL_RICH } else { TC_FALL_LEAN };
    let pressure_term = 1.0 + TC_PRESSURE_COEFF * (pc_pa / PC_REF).ln();
    let t_comb_k = TC_PEAK * (1.0 - fall * d * d) * pressure_term;

    // Heavier products (N2, CO2, H2O over CO, H2) as the mix leans out
    let molar_mass_kg_mol = (23.0 + 0.6 * mixture_ratio) * 1e-3;

    // Near-stoichiometric dissociation lowers the effective gamma
    let gamma = (1.20 + 0.008 * d * d).min(1.33);

    if t_comb_k <= 0.0 || !t_comb_k.is_finite() {
        return Err(PerfError::ModelFailure(format!(
            "non-physical chamber temperature {t_comb_k} K at MR={mixture_ratio}"
        )));
    }

    Ok(ChamberState {
        t_comb_k,
        molar_mass_kg_mol,
        gamma,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_near_stoichiometric() {
        let peak = chamber_state(3.0e6, MR_PEAK).unwrap();
        for mr in [2.0, 3.0, 4.5, 7.0, 8.0] {
            let s = chamber_state(3.0e6, mr).unwrap();
            assert!(
                s.t_comb_k < peak.t_comb_k,
                "Tc({mr}) = {} should be below the peak {}",
                s.t_comb_k,
                peak.t_comb_k
            );
        }
    }

    #[test]
    fn test_fuel_rich_falls_slower_than_lean() {
        let rich = chamber_state(3.0e6, MR_PEAK - 2.0).unwrap();
        let lean = chamber_state(3.0e6, MR_PEAK + 2.0).unwrap();
        assert!(
            rich.t_comb_k > lean.t_comb_k,
            "rich {} K vs lean {} K",
            rich.t_comb_k,
            lean.t_comb_k
        );
    }

    #[test]
    fn test_pressure_raises_flame_temperature() {
        let low = chamber_state(1.0e6, 5.0).unwrap();
        let high = chamber_state(6.0e6, 5.0).unwrap();
        assert!(high.t_comb_k > low.t_comb_k);
        // Weak effect: within a few percent over this pressure span
        assert!((high.t_comb_k - low.t_comb_k) / low.t_comb_k < 0.05);
    }

    #[test]
    fn test_reasonable_magnitudes() {
        let s = chamber_state(2.8e6, 5.0).unwrap();
        assert!((2800.0..3300.0).contains(&s.t_comb_k), "Tc = {}", s.t_comb_k);
        assert!((0.020..0.032).contains(&s.molar_mass_kg_mol));
        assert!((1.15..1.35).contains(&s.gamma));
        assert!((250.0..420.0).contains(&s.gas_constant()));
    }

    #[test]
    fn test_out_of_envelope_fails() {
        assert!(chamber_state(3.0e6, 0.5).is_err());
        assert!(chamber_state(3.0e6, 15.0).is_err());
        assert!(chamber_state(1.0e4, 5.0).is_err());
        assert!(chamber_state(1.0e8, 5.0).is_err());
    }
}
