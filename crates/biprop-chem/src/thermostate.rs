// ─────────────────────────────────────────────────────────────────────
// Biprop Performance Map — Thermostate
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pure-fluid thermostate provider.
//!
//! The mapper queries one property: saturation pressure of the
//! oxidizer at ambient temperature, quality 0 (saturated liquid),
//! which estimates the self-pressurized tank pressure. The provider
//! is a trait so the chemistry backend can be swapped without
//! touching the sweep.

use biprop_types::constants::{N2O_P_CRIT, N2O_T_CRIT, N2O_T_TRIPLE};
use biprop_types::error::{PerfError, PerfResult};

/// Property requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Pressure,
    Temperature,
}

/// Named state variable fixing one degree of freedom of the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateVar {
    /// Temperature (K).
    Temperature(f64),
    /// Pressure (Pa).
    Pressure(f64),
    /// Vapor quality in [0, 1]; 0 is saturated liquid.
    Quality(f64),
}

/// Two state variables pin a pure-fluid state; the provider returns a
/// third property. Mirrors the CoolProp-style `PropsSI` call shape.
pub trait ThermostateProvider {
    fn property(
        &self,
        target: Property,
        state_1: StateVar,
        state_2: StateVar,
        species: &str,
    ) -> PerfResult<f64>;
}

// Wagner-form reduced vapor-pressure fit for N2O (ESDU coefficients):
//   ln(p/p_c) = (T_c/T) · (b1·τ + b2·τ^1.5 + b3·τ^2.5 + b4·τ^5),  τ = 1 − T/T_c
const N2O_WAGNER_B: [f64; 4] = [-6.71893, 1.35966, -1.3779, -4.051];

/// Saturation-curve provider backed by per-species correlations.
///
/// Currently covers N2O over [triple, critical]. Unknown species and
/// out-of-envelope temperatures fail with `ModelFailure`.
#[derive(Debug, Clone, Default)]
pub struct SaturationTable;

impl SaturationTable {
    pub fn new() -> Self {
        SaturationTable
    }

    /// Saturation pressure (Pa) of `species` at `temperature_k`.
    pub fn saturation_pressure(&self, species: &str, temperature_k: f64) -> PerfResult<f64> {
        if !species.eq_ignore_ascii_case("N2O") && !species.eq_ignore_ascii_case("NitrousOxide") {
            return Err(PerfError::ModelFailure(format!(
                "no saturation data for species '{species}'"
            )));
        }
        if !(N2O_T_TRIPLE..=N2O_T_CRIT).contains(&temperature_k) {
            return Err(PerfError::ModelFailure(format!(
                "temperature {temperature_k} K outside saturation envelope \
                 [{N2O_T_TRIPLE}, {N2O_T_CRIT}] K"
            )));
        }

        let tr = temperature_k / N2O_T_CRIT;
        let tau = 1.0 - tr;
        let [b1, b2, b3, b4] = N2O_WAGNER_B;
        let ln_pr =
            (b1 * tau + b2 * tau.powf(1.5) + b3 * tau.powf(2.5) + b4 * tau.powi(5)) / tr;
        Ok(N2O_P_CRIT * ln_pr.exp())
    }
}

impl ThermostateProvider for SaturationTable {
    fn property(
        &self,
        target: Property,
        state_1: StateVar,
        state_2: StateVar,
        species: &str,
    ) -> PerfResult<f64> {
        if target != Property::Pressure {
            return Err(PerfError::ModelFailure(
                "saturation table only answers pressure queries".into(),
            ));
        }

        // Accept (T, Q) in either order; quality must be physical.
        let mut temperature = None;
        let mut quality = None;
        for var in [state_1, state_2] {
            match var {
                StateVar::Temperature(t) => temperature = Some(t),
                StateVar::Quality(q) => quality = Some(q),
                StateVar::Pressure(_) => {
                    return Err(PerfError::ModelFailure(
                        "pressure query cannot be pinned by pressure".into(),
                    ))
                }
            }
        }
        let (Some(t), Some(q)) = (temperature, quality) else {
            return Err(PerfError::ModelFailure(
                "saturation pressure query needs temperature and quality".into(),
            ));
        };
        if !(0.0..=1.0).contains(&q) {
            return Err(PerfError::ModelFailure(format!(
                "vapor quality must lie in [0, 1]: {q}"
            )));
        }

        // Along the saturation dome pressure depends on T alone.
        self.saturation_pressure(species, t)
    }
}
