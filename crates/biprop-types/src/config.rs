// ─────────────────────────────────────────────────────────────────────
// Biprop Performance Map — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sweep configuration.
//!
//! Every field carries a serde default matching the N2O/ethanol
//! baseline study, so `{}` is a valid config file. Nothing here is
//! process-global; two sweeps with different configs can run in the
//! same process.

use crate::error::{PerfError, PerfResult};
use crate::grid::Axis;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_fuel")]
    pub fuel: String,
    #[serde(default = "default_oxidizer")]
    pub oxidizer: String,

    /// Mixture-ratio (O/F) axis bounds and sample count.
    #[serde(default = "default_mr_min")]
    pub mr_min: f64,
    #[serde(default = "default_mr_max")]
    pub mr_max: f64,
    #[serde(default = "default_mr_count")]
    pub mr_count: usize,

    /// Expansion-ratio axis bounds and sample count.
    #[serde(default = "default_eps_min")]
    pub eps_min: f64,
    #[serde(default = "default_eps_max")]
    pub eps_max: f64,
    #[serde(default = "default_eps_count")]
    pub eps_count: usize,

    /// Injector pressure-drop fraction, in [0, 1).
    #[serde(default = "default_drop_fraction")]
    pub drop_fraction: f64,

    /// Ambient temperature (K), sets the oxidizer tank saturation state.
    #[serde(default = "default_ambient_temperature")]
    pub ambient_temperature_k: f64,

    /// Ambient pressure (Pa) the nozzle exhausts against.
    #[serde(default = "default_ambient_pressure")]
    pub ambient_pressure_pa: f64,
}

fn default_fuel() -> String {
    "Ethanol".to_string()
}
fn default_oxidizer() -> String {
    "N2O".to_string()
}
fn default_mr_min() -> f64 {
    2.0
}
fn default_mr_max() -> f64 {
    8.0
}
fn default_mr_count() -> usize {
    40
}
fn default_eps_min() -> f64 {
    1.0
}
fn default_eps_max() -> f64 {
    20.0
}
fn default_eps_count() -> usize {
    40
}
fn default_drop_fraction() -> f64 {
    0.5
}
fn default_ambient_temperature() -> f64 {
    298.15
}
fn default_ambient_pressure() -> f64 {
    crate::constants::P_SEA_LEVEL
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            fuel: default_fuel(),
            oxidizer: default_oxidizer(),
            mr_min: default_mr_min(),
            mr_max: default_mr_max(),
            mr_count: default_mr_count(),
            eps_min: default_eps_min(),
            eps_max: default_eps_max(),
            eps_count: default_eps_count(),
            drop_fraction: default_drop_fraction(),
            ambient_temperature_k: default_ambient_temperature(),
            ambient_pressure_pa: default_ambient_pressure(),
        }
    }
}

impl SweepConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> PerfResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject malformed configuration before any sweep begins.
    pub fn validate(&self) -> PerfResult<()> {
        if self.mr_count == 0 || self.eps_count == 0 {
            return Err(PerfError::InvalidInput("axis counts must be >= 1".into()));
        }
        if self.mr_count > 1 && self.mr_max <= self.mr_min {
            return Err(PerfError::InvalidInput(format!(
                "mixture-ratio bounds must satisfy min < max: [{}, {}]",
                self.mr_min, self.mr_max
            )));
        }
        if self.eps_count > 1 && self.eps_max <= self.eps_min {
            return Err(PerfError::InvalidInput(format!(
                "expansion-ratio bounds must satisfy min < max: [{}, {}]",
                self.eps_min, self.eps_max
            )));
        }
        if self.mr_min <= 0.0 || self.eps_min < 1.0 {
            return Err(PerfError::InvalidInput(
                "mixture ratio must be positive and expansion ratio >= 1".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.drop_fraction) {
            return Err(PerfError::InvalidInput(format!(
                "drop_fraction must lie in [0, 1): {}",
                self.drop_fraction
            )));
        }
        if self.ambient_temperature_k <= 0.0 {
            return Err(PerfError::InvalidInput(format!(
                "ambient temperature must be positive: {}",
                self.ambient_temperature_k
            )));
        }
        if self.ambient_pressure_pa < 0.0 {
            return Err(PerfError::InvalidInput(format!(
                "ambient pressure must be non-negative: {}",
                self.ambient_pressure_pa
            )));
        }
        Ok(())
    }

    pub fn mr_axis(&self) -> PerfResult<Axis> {
        Axis::linspace(self.mr_min, self.mr_max, self.mr_count)
    }

    pub fn eps_axis(&self) -> PerfResult<Axis> {
        Axis::linspace(self.eps_min, self.eps_max, self.eps_count)
    }
}
