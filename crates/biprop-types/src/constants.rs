// ─────────────────────────────────────────────────────────────────────
// Biprop Performance Map — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Standard gravity (m/s²), converts effective exhaust velocity to Isp.
pub const G0: f64 = 9.80665;

/// Universal gas constant (J/(mol·K)).
pub const R_UNIVERSAL: f64 = 8.314462618;

/// Standard sea-level atmospheric pressure (Pa).
pub const P_SEA_LEVEL: f64 = 101_325.0;

/// Celsius to Kelvin offset.
pub const CELSIUS_OFFSET: f64 = 273.15;

/// N2O critical temperature (K).
pub const N2O_T_CRIT: f64 = 309.52;

/// N2O critical pressure (Pa).
pub const N2O_P_CRIT: f64 = 7.245e6;

/// N2O triple-point temperature (K), lower bound of the saturation fit.
pub const N2O_T_TRIPLE: f64 = 182.33;
