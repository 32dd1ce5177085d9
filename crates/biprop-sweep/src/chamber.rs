// ─────────────────────────────────────────────────────────────────────
// Biprop Performance Map — Chamber
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Chamber condition derivation.

use biprop_types::error::{PerfError, PerfResult};

/// Target chamber pressure from tank pressure and the injector
/// pressure-drop fraction: `p_tank · (1 − drop)`.
///
/// Computed once per study; the whole sweep runs at this single
/// chamber pressure. Both tank pressure and achievable pressure drop
/// vary with mixture ratio in reality; callers wanting a coupled
/// model re-derive and re-run the sweep per operating point.
pub fn derive_target_pressure(tank_pressure_pa: f64, drop_fraction: f64) -> PerfResult<f64> {
    if !tank_pressure_pa.is_finite() || tank_pressure_pa <= 0.0 {
        return Err(PerfError::InvalidInput(format!(
            "tank pressure must be finite and positive: {tank_pressure_pa} Pa"
        )));
    }
    if !(0.0..1.0).contains(&drop_fraction) {
        return Err(PerfError::InvalidInput(format!(
            "injector pressure-drop fraction must lie in [0, 1): {drop_fraction}"
        )));
    }
    Ok(tank_pressure_pa * (1.0 - drop_fraction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_drop() {
        assert!((derive_target_pressure(10.0, 0.5).unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_drop_is_identity() {
        assert!((derive_target_pressure(5.66e6, 0.0).unwrap() - 5.66e6).abs() < 1e-6);
    }

    #[test]
    fn test_full_drop_rejected() {
        assert!(matches!(
            derive_target_pressure(10.0, 1.0),
            Err(PerfError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_negative_tank_rejected() {
        assert!(matches!(
            derive_target_pressure(-1.0, 0.5),
            Err(PerfError::InvalidInput(_))
        ));
        assert!(derive_target_pressure(0.0, 0.5).is_err());
        assert!(derive_target_pressure(f64::NAN, 0.5).is_err());
        assert!(derive_target_pressure(f64::INFINITY, 0.5).is_err());
    }

    #[test]
    fn test_negative_drop_rejected() {
        assert!(derive_target_pressure(10.0, -0.1).is_err());
    }
}
