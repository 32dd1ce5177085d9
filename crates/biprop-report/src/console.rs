// ─────────────────────────────────────────────────────────────────────
// Biprop Performance Map — Console Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed-precision console summary of a study.
//!
//! Pressures and ratios print with two decimals, specific impulse and
//! temperature with one.

use biprop_types::grid::{OptimumRecord, PerformanceMap};

/// The pressure block: tank state and derived chamber target, in MPa.
pub fn pressure_report(oxidizer: &str, tank_pressure_pa: f64, chamber_pressure_pa: f64) -> String {
    format!(
        "------ Pressures ------\n\
         Initial {oxidizer} Tank Pressure: {:.2} MPa\n\
         Target chamber pressure: {:.2} MPa",
        tank_pressure_pa * 1e-6,
        chamber_pressure_pa * 1e-6,
    )
}

/// The optimum block: winning design point and its metrics.
pub fn optimum_report(optimum: &OptimumRecord) -> String {
    format!(
        "------ Optimal Sea-Level Performance ------\n\
         Optimal OF ratio: {:.2}\n\
         Optimal expansion ratio: {:.2}\n\
         Sea-level Isp: {:.1} s\n\
         Combustion Temperature: {:.1} K",
        optimum.mixture_ratio, optimum.expansion_ratio, optimum.isp_s, optimum.t_comb_k,
    )
}

/// Both blocks for a completed map.
pub fn full_report(oxidizer: &str, map: &PerformanceMap) -> String {
    format!(
        "{}\n{}",
        pressure_report(oxidizer, map.tank_pressure_pa, map.chamber_pressure_pa),
        optimum_report(&map.optimum),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressure_block_precision() {
        let report = pressure_report("N2O", 5.662e6, 2.831e6);
        assert!(report.contains("Initial N2O Tank Pressure: 5.66 MPa"));
        assert!(report.contains("Target chamber pressure: 2.83 MPa"));
    }

    #[test]
    fn test_optimum_block_precision() {
        let opt = OptimumRecord {
            i: 39,
            j: 0,
            mixture_ratio: 4.4615,
            expansion_ratio: 3.43589,
            isp_s: 226.57,
            t_comb_k: 3112.44,
        };
        let report = optimum_report(&opt);
        assert!(report.contains("Optimal OF ratio: 4.46"));
        assert!(report.contains("Optimal expansion ratio: 3.44"));
        assert!(report.contains("Sea-level Isp: 226.6 s"));
        assert!(report.contains("Combustion Temperature: 3112.4 K"));
    }
}
