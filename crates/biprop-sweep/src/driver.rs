// ─────────────────────────────────────────────────────────────────────
// Biprop Performance Map — Driver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One-shot pipeline: config → tank state → chamber target → sweep →
//! optimum.

use crate::chamber::derive_target_pressure;
use crate::optimum::select_optimum;
use crate::sweep::run_sweep;
use biprop_chem::{PerformanceModel, Property, StateVar, ThermostateProvider};
use biprop_types::config::SweepConfig;
use biprop_types::error::PerfResult;
use biprop_types::grid::PerformanceMap;

/// Run the full study described by `config`.
///
/// The oxidizer tank is assumed self-pressurized at the saturated-
/// liquid state for the ambient temperature; the chamber target is
/// derived once and held constant across the sweep. Callers wanting
/// per-point chamber pressures run the stages individually.
pub fn map_performance(
    config: &SweepConfig,
    provider: &dyn ThermostateProvider,
    model: &dyn PerformanceModel,
) -> PerfResult<PerformanceMap> {
    config.validate()?;

    let mr_axis = config.mr_axis()?;
    let eps_axis = config.eps_axis()?;

    let tank_pressure_pa = provider.property(
        Property::Pressure,
        StateVar::Temperature(config.ambient_temperature_k),
        StateVar::Quality(0.0),
        &config.oxidizer,
    )?;
    let chamber_pressure_pa = derive_target_pressure(tank_pressure_pa, config.drop_fraction)?;

    let grid = run_sweep(
        model,
        &mr_axis,
        &eps_axis,
        chamber_pressure_pa,
        config.ambient_pressure_pa,
    )?;
    let optimum = select_optimum(&grid, &mr_axis, &eps_axis)?;

    Ok(PerformanceMap {
        tank_pressure_pa,
        chamber_pressure_pa,
        mr_axis,
        eps_axis,
        grid,
        optimum,
    })
}
