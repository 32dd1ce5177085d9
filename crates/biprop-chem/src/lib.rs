//! External-collaborator capabilities for the performance mapper.
//!
//! Two seams: the thermostate provider (pure-fluid property queries,
//! used once to seed the tank pressure) and the performance model
//! (equilibrium combustion + nozzle expansion, invoked per grid cell).

pub mod combustion;
pub mod nozzle;
pub mod thermostate;

pub use nozzle::{IdealNozzleModel, PerformanceModel};
pub use thermostate::{Property, SaturationTable, StateVar, ThermostateProvider};
