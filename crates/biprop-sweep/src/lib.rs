//! Grid sweep engine, optimum selector, and the one-shot pipeline.
//!
//! The sweep visits the full Cartesian product of the two design axes
//! at one fixed chamber pressure, tolerating per-cell model failure;
//! the selector picks the cell with the greatest specific impulse.

pub mod chamber;
pub mod driver;
pub mod optimum;
pub mod sweep;

pub use chamber::derive_target_pressure;
pub use driver::map_performance;
pub use optimum::select_optimum;
pub use sweep::run_sweep;
