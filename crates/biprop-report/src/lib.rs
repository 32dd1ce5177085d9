//! Output sinks: console report and contour export.
//!
//! Pure consumers of a completed `PerformanceMap`; nothing here feeds
//! back into the sweep.

pub mod console;
pub mod contour;

pub use console::{optimum_report, pressure_report};
pub use contour::write_contour_npz;
