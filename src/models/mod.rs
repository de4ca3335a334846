//! Domain models for the launch dashboard.
//!
//! # Core Concepts
//!
//! - [`LaunchRecord`]: One row of the launch dataset. Rows are loaded once at
//!   startup and never mutated.
//! - [`SiteSelection`] / [`PayloadRange`]: The values of the two dashboard
//!   controls, passed to the chart handlers on every change.
//! - [`Figure`]: A chart specification in Plotly figure JSON shape. The server
//!   never renders pixels; the page hands figures to plotly.js.
//! - [`DashboardParams`]: Display parameters derived from the table (dropdown
//!   options, slider marks, slider default value).

mod controls;
mod figure;
mod launch;
mod params;

pub use controls::*;
pub use figure::*;
pub use launch::*;
pub use params::*;
