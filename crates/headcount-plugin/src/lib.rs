// File: crates/headcount-plugin/src/lib.rs
// Summary: Dashboard-host plugin layer: option schema, row decoding, readiness, registry.

pub mod employee_status;
pub mod error;
pub mod options;
pub mod readiness;
pub mod registry;
pub mod rows;
pub mod visualization;

pub use employee_status::EmployeeStatusChart;
pub use error::PluginError;
pub use options::{options_json, OptionKind, OptionSpec, VisConfig};
pub use readiness::{no_dependencies, DependencyLoader, Readiness};
pub use registry::Registry;
pub use rows::{decode_rows, host_row};
pub use visualization::{DoneCallback, RenderStatus, Visualization};
