// File: crates/headcount-plugin/src/visualization.rs
// Summary: Typed host contract (configure / mount / update) with a guaranteed completion callback.

use headcount_core::Surface;
use serde_json::Value;

use crate::error::PluginError;
use crate::options::{OptionSpec, VisConfig};
use crate::readiness::DependencyLoader;

/// Outcome reported to the host when an update finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderStatus {
    Rendered { job_levels: usize, records: usize },
    /// No rows; the mount point was cleared.
    Empty,
    Failed(String),
}

/// Host completion hook. `FnOnce` makes a second call impossible.
pub type DoneCallback = Box<dyn FnOnce(RenderStatus)>;

pub trait Visualization {
    fn id(&self) -> &'static str;

    /// Configuration schema the host shows to users.
    fn options(&self) -> &[OptionSpec];

    /// Called once when the host attaches the visualization to its mount point.
    fn mount(&mut self, surface: &mut dyn Surface, loader: DependencyLoader) -> Result<(), PluginError>;

    /// Draw `rows` with `config`, replacing whatever the mount point shows.
    fn render(&mut self, rows: &[Value], surface: &mut dyn Surface, config: &VisConfig) -> Result<RenderStatus, PluginError>;

    /// Host entry point for data or config changes. `done` runs exactly once,
    /// whatever the outcome.
    fn update(&mut self, rows: &[Value], surface: &mut dyn Surface, config: &VisConfig, done: DoneCallback) -> Result<RenderStatus, PluginError> {
        let result = self.render(rows, surface, config);
        let status = match &result {
            Ok(status) => status.clone(),
            Err(e) => {
                log::error!("{}: update failed: {e}", self.id());
                RenderStatus::Failed(e.to_string())
            }
        };
        done(status);
        result
    }
}
