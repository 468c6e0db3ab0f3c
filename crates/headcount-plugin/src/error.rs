// File: crates/headcount-plugin/src/error.rs
// Summary: Errors raised while decoding host input or driving the plugin lifecycle.

use std::time::Duration;

use headcount_core::ChartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("row {index}: missing field `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("row {index}: {reason}")]
    InvalidRow { index: usize, reason: String },
    #[error("invalid visualization config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("dependencies not ready after {waited:?}")]
    NotReady { waited: Duration },
    #[error("dependency loading failed: {0}")]
    DependencyFailed(String),
    #[error("visualization `{0}` is not mounted")]
    NotMounted(&'static str),
    #[error("visualization `{0}` is already registered")]
    DuplicateId(&'static str),
    #[error(transparent)]
    Render(#[from] ChartError),
}
