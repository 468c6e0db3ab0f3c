// File: crates/headcount-core/src/error.rs
// Summary: Error type for surface creation, encoding, and output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode {0} failed")]
    Encode(&'static str),
    #[error("surface used before begin()")]
    NotStarted,
    #[error("failed to write chart output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
