// File: crates/headcount-core/src/lib.rs
// Summary: Core library entry point; exports aggregation, layout, and rendering API.

pub mod aggregate;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod raster;
pub mod scale;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use aggregate::{aggregate, layout_total, CategorySummary, EmployeeStatus, InputRecord};
pub use chart::{render, HeadcountChart};
pub use error::ChartError;
pub use layout::{layout, percent_label, Anchor, HeaderPlacement, RenderOptions, Scene, Segment, Shape};
pub use raster::RasterSurface;
pub use surface::{Surface, SvgSurface};
pub use text::TextShaper;
pub use theme::Theme;
