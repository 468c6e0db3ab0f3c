// File: crates/headcount-core/src/types.rs
// Summary: Shared types and constants (canvas size, margins, gutter geometry).

/// Default surface width in pixels.
pub const WIDTH: i32 = 960;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 500;

/// Width of the job-level gutter drawn left of the plot area.
pub const GUTTER_WIDTH: f32 = 120.0;
/// Horizontal inset of the gutter rectangle on each side.
pub const GUTTER_GAP: f32 = 10.0;
/// Inner and outer padding of the vertical band scale, as a fraction of a step.
pub const BAND_PADDING: f64 = 0.1;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Left margin hosts the job-level gutter; top margin hosts the column headers.
    fn default() -> Self {
        Self::new(120, 50, 50, 30)
    }
}
