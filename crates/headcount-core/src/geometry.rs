// File: crates/headcount-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub const fn from_xywh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }
    pub fn right(&self) -> f32 { self.left + self.width }
    pub fn center_x(&self) -> f32 { self.left + self.width * 0.5 }

    /// True when `other` shares interior area with `self` (touching edges do not count).
    pub fn overlaps_x(&self, other: &RectF) -> bool {
        self.left < other.right() - 1e-4 && other.left < self.right() - 1e-4
    }
}
