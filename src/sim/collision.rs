//! Axis-aligned collision tests
//!
//! Overlap with an obstacle is terminal (the run ends), so there is no
//! resolution or reflection here, just conservative AABB overlap checks.

use glam::Vec2;

/// Axis-aligned bounding box, stored as center plus half extents
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    /// Separating-axis overlap test. Touching edges count as overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (self.center.x - other.center.x).abs() <= self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() <= self.half.y + other.half.y
    }
}
