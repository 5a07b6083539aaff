//! Axis-aligned bounding box for workspace and obstacle geometry.
//!
//! [`Bounds3`] represents a rectangular volume in 3D space, used for:
//! - The workspace boundary (the volume the agent may move in)
//! - Obstacle boxes (the volumes the agent must avoid)
//! - Spatial queries (is a point inside a region)

use serde::{Deserialize, Serialize};

use super::point::WorldPoint;

/// Axis-aligned bounding box in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds3 {
    /// Minimum corner (smallest x, y and z values).
    pub min: WorldPoint,
    /// Maximum corner (largest x, y and z values).
    pub max: WorldPoint,
}

impl Bounds3 {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: WorldPoint, max: WorldPoint) -> Self {
        Self { min, max }
    }

    /// Create a bounding box from six extrema `[xmin, ymin, zmin, xmax, ymax, zmax]`.
    #[inline]
    pub const fn from_extrema(e: [f32; 6]) -> Self {
        Self {
            min: WorldPoint::new(e[0], e[1], e[2]),
            max: WorldPoint::new(e[3], e[4], e[5]),
        }
    }

    /// X extent.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Y extent.
    #[inline]
    pub fn depth(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Z extent.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.z - self.min.z
    }

    /// Center of the bounding box.
    #[inline]
    pub fn center(&self) -> WorldPoint {
        WorldPoint::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Check if a point is inside the bounding box (faces inclusive).
    #[inline]
    pub fn contains(&self, point: WorldPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Check if this box intersects another.
    #[inline]
    pub fn intersects(&self, other: &Bounds3) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Expand the box by a margin on every face.
    #[inline]
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min: WorldPoint::new(self.min.x - margin, self.min.y - margin, self.min.z - margin),
            max: WorldPoint::new(self.max.x + margin, self.max.y + margin, self.max.z + margin),
        }
    }

    /// Compute the intersection of two boxes.
    ///
    /// The result has min > max on some axis if they don't intersect.
    #[inline]
    pub fn intersection(&self, other: &Bounds3) -> Self {
        Self {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }

    /// Clamp a point to be inside the bounds.
    #[inline]
    pub fn clamp(&self, point: WorldPoint) -> WorldPoint {
        point.max(self.min).min(self.max)
    }
}
