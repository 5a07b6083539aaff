//! Continuous-to-discrete workspace conversion.
//!
//! The [`Discretizer`] maps the continuous workspace and obstacle geometry
//! onto a voxel lattice. Horizontal (x/y) and vertical (z) axes may use
//! different resolutions. Obstacle boxes are inflated by a safety margin
//! before discretization so the planned path keeps clearance for the agent.

use thiserror::Error;

use crate::core::{Bounds3, GridCoord, WorldPoint};

use super::costmap::Costmap;

/// Lattice dimensions in cells.
///
/// Valid coordinates lie in `[0, dim)` on each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Cell count along X
    pub x: usize,
    /// Cell count along Y
    pub y: usize,
    /// Cell count along Z
    pub z: usize,
}

impl Dimensions {
    /// Create new lattice dimensions
    #[inline]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.x * self.y * self.z
    }

    /// Check if a coordinate is within the lattice
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.z >= 0
            && (coord.x as usize) < self.x
            && (coord.y as usize) < self.y
            && (coord.z as usize) < self.z
    }

    /// Convert a coordinate to a flat array index
    #[inline]
    pub fn flat_index(&self, coord: GridCoord) -> Option<usize> {
        if self.contains(coord) {
            let (x, y, z) = (coord.x as usize, coord.y as usize, coord.z as usize);
            Some(x + self.x * (y + self.y * z))
        } else {
            None
        }
    }

    /// Clamp a coordinate into the lattice.
    ///
    /// Returns `None` if the lattice is empty on some axis.
    #[inline]
    pub fn clamp(&self, coord: GridCoord) -> Option<GridCoord> {
        if self.x == 0 || self.y == 0 || self.z == 0 {
            return None;
        }
        Some(GridCoord::new(
            coord.x.clamp(0, self.x as i32 - 1),
            coord.y.clamp(0, self.y as i32 - 1),
            coord.z.clamp(0, self.z as i32 - 1),
        ))
    }
}

/// Discretizer configuration error.
///
/// Detected at construction time, before any search runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("resolution must be positive, got {0}")]
    NonPositiveResolution(f32),

    #[error("margin must be non-negative, got {0}")]
    NegativeMargin(f32),

    #[error("workspace bounds inverted on {axis} axis (min >= max)")]
    InvertedBounds { axis: char },
}

/// Maps the continuous workspace onto a voxel lattice.
///
/// The lattice origin (cell `(0, 0, 0)`) sits at the workspace minimum
/// corner. Cell `(x, y, z)` covers the half-open box from
/// `min + coord * resolution` to `min + (coord + 1) * resolution`.
#[derive(Clone, Debug)]
pub struct Discretizer {
    bounds: Bounds3,
    xy_resolution: f32,
    z_resolution: f32,
    margin: f32,
}

impl Discretizer {
    /// Create a new discretizer, validating the configuration.
    pub fn new(
        bounds: Bounds3,
        xy_resolution: f32,
        z_resolution: f32,
        margin: f32,
    ) -> Result<Self, ConfigError> {
        if !(xy_resolution > 0.0) {
            return Err(ConfigError::NonPositiveResolution(xy_resolution));
        }
        if !(z_resolution > 0.0) {
            return Err(ConfigError::NonPositiveResolution(z_resolution));
        }
        if !(margin >= 0.0) {
            return Err(ConfigError::NegativeMargin(margin));
        }
        for (axis, min, max) in [
            ('x', bounds.min.x, bounds.max.x),
            ('y', bounds.min.y, bounds.max.y),
            ('z', bounds.min.z, bounds.max.z),
        ] {
            if !(min < max) {
                return Err(ConfigError::InvertedBounds { axis });
            }
        }

        Ok(Self {
            bounds,
            xy_resolution,
            z_resolution,
            margin,
        })
    }

    /// Workspace bounds
    #[inline]
    pub fn bounds(&self) -> Bounds3 {
        self.bounds
    }

    /// Horizontal (x/y) cell size in meters
    #[inline]
    pub fn xy_resolution(&self) -> f32 {
        self.xy_resolution
    }

    /// Vertical (z) cell size in meters
    #[inline]
    pub fn z_resolution(&self) -> f32 {
        self.z_resolution
    }

    /// Obstacle inflation margin in meters
    #[inline]
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Lattice dimensions derived from bounds and resolution.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(
            (self.bounds.width() / self.xy_resolution).ceil() as usize,
            (self.bounds.depth() / self.xy_resolution).ceil() as usize,
            (self.bounds.height() / self.z_resolution).ceil() as usize,
        )
    }

    /// Convert a world point to its containing lattice cell.
    ///
    /// The result is not guaranteed to be within the lattice if `point`
    /// lies outside the workspace bounds; validate with
    /// [`Bounds3::contains`] first.
    #[inline]
    pub fn to_grid(&self, point: WorldPoint) -> GridCoord {
        let local = point - self.bounds.min;
        GridCoord::new(
            (local.x / self.xy_resolution).floor() as i32,
            (local.y / self.xy_resolution).floor() as i32,
            (local.z / self.z_resolution).floor() as i32,
        )
    }

    /// Convert a lattice cell back to world coordinates (cell corner).
    #[inline]
    pub fn to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            self.bounds.min.x + coord.x as f32 * self.xy_resolution,
            self.bounds.min.y + coord.y as f32 * self.xy_resolution,
            self.bounds.min.z + coord.z as f32 * self.z_resolution,
        )
    }

    /// Discretize an obstacle box into an inclusive cell range.
    ///
    /// The box is expanded by the margin on every face, clamped to the
    /// workspace, and both corners are discretized and clipped into the
    /// lattice. If the inflated box misses the workspace entirely, the
    /// returned range is empty (min exceeds max on some axis).
    pub fn obstacle_to_range(&self, obstacle: &Bounds3) -> (GridCoord, GridCoord) {
        let inflated = obstacle.expand(self.margin);
        let clipped = self.bounds.intersection(&inflated);

        if clipped.min.x > clipped.max.x
            || clipped.min.y > clipped.max.y
            || clipped.min.z > clipped.max.z
        {
            // No overlap with the workspace
            return (GridCoord::new(0, 0, 0), GridCoord::new(-1, -1, -1));
        }

        let dims = self.dimensions();
        let lo = self.to_grid(clipped.min);
        let hi = self.to_grid(clipped.max);
        match (dims.clamp(lo), dims.clamp(hi)) {
            (Some(lo), Some(hi)) => (lo, hi),
            _ => (GridCoord::new(0, 0, 0), GridCoord::new(-1, -1, -1)),
        }
    }

    /// Rasterize the obstacle list into a dense occupancy grid.
    ///
    /// Every cell inside any inflated obstacle range is marked occupied.
    pub fn build_costmap(&self, obstacles: &[Bounds3]) -> Costmap {
        Costmap::build(self, obstacles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> Bounds3 {
        Bounds3::from_extrema([0.0, -5.0, 0.0, 10.0, 20.0, 10.0])
    }

    #[test]
    fn test_rejects_bad_resolution() {
        let result = Discretizer::new(workspace(), 0.0, 0.25, 0.2);
        assert_eq!(result.unwrap_err(), ConfigError::NonPositiveResolution(0.0));

        let result = Discretizer::new(workspace(), 0.25, -1.0, 0.2);
        assert_eq!(
            result.unwrap_err(),
            ConfigError::NonPositiveResolution(-1.0)
        );
    }

    #[test]
    fn test_rejects_negative_margin() {
        let result = Discretizer::new(workspace(), 0.25, 0.25, -0.1);
        assert_eq!(result.unwrap_err(), ConfigError::NegativeMargin(-0.1));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let bad = Bounds3::from_extrema([0.0, 5.0, 0.0, 10.0, 5.0, 10.0]);
        let result = Discretizer::new(bad, 0.25, 0.25, 0.2);
        assert_eq!(result.unwrap_err(), ConfigError::InvertedBounds { axis: 'y' });
    }

    #[test]
    fn test_dimensions() {
        let disc = Discretizer::new(workspace(), 0.25, 0.5, 0.0).unwrap();
        let dims = disc.dimensions();

        assert_eq!(dims, Dimensions::new(40, 100, 20));
        assert_eq!(dims.cell_count(), 40 * 100 * 20);
    }

    #[test]
    fn test_dimensions_round_up() {
        // 1.1m at 0.25m/cell needs 5 cells to cover the last sliver
        let bounds = Bounds3::from_extrema([0.0, 0.0, 0.0, 1.1, 1.0, 1.0]);
        let disc = Discretizer::new(bounds, 0.25, 0.25, 0.0).unwrap();

        assert_eq!(disc.dimensions(), Dimensions::new(5, 4, 4));
    }

    #[test]
    fn test_to_grid_floor() {
        let disc = Discretizer::new(workspace(), 0.25, 0.25, 0.0).unwrap();

        assert_eq!(disc.to_grid(WorldPoint::new(0.0, -5.0, 0.0)), GridCoord::new(0, 0, 0));
        assert_eq!(disc.to_grid(WorldPoint::new(0.24, -5.0, 0.0)), GridCoord::new(0, 0, 0));
        assert_eq!(disc.to_grid(WorldPoint::new(0.25, -4.75, 0.5)), GridCoord::new(1, 1, 2));
        assert_eq!(disc.to_grid(WorldPoint::new(6.0, 6.5, 8.0)), GridCoord::new(24, 46, 32));
    }

    #[test]
    fn test_grid_world_round_trip() {
        let disc = Discretizer::new(workspace(), 0.25, 0.5, 0.0).unwrap();
        let dims = disc.dimensions();

        for &coord in &[
            GridCoord::new(0, 0, 0),
            GridCoord::new(1, 2, 3),
            GridCoord::new(
                dims.x as i32 - 1,
                dims.y as i32 - 1,
                dims.z as i32 - 1,
            ),
        ] {
            assert_eq!(disc.to_grid(disc.to_world(coord)), coord);
        }
    }

    #[test]
    fn test_world_grid_round_trip_within_cell() {
        let disc = Discretizer::new(workspace(), 0.25, 0.5, 0.0).unwrap();

        let p = WorldPoint::new(3.1, 7.77, 4.2);
        let back = disc.to_world(disc.to_grid(p));

        assert!((p.x - back.x).abs() < 0.25);
        assert!((p.y - back.y).abs() < 0.25);
        assert!((p.z - back.z).abs() < 0.5);
    }

    #[test]
    fn test_obstacle_range_inflation() {
        let disc = Discretizer::new(workspace(), 0.25, 0.25, 0.25).unwrap();

        // One-cell box at [2.0, 2.25) x [0.0, 0.25) x [2.0, 2.25),
        // inflated by one cell on every face. The inflated maximum corner
        // lands exactly on a cell boundary, so the touched cell is included.
        let obstacle = Bounds3::from_extrema([2.0, 0.0, 2.0, 2.25, 0.25, 2.25]);
        let (lo, hi) = disc.obstacle_to_range(&obstacle);

        assert_eq!(lo, GridCoord::new(7, 19, 7));
        assert_eq!(hi, GridCoord::new(10, 22, 10));
    }

    #[test]
    fn test_obstacle_range_clipped_to_workspace() {
        let disc = Discretizer::new(workspace(), 0.25, 0.25, 0.5).unwrap();

        // Box flush against the workspace minimum corner; inflation must
        // not produce negative coordinates
        let obstacle = Bounds3::from_extrema([0.0, -5.0, 0.0, 1.0, -4.0, 1.0]);
        let (lo, hi) = disc.obstacle_to_range(&obstacle);

        assert_eq!(lo, GridCoord::new(0, 0, 0));
        assert_eq!(hi, GridCoord::new(6, 6, 6));
    }

    #[test]
    fn test_obstacle_outside_workspace_is_empty() {
        let disc = Discretizer::new(workspace(), 0.25, 0.25, 0.1).unwrap();

        let obstacle = Bounds3::from_extrema([50.0, 50.0, 50.0, 60.0, 60.0, 60.0]);
        let (lo, hi) = disc.obstacle_to_range(&obstacle);

        assert!(lo.x > hi.x || lo.y > hi.y || lo.z > hi.z);
    }

    #[test]
    fn test_dimensions_contains() {
        let dims = Dimensions::new(4, 4, 4);

        assert!(dims.contains(GridCoord::new(0, 0, 0)));
        assert!(dims.contains(GridCoord::new(3, 3, 3)));
        assert!(!dims.contains(GridCoord::new(4, 0, 0)));
        assert!(!dims.contains(GridCoord::new(0, -1, 0)));
    }

    #[test]
    fn test_flat_index() {
        let dims = Dimensions::new(4, 5, 6);

        assert_eq!(dims.flat_index(GridCoord::new(0, 0, 0)), Some(0));
        assert_eq!(dims.flat_index(GridCoord::new(3, 0, 0)), Some(3));
        assert_eq!(dims.flat_index(GridCoord::new(0, 1, 0)), Some(4));
        assert_eq!(dims.flat_index(GridCoord::new(0, 0, 1)), Some(20));
        assert_eq!(dims.flat_index(GridCoord::new(4, 0, 0)), None);
    }
}
