//! Dense occupancy grid over the voxel lattice.
//!
//! The [`Costmap`] rasterizes inflated obstacle boxes into a flat boolean
//! array so that collision checks during neighbor expansion are a single
//! indexed load.

use crate::core::{Bounds3, GridCoord};

use super::discretizer::{Dimensions, Discretizer};

/// Dense 3D occupancy array indexed by lattice coordinate.
#[derive(Clone, Debug)]
pub struct Costmap {
    dims: Dimensions,
    cells: Vec<bool>,
}

impl Costmap {
    /// Create an all-free costmap sized to the given lattice.
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![false; dims.cell_count()],
        }
    }

    /// Rasterize an obstacle list into a costmap sized to the
    /// discretizer's lattice.
    pub fn build(discretizer: &Discretizer, obstacles: &[Bounds3]) -> Self {
        let mut costmap = Self::empty(discretizer.dimensions());
        for obstacle in obstacles {
            let (lo, hi) = discretizer.obstacle_to_range(obstacle);
            costmap.block_range(lo, hi);
        }
        costmap
    }

    /// Lattice dimensions this costmap covers
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Check whether a cell is blocked.
    ///
    /// Coordinates outside the lattice report free; the planner rejects
    /// them with its own bounds check.
    #[inline]
    pub fn is_blocked(&self, coord: GridCoord) -> bool {
        match self.dims.flat_index(coord) {
            Some(i) => self.cells[i],
            None => false,
        }
    }

    /// Mark a single cell blocked.
    ///
    /// Idempotent; coordinates outside the lattice are no-ops since they
    /// can never be reached.
    #[inline]
    pub fn block(&mut self, coord: GridCoord) {
        if let Some(i) = self.dims.flat_index(coord) {
            self.cells[i] = true;
        }
    }

    /// Mark every cell in an inclusive coordinate range blocked.
    ///
    /// Empty ranges (min exceeding max on some axis) mark nothing.
    pub fn block_range(&mut self, lo: GridCoord, hi: GridCoord) {
        for z in lo.z..=hi.z {
            for y in lo.y..=hi.y {
                for x in lo.x..=hi.x {
                    self.block(GridCoord::new(x, y, z));
                }
            }
        }
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }
}
