//! Search node, frontier ordering and result types for the A* planner.

use std::cmp::Ordering;

use thiserror::Error;

use crate::core::GridCoord;

/// Cost of a face-adjacent move (one axis changes).
pub const FACE_COST: u32 = 100;
/// Cost of an edge-diagonal move (two axes change), 100·√2 truncated.
pub const EDGE_COST: u32 = 141;
/// Cost of a corner-diagonal move (three axes change), 100·√3 truncated.
pub const CORNER_COST: u32 = 173;

/// One lattice coordinate's search record.
///
/// The arena owns exactly one record per discovered coordinate; the
/// `closed` flag moves it from the frontier to the visited set.
#[derive(Clone, Debug)]
pub(super) struct SearchNode {
    pub coord: GridCoord,
    /// Accumulated cost from the start
    pub g: u32,
    /// Heuristic estimate to the goal (fixed per coordinate)
    pub h: u32,
    /// Arena slot of the predecessor on the best known path
    pub parent: Option<usize>,
    pub closed: bool,
}

/// Frontier entry referencing an arena slot.
///
/// Ordered by lowest `f`, then lowest `h` (breaks ties toward the goal),
/// then earliest insertion - fully deterministic. Entries superseded by a
/// cheaper rediscovery are left in the heap and skipped on pop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct OpenEntry {
    /// g + h at insertion time
    pub f: u32,
    pub h: u32,
    /// Insertion sequence number
    pub seq: u64,
    pub slot: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A successful search result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedPath {
    /// Path cells in reverse-traversal order: goal first, start last.
    /// Consecutive cells differ by exactly one 26-neighbor offset.
    pub cells: Vec<GridCoord>,
    /// Total cost (sum of traversed edge costs)
    pub cost: u32,
    /// Number of nodes expanded during the search
    pub expanded: usize,
}

impl PlannedPath {
    /// Path length in cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the path holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Why a search did not produce a path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Start or goal lies outside the continuous workspace bounds.
    /// Raised by the caller layer ([`plan_route`](super::plan_route));
    /// the planner itself never sees continuous coordinates.
    #[error("start or goal lies outside the workspace bounds")]
    OutsideWorkspace,

    /// Start or goal lies outside the lattice
    #[error("start or goal lies outside the lattice")]
    OutsideLattice,

    /// Frontier exhausted before reaching the goal. `partial` traces from
    /// the most recently expanded cell back to the start, for diagnostics.
    #[error("no path exists between start and goal ({expanded} nodes expanded)")]
    NotFound {
        partial: Vec<GridCoord>,
        expanded: usize,
    },

    /// Expansion budget exceeded with the search still undecided
    #[error("search budget exhausted after {expanded} node expansions")]
    Exhausted { expanded: usize },
}
