//! A* planner implementation.

use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap};

use crate::core::GridCoord;
use crate::grid::{Costmap, Dimensions};

use super::heuristic::Heuristic;
use super::types::{
    OpenEntry, PlanError, PlannedPath, SearchNode, CORNER_COST, EDGE_COST, FACE_COST,
};

/// The 26 moves of the connectivity model: 6 face, 12 edge-diagonal,
/// 8 corner-diagonal neighbors with their edge costs.
const MOVES: [(GridCoord, u32); 26] = [
    // Face neighbors (one axis changes)
    (GridCoord::new(1, 0, 0), FACE_COST),
    (GridCoord::new(-1, 0, 0), FACE_COST),
    (GridCoord::new(0, 1, 0), FACE_COST),
    (GridCoord::new(0, -1, 0), FACE_COST),
    (GridCoord::new(0, 0, 1), FACE_COST),
    (GridCoord::new(0, 0, -1), FACE_COST),
    // Edge diagonals (two axes change)
    (GridCoord::new(1, 1, 0), EDGE_COST),
    (GridCoord::new(1, -1, 0), EDGE_COST),
    (GridCoord::new(-1, 1, 0), EDGE_COST),
    (GridCoord::new(-1, -1, 0), EDGE_COST),
    (GridCoord::new(1, 0, 1), EDGE_COST),
    (GridCoord::new(1, 0, -1), EDGE_COST),
    (GridCoord::new(-1, 0, 1), EDGE_COST),
    (GridCoord::new(-1, 0, -1), EDGE_COST),
    (GridCoord::new(0, 1, 1), EDGE_COST),
    (GridCoord::new(0, 1, -1), EDGE_COST),
    (GridCoord::new(0, -1, 1), EDGE_COST),
    (GridCoord::new(0, -1, -1), EDGE_COST),
    // Corner diagonals (all three axes change)
    (GridCoord::new(1, 1, 1), CORNER_COST),
    (GridCoord::new(1, 1, -1), CORNER_COST),
    (GridCoord::new(1, -1, 1), CORNER_COST),
    (GridCoord::new(1, -1, -1), CORNER_COST),
    (GridCoord::new(-1, 1, 1), CORNER_COST),
    (GridCoord::new(-1, 1, -1), CORNER_COST),
    (GridCoord::new(-1, -1, 1), CORNER_COST),
    (GridCoord::new(-1, -1, -1), CORNER_COST),
];

/// A* pathfinder over a voxel lattice.
///
/// Holds the lattice occupancy and heuristic choice across searches;
/// every [`find_path`](PathPlanner::find_path) call owns its frontier and
/// visited records and drops them on return.
#[derive(Clone, Debug)]
pub struct PathPlanner {
    costmap: Costmap,
    heuristic: Heuristic,
    max_expansions: usize,
}

impl PathPlanner {
    /// Default expansion budget before a search reports
    /// [`PlanError::Exhausted`]
    pub const DEFAULT_MAX_EXPANSIONS: usize = 1_000_000;

    /// Create a planner over an empty lattice of the given dimensions
    pub fn new(dims: Dimensions) -> Self {
        Self::with_costmap(Costmap::empty(dims))
    }

    /// Create a planner backed by a prebuilt occupancy grid.
    ///
    /// This is the usual wiring: rasterize the obstacle list with
    /// [`Discretizer::build_costmap`](crate::grid::Discretizer::build_costmap)
    /// and hand the result to the planner.
    pub fn with_costmap(costmap: Costmap) -> Self {
        Self {
            costmap,
            heuristic: Heuristic::default(),
            max_expansions: Self::DEFAULT_MAX_EXPANSIONS,
        }
    }

    /// Lattice dimensions used for bounds checking
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.costmap.dimensions()
    }

    /// Replace the heuristic used by subsequent searches
    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        self.heuristic = heuristic;
    }

    /// Replace the per-search expansion budget
    pub fn set_max_expansions(&mut self, max_expansions: usize) {
        self.max_expansions = max_expansions;
    }

    /// Mark a cell as blocked.
    ///
    /// Idempotent; out-of-lattice coordinates are harmless no-ops since
    /// they can never be reached.
    pub fn add_collision(&mut self, coord: GridCoord) {
        self.costmap.block(coord);
    }

    /// Check whether a cell is blocked
    #[inline]
    pub fn is_blocked(&self, coord: GridCoord) -> bool {
        self.costmap.is_blocked(coord)
    }

    /// Find a minimum-cost path from `start` to `goal` (lattice coordinates).
    ///
    /// Returns the path in reverse-traversal order (goal first, start
    /// last) together with its cost and the number of nodes expanded.
    /// Ties on f are broken by lower h, then by insertion order, so equal
    /// inputs always produce equal paths.
    pub fn find_path(&self, start: GridCoord, goal: GridCoord) -> Result<PlannedPath, PlanError> {
        trace!(
            "[astar] find_path: start=({},{},{}) goal=({},{},{})",
            start.x, start.y, start.z, goal.x, goal.y, goal.z
        );

        let dims = self.dimensions();
        if !dims.contains(start) || !dims.contains(goal) {
            debug!("[astar] FAILED: start or goal outside lattice");
            return Err(PlanError::OutsideLattice);
        }

        // Call-scoped node storage: one record per discovered coordinate,
        // heap entries reference records by slot
        let mut arena: Vec<SearchNode> = Vec::new();
        let mut slots: HashMap<GridCoord, usize> = HashMap::new();
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut seq: u64 = 0;

        let h_start = self.heuristic.estimate(start, goal);
        arena.push(SearchNode {
            coord: start,
            g: 0,
            h: h_start,
            parent: None,
            closed: false,
        });
        slots.insert(start, 0);
        open.push(OpenEntry {
            f: h_start,
            h: h_start,
            seq,
            slot: 0,
        });
        seq += 1;

        let mut expanded = 0usize;
        let mut last_expanded = 0usize;

        while let Some(entry) = open.pop() {
            let (coord, g) = {
                let node = &arena[entry.slot];
                if node.closed || entry.f != node.g + node.h {
                    // Superseded by a cheaper rediscovery
                    continue;
                }
                (node.coord, node.g)
            };

            if coord == goal {
                let cells = reconstruct(&arena, entry.slot);
                debug!(
                    "[astar] SUCCESS: path length={} cells, cost={}, expanded={}",
                    cells.len(),
                    g,
                    expanded
                );
                return Ok(PlannedPath {
                    cells,
                    cost: g,
                    expanded,
                });
            }

            arena[entry.slot].closed = true;
            last_expanded = entry.slot;
            expanded += 1;
            if expanded > self.max_expansions {
                debug!("[astar] FAILED: budget exhausted after {} expansions", expanded);
                return Err(PlanError::Exhausted { expanded });
            }

            for &(offset, edge_cost) in MOVES.iter() {
                let neighbor = coord + offset;
                if !dims.contains(neighbor) || self.costmap.is_blocked(neighbor) {
                    continue;
                }

                let tentative_g = g + edge_cost;
                match slots.get(&neighbor).copied() {
                    None => {
                        let h = self.heuristic.estimate(neighbor, goal);
                        let slot = arena.len();
                        arena.push(SearchNode {
                            coord: neighbor,
                            g: tentative_g,
                            h,
                            parent: Some(entry.slot),
                            closed: false,
                        });
                        slots.insert(neighbor, slot);
                        open.push(OpenEntry {
                            f: tentative_g + h,
                            h,
                            seq,
                            slot,
                        });
                        seq += 1;
                    }
                    Some(slot) => {
                        let node = &mut arena[slot];
                        if node.closed || tentative_g >= node.g {
                            continue;
                        }
                        // Cheaper route to an open node: reparent, keep h
                        node.g = tentative_g;
                        node.parent = Some(entry.slot);
                        let h = node.h;
                        open.push(OpenEntry {
                            f: tentative_g + h,
                            h,
                            seq,
                            slot,
                        });
                        seq += 1;
                    }
                }
            }
        }

        debug!("[astar] FAILED: no path after expanding {} nodes", expanded);
        Err(PlanError::NotFound {
            partial: reconstruct(&arena, last_expanded),
            expanded,
        })
    }
}

/// Follow predecessor links from a terminal slot back to the start,
/// yielding cells in reverse-traversal order (terminal first).
fn reconstruct(arena: &[SearchNode], terminal: usize) -> Vec<GridCoord> {
    let mut cells = Vec::new();
    let mut current = Some(terminal);
    while let Some(slot) = current {
        let node = &arena[slot];
        cells.push(node.coord);
        current = node.parent;
    }
    cells
}
