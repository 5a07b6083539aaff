//! A* path planning over the voxel lattice.
//!
//! Implements A* search with:
//! - 26-directional connectivity (face, edge and corner moves)
//! - Swappable heuristic (Euclidean, Manhattan or user-supplied)
//! - Dense occupancy-grid collision checks
//! - Deterministic tie-breaking and explicit failure outcomes

mod heuristic;
mod planner;
mod types;

pub use heuristic::Heuristic;
pub use planner::PathPlanner;
pub use types::{PlanError, PlannedPath, CORNER_COST, EDGE_COST, FACE_COST};

use crate::core::{Bounds3, WorldPoint};
use crate::grid::Discretizer;

/// Plan a route end to end in continuous coordinates.
///
/// Validates that both endpoints lie inside the workspace, rasterizes the
/// obstacle list, runs one search and maps the result back to continuous
/// space. Waypoints are returned in traversal order (start first).
pub fn plan_route(
    discretizer: &Discretizer,
    obstacles: &[Bounds3],
    start: WorldPoint,
    goal: WorldPoint,
    heuristic: Heuristic,
) -> Result<Vec<WorldPoint>, PlanError> {
    let bounds = discretizer.bounds();
    if !bounds.contains(start) || !bounds.contains(goal) {
        return Err(PlanError::OutsideWorkspace);
    }

    let mut planner = PathPlanner::with_costmap(discretizer.build_costmap(obstacles));
    planner.set_heuristic(heuristic);

    let path = planner.find_path(discretizer.to_grid(start), discretizer.to_grid(goal))?;
    Ok(path
        .cells
        .iter()
        .rev()
        .map(|&cell| discretizer.to_world(cell))
        .collect())
}
