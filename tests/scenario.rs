//! End-to-end planning on full scenarios.
//!
//! Drives the whole pipeline the way a front end does: discretize the
//! workspace, rasterize obstacles, search, map back to continuous space.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use marga_nav::config::ScenarioConfig;
use marga_nav::core::{Bounds3, GridCoord, WorldPoint};
use marga_nav::grid::Discretizer;
use marga_nav::planning::{
    plan_route, Heuristic, PathPlanner, PlanError, CORNER_COST, EDGE_COST, FACE_COST,
};

fn demo_discretizer(config: &ScenarioConfig) -> Discretizer {
    Discretizer::new(
        config.workspace(),
        config.xy_resolution,
        config.z_resolution,
        config.margin,
    )
    .unwrap()
}

/// Sum the edge costs a path actually traverses.
fn traversed_cost(cells: &[GridCoord]) -> u32 {
    cells
        .windows(2)
        .map(|pair| {
            let step = pair[0].abs_delta(&pair[1]);
            assert!(step.x <= 1 && step.y <= 1 && step.z <= 1);
            match step.x + step.y + step.z {
                1 => FACE_COST,
                2 => EDGE_COST,
                3 => CORNER_COST,
                _ => panic!("invalid step {:?}", step),
            }
        })
        .sum()
}

#[test]
fn demo_scenario_finds_collision_free_path() {
    env_logger::try_init().ok();

    let config = ScenarioConfig::default();
    let discretizer = demo_discretizer(&config);
    let obstacles = config.obstacle_boxes();
    let costmap = discretizer.build_costmap(&obstacles);
    let planner = PathPlanner::with_costmap(costmap.clone());

    let start = discretizer.to_grid(config.start_point());
    let goal = discretizer.to_grid(config.goal_point());

    let path = planner.find_path(start, goal).unwrap();

    // Reverse-traversal order: goal first, start last
    assert_eq!(path.cells[0], goal);
    assert_eq!(*path.cells.last().unwrap(), start);

    // Collision and cost invariants hold over the real scenario
    let dims = discretizer.dimensions();
    for &cell in &path.cells {
        assert!(dims.contains(cell));
        assert!(!costmap.is_blocked(cell));
    }
    assert_eq!(traversed_cost(&path.cells), path.cost);
}

#[test]
fn demo_scenario_waypoints_stay_in_workspace() {
    env_logger::try_init().ok();

    let config = ScenarioConfig::default();
    let discretizer = demo_discretizer(&config);

    let waypoints = plan_route(
        &discretizer,
        &config.obstacle_boxes(),
        config.start_point(),
        config.goal_point(),
        config.planner.heuristic.into(),
    )
    .unwrap();

    assert!(waypoints.len() >= 2);
    let workspace = config.workspace();
    for waypoint in &waypoints {
        assert!(workspace.contains(*waypoint), "waypoint {:?}", waypoint);
    }

    // Traversal order: the first waypoint is the start cell corner
    let start_cell = discretizer.to_grid(config.start_point());
    assert_eq!(waypoints[0], discretizer.to_world(start_cell));
}

#[test]
fn both_heuristics_solve_the_demo_scenario() {
    env_logger::try_init().ok();

    let config = ScenarioConfig::default();
    let discretizer = demo_discretizer(&config);
    let mut planner = PathPlanner::with_costmap(discretizer.build_costmap(&config.obstacle_boxes()));

    let start = discretizer.to_grid(config.start_point());
    let goal = discretizer.to_grid(config.goal_point());

    let euclidean = planner.find_path(start, goal).unwrap();

    planner.set_heuristic(Heuristic::Manhattan);
    let manhattan = planner.find_path(start, goal).unwrap();

    assert_eq!(traversed_cost(&euclidean.cells), euclidean.cost);
    assert_eq!(traversed_cost(&manhattan.cells), manhattan.cost);
}

#[test]
fn sealed_goal_reports_not_found() {
    env_logger::try_init().ok();

    let bounds = Bounds3::new(WorldPoint::ZERO, WorldPoint::new(6.0, 6.0, 6.0));
    let discretizer = Discretizer::new(bounds, 1.0, 1.0, 0.0).unwrap();
    // Solid block enclosing the goal corner
    let obstacles = [Bounds3::from_extrema([3.0, 3.0, 3.0, 6.0, 6.0, 6.0])];

    let result = plan_route(
        &discretizer,
        &obstacles,
        WorldPoint::new(0.5, 0.5, 0.5),
        WorldPoint::new(5.5, 5.5, 5.5),
        Heuristic::Euclidean,
    );

    match result {
        Err(PlanError::NotFound { partial, expanded }) => {
            assert!(expanded > 0);
            assert!(!partial.is_empty());
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn random_points_round_trip_within_one_cell() {
    let config = ScenarioConfig::default();
    let discretizer = demo_discretizer(&config);
    let workspace = config.workspace();

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let point = WorldPoint::new(
            rng.gen_range(workspace.min.x..workspace.max.x),
            rng.gen_range(workspace.min.y..workspace.max.y),
            rng.gen_range(workspace.min.z..workspace.max.z),
        );

        let back = discretizer.to_world(discretizer.to_grid(point));
        assert!((point.x - back.x).abs() < config.xy_resolution);
        assert!((point.y - back.y).abs() < config.xy_resolution);
        assert!((point.z - back.z).abs() < config.z_resolution);
    }
}
