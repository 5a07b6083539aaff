//! Scenario front end: load a planning scenario, run one search, print
//! the continuous waypoints.
//!
//! # Usage
//!
//! ```bash
//! # Built-in demo scenario
//! plan_route
//!
//! # Scenario from a TOML file
//! plan_route --scenario flight.toml
//!
//! # Override the heuristic
//! plan_route --manhattan
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use marga_nav::config::ScenarioConfig;
use marga_nav::core::WorldPoint;
use marga_nav::grid::Discretizer;
use marga_nav::planning::{Heuristic, PathPlanner, PlanError};

#[derive(Parser)]
#[command(name = "plan_route")]
#[command(about = "Plan a collision-free route through a 3D workspace")]
struct Args {
    /// Scenario TOML file (omitted: the built-in demo scenario)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Use the Manhattan heuristic (faster, may return longer paths)
    #[arg(long)]
    manhattan: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.scenario {
        Some(path) => {
            info!("Loading scenario from {:?}", path);
            ScenarioConfig::load(path)?
        }
        None => {
            info!("Using built-in demo scenario");
            ScenarioConfig::default()
        }
    };

    let workspace = config.workspace();
    let discretizer = Discretizer::new(
        workspace,
        config.xy_resolution,
        config.z_resolution,
        config.margin,
    )?;
    let dims = discretizer.dimensions();
    info!(
        "Lattice: {}x{}x{} cells at {}m/{}m resolution, margin {}m",
        dims.x, dims.y, dims.z, config.xy_resolution, config.z_resolution, config.margin
    );

    let start = config.start_point();
    let goal = config.goal_point();
    if !workspace.contains(start) {
        return Err(Box::new(PlanError::OutsideWorkspace));
    }
    if !workspace.contains(goal) {
        return Err(Box::new(PlanError::OutsideWorkspace));
    }

    let obstacles = config.obstacle_boxes();
    let mut planner = PathPlanner::with_costmap(discretizer.build_costmap(&obstacles));
    planner.set_max_expansions(config.planner.max_expansions);
    planner.set_heuristic(if args.manhattan {
        Heuristic::Manhattan
    } else {
        config.planner.heuristic.into()
    });

    info!("Calculating shortest path ...");
    match planner.find_path(discretizer.to_grid(start), discretizer.to_grid(goal)) {
        Ok(path) => {
            info!(
                "Path found: {} cells, cost {}, {} nodes expanded",
                path.len(),
                path.cost,
                path.expanded
            );
            println!("X\tY\tZ");
            for &cell in path.cells.iter().rev() {
                let WorldPoint { x, y, z } = discretizer.to_world(cell);
                println!("{x}\t{y}\t{z}");
            }
            Ok(())
        }
        Err(PlanError::NotFound { partial, expanded }) => {
            warn!(
                "No path exists ({} nodes expanded); nearest trace has {} cells",
                expanded,
                partial.len()
            );
            Err(Box::new(PlanError::NotFound { partial, expanded }))
        }
        Err(err) => Err(Box::new(err)),
    }
}
