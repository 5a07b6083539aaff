//! Scenario configuration loading.
//!
//! A scenario describes one planning problem: the workspace boundary,
//! lattice resolutions, inflation margin, obstacle boxes and the start and
//! goal points, plus planner settings. Scenarios load from TOML; every
//! field has a default taken from the built-in demo scenario.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::core::{Bounds3, WorldPoint};
use crate::planning::Heuristic;

/// Scenario file error
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One planning problem, as loaded from a scenario file.
#[derive(Clone, Debug, Deserialize)]
pub struct ScenarioConfig {
    /// Workspace boundary `[xmin, ymin, zmin, xmax, ymax, zmax]` (meters)
    #[serde(default = "defaults::bounds")]
    pub bounds: [f32; 6],

    /// Horizontal (x/y) cell size (meters)
    #[serde(default = "defaults::xy_resolution")]
    pub xy_resolution: f32,

    /// Vertical (z) cell size (meters)
    #[serde(default = "defaults::z_resolution")]
    pub z_resolution: f32,

    /// Obstacle inflation margin (meters)
    #[serde(default = "defaults::margin")]
    pub margin: f32,

    /// Obstacle boxes, six extrema each
    #[serde(default = "defaults::obstacles")]
    pub obstacles: Vec<[f32; 6]>,

    /// Start point (meters)
    #[serde(default = "defaults::start")]
    pub start: [f32; 3],

    /// Goal point (meters)
    #[serde(default = "defaults::goal")]
    pub goal: [f32; 3],

    /// Planner settings
    #[serde(default)]
    pub planner: PlannerSettings,
}

/// Planner settings section
#[derive(Clone, Debug, Deserialize)]
pub struct PlannerSettings {
    /// Heuristic strategy
    #[serde(default)]
    pub heuristic: HeuristicKind,

    /// Maximum nodes to expand before giving up
    #[serde(default = "defaults::max_expansions")]
    pub max_expansions: usize,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            heuristic: HeuristicKind::default(),
            max_expansions: defaults::max_expansions(),
        }
    }
}

/// Heuristic selection as written in scenario files
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicKind {
    #[default]
    Euclidean,
    Manhattan,
}

impl From<HeuristicKind> for Heuristic {
    fn from(kind: HeuristicKind) -> Self {
        match kind {
            HeuristicKind::Euclidean => Heuristic::Euclidean,
            HeuristicKind::Manhattan => Heuristic::Manhattan,
        }
    }
}

mod defaults {
    use crate::planning::PathPlanner;

    pub fn bounds() -> [f32; 6] {
        [0.0, -5.0, 0.0, 10.0, 20.0, 10.0]
    }

    pub fn xy_resolution() -> f32 {
        0.25
    }

    pub fn z_resolution() -> f32 {
        0.25
    }

    pub fn margin() -> f32 {
        0.2
    }

    pub fn obstacles() -> Vec<[f32; 6]> {
        vec![
            [0.0, 2.0, 0.0, 2.0, 5.0, 3.0],
            [4.0, 2.0, 4.5, 5.0, 5.5, 6.0],
            [4.0, 4.0, 1.5, 5.0, 7.0, 3.5],
            [0.0, 2.0, 4.0, 3.0, 5.5, 6.5],
        ]
    }

    pub fn start() -> [f32; 3] {
        [0.0, 0.5, 8.0]
    }

    pub fn goal() -> [f32; 3] {
        [6.0, 6.4, 0.0]
    }

    pub fn max_expansions() -> usize {
        PathPlanner::DEFAULT_MAX_EXPANSIONS
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            bounds: defaults::bounds(),
            xy_resolution: defaults::xy_resolution(),
            z_resolution: defaults::z_resolution(),
            margin: defaults::margin(),
            obstacles: defaults::obstacles(),
            start: defaults::start(),
            goal: defaults::goal(),
            planner: PlannerSettings::default(),
        }
    }
}

impl ScenarioConfig {
    /// Load a scenario from a TOML file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Workspace boundary as a box
    pub fn workspace(&self) -> Bounds3 {
        Bounds3::from_extrema(self.bounds)
    }

    /// Obstacle list as boxes
    pub fn obstacle_boxes(&self) -> Vec<Bounds3> {
        self.obstacles.iter().map(|&e| Bounds3::from_extrema(e)).collect()
    }

    /// Start point
    pub fn start_point(&self) -> WorldPoint {
        WorldPoint::new(self.start[0], self.start[1], self.start[2])
    }

    /// Goal point
    pub fn goal_point(&self) -> WorldPoint {
        WorldPoint::new(self.goal[0], self.goal[1], self.goal[2])
    }
}
