//! # Marga-Nav: Voxel-Grid A* Path Planning
//!
//! A path planning library for point agents moving through bounded 3D
//! workspaces populated with axis-aligned box obstacles.
//!
//! ## Features
//!
//! - **Space discretization**: Maps continuous geometry onto a voxel
//!   lattice with independent horizontal/vertical resolutions and an
//!   obstacle inflation margin for agent clearance
//! - **Dense costmap**: Obstacle boxes rasterize into a flat occupancy
//!   array, so collision checks on the search hot path are O(1)
//! - **26-connected A\***: Face, edge-diagonal and corner-diagonal moves
//!   with an integer cost table (100/141/173), a swappable heuristic and
//!   deterministic tie-breaking
//! - **Explicit outcomes**: Success, no-path (with a partial trace for
//!   diagnostics) and budget exhaustion are distinct results
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::core::{Bounds3, WorldPoint};
//! use marga_nav::grid::Discretizer;
//! use marga_nav::planning::{plan_route, Heuristic};
//!
//! // 10m cube workspace, 25cm cells, 20cm clearance margin
//! let bounds = Bounds3::new(WorldPoint::ZERO, WorldPoint::new(10.0, 10.0, 10.0));
//! let discretizer = Discretizer::new(bounds, 0.25, 0.25, 0.2)?;
//!
//! let obstacles = vec![Bounds3::from_extrema([2.0, 2.0, 0.0, 3.0, 3.0, 5.0])];
//! let waypoints = plan_route(
//!     &discretizer,
//!     &obstacles,
//!     WorldPoint::new(0.5, 0.5, 0.5),
//!     WorldPoint::new(9.0, 9.0, 0.5),
//!     Heuristic::Euclidean,
//! )?;
//! assert!(!waypoints.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Fundamental types ([`GridCoord`], [`WorldPoint`],
//!   [`Bounds3`])
//! - [`grid`]: Workspace discretization ([`Discretizer`]) and occupancy
//!   ([`Costmap`])
//! - [`planning`]: The A* search ([`PathPlanner`], [`Heuristic`]) and the
//!   end-to-end [`plan_route`] helper
//! - [`config`]: TOML scenario schema for the front end
//!
//! The planner holds its occupancy grid and heuristic across searches;
//! each search owns its frontier and visited records, which are dropped
//! when the call returns. Reconfiguration (`add_collision`,
//! `set_heuristic`) takes `&mut self`, so the borrow checker enforces the
//! no-reconfiguration-during-search rule; searches themselves take
//! `&self` and may run concurrently on a shared instance.

pub mod config;
pub mod core;
pub mod grid;
pub mod planning;

pub use config::ScenarioConfig;
pub use core::{Bounds3, GridCoord, WorldPoint};
pub use grid::{ConfigError, Costmap, Dimensions, Discretizer};
pub use planning::{plan_route, Heuristic, PathPlanner, PlanError, PlannedPath};
