//! Workspace discretization and occupancy.
//!
//! - [`Discretizer`]: continuous ↔ lattice conversion with margin inflation
//! - [`Costmap`]: dense occupancy grid backing the planner's collision checks

mod costmap;
mod discretizer;

pub use costmap::Costmap;
pub use discretizer::{ConfigError, Dimensions, Discretizer};
