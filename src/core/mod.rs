//! Core types for the marga-nav planning library.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`GridCoord`] and [`WorldPoint`]: Coordinate types
//! - [`Bounds3`]: Axis-aligned box for the workspace boundary and obstacles

mod bounds;
mod point;

pub use bounds::Bounds3;
pub use point::{GridCoord, WorldPoint};
