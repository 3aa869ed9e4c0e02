//! Core geometry types for the gridwalk navigation engine.
//!
//! These are plain value types shared between the engine and its callers:
//! integer grid coordinates, floating-point world coordinates, and anchored
//! world rectangles. Nothing here knows about searching; the engine crate
//! builds on these.

mod geom;

pub use geom::{GridPoint, WorldPoint, WorldRect};
