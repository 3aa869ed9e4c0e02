//! Cell-based A* path planning for games and simulations.
//!
//! A [`Pathfinder`] overlays a uniform grid on a rectangular world area and
//! computes shortest walkable paths across it:
//!
//! - world-space in, world-space out: callers hand in positions and obstacle
//!   rectangles in world coordinates and convert result paths back with
//!   [`Pathfinder::path_to_world`];
//! - 4-way ([`MoveMode::Cardinal`]) or 8-way ([`MoveMode::Tilt`]) movement,
//!   with corner cutting prevented in tilt mode;
//! - persistent fixed obstacles plus a per-search closed set, with the
//!   target cell enterable even when blocked (destination override);
//! - a hard iteration cap so a single query cannot stall a frame.
//!
//! A failed search is not an error: [`Pathfinder::find_path`] reports every
//! negative outcome (unreachable target, blocked origin, cap exceeded) as an
//! empty path.

mod cost;
mod engine;
mod frontier;
mod grid;
mod mapper;
mod obstacles;

pub use cost::{CARDINAL_COST, DIAGONAL_COST, Terrain};
pub use engine::{DEFAULT_SEARCH_LIMIT, MoveMode, Pathfinder};
pub use obstacles::MIN_OBSTACLE_AREA;
