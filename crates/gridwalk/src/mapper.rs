//! World-coordinate queries and conversions on a [`Pathfinder`].

use gridwalk_core::{GridPoint, WorldPoint, WorldRect};

use crate::engine::Pathfinder;

impl Pathfinder {
    /// The grid cell a world position falls into, or `None` outside the map.
    pub fn grid_position(&self, p: WorldPoint) -> Option<GridPoint> {
        let g = self.grid.world_to_grid(p);
        self.grid.contains(g).then_some(g)
    }

    /// Whether a world position falls on a fixed obstacle.
    ///
    /// A position outside the map reports `true`: out of bounds is treated
    /// as obstructed rather than an error.
    pub fn has_obstacle(&self, p: WorldPoint) -> bool {
        match self.grid.idx(self.grid.world_to_grid(p)) {
            Some(cell) => self.store.is_fixed(cell),
            None => true,
        }
    }

    /// Convert a grid path to world positions through a caller factory.
    ///
    /// Each cell maps to the world position of `anchor` within it, so the
    /// caller chooses both the point-in-cell (for example (0.5, 0.5) for
    /// centers) and the concrete output type.
    pub fn path_to_world<T>(
        &self,
        path: &[GridPoint],
        anchor: WorldPoint,
        mut make: impl FnMut(WorldPoint) -> T,
    ) -> Vec<T> {
        path.iter()
            .map(|&g| make(self.grid.grid_to_world(g, anchor)))
            .collect()
    }

    /// The map rectangle, as stored: origin as authored, angle negated.
    pub fn area(&self) -> &WorldRect {
        &self.area
    }
}
