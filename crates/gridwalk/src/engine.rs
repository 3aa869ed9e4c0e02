use gridwalk_core::{GridPoint, WorldPoint, WorldRect};
use log::debug;

use crate::cost::{self, Terrain};
use crate::frontier::OpenFrontier;
use crate::grid::GridIndex;
use crate::obstacles::{MIN_OBSTACLE_AREA, ObstacleStore};

/// Default cap on expansions per `find_path` call.
///
/// Bounds worst-case work so a single query cannot stall a real-time
/// caller; a search that runs past it reports an empty path.
pub const DEFAULT_SEARCH_LIMIT: u32 = 688;

/// Movement rule for a path query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveMode {
    /// Up, right, down, left only.
    Cardinal,
    /// Cardinal plus diagonal steps, with corner cutting prevented: a
    /// diagonal is walkable only when both flanking cardinal cells are
    /// unblocked.
    #[default]
    Tilt,
}

/// Per-cell search state, reset at the start of every query.
///
/// `parent` is an arena index into the same node array, forming a tree
/// rooted at the search origin; index-based parents cannot form reference
/// cycles and reset by refilling the array.
#[derive(Copy, Clone, Default)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: Option<usize>,
}

/// How a search loop ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Termination {
    Found,
    Blocked,
    LimitExceeded,
}

/// A* path planner over a uniform grid on a rectangular world area.
///
/// One instance per map. All inputs and outputs of the public API are in
/// world coordinates except the returned paths, which are grid coordinates
/// convertible back with [`Pathfinder::path_to_world`].
///
/// The instance owns all search state and supports one in-flight search at
/// a time; obstacle updates and path queries must be serialized by the
/// caller. A failed search returns an empty path, never an error.
pub struct Pathfinder {
    pub(crate) grid: GridIndex,
    pub(crate) area: WorldRect,
    pub(crate) store: ObstacleStore,
    pub(crate) frontier: OpenFrontier,
    pub(crate) nodes: Vec<Node>,
    pub(crate) terrain: Vec<i32>,
    search_limit: u32,
    /// Target cell of the in-flight search; meaningless between searches.
    pub(crate) target: usize,
    nbuf: Vec<GridPoint>,
}

impl Pathfinder {
    /// Create a planner for `area`, one grid cell per `cell_size` step.
    ///
    /// The area's angle is stored negated, the internal orientation
    /// convention shared with obstacle footprints.
    pub fn new(area: WorldRect, cell_size: f32) -> Self {
        let grid = GridIndex::new(&area, cell_size);
        let len = grid.len();
        debug!(
            "gridwalk map: {}x{} cells of size {}",
            grid.cols(),
            grid.rows(),
            cell_size
        );
        Self {
            area: area.negated_angle(),
            store: ObstacleStore::new(len),
            frontier: OpenFrontier::new(len),
            nodes: vec![Node::default(); len],
            terrain: vec![Terrain::default().weight(); len],
            search_limit: DEFAULT_SEARCH_LIMIT,
            target: 0,
            nbuf: Vec::with_capacity(8),
            grid,
        }
    }

    /// Replace the default expansion cap.
    pub fn with_search_limit(mut self, limit: u32) -> Self {
        self.search_limit = limit;
        self
    }

    /// Add authored obstacles during construction.
    pub fn with_obstacles(mut self, obstacles: &[WorldRect]) -> Self {
        self.add_obstacles(obstacles);
        self
    }

    // -----------------------------------------------------------------------
    // Fixed obstacles
    // -----------------------------------------------------------------------

    /// Mark every cell covered by each obstacle's footprint as blocked.
    ///
    /// Obstacles with an area below [`MIN_OBSTACLE_AREA`] are skipped.
    pub fn add_obstacles(&mut self, obstacles: &[WorldRect]) {
        for rect in obstacles {
            if rect.area() < MIN_OBSTACLE_AREA {
                continue;
            }
            let cells = self.grid.footprint(rect);
            self.store.mark_fixed(&cells);
        }
    }

    /// Unmark every cell covered by each obstacle's footprint.
    ///
    /// No area threshold applies to removal.
    pub fn remove_obstacles(&mut self, obstacles: &[WorldRect]) {
        for rect in obstacles {
            let cells = self.grid.footprint(rect);
            self.store.unmark_fixed(&cells);
        }
    }

    /// Drop every fixed obstacle.
    pub fn clear_obstacles(&mut self) {
        self.store.clear_fixed();
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Compute a path from `from` to `to`, both in world coordinates.
    ///
    /// Returns the grid cells of the route in order, excluding the origin
    /// cell and including the target cell. The empty path covers every
    /// negative outcome uniformly: an endpoint outside the map, a blocked
    /// origin, origin and target in the same cell, a dead end, or the
    /// expansion cap running out.
    pub fn find_path(&mut self, from: WorldPoint, to: WorldPoint, mode: MoveMode) -> Vec<GridPoint> {
        self.reset_search();

        let (Some(start), Some(goal)) = (
            self.grid.idx(self.grid.world_to_grid(from)),
            self.grid.idx(self.grid.world_to_grid(to)),
        ) else {
            debug!("path rejected: endpoint outside the map");
            return Vec::new();
        };
        if self.store.is_fixed(start) {
            debug!("path rejected: origin cell is blocked");
            return Vec::new();
        }
        if start == goal {
            return Vec::new();
        }

        self.target = goal;
        self.score(start, None);

        let mut current = start;
        let mut steps = 0u32;
        let outcome = loop {
            self.store.close(current);
            self.expand(current, mode);
            let Some(next) = self.frontier.pop_best(&self.nodes) else {
                break Termination::Blocked;
            };
            current = next;
            if current == goal {
                break Termination::Found;
            }
            steps += 1;
            if steps > self.search_limit {
                break Termination::LimitExceeded;
            }
        };

        debug!("search {:?} after {} expansions", outcome, steps);
        match outcome {
            Termination::Found => self.reconstruct(start, goal),
            Termination::Blocked | Termination::LimitExceeded => Vec::new(),
        }
    }

    /// Recompute a cell's scores under the given parent.
    ///
    /// `G` accumulates 10 per cardinal and 14 per diagonal step, `H` is the
    /// scaled Manhattan estimate to the current target, and `F` adds the
    /// cell's static terrain weight on top.
    pub(crate) fn score(&mut self, cell: usize, parent: Option<usize>) {
        let p = self.grid.point(cell);
        let g = match parent {
            Some(pi) => self.nodes[pi].g + cost::step_cost(self.grid.point(pi), p),
            None => 0,
        };
        let h = cost::heuristic(p, self.grid.point(self.target));
        let node = &mut self.nodes[cell];
        node.parent = parent;
        node.g = g;
        node.f = g + h + self.terrain[cell];
    }

    /// Offer every walkable neighbor of `current` to the frontier.
    ///
    /// The four cardinal cells are always candidates. In tilt mode each
    /// diagonal is gated on both flanking cardinals being unblocked;
    /// off-grid flankers do not block. A blocked candidate still qualifies
    /// when it is exactly the target cell (destination override).
    fn expand(&mut self, current: usize, mode: MoveMode) {
        let p = self.grid.point(current);
        let up = p.shift(0, 1);
        let right = p.shift(1, 0);
        let down = p.shift(0, -1);
        let left = p.shift(-1, 0);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        nbuf.extend([up, right, down, left]);
        if mode == MoveMode::Tilt {
            if !self.blocked_at(up) && !self.blocked_at(right) {
                nbuf.push(p.shift(1, 1));
            }
            if !self.blocked_at(down) && !self.blocked_at(right) {
                nbuf.push(p.shift(1, -1));
            }
            if !self.blocked_at(up) && !self.blocked_at(left) {
                nbuf.push(p.shift(-1, 1));
            }
            if !self.blocked_at(down) && !self.blocked_at(left) {
                nbuf.push(p.shift(-1, -1));
            }
        }

        for &n in nbuf.iter() {
            let Some(cell) = self.grid.idx(n) else {
                continue;
            };
            if !self.store.is_blocked(cell) || cell == self.target {
                self.offer(cell, current);
            }
        }
        self.nbuf = nbuf;
    }

    #[inline]
    fn blocked_at(&self, g: GridPoint) -> bool {
        self.grid.idx(g).is_some_and(|i| self.store.is_blocked(i))
    }

    /// Walk parent links from the target back to the origin and reverse.
    ///
    /// The origin cell itself is not part of the returned path.
    fn reconstruct(&self, start: usize, goal: usize) -> Vec<GridPoint> {
        let mut path = Vec::new();
        let mut cur = goal;
        while cur != start {
            path.push(self.grid.point(cur));
            cur = self.nodes[cur]
                .parent
                .expect("parent chain broken during path reconstruction");
        }
        path.reverse();
        path
    }

    /// Overwrite all search-scoped state from the previous query.
    fn reset_search(&mut self) {
        self.nodes.fill(Node::default());
        self.store.reset_search();
        self.frontier.reset();
    }
}
