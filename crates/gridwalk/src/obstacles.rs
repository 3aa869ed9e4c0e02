/// Obstacles with a world-space area below this are ignored when marking.
///
/// Degenerate shapes (edges, decals, zero-size markers) routinely overlap
/// walkable cells and would block them spuriously.
pub const MIN_OBSTACLE_AREA: f32 = 2.0;

/// Blocking state for every cell, as two dense bitsets over the arena.
///
/// `fixed` holds map-authored obstacles and persists across searches;
/// `closed` holds cells finalized by the current search and is cleared by
/// [`ObstacleStore::reset_search`] at the start of each query.
pub(crate) struct ObstacleStore {
    fixed: Vec<bool>,
    closed: Vec<bool>,
}

impl ObstacleStore {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            fixed: vec![false; len],
            closed: vec![false; len],
        }
    }

    /// Add cells to the fixed obstacle set.
    pub(crate) fn mark_fixed(&mut self, cells: &[usize]) {
        for &i in cells {
            self.fixed[i] = true;
        }
    }

    /// Remove cells from the fixed obstacle set.
    pub(crate) fn unmark_fixed(&mut self, cells: &[usize]) {
        for &i in cells {
            self.fixed[i] = false;
        }
    }

    /// Empty the fixed obstacle set.
    pub(crate) fn clear_fixed(&mut self) {
        self.fixed.fill(false);
    }

    #[inline]
    pub(crate) fn is_fixed(&self, i: usize) -> bool {
        self.fixed[i]
    }

    #[inline]
    pub(crate) fn is_closed(&self, i: usize) -> bool {
        self.closed[i]
    }

    /// Whether the cell is excluded from routing (fixed or closed).
    #[inline]
    pub(crate) fn is_blocked(&self, i: usize) -> bool {
        self.fixed[i] || self.closed[i]
    }

    /// Finalize a cell for the current search.
    ///
    /// Panics if the cell is already closed; that only happens when the
    /// search loop itself is broken.
    pub(crate) fn close(&mut self, i: usize) {
        assert!(!self.closed[i], "cell closed twice in one search");
        self.closed[i] = true;
    }

    /// Drop all search-scoped state, keeping fixed obstacles.
    pub(crate) fn reset_search(&mut self) {
        self.closed.fill(false);
    }
}
