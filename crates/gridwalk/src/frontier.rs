use crate::engine::{Node, Pathfinder};

/// The open list: discovered cells awaiting expansion.
///
/// Candidate ordering is a stable descending sort by `F` followed by a pop
/// from the end, so the lowest `F` wins and, among equal `F`, the most
/// recently inserted cell wins. That LIFO tie-break biases the search
/// toward its current expansion front instead of backtracking to older,
/// equally-ranked cells, and is part of the observable path contract on
/// symmetric maps. A binary heap would reorder ties, so it is not used.
pub(crate) struct OpenFrontier {
    queue: Vec<usize>,
    queued: Vec<bool>,
}

impl OpenFrontier {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            queue: Vec::new(),
            queued: vec![false; len],
        }
    }

    /// Drop all queued cells.
    pub(crate) fn reset(&mut self) {
        self.queue.clear();
        self.queued.fill(false);
    }

    /// O(1) membership test.
    #[inline]
    pub(crate) fn contains(&self, cell: usize) -> bool {
        self.queued[cell]
    }

    /// Enqueue a cell known not to be queued yet.
    pub(crate) fn push(&mut self, cell: usize) {
        assert!(!self.queued[cell], "cell queued twice");
        self.queue.push(cell);
        self.queued[cell] = true;
    }

    /// Remove and return the best queued cell, or `None` when exhausted.
    pub(crate) fn pop_best(&mut self, nodes: &[Node]) -> Option<usize> {
        self.queue.sort_by(|&a, &b| nodes[b].f.cmp(&nodes[a].f));
        let cell = self.queue.pop()?;
        assert!(self.queued[cell], "popped cell missing from open index");
        self.queued[cell] = false;
        Some(cell)
    }
}

impl Pathfinder {
    /// Offer `cell` to the frontier with `parent` as its proposed parent.
    ///
    /// A cell seen for the first time is scored and enqueued. A cell that is
    /// already queued is tentatively reparented; the new parent sticks only
    /// when it yields a strictly lower `F`, otherwise the previous parent
    /// and scores are restored. Ties keep the existing parent.
    pub(crate) fn offer(&mut self, cell: usize, parent: usize) {
        if self.frontier.contains(cell) {
            let old_parent = self.nodes[cell].parent;
            let old_f = self.nodes[cell].f;
            self.score(cell, Some(parent));
            if self.nodes[cell].f >= old_f {
                self.score(cell, old_parent);
            }
        } else {
            self.score(cell, Some(parent));
            self.frontier.push(cell);
        }
    }
}
