use gridwalk_core::{GridPoint, WorldPoint, WorldRect};

/// Dense grid overlay on a rectangular world area.
///
/// Cells are addressed by integer coordinates starting at (0, 0) in the
/// area's anchored bottom-left corner, stored row-major as flat indices.
/// Dimensions use ceiling division, so partial trailing cells along the far
/// edges are included. Immutable after construction.
pub(crate) struct GridIndex {
    origin: WorldPoint,
    cell_size: f32,
    cols: i32,
    rows: i32,
}

impl GridIndex {
    /// Build the grid for `area`, one cell per `cell_size` step.
    pub(crate) fn new(area: &WorldRect, cell_size: f32) -> Self {
        assert!(cell_size > 0.0, "cell size must be positive");
        Self {
            origin: area.anchored_origin(),
            cell_size,
            cols: (area.width / cell_size).ceil() as i32,
            rows: (area.height / cell_size).ceil() as i32,
        }
    }

    /// Number of cell columns.
    #[inline]
    pub(crate) fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of cell rows.
    #[inline]
    pub(crate) fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        (self.cols.max(0) as usize) * (self.rows.max(0) as usize)
    }

    /// Map a world position to grid coordinates by floor division.
    ///
    /// The result may lie outside the grid; callers that need a cell must
    /// check with [`GridIndex::idx`] or [`GridIndex::contains`].
    #[inline]
    pub(crate) fn world_to_grid(&self, p: WorldPoint) -> GridPoint {
        GridPoint::new(
            ((p.x - self.origin.x) / self.cell_size).floor() as i32,
            ((p.y - self.origin.y) / self.cell_size).floor() as i32,
        )
    }

    /// World position of the given anchor fraction within cell `g`.
    ///
    /// Anchor (0, 0) is the cell's bottom-left corner, (0.5, 0.5) its center.
    #[inline]
    pub(crate) fn grid_to_world(&self, g: GridPoint, anchor: WorldPoint) -> WorldPoint {
        WorldPoint::new(
            self.origin.x + (g.x as f32 + anchor.x) * self.cell_size,
            self.origin.y + (g.y as f32 + anchor.y) * self.cell_size,
        )
    }

    /// Whether `g` lies within the grid.
    #[inline]
    pub(crate) fn contains(&self, g: GridPoint) -> bool {
        g.x >= 0 && g.x < self.cols && g.y >= 0 && g.y < self.rows
    }

    /// Flat index of `g`, or `None` if outside the grid.
    #[inline]
    pub(crate) fn idx(&self, g: GridPoint) -> Option<usize> {
        if !self.contains(g) {
            return None;
        }
        Some(g.y as usize * self.cols as usize + g.x as usize)
    }

    /// Grid coordinates of a flat index.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> GridPoint {
        let w = self.cols as usize;
        GridPoint::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Flat indices of every in-grid cell covered by `rect`'s footprint.
    ///
    /// Both footprint corners are mapped to grid coordinates and the
    /// inclusive rectangular range between them is enumerated, clipped to
    /// the grid. Quarter-turn rotation of the rectangle swaps its width and
    /// height before the corners are taken.
    pub(crate) fn footprint(&self, rect: &WorldRect) -> Vec<usize> {
        let (min, max) = rect.bounds();
        let lo = self.world_to_grid(min);
        let hi_x = self.world_to_grid(WorldPoint::new(max.x, min.y)).x;
        let hi_y = self.world_to_grid(WorldPoint::new(min.x, max.y)).y;
        let mut cells = Vec::new();
        for gx in lo.x..=hi_x {
            for gy in lo.y..=hi_y {
                if let Some(i) = self.idx(GridPoint::new(gx, gy)) {
                    cells.push(i);
                }
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_5x5() -> GridIndex {
        GridIndex::new(&WorldRect::new(0.0, 0.0, 5.0, 5.0), 1.0)
    }

    #[test]
    fn dimensions_use_ceiling_division() {
        let g = GridIndex::new(&WorldRect::new(0.0, 0.0, 10.0, 7.0), 3.0);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.len(), 12);
    }

    #[test]
    fn anchor_shifts_the_origin() {
        // Centered 10x10 area at (0, 0): grid origin lands at (-5, -5).
        let area = WorldRect::new(0.0, 0.0, 10.0, 10.0).with_anchor(0.5, 0.5);
        let g = GridIndex::new(&area, 1.0);
        assert_eq!(g.world_to_grid(WorldPoint::new(-5.0, -5.0)), GridPoint::ZERO);
        assert_eq!(g.world_to_grid(WorldPoint::new(4.5, 4.5)), GridPoint::new(9, 9));
    }

    #[test]
    fn world_to_grid_may_fall_outside() {
        let g = grid_5x5();
        let p = g.world_to_grid(WorldPoint::new(-0.5, 7.0));
        assert_eq!(p, GridPoint::new(-1, 7));
        assert!(!g.contains(p));
        assert_eq!(g.idx(p), None);
    }

    #[test]
    fn idx_point_round_trip() {
        let g = grid_5x5();
        for gy in 0..5 {
            for gx in 0..5 {
                let p = GridPoint::new(gx, gy);
                let i = g.idx(p).unwrap();
                assert_eq!(g.point(i), p);
            }
        }
    }

    #[test]
    fn coordinate_round_trip_across_anchors() {
        let g = GridIndex::new(&WorldRect::new(3.0, -2.0, 8.0, 6.0), 2.0);
        // Anchor 1.0 lands exactly on the next cell's edge; nudge inside.
        for anchor in [0.0, 0.25, 0.5, 0.75, 0.999] {
            let a = WorldPoint::new(anchor, anchor);
            for gy in 0..g.rows() {
                for gx in 0..g.cols() {
                    let p = GridPoint::new(gx, gy);
                    assert_eq!(g.world_to_grid(g.grid_to_world(p, a)), p);
                }
            }
        }
    }

    #[test]
    fn footprint_covers_inclusive_range() {
        let g = grid_5x5();
        let cells = g.footprint(&WorldRect::new(1.2, 1.2, 1.0, 2.0));
        let points: Vec<GridPoint> = cells.into_iter().map(|i| g.point(i)).collect();
        // Spans x 1.2..2.2 and y 1.2..3.2: grid columns 1..=2, rows 1..=3.
        assert_eq!(points.len(), 6);
        for gx in 1..=2 {
            for gy in 1..=3 {
                assert!(points.contains(&GridPoint::new(gx, gy)));
            }
        }
    }

    #[test]
    fn footprint_clips_to_grid() {
        let g = grid_5x5();
        let cells = g.footprint(&WorldRect::new(-2.0, -2.0, 3.5, 3.5));
        let points: Vec<GridPoint> = cells.into_iter().map(|i| g.point(i)).collect();
        // Only the in-grid corner survives: columns 0..=1, rows 0..=1.
        assert_eq!(points.len(), 4);
        assert!(points.contains(&GridPoint::ZERO));
        assert!(points.contains(&GridPoint::new(1, 1)));
    }

    #[test]
    fn footprint_respects_rotation() {
        let g = GridIndex::new(&WorldRect::new(0.0, 0.0, 10.0, 10.0), 1.0);
        let tall = WorldRect::new(4.1, 4.1, 0.5, 2.5);
        let unrotated = g.footprint(&tall);
        let rotated = g.footprint(&tall.with_angle(-90.0));
        // 0.5x2.5 spans one column, three rows; rotated it spans three
        // columns, one row.
        assert_eq!(unrotated.len(), 3);
        assert_eq!(rotated.len(), 3);
        assert_ne!(unrotated, rotated);
        let pts: Vec<GridPoint> = rotated.into_iter().map(|i| g.point(i)).collect();
        assert!(pts.iter().all(|p| p.y == 4));
    }

    #[test]
    #[should_panic(expected = "cell size must be positive")]
    fn zero_cell_size_panics() {
        GridIndex::new(&WorldRect::new(0.0, 0.0, 5.0, 5.0), 0.0);
    }
}
