use gridwalk_core::GridPoint;

/// Cost of one horizontal or vertical step.
pub const CARDINAL_COST: i32 = 10;

/// Cost of one diagonal step (10·√2, rounded).
pub const DIAGONAL_COST: i32 = 14;

/// Static terrain category of a cell.
///
/// The weight is added into a cell's `F` score, so heavier terrain is
/// visited later among otherwise equal candidates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Plain walkable ground.
    #[default]
    Normal,
    /// Slow ground such as swamp.
    Hard,
}

impl Terrain {
    /// The weight added to `F` for cells of this terrain.
    #[inline]
    pub const fn weight(self) -> i32 {
        match self {
            Terrain::Normal => 1,
            Terrain::Hard => 2,
        }
    }
}

/// Accumulated-cost increment for a single step between adjacent cells.
#[inline]
pub(crate) fn step_cost(from: GridPoint, to: GridPoint) -> i32 {
    if from.x == to.x || from.y == to.y {
        CARDINAL_COST
    } else {
        DIAGONAL_COST
    }
}

/// Heuristic estimate from `from` to `to`: Manhattan distance, scaled to
/// match the cardinal step cost.
#[inline]
pub(crate) fn heuristic(from: GridPoint, to: GridPoint) -> i32 {
    CARDINAL_COST * ((to.x - from.x).abs() + (to.y - from.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_and_diagonal_steps() {
        let c = GridPoint::new(3, 3);
        assert_eq!(step_cost(c, c.shift(0, 1)), CARDINAL_COST);
        assert_eq!(step_cost(c, c.shift(-1, 0)), CARDINAL_COST);
        assert_eq!(step_cost(c, c.shift(1, 1)), DIAGONAL_COST);
        assert_eq!(step_cost(c, c.shift(-1, 1)), DIAGONAL_COST);
    }

    #[test]
    fn heuristic_is_scaled_manhattan() {
        assert_eq!(heuristic(GridPoint::ZERO, GridPoint::new(3, 4)), 70);
        assert_eq!(heuristic(GridPoint::new(3, 4), GridPoint::ZERO), 70);
        assert_eq!(heuristic(GridPoint::ZERO, GridPoint::ZERO), 0);
    }

    #[test]
    fn terrain_weights() {
        assert_eq!(Terrain::default(), Terrain::Normal);
        assert_eq!(Terrain::Normal.weight(), 1);
        assert_eq!(Terrain::Hard.weight(), 2);
    }
}
