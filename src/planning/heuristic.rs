//! Distance-estimate strategies for the A* search.

use crate::core::GridCoord;

use super::types::FACE_COST;

/// Heuristic strategy used to estimate remaining cost between two cells.
///
/// Estimates share the ×100 scale of the edge-cost table, so g and h add
/// without conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// `100·√(dx² + dy² + dz²)`, truncated. Admissible and consistent at
    /// this edge-cost scale, so searches using it return minimum-cost
    /// paths.
    #[default]
    Euclidean,

    /// `100·(|dx| + |dy| + |dz|)`. Overestimates on a 26-connected
    /// lattice (a diagonal move is cheaper than its axis components), so
    /// it forfeits the optimality guarantee in exchange for fewer
    /// expansions. Exposed as a caller trade-off.
    Manhattan,

    /// User-supplied estimate between two cells
    Custom(fn(GridCoord, GridCoord) -> u32),
}

impl Heuristic {
    /// Estimate the remaining cost from `from` to `to`.
    #[inline]
    pub fn estimate(&self, from: GridCoord, to: GridCoord) -> u32 {
        let delta = from.abs_delta(&to);
        match self {
            Heuristic::Euclidean => {
                let (dx, dy, dz) = (delta.x as i64, delta.y as i64, delta.z as i64);
                let squared = (dx * dx + dy * dy + dz * dz) as f64;
                (FACE_COST as f64 * squared.sqrt()) as u32
            }
            Heuristic::Manhattan => FACE_COST * (delta.x + delta.y + delta.z) as u32,
            Heuristic::Custom(estimate) => estimate(from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        let h = Heuristic::Euclidean;

        assert_eq!(h.estimate(GridCoord::new(0, 0, 0), GridCoord::new(3, 4, 0)), 500);
        // 100·√3 truncated matches the corner-move cost
        assert_eq!(h.estimate(GridCoord::new(0, 0, 0), GridCoord::new(1, 1, 1)), 173);
        assert_eq!(h.estimate(GridCoord::new(2, 2, 2), GridCoord::new(2, 2, 2)), 0);
    }

    #[test]
    fn test_euclidean_is_symmetric() {
        let h = Heuristic::Euclidean;
        let a = GridCoord::new(1, 7, -2);
        let b = GridCoord::new(-3, 0, 5);

        assert_eq!(h.estimate(a, b), h.estimate(b, a));
    }

    #[test]
    fn test_manhattan() {
        let h = Heuristic::Manhattan;

        assert_eq!(h.estimate(GridCoord::new(0, 0, 0), GridCoord::new(3, 4, 0)), 700);
        assert_eq!(h.estimate(GridCoord::new(0, 0, 0), GridCoord::new(1, 1, 1)), 300);
    }

    #[test]
    fn test_custom() {
        fn zero(_: GridCoord, _: GridCoord) -> u32 {
            0
        }
        let h = Heuristic::Custom(zero);

        assert_eq!(h.estimate(GridCoord::new(0, 0, 0), GridCoord::new(9, 9, 9)), 0);
    }

    #[test]
    fn test_default_is_euclidean() {
        assert_eq!(Heuristic::default(), Heuristic::Euclidean);
    }
}
