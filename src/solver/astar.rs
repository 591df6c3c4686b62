use grid_util::point::Point;

use crate::solver::GridSolver;
use crate::EDGE_COST;

/// Manhattan (L1) distance between two points, the number of 4-neighbourhood moves
/// needed on an empty grid.
#[inline]
pub fn manhattan(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}

/// A* with the [manhattan] distance as heuristic. Since every move costs [EDGE_COST]
/// and only 4 directions are allowed, the heuristic is consistent and the first time
/// a cell is settled its distance is final.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl GridSolver for AstarSolver {
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        manhattan(p1, p2) * EDGE_COST
    }
}
