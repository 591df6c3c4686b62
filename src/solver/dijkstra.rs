use grid_util::point::Point;

use crate::solver::GridSolver;

/// Uniform cost search: every frontier key is just the distance from the start.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }
}
