use crate::grid::Grid;
use crate::search::{search, SearchOutcome, Step};
use crate::EDGE_COST;
use core::fmt;
use grid_util::point::Point;

pub mod astar;
pub mod dijkstra;

use astar::AstarSolver;
use dijkstra::DijkstraSolver;

/// A shortest path search over the 4-neighbourhood of a [Grid], defined by its heuristic.
/// The heuristic must never overestimate the remaining cost for the returned paths to be
/// shortest ones.
pub trait GridSolver {
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32;

    /// Runs the search, marking cells on the grid as it goes and calling `on_step` after
    /// every visible change. See [search] for the details.
    fn search<F>(&self, grid: &mut Grid, start: Point, goal: Point, on_step: F) -> SearchOutcome<i32>
    where
        F: FnMut(&Grid, Step),
    {
        search(
            grid,
            start,
            goal,
            EDGE_COST,
            |point| self.heuristic(point, &goal),
            on_step,
        )
    }

    /// Like [search](Self::search), but only reports whether a path was found and marked.
    fn run<F>(&self, grid: &mut Grid, start: Point, goal: Point, on_step: F) -> bool
    where
        F: FnMut(&Grid, Step),
    {
        self.search(grid, start, goal, on_step).is_found()
    }

    /// Computes a path from start to goal without observing the individual steps.
    fn get_path_single_goal(&self, grid: &mut Grid, start: Point, goal: Point) -> Option<Vec<Point>> {
        match self.search(grid, start, goal, |_, _| {}) {
            SearchOutcome::Found { path, .. } => Some(path),
            SearchOutcome::NotFound { .. } => None,
        }
    }

    fn get_path_cost(&self, path: &[Point]) -> i32 {
        path.len().saturating_sub(1) as i32 * EDGE_COST
    }
}

/// The algorithm a front end has selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::Astar];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Astar => "astar",
        }
    }

    pub fn from_name(name: &str) -> Option<Algorithm> {
        match name.to_ascii_lowercase().as_str() {
            "dijkstra" | "1" => Some(Algorithm::Dijkstra),
            "astar" | "a*" | "2" => Some(Algorithm::Astar),
            _ => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl GridSolver for Algorithm {
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        match self {
            Algorithm::Dijkstra => DijkstraSolver.heuristic(p1, p2),
            Algorithm::Astar => AstarSolver.heuristic(p1, p2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algorithm.name()), Some(algorithm));
        }
        assert_eq!(Algorithm::from_name("A*"), Some(Algorithm::Astar));
        assert_eq!(Algorithm::from_name("2"), Some(Algorithm::Astar));
        assert_eq!(Algorithm::from_name("bfs"), None);
    }

    #[test]
    fn algorithm_dispatches_heuristic() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(Algorithm::Dijkstra.heuristic(&a, &b), 0);
        assert_eq!(Algorithm::Astar.heuristic(&a, &b), 7);
    }

    #[test]
    fn path_cost_counts_moves() {
        let path = [Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)];
        assert_eq!(Algorithm::Astar.get_path_cost(&path), 2);
        assert_eq!(Algorithm::Astar.get_path_cost(&[]), 0);
    }
}
