//! # grid_search_visualizer
//!
//! Step-by-step shortest path search on a square grid, meant to be watched.
//! Implements [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
//! and [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) as two
//! configurations of a single frontier expansion. Movement is restricted to the
//! 4-neighbourhood and every move costs [EDGE_COST]. The search mutates the
//! state of each [Cell] as it goes and hands control to a caller supplied
//! callback after every enqueue and every settled cell, so a front end can
//! repaint between steps.
//!
//! ```
//! use grid_search_visualizer::{grid::Grid, solver::{astar::AstarSolver, GridSolver}};
//! use grid_util::point::Point;
//!
//! let mut grid = Grid::new(5);
//! grid.recompute_neighbours();
//! let found = AstarSolver.run(&mut grid, Point::new(0, 0), Point::new(4, 4), |_, _| {});
//! assert!(found);
//! ```
pub mod board;
pub mod grid;
pub mod search;
pub mod solver;

pub use board::Board;
pub use grid::{Cell, CellState, Grid};
pub use search::{SearchOutcome, SearchStats, Step};
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, Algorithm, GridSolver};

/// Side length of a freshly created [Board].
pub const DEFAULT_GRID_SIZE: usize = 30;
/// Cost of a single move between two 4-adjacent cells.
pub const EDGE_COST: i32 = 1;
/// Inline capacity of neighbour lists; a cell has at most four neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
