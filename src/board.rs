//! Editing state of an interactive front end. A [Board] owns the [Grid] together with the
//! start, end and selected [Algorithm], and turns clicks and key presses into grid edits.
//! Window handling and drawing stay with the front end, which reads the grid back through
//! [Board::grid] or the step callback of [Board::run].
use core::fmt;
use grid_util::point::Point;
use log::{info, warn};

use crate::grid::{CellState, Grid};
use crate::search::Step;
use crate::solver::{Algorithm, GridSolver};
use crate::DEFAULT_GRID_SIZE;

#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
    algorithm: Option<Algorithm>,
    guide_visible: bool,
}

impl Default for Board {
    fn default() -> Board {
        Board::new(DEFAULT_GRID_SIZE)
    }
}

/// Maps a pixel position in a square window of `width` pixels showing `rows` by `rows`
/// cells to the cell under it.
pub fn cell_at_pixel(px: u32, py: u32, rows: usize, width: u32) -> Option<Point> {
    let gap = width / rows.max(1) as u32;
    if gap == 0 {
        return None;
    }
    let (col, row) = ((px / gap) as usize, (py / gap) as usize);
    (col < rows && row < rows).then(|| Point::new(col as i32, row as i32))
}

impl Board {
    /// An empty board of `size` by `size` cells. The guide starts out visible.
    pub fn new(size: usize) -> Board {
        Board {
            grid: Grid::new(size),
            start: None,
            end: None,
            algorithm: None,
            guide_visible: true,
        }
    }

    /// Reads a square map made of `.` (free), `#` (blocked), `S` (start) and `E` (end).
    /// Surrounding whitespace and blank lines are ignored.
    pub fn parse(map: &str) -> Option<Board> {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let size = rows.len();
        let mut board = Board::new(size);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != size {
                warn!("Row {} of the map is not {} cells wide", y, size);
                return None;
            }
            for (x, glyph) in row.chars().enumerate() {
                let point = Point::new(x as i32, y as i32);
                match CellState::from_glyph(glyph) {
                    Some(CellState::Free) => {}
                    Some(CellState::Blocked) => board.grid.set_state(point, CellState::Blocked),
                    Some(CellState::Start) if board.start.is_none() => {
                        board.start = Some(point);
                        board.grid.set_state(point, CellState::Start);
                    }
                    Some(CellState::End) if board.end.is_none() => {
                        board.end = Some(point);
                        board.grid.set_state(point, CellState::End);
                    }
                    _ => {
                        warn!("Unexpected '{}' at {} in map", glyph, point);
                        return None;
                    }
                }
            }
        }
        Some(board)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    pub fn guide_visible(&self) -> bool {
        self.guide_visible
    }

    /// Primary click: the first click places the start, the second the end and any
    /// further click a wall. Clicking an endpoint does nothing. Returns the state the
    /// cell was given, if any.
    pub fn place(&mut self, point: Point) -> Option<CellState> {
        if !self.grid.contains(point) {
            return None;
        }
        let is_start = self.start == Some(point);
        let is_end = self.end == Some(point);
        let state = if self.start.is_none() && !is_end {
            self.start = Some(point);
            CellState::Start
        } else if self.end.is_none() && !is_start {
            self.end = Some(point);
            CellState::End
        } else if !is_start && !is_end {
            CellState::Blocked
        } else {
            return None;
        };
        self.grid.set_state(point, state);
        Some(state)
    }

    /// Secondary click: frees the cell and forgets it as start or end.
    pub fn erase(&mut self, point: Point) {
        if !self.grid.contains(point) {
            return;
        }
        self.grid.reset_state(point);
        if self.start == Some(point) {
            self.start = None;
        } else if self.end == Some(point) {
            self.end = None;
        }
    }

    pub fn select(&mut self, algorithm: Algorithm) {
        info!("Selected {}", algorithm);
        self.algorithm = Some(algorithm);
    }

    pub fn toggle_guide(&mut self) {
        self.guide_visible = !self.guide_visible;
    }

    /// Throws the grid away for an empty one of the same size. The selected algorithm is kept.
    pub fn clear(&mut self) {
        self.grid = Grid::new(self.grid.size());
        self.start = None;
        self.end = None;
    }

    pub fn ready(&self) -> bool {
        self.start.is_some() && self.end.is_some() && self.algorithm.is_some()
    }

    /// Runs the selected algorithm from start to end after wiping the marks of an earlier
    /// run and recomputing the neighbour lists. Returns `None` without touching the grid
    /// when the start, the end or the algorithm is missing, otherwise whether a path was found.
    pub fn run<F>(&mut self, on_step: F) -> Option<bool>
    where
        F: FnMut(&Grid, Step),
    {
        let (Some(start), Some(end), Some(algorithm)) = (self.start, self.end, self.algorithm)
        else {
            warn!("Cannot search before start, end and algorithm are chosen");
            return None;
        };
        self.grid.clear_search_marks();
        self.grid.recompute_neighbours();
        self.grid.update();
        if !self.grid.reachable(start, end) {
            info!("{} is not reachable from {}", end, start);
        }
        Some(algorithm.run(&mut self.grid, start, end, on_step))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_mapping() {
        assert_eq!(cell_at_pixel(0, 0, 30, 750), Some(Point::new(0, 0)));
        assert_eq!(cell_at_pixel(749, 24, 30, 750), Some(Point::new(29, 0)));
        assert_eq!(cell_at_pixel(25, 50, 30, 750), Some(Point::new(1, 2)));
        assert_eq!(cell_at_pixel(750, 0, 30, 750), None);
        assert_eq!(cell_at_pixel(0, 0, 30, 10), None);
    }

    #[test]
    fn parse_rejects_bad_maps() {
        assert!(Board::parse("..\n...").is_none());
        assert!(Board::parse("S.\n.S").is_none());
        assert!(Board::parse("?.\n..").is_none());
    }

    #[test]
    fn parse_reads_endpoints_and_walls() {
        let board = Board::parse(
            "
            S#.
            .#.
            ..E
            ",
        )
        .unwrap();
        assert_eq!(board.start(), Some(Point::new(0, 0)));
        assert_eq!(board.end(), Some(Point::new(2, 2)));
        assert_eq!(board.grid().count(CellState::Blocked), 2);
        assert_eq!(board.to_string(), "S#.\n.#.\n..E\n");
    }
}
