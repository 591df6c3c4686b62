use core::fmt;
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::N_SMALLVEC_SIZE;

/// What a cell currently represents, both for the search and for rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Free,
    Blocked,
    Start,
    End,
    /// Discovered and waiting in the frontier.
    Frontier,
    /// Settled; its shortest distance is final.
    Visited,
    Path,
}

impl CellState {
    /// Glyph used by the [Display](fmt::Display) implementation of [Grid].
    pub fn glyph(self) -> char {
        match self {
            CellState::Free => '.',
            CellState::Blocked => '#',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Frontier => 'o',
            CellState::Visited => 'x',
            CellState::Path => '*',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<CellState> {
        Some(match glyph {
            '.' => CellState::Free,
            '#' => CellState::Blocked,
            'S' => CellState::Start,
            'E' => CellState::End,
            'o' => CellState::Frontier,
            'x' => CellState::Visited,
            '*' => CellState::Path,
            _ => return None,
        })
    }

    /// States written by a search, as opposed to those placed by the user.
    pub fn is_search_mark(self) -> bool {
        matches!(
            self,
            CellState::Frontier | CellState::Visited | CellState::Path
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub state: CellState,
    neighbours: SmallVec<[Point; N_SMALLVEC_SIZE]>,
}

impl Cell {
    /// Non-blocked 4-neighbours as of the last [Grid::recompute_neighbours].
    pub fn neighbours(&self) -> &[Point] {
        &self.neighbours
    }
}

/// Square arena of [Cell]s addressed by [Point], where `x` is the column and `y` the row.
/// Neighbour lists are not kept live: they are derived from the blocked cells by
/// [recompute_neighbours](Grid::recompute_neighbours), which has to be called after
/// editing obstacles and before searching. Connected components are maintained in a
/// [UnionFind] in the same lazy fashion.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(crate::DEFAULT_GRID_SIZE)
    }
}

impl Grid {
    /// Builds a `size` by `size` grid in which every cell is [CellState::Free].
    pub fn new(size: usize) -> Grid {
        let mut grid = Grid {
            size,
            cells: vec![Cell::default(); size * size],
            components: UnionFind::new(size * size),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0 && (point.x as usize) < self.size && (point.y as usize) < self.size
    }

    fn ix(&self, point: Point) -> usize {
        debug_assert!(self.contains(point), "{} is outside the grid", point);
        point.y as usize * self.size + point.x as usize
    }

    /// All points of the grid in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let n = self.size as i32;
        (0..n).flat_map(move |y| (0..n).map(move |x| Point::new(x, y)))
    }

    pub fn cell(&self, point: Point) -> &Cell {
        &self.cells[self.ix(point)]
    }

    pub fn state(&self, point: Point) -> CellState {
        self.cell(point).state
    }

    pub fn is_blocked(&self, point: Point) -> bool {
        self.state(point) == CellState::Blocked
    }

    pub fn neighbours(&self, point: Point) -> &[Point] {
        self.cell(point).neighbours()
    }

    /// Sets the state of a cell. Keeping a single start and end is up to the caller.
    /// Changing whether a cell is blocked flags the components as dirty.
    pub fn set_state(&mut self, point: Point, state: CellState) {
        let ix = self.ix(point);
        let was_blocked = self.cells[ix].state == CellState::Blocked;
        if was_blocked != (state == CellState::Blocked) {
            self.components_dirty = true;
        }
        self.cells[ix].state = state;
    }

    /// Returns a cell to [CellState::Free].
    pub fn reset_state(&mut self, point: Point) {
        self.set_state(point, CellState::Free);
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }

    /// In-bounds 4-neighbourhood of a point regardless of obstacles, ordered as
    /// row below, row above, column right, column left.
    pub fn neighbourhood_points(&self, point: Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        [
            Point::new(point.x, point.y + 1),
            Point::new(point.x, point.y - 1),
            Point::new(point.x + 1, point.y),
            Point::new(point.x - 1, point.y),
        ]
        .into_iter()
        .filter(|p| self.contains(*p))
        .collect()
    }

    /// Rebuilds the neighbour list of every cell from the current blocked states.
    pub fn recompute_neighbours(&mut self) {
        let points: Vec<Point> = self.points().collect();
        for point in points {
            let neighbours: SmallVec<[Point; N_SMALLVEC_SIZE]> = self
                .neighbourhood_points(point)
                .into_iter()
                .filter(|p| !self.is_blocked(*p))
                .collect();
            let ix = self.ix(point);
            self.cells[ix].neighbours = neighbours;
        }
    }

    /// Turns every [Frontier](CellState::Frontier), [Visited](CellState::Visited) and
    /// [Path](CellState::Path) cell back into a free one, keeping walls and endpoints.
    pub fn clear_search_marks(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| c.state.is_search_mark()) {
            cell.state = CellState::Free;
        }
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: Point) -> usize {
        self.components.find(self.ix(point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: Point, goal: Point) -> bool {
        self.contains(start)
            && self.contains(goal)
            && self.components.equiv(self.ix(start), self.ix(goal))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            debug!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free 4-neighbours to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.size * self.size);
        self.components_dirty = false;
        let points: Vec<Point> = self.points().filter(|p| !self.is_blocked(*p)).collect();
        for point in points {
            let parent_ix = self.ix(point);
            for p in [Point::new(point.x + 1, point.y), Point::new(point.x, point.y + 1)] {
                if self.contains(p) && !self.is_blocked(p) {
                    let ix = self.ix(p);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: String = row.iter().map(|c| c.state.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
