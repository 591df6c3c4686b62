//! The frontier expansion shared by every solver. Dijkstra and A* only differ in the
//! heuristic handed to [search], everything else (the frontier, the bookkeeping of
//! distances and predecessors, the marking of cells and the step callbacks) lives here.
use fxhash::{FxBuildHasher, FxHashMap, FxHashSet};
use grid_util::point::Point;
use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, info, trace};
use num_traits::PrimInt;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid::{CellState, Grid};
use crate::N_SMALLVEC_SIZE;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// A unit of visible progress, reported through the step callback in the exact order
/// the search performs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A newly discovered cell entered the frontier and was marked [CellState::Frontier].
    Enqueued(Point),
    /// All neighbours of the cell were processed. Unless it is the start, the cell is
    /// marked [CellState::Visited] right after the callback returns.
    Settled(Point),
    /// A cell between start and end was marked [CellState::Path].
    PathMarked(Point),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub enqueued: usize,
    pub settled: usize,
}

#[derive(Clone, Debug)]
pub enum SearchOutcome<C> {
    Found {
        /// Cells from start to end, both included.
        path: Vec<Point>,
        cost: C,
        predecessors: FxIndexMap<Point, Point>,
        stats: SearchStats,
    },
    NotFound {
        stats: SearchStats,
    },
}

impl<C: Copy> SearchOutcome<C> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            SearchOutcome::NotFound { .. } => None,
        }
    }
    pub fn cost(&self) -> Option<C> {
        match self {
            SearchOutcome::Found { cost, .. } => Some(*cost),
            SearchOutcome::NotFound { .. } => None,
        }
    }
    pub fn predecessors(&self) -> Option<&FxIndexMap<Point, Point>> {
        match self {
            SearchOutcome::Found { predecessors, .. } => Some(predecessors),
            SearchOutcome::NotFound { .. } => None,
        }
    }
    pub fn stats(&self) -> SearchStats {
        match self {
            SearchOutcome::Found { stats, .. } | SearchOutcome::NotFound { stats } => *stats,
        }
    }
}

/// Frontier entry. [BinaryHeap] is a max-heap, so the ordering is reversed: the
/// smallest key comes out first and equal keys come out in insertion order.
struct FrontierEntry<C> {
    key: C,
    order: usize,
    point: Point,
}

impl<C: PartialEq> Eq for FrontierEntry<C> {}

impl<C: PartialEq> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.key.eq(&other.key) && self.order == other.order
    }
}

impl<C: Ord> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.key.cmp(&self.key) {
            Ordering::Equal => other.order.cmp(&self.order),
            s => s,
        }
    }
}

/// Bookkeeping of a single search. Lives on the stack of [search] and is dropped on return.
struct SearchState<C> {
    distance: FxHashMap<Point, C>,
    predecessors: FxIndexMap<Point, Point>,
    frontier: BinaryHeap<FrontierEntry<C>>,
    // The heap has no cancellation, this mirrors which cells are in it.
    membership: FxHashSet<Point>,
    settled: FxHashSet<Point>,
    counter: usize,
    stats: SearchStats,
}

impl<C: PrimInt> SearchState<C> {
    fn new(grid: &Grid, start: Point) -> SearchState<C> {
        let mut distance: FxHashMap<Point, C> =
            grid.points().map(|p| (p, C::max_value())).collect();
        distance.insert(start, C::zero());
        SearchState {
            distance,
            predecessors: FxIndexMap::default(),
            frontier: BinaryHeap::new(),
            membership: FxHashSet::default(),
            settled: FxHashSet::default(),
            counter: 0,
            stats: SearchStats::default(),
        }
    }

    fn distance(&self, point: Point) -> C {
        self.distance
            .get(&point)
            .copied()
            .unwrap_or_else(C::max_value)
    }

    fn push(&mut self, key: C, point: Point) {
        self.frontier.push(FrontierEntry {
            key,
            order: self.counter,
            point,
        });
        self.counter += 1;
        self.membership.insert(point);
    }
}

/// Expands the grid from `start` until `end` is settled or the frontier runs dry.
///
/// Entries are keyed by `distance + heuristic(cell)`, so a heuristic that always
/// returns zero gives Dijkstra's algorithm and an admissible, consistent one gives A*.
/// Every move costs `edge_cost`. The neighbour lists of the grid are used as they are,
/// so [Grid::recompute_neighbours] should be called after editing obstacles.
///
/// `on_step` is invoked after every enqueue, once per settled cell and once per marked
/// path cell; see [Step]. On success the start and end cells get their
/// [Start](CellState::Start) and [End](CellState::End) state back.
///
/// Panics if `start` or `end` lies outside the grid.
pub fn search<C, FH, FS>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    edge_cost: C,
    mut heuristic: FH,
    mut on_step: FS,
) -> SearchOutcome<C>
where
    C: PrimInt,
    FH: FnMut(&Point) -> C,
    FS: FnMut(&Grid, Step),
{
    assert!(grid.contains(start), "start {} lies outside the grid", start);
    assert!(grid.contains(end), "end {} lies outside the grid", end);
    info!("Searching for a path from {} to {}", start, end);

    let mut state: SearchState<C> = SearchState::new(grid, start);
    let start_key = heuristic(&start);
    state.push(start_key, start);

    while let Some(FrontierEntry { point: current, .. }) = state.frontier.pop() {
        if !state.membership.remove(&current) {
            debug!("Skipping stale frontier entry for {}", current);
            continue;
        }

        if current == end {
            let path = reconstruct_path(grid, &state.predecessors, end, &mut on_step);
            debug_assert!(is_contiguous(&path));
            grid.set_state(end, CellState::End);
            grid.set_state(start, CellState::Start);
            let cost = state.distance(end);
            info!(
                "Found a path of {} cells after settling {} cells",
                path.len(),
                state.stats.settled
            );
            return SearchOutcome::Found {
                path,
                cost,
                predecessors: state.predecessors,
                stats: state.stats,
            };
        }

        let current_distance = state.distance(current);
        let neighbours: SmallVec<[Point; N_SMALLVEC_SIZE]> =
            SmallVec::from_slice(grid.neighbours(current));
        for neighbour in neighbours {
            if state.settled.contains(&neighbour) {
                continue;
            }
            let candidate = current_distance + edge_cost;
            if candidate < state.distance(neighbour) {
                state.predecessors.insert(neighbour, current);
                state.distance.insert(neighbour, candidate);
                if !state.membership.contains(&neighbour) {
                    let key = candidate + heuristic(&neighbour);
                    state.push(key, neighbour);
                    state.stats.enqueued += 1;
                    grid.set_state(neighbour, CellState::Frontier);
                    trace!("Enqueued {}", neighbour);
                    on_step(grid, Step::Enqueued(neighbour));
                }
            }
        }

        state.settled.insert(current);
        state.stats.settled += 1;
        trace!("Settled {}", current);
        on_step(grid, Step::Settled(current));
        if current != start {
            grid.set_state(current, CellState::Visited);
        }
    }

    info!(
        "No path from {} to {}, settled {} cells",
        start, end, state.stats.settled
    );
    SearchOutcome::NotFound { stats: state.stats }
}

/// Follows `predecessors` back from `end` until a cell without a predecessor, which is
/// the start. Cells strictly between the two are marked [CellState::Path], each followed
/// by a [Step::PathMarked] callback. Returns the path ordered from start to end.
pub fn reconstruct_path<FS>(
    grid: &mut Grid,
    predecessors: &FxIndexMap<Point, Point>,
    end: Point,
    on_step: &mut FS,
) -> Vec<Point>
where
    FS: FnMut(&Grid, Step),
{
    let mut path: Vec<Point> =
        std::iter::successors(Some(end), |p| predecessors.get(p).copied()).collect();
    for &point in path.iter().skip(1) {
        if predecessors.contains_key(&point) {
            grid.set_state(point, CellState::Path);
            on_step(grid, Step::PathMarked(point));
        }
    }
    path.reverse();
    path
}

/// Checks that consecutive points of a path are 4-adjacent.
pub fn is_contiguous(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| (a.x - b.x).abs() + (a.y - b.y).abs() == 1)
}
