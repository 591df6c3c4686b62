use grid_search_visualizer::{
    board::Board,
    grid::CellState,
    search::Step,
    solver::Algorithm,
};
use grid_util::point::Point;

#[test]
fn clicks_place_start_end_then_walls() {
    let mut board = Board::new(5);
    let a = Point::new(0, 0);
    let b = Point::new(4, 4);
    let c = Point::new(2, 2);
    assert_eq!(board.place(a), Some(CellState::Start));
    // Clicking the start again neither moves it nor turns it into the end.
    assert_eq!(board.place(a), None);
    assert_eq!(board.place(b), Some(CellState::End));
    assert_eq!(board.place(c), Some(CellState::Blocked));
    assert_eq!(board.place(b), None);
    assert_eq!(board.place(Point::new(5, 0)), None);
    assert_eq!(board.start(), Some(a));
    assert_eq!(board.end(), Some(b));
    assert_eq!(board.grid().state(c), CellState::Blocked);
}

#[test]
fn erasing_the_start_frees_the_slot() {
    let mut board = Board::new(5);
    board.place(Point::new(0, 0));
    board.place(Point::new(4, 4));
    board.erase(Point::new(0, 0));
    assert_eq!(board.start(), None);
    assert_eq!(board.grid().state(Point::new(0, 0)), CellState::Free);
    // The next click becomes the new start, not a wall.
    assert_eq!(board.place(Point::new(1, 3)), Some(CellState::Start));
    assert_eq!(board.start(), Some(Point::new(1, 3)));
}

#[test]
fn run_requires_endpoints_and_algorithm() {
    let mut board = Board::new(5);
    board.place(Point::new(0, 0));
    board.place(Point::new(4, 4));
    let mut steps = 0;
    assert_eq!(board.run(|_, _| steps += 1), None);
    assert_eq!(steps, 0);
    assert!(!board.ready());
    board.select(Algorithm::Astar);
    assert!(board.ready());
    assert_eq!(board.run(|_, _| steps += 1), Some(true));
    assert!(steps > 0);
    assert_eq!(board.grid().count(CellState::Path), 7);
}

#[test]
fn rerun_with_another_algorithm_starts_from_a_clean_grid() {
    let mut board = Board::parse(
        "
        S....
        .###.
        .#...
        .#.#.
        ...#E
        ",
    )
    .unwrap();
    board.select(Algorithm::Dijkstra);
    assert_eq!(board.run(|_, _| {}), Some(true));
    let dijkstra_visited = board.grid().count(CellState::Visited);

    board.select(Algorithm::Astar);
    let mut first_step_grid = None;
    assert_eq!(
        board.run(|grid, _| {
            if first_step_grid.is_none() {
                first_step_grid = Some(grid.to_string());
            }
        }),
        Some(true)
    );
    let first = first_step_grid.unwrap();
    assert!(!first.contains('x') && !first.contains('*'));
    assert!(board.grid().count(CellState::Visited) <= dijkstra_visited);
    assert_eq!(board.grid().state(Point::new(0, 0)), CellState::Start);
    assert_eq!(board.grid().state(Point::new(4, 4)), CellState::End);
}

#[test]
fn walled_in_goal_is_not_found() {
    let mut board = Board::parse(
        "
        S....
        .....
        ..###
        ..#E#
        ..###
        ",
    )
    .unwrap();
    board.select(Algorithm::Astar);
    let mut steps = Vec::new();
    assert_eq!(board.run(|_, step| steps.push(step)), Some(false));
    assert!(!steps.iter().any(|s| matches!(s, Step::PathMarked(_))));
    assert_eq!(board.grid().count(CellState::Path), 0);
    assert_eq!(board.grid().state(Point::new(3, 3)), CellState::End);
}

#[test]
fn clear_discards_everything_but_the_algorithm() {
    let mut board = Board::new(4);
    board.place(Point::new(0, 0));
    board.place(Point::new(3, 3));
    board.place(Point::new(1, 1));
    board.select(Algorithm::Dijkstra);
    board.clear();
    assert_eq!(board.start(), None);
    assert_eq!(board.end(), None);
    assert_eq!(board.algorithm(), Some(Algorithm::Dijkstra));
    assert_eq!(board.grid().size(), 4);
    assert_eq!(board.grid().count(CellState::Free), 16);
}

#[test]
fn guide_toggles() {
    let mut board = Board::default();
    assert!(board.guide_visible());
    assert_eq!(board.grid().size(), 30);
    board.toggle_guide();
    assert!(!board.guide_visible());
}
