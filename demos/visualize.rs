use grid_search_visualizer::board::Board;
use grid_search_visualizer::grid::CellState;
use grid_search_visualizer::solver::Algorithm;
use std::thread;
use std::time::Duration;

// Replays a search on a small maze in the terminal, printing a frame every few steps.
//
//   cargo run --example visualize -- [dijkstra|astar] [steps per frame]
//
// Glyphs:
// - S start, E end, # wall
// - o frontier, x visited, * path
const MAZE: &str = "
    S.........#.........
    .########.#.#######.
    .#......#.#.#.....#.
    .#.####.#.#.#.###.#.
    .#.#..#.#...#.#...#.
    .#.#..#.#####.#.###.
    .#.#..#.......#.#...
    .#.##.#########.#.##
    .#....#.........#...
    .######.#########.#.
    ........#.......#.#.
    ########..#####.#.#.
    .......#..#...#.#.#.
    .#####.#..#.#.#...#.
    .#...#.####.#.#####.
    .#.#.#......#.......
    .#.#.########.#####.
    .#.#..........#...#.
    ...############.#..E
    ................#...
";

fn main() {
    let mut args = std::env::args().skip(1);
    let algorithm = args
        .next()
        .and_then(|name| Algorithm::from_name(&name))
        .unwrap_or(Algorithm::Astar);
    let steps_per_frame: usize = args.next().and_then(|n| n.parse().ok()).unwrap_or(10).max(1);

    let mut board = Board::parse(MAZE).expect("maze should be a valid square map");
    board.toggle_guide();
    board.select(algorithm);

    let mut step_count = 0;
    let found = board
        .run(|grid, _| {
            step_count += 1;
            if step_count % steps_per_frame == 0 {
                // Clear the terminal and move the cursor home before drawing the next frame.
                print!("\x1b[2J\x1b[H");
                println!("{} - step {}", algorithm, step_count);
                print!("{}", grid);
                thread::sleep(Duration::from_millis(30));
            }
        })
        .expect("start, end and algorithm are set");

    print!("\x1b[2J\x1b[H");
    println!("{} - step {}", algorithm, step_count);
    print!("{}", board);
    if found {
        println!(
            "Path of {} cells, {} cells visited",
            board.grid().count(CellState::Path) + 2,
            board.grid().count(CellState::Visited)
        );
    } else {
        println!("No path exists");
    }
}
