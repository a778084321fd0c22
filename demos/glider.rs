use std::thread;
use std::time::Duration;

use gridlife::grid::Grid;

const GENERATIONS: u64 = 20;

fn main() {
    let mut grid = Grid::new(10, 10);

    for (row, col) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
        grid.toggle(row, col);
    }

    for generation in 0..GENERATIONS {
        println!("generation {generation}:\n{grid}\n");

        grid = grid.step();
        thread::sleep(Duration::from_millis(150));
    }
}
