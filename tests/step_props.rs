use proptest::prelude::*;

use gridlife::cell::Cell;
use gridlife::grid::Grid;

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..=16, 1usize..=16).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(proptest::bool::ANY, rows * cols).prop_map(move |bits| {
            let mut grid = Grid::new(rows, cols);

            for (i, bit) in bits.into_iter().enumerate() {
                if bit {
                    grid.set(i / cols, i % cols, Cell::Alive);
                }
            }

            grid
        })
    })
}

proptest! {
    #[test]
    fn step_is_deterministic(grid in arb_grid()) {
        prop_assert_eq!(grid.step(), grid.step());
    }

    #[test]
    fn step_preserves_dimensions(grid in arb_grid()) {
        let next = grid.step();

        prop_assert_eq!(next.rows(), grid.rows());
        prop_assert_eq!(next.cols(), grid.cols());
    }

    #[test]
    fn step_does_not_mutate_its_input(grid in arb_grid()) {
        let before = grid.clone();
        let _ = grid.step();

        prop_assert_eq!(grid, before);
    }

    #[test]
    fn lone_cells_die(row in 0usize..8, col in 0usize..8) {
        let mut grid = Grid::new(8, 8);
        grid.set(row, col, Cell::Alive);

        prop_assert_eq!(grid.step(), Grid::new(8, 8));
    }
}
