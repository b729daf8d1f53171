use std::collections::BTreeMap;

use battleships::{BoardError, CellSymbol, Coordinate, Grid, Orientation, Ship, ShipKind, FLEET};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

/// Cells occupied by each build code, read back from the omniscient view.
fn cells_by_code(grid: &Grid) -> BTreeMap<u32, Vec<(usize, usize)>> {
    let mut cells: BTreeMap<u32, Vec<(usize, usize)>> = BTreeMap::new();
    for (r, row) in grid.render_omniscient_view().iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                CellSymbol::Code(0) => {}
                CellSymbol::Code(code) => cells.entry(*code).or_default().push((r, c)),
                other => panic!("unexpected symbol {:?}", other),
            }
        }
    }
    cells
}

fn assert_straight_run(cells: &[(usize, usize)], size: usize) {
    assert_eq!(cells.len(), size);
    let same_row = cells.iter().all(|&(r, _)| r == cells[0].0);
    let same_col = cells.iter().all(|&(_, c)| c == cells[0].1);
    assert!(same_row || same_col, "ship bends: {:?}", cells);
    let mut line: Vec<usize> = if same_row {
        cells.iter().map(|&(_, c)| c).collect()
    } else {
        cells.iter().map(|&(r, _)| r).collect()
    };
    line.sort_unstable();
    for pair in line.windows(2) {
        assert_eq!(pair[1], pair[0] + 1, "ship has a gap: {:?}", cells);
    }
}

fn check_layout(grid: &Grid) {
    let cells = cells_by_code(grid);
    assert_eq!(cells.len(), grid.total_ships());
    let expected: usize = grid.ships().map(|(_, s)| s.size()).sum();
    assert_eq!(grid.occupied_cells(), expected);
    for (code, ship) in grid.ships() {
        let ship_cells = cells.get(&code).expect("registered ship has no cells");
        assert_straight_run(ship_cells, ship.size());
        for &(r, c) in ship_cells {
            assert!(grid.is_point_valid(Coordinate::new(r as i32, c as i32)));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_placement_is_disjoint_straight_and_in_bounds(
        seed in any::<u64>(),
        rows in 5..=10usize,
        cols in 5..=10usize,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new(rows, cols).unwrap();
        for (i, kind) in FLEET.iter().enumerate() {
            let code = grid.place_ship(&mut rng, Ship::from(*kind)).unwrap();
            prop_assert_eq!(code as usize, i + 1);
        }
        prop_assert_eq!(grid.occupied_cells(), 13);
        check_layout(&grid);
    }

    #[test]
    fn mixed_sizes_never_overlap(
        seed in any::<u64>(),
        sizes in proptest::collection::vec(1..=4usize, 1..10),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new(10, 10).unwrap();
        for size in sizes {
            let before = grid.clone();
            match grid.place_ship(&mut rng, Ship::new("Boat", size)) {
                Ok(_) => {}
                Err(BoardError::UnableToPlaceShip { .. }) => {
                    prop_assert_eq!(&grid, &before);
                    break;
                }
                Err(e) => panic!("unexpected error {}", e),
            }
        }
        check_layout(&grid);
    }
}

#[test]
fn test_same_seed_same_layout() {
    let layout = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new(10, 10).unwrap();
        for kind in FLEET {
            grid.place_ship(&mut rng, Ship::from(kind)).unwrap();
        }
        grid.render_omniscient_view()
    };
    assert_eq!(layout(42), layout(42));
}

#[test]
fn test_exact_fit_run() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut grid = Grid::new(1, 5).unwrap();
    grid.place_ship(&mut rng, Ship::from(ShipKind::Battleship)).unwrap();
    assert_eq!(grid.render_omniscient_view(), vec![vec![CellSymbol::Code(1); 5]]);
}

#[test]
fn test_oversized_ship_rejected_before_placement() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut grid = Grid::new(1, 1).unwrap();
    let err = grid.place_ship(&mut rng, Ship::new("Barge", 2)).unwrap_err();
    assert_eq!(err, BoardError::ShipTooLarge { name: "Barge", size: 2 });
    assert_eq!(grid.occupied_cells(), 0);
    assert_eq!(grid.total_ships(), 0);
}

#[test]
fn test_fragmented_board_gives_up_cleanly() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut grid = Grid::new(1, 3).unwrap();
    grid.place_ship_at(Ship::new("Buoy", 1), Coordinate::new(0, 1), Orientation::Horizontal)
        .unwrap();
    let before = grid.clone();

    let err = grid
        .place_ship_with_limit(&mut rng, Ship::new("Skiff", 2), 50)
        .unwrap_err();
    assert_eq!(err, BoardError::UnableToPlaceShip { name: "Skiff", attempts: 50 });
    assert_eq!(grid, before);

    // the failed attempt must not consume a build code
    let code = grid
        .place_ship_at(Ship::new("Dinghy", 1), Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(code, 2);
}

#[test]
fn test_fills_only_remaining_run() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut grid = Grid::new(3, 3).unwrap();
    grid.place_ship_at(Ship::new("Top", 3), Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    grid.place_ship_at(Ship::new("Bottom", 3), Coordinate::new(2, 0), Orientation::Horizontal)
        .unwrap();
    let code = grid.place_ship(&mut rng, Ship::new("Middle", 3)).unwrap();
    let view = grid.render_omniscient_view();
    assert_eq!(view[1], vec![CellSymbol::Code(code); 3]);
}

#[test]
fn test_random_empty_ship_rejected() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut grid = Grid::new(4, 4).unwrap();
    let err = grid.place_ship(&mut rng, Ship::new("Ghost", 0)).unwrap_err();
    assert_eq!(err, BoardError::InvalidShipSize { name: "Ghost" });
    assert_eq!(grid.total_ships(), 0);
    assert_eq!(grid.place_ship(&mut rng, Ship::new("Real", 2)).unwrap(), 1);
}

#[test]
fn test_offset_reaches_both_ends_of_run() {
    let mut left_flush = 0;
    let mut right_flush = 0;
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new(1, 5).unwrap();
        grid.place_ship(&mut rng, Ship::new("Four", 4)).unwrap();
        match grid.cell(Coordinate::new(0, 0)) {
            Some(0) => {
                assert_eq!(grid.cell(Coordinate::new(0, 4)), Some(1));
                right_flush += 1;
            }
            Some(1) => {
                assert_eq!(grid.cell(Coordinate::new(0, 4)), Some(0));
                left_flush += 1;
            }
            other => panic!("unexpected cell {:?}", other),
        }
    }
    assert!(left_flush > 0, "ship never placed at the left edge");
    assert!(right_flush > 0, "ship never placed at the right edge");
}
