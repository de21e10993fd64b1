use battleship_advisor::{
    best_of, choose_cell, compute_field, compute_field_and_guess, fit_score, select_best, Cell,
    CellState, Fleet, Grid, DEFAULT_FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn single_cell_ships_always_score_one() {
    let mut grid = Grid::new(5);
    grid.set(Cell::new(1, 0), CellState::Water).unwrap();
    grid.set(Cell::new(0, 1), CellState::Sunk).unwrap();
    for cell in grid.cells() {
        if grid.get(cell) == Some(CellState::Unknown) {
            assert_eq!(fit_score(&grid, 1, cell), 1);
        }
    }
}

#[test]
fn boxed_in_cell_keeps_base_weight() {
    let mut grid = Grid::new(5);
    for c in [(1, 2), (3, 2), (2, 1), (2, 3)] {
        grid.set(Cell::from(c), CellState::Water).unwrap();
    }
    assert_eq!(fit_score(&grid, 2, Cell::new(2, 2)), 1);
    assert_eq!(fit_score(&grid, 4, Cell::new(2, 2)), 1);
}

#[test]
fn ship_longer_than_board_keeps_base_weight() {
    let grid = Grid::new(3);
    assert_eq!(fit_score(&grid, 4, Cell::new(1, 1)), 1);
}

#[test]
fn empty_board_field_covers_every_cell() {
    for size in 1..=10 {
        let grid = Grid::new(size);
        let field = compute_field(&grid, &Fleet::from(&DEFAULT_FLEET[..]));
        assert_eq!(field.len(), size * size);
        assert!(field.iter().all(|(_, score)| score >= 1));
    }
}

#[test]
fn resolved_cells_are_absent_from_field() {
    let mut grid = Grid::new(6);
    grid.set(Cell::new(0, 0), CellState::Water).unwrap();
    grid.set(Cell::new(3, 3), CellState::Hit).unwrap();
    grid.set(Cell::new(5, 5), CellState::Sunk).unwrap();
    let field = compute_field(&grid, &Fleet::new(vec![2, 3]));
    assert_eq!(field.len(), 33);
    assert_eq!(field.get(Cell::new(0, 0)), None);
    assert_eq!(field.get(Cell::new(3, 3)), None);
    assert_eq!(field.get(Cell::new(5, 5)), None);
}

#[test]
fn duplicate_lengths_count_once_per_ship() {
    let grid = Grid::new(10);
    let cell = Cell::new(4, 4);
    let single = compute_field(&grid, &Fleet::new(vec![3])).get(cell).unwrap();
    let double = compute_field(&grid, &Fleet::new(vec![3, 3])).get(cell).unwrap();
    assert_eq!(double, 2 * single);
}

#[test]
fn centre_beats_corner_on_open_board() {
    let grid = Grid::new(10);
    let field = compute_field(&grid, &Fleet::from(&DEFAULT_FLEET[..]));
    let best = select_best(&field);
    assert!(!best.is_empty());
    let corner = field.get(Cell::new(0, 0)).unwrap();
    for cell in best.iter() {
        assert!(field.get(*cell).unwrap() > corner);
        assert_eq!(field.get(*cell), field.max_score());
    }
}

#[test]
fn select_best_keeps_all_ties() {
    // Four-fold symmetry on an empty odd board: the centre is unique, the
    // four cells next to it tie.
    let grid = Grid::new(5);
    let field = compute_field(&grid, &Fleet::new(vec![3]));
    assert_eq!(select_best(&field), vec![Cell::new(2, 2)]);

    let ring = [
        Cell::new(1, 2),
        Cell::new(3, 2),
        Cell::new(2, 1),
        Cell::new(2, 3),
    ];
    let mut best = best_of(&field, ring);
    best.sort();
    let mut expected = ring.to_vec();
    expected.sort();
    assert_eq!(best, expected);
}

#[test]
fn flat_field_lists_every_cell_once() {
    let grid = Grid::new(4);
    let field = compute_field(&grid, &Fleet::new(vec![1]));
    let mut best = select_best(&field);
    assert_eq!(best.len(), 16);
    best.dedup();
    assert_eq!(best.len(), 16);
}

#[test]
fn field_is_deterministic() {
    let mut grid = Grid::new(8);
    grid.set(Cell::new(2, 5), CellState::Water).unwrap();
    let fleet = Fleet::new(vec![1, 2, 3]);
    assert_eq!(compute_field(&grid, &fleet), compute_field(&grid, &fleet));
}

#[test]
fn choosing_from_nothing_yields_nothing() {
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(choose_cell(&[], &mut rng), None);

    let mut grid = Grid::new(2);
    for cell in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        grid.set(Cell::from(cell), CellState::Water).unwrap();
    }
    let field = compute_field(&grid, &Fleet::new(vec![1]));
    assert!(field.is_empty());
    assert!(select_best(&field).is_empty());
    assert_eq!(compute_field_and_guess(&grid, &Fleet::new(vec![1]), &mut rng), None);
}

#[test]
fn choice_stays_within_maximal_set() {
    let grid = Grid::new(10);
    let fleet = Fleet::from(&DEFAULT_FLEET[..]);
    let field = compute_field(&grid, &fleet);
    let best = select_best(&field);
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let cell = compute_field_and_guess(&grid, &fleet, &mut rng).unwrap();
        assert!(best.contains(&cell));
    }
}

#[test]
fn field_renders_scores_and_dots() {
    let mut grid = Grid::new(2);
    grid.set(Cell::new(0, 0), CellState::Water).unwrap();
    let field = compute_field(&grid, &Fleet::new(vec![1]));
    let text = field.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "      A   B");
    assert_eq!(lines[1], " 1|   .   1");
    assert_eq!(lines[2], " 2|   1   1");
}
