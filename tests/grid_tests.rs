use battleship_advisor::{Cell, CellState, ColumnLabel, Grid};

#[test]
fn new_grid_is_fully_unknown() {
    let grid = Grid::new(7);
    assert_eq!(grid.cells().count(), 49);
    assert_eq!(grid.count(CellState::Unknown), 49);
}

#[test]
fn out_of_bounds_is_not_an_error() {
    let grid = Grid::new(4);
    assert_eq!(grid.state_at(-1, 2), None);
    assert_eq!(grid.state_at(2, 4), None);
    assert_eq!(grid.get(Cell::new(4, 0)), None);
    assert_eq!(grid.offset(Cell::new(0, 0), -1, 0), None);
    assert_eq!(grid.offset(Cell::new(0, 0), 1, 0), Some(Cell::new(1, 0)));
}

#[test]
fn set_out_of_bounds_reports_error() {
    let mut grid = Grid::new(4);
    assert!(grid.set(Cell::new(4, 4), CellState::Hit).is_err());
}

#[test]
fn cell_labels_use_letters_then_numbers() {
    assert_eq!(Cell::new(0, 0).to_string(), "A 1");
    assert_eq!(Cell::new(2, 6).to_string(), "C 7");
    assert_eq!(Cell::new(9, 9).to_string(), "J 10");
    assert_eq!(Cell::new(26, 0).to_string(), "27 1");
    assert_eq!(format!("{:>2}", ColumnLabel(0)), " A");
}

#[test]
fn render_uses_state_digits() {
    let mut grid = Grid::new(3);
    grid.set(Cell::new(0, 0), CellState::Water).unwrap();
    grid.set(Cell::new(1, 0), CellState::Hit).unwrap();
    grid.set(Cell::new(2, 0), CellState::Sunk).unwrap();
    let text = grid.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "     A  B  C");
    assert_eq!(lines[1], " 1|  1  2  3");
    assert_eq!(lines[2], " 2|  .  .  .");
    assert_eq!(lines.len(), 4);
}
