//! Opponent grid knowledge: coordinates, bounds checks and per-cell state.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::AdvisorError;

/// Orthogonal step vectors: down, up, right, left.
pub const ORTHOGONAL: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal step vectors.
pub const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A grid coordinate; `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Renders as the column letter then the 1-based row (`"C 7"`).
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", ColumnLabel(self.x), self.y + 1)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Cell::new(x, y)
    }
}

/// Column header: a letter for the first 26 columns, the 1-based number after.
pub struct ColumnLabel(pub usize);

impl fmt::Display for ColumnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 26 {
            let mut buf = [0u8; 4];
            f.pad(((b'A' + self.0 as u8) as char).encode_utf8(&mut buf))
        } else {
            fmt::Display::fmt(&(self.0 + 1), f)
        }
    }
}

/// What is known about a single cell of the opponent grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Unknown,
    Water,
    Hit,
    Sunk,
}

impl CellState {
    /// Water and sunk cells can never hold an afloat ship segment.
    pub fn blocks_ship(self) -> bool {
        matches!(self, CellState::Water | CellState::Sunk)
    }

    /// Single character used when rendering the grid.
    pub fn symbol(self) -> char {
        match self {
            CellState::Unknown => '.',
            CellState::Water => '1',
            CellState::Hit => '2',
            CellState::Sunk => '3',
        }
    }
}

/// Square N×N grid of cell states, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with every cell `Unknown`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Unknown; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `false` iff `x` or `y` falls outside `0..size`.
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.size && cell.y < self.size
    }

    /// Step from `cell` by `(dx, dy)`; `None` once the step leaves the board.
    pub fn offset(&self, cell: Cell, dx: isize, dy: isize) -> Option<Cell> {
        let x = cell.x as isize + dx;
        let y = cell.y as isize + dy;
        if self.in_bounds(x, y) {
            Some(Cell::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// State at signed coordinates, `None` when out of bounds.
    pub fn state_at(&self, x: isize, y: isize) -> Option<CellState> {
        if self.in_bounds(x, y) {
            Some(self.cells[self.index(x as usize, y as usize)])
        } else {
            None
        }
    }

    pub fn get(&self, cell: Cell) -> Option<CellState> {
        if self.contains(cell) {
            Some(self.cells[self.index(cell.x, cell.y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, cell: Cell, state: CellState) -> Result<(), AdvisorError> {
        if !self.contains(cell) {
            return Err(AdvisorError::OutOfBounds {
                x: cell.x,
                y: cell.y,
            });
        }
        self.put(cell, state);
        Ok(())
    }

    /// Write a cell already known to be on the board.
    pub(crate) fn put(&mut self, cell: Cell, state: CellState) {
        debug_assert!(self.contains(cell));
        let idx = self.index(cell.x, cell.y);
        self.cells[idx] = state;
    }

    /// Turn `cell` into water if nothing is known about it yet.
    /// Returns `true` when the cell changed.
    pub fn exclude(&mut self, cell: Cell) -> bool {
        if !self.contains(cell) {
            return false;
        }
        let idx = self.index(cell.x, cell.y);
        if self.cells[idx] == CellState::Unknown {
            self.cells[idx] = CellState::Water;
            true
        } else {
            false
        }
    }

    /// All cells, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size;
        (0..size).flat_map(move |x| (0..size).map(move |y| Cell::new(x, y)))
    }

    /// In-bounds orthogonal neighbours of `cell`.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        ORTHOGONAL
            .iter()
            .filter_map(move |&(dx, dy)| self.offset(cell, dx, dy))
    }

    /// In-bounds diagonal neighbours of `cell`.
    pub fn diagonals(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        DIAGONAL
            .iter()
            .filter_map(move |&(dx, dy)| self.offset(cell, dx, dy))
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.size {
            write!(f, " {:>2}", ColumnLabel(x))?;
        }
        writeln!(f)?;
        for y in 0..self.size {
            write!(f, "{:>2}|", y + 1)?;
            for x in 0..self.size {
                write!(f, " {:>2}", self.cells[self.index(x, y)].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{ size: {} }}", self.size)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_reject_negative_and_overflowing_coordinates() {
        let grid = Grid::new(4);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(3, 3));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, -1));
        assert!(!grid.in_bounds(4, 0));
        assert!(!grid.in_bounds(0, 4));
    }

    #[test]
    fn corner_has_two_orthogonal_and_one_diagonal_neighbor() {
        let grid = Grid::new(5);
        assert_eq!(grid.neighbors(Cell::new(0, 0)).count(), 2);
        assert_eq!(grid.diagonals(Cell::new(0, 0)).count(), 1);
        assert_eq!(grid.neighbors(Cell::new(2, 2)).count(), 4);
    }

    #[test]
    fn exclude_only_touches_unknown_cells() {
        let mut grid = Grid::new(3);
        grid.set(Cell::new(1, 1), CellState::Hit).unwrap();
        assert!(!grid.exclude(Cell::new(1, 1)));
        assert!(grid.exclude(Cell::new(0, 0)));
        assert_eq!(grid.get(Cell::new(0, 0)), Some(CellState::Water));
        assert!(!grid.exclude(Cell::new(7, 7)));
    }

    #[test]
    fn put_and_set_write_the_same_cell() {
        let mut grid = Grid::new(3);
        grid.put(Cell::new(2, 1), CellState::Sunk);
        assert_eq!(grid.get(Cell::new(2, 1)), Some(CellState::Sunk));
        assert_eq!(grid.state_at(2, 1), Some(CellState::Sunk));
        assert_eq!(
            grid.set(Cell::new(3, 0), CellState::Hit),
            Err(AdvisorError::OutOfBounds { x: 3, y: 0 })
        );
        assert_eq!(grid.count(CellState::Sunk), 1);
    }
}
