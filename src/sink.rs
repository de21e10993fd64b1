//! Sunk-ship resolution and the no-touching exclusion rule.

use alloc::vec;
use alloc::vec::Vec;

use crate::grid::{Cell, CellState, Grid};

/// Size of the ship a `Sunk` report at `origin` would resolve, without
/// touching the grid. `origin` counts as a hit whatever its current state;
/// the walk follows orthogonally connected `Hit` cells.
pub fn measure_component(grid: &Grid, origin: Cell) -> usize {
    if !grid.contains(origin) {
        return 0;
    }
    flood(grid, origin, CellState::Hit).len()
}

/// Mark the ship through `origin` as sunk and return its size.
///
/// From a `Hit` origin every connected `Hit` cell turns `Sunk`; from a
/// `Sunk` origin the already sunk body is walked again, so resolving twice
/// yields the same size and changes nothing. When `exclude_perimeter` is
/// set, unknown orthogonal neighbours of the body become water. Any other
/// origin resolves to 0.
pub fn resolve_sink(grid: &mut Grid, origin: Cell, exclude_perimeter: bool) -> usize {
    let body = match grid.get(origin) {
        Some(state @ (CellState::Hit | CellState::Sunk)) => state,
        _ => return 0,
    };
    let cells = flood(grid, origin, body);
    for &cell in cells.iter() {
        grid.put(cell, CellState::Sunk);
    }
    if exclude_perimeter {
        for &cell in cells.iter() {
            let neighbors: Vec<Cell> = grid.neighbors(cell).collect();
            for n in neighbors {
                grid.exclude(n);
            }
        }
    }
    log::trace!("resolved sunk ship of size {} at {}", cells.len(), origin);
    cells.len()
}

/// Mark the unknown diagonal neighbours of `cell` as water. Returns how many
/// cells changed.
pub fn exclude_diagonals(grid: &mut Grid, cell: Cell) -> usize {
    let diagonals: Vec<Cell> = grid.diagonals(cell).collect();
    diagonals.into_iter().filter(|&d| grid.exclude(d)).count()
}

// Worklist traversal from `origin` through cells in `body` state.
fn flood(grid: &Grid, origin: Cell, body: CellState) -> Vec<Cell> {
    let mut seen = vec![false; grid.size() * grid.size()];
    let mut visited = Vec::new();
    let mut stack = vec![origin];
    seen[origin.y * grid.size() + origin.x] = true;

    while let Some(cell) = stack.pop() {
        visited.push(cell);
        for n in grid.neighbors(cell) {
            let idx = n.y * grid.size() + n.x;
            if !seen[idx] && grid.get(n) == Some(body) {
                seen[idx] = true;
                stack.push(n);
            }
        }
    }
    visited
}
