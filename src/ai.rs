// Placement-density scoring for the opponent grid.
// The field is a pure function of the grid and the remaining fleet; only
// `choose_cell` consumes randomness.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use crate::{
    grid::{Cell, CellState, ColumnLabel, Grid},
    ship::Fleet,
};
use rand::Rng;

/// Estimate how freely a ship of `ship_length` could lie across `cell`.
///
/// Starts from a base weight of 1. Every offset that lets the ship slide
/// over `cell` horizontally without leaving the board or crossing water or a
/// sunk ship adds `ship_length`, and likewise vertically. Hit cells do not
/// block: the ship may be the one already hit. Single-cell ships always
/// score exactly 1.
pub fn fit_score(grid: &Grid, ship_length: usize, cell: Cell) -> u32 {
    if ship_length == 1 {
        return 1;
    }
    let len = ship_length as isize;
    let (x, y) = (cell.x as isize, cell.y as isize);
    let mut score = 1u32;

    for offset in 0..len {
        let mut horizontal_ok = true;
        let mut vertical_ok = true;
        for part in 0..len {
            let z = part - offset;
            if !is_open(grid, x + z, y) {
                horizontal_ok = false;
            }
            if !is_open(grid, x, y + z) {
                vertical_ok = false;
            }
        }
        // Weighted by length rather than 1 per orientation.
        if vertical_ok {
            score += ship_length as u32;
        }
        if horizontal_ok {
            score += ship_length as u32;
        }
    }
    score
}

#[inline]
fn is_open(grid: &Grid, x: isize, y: isize) -> bool {
    grid.state_at(x, y).is_some_and(|s| !s.blocks_ship())
}

/// Score per unresolved cell. Cells that are water, hit or sunk are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbabilityField {
    size: usize,
    scores: BTreeMap<Cell, u32>,
}

impl ProbabilityField {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Score of `cell`, `None` when it is not a candidate.
    pub fn get(&self, cell: Cell) -> Option<u32> {
        self.scores.get(&cell).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.scores.iter().map(|(&c, &s)| (c, s))
    }

    pub fn max_score(&self) -> Option<u32> {
        self.scores.values().copied().max()
    }
}

/// Sum `fit_score` over every remaining ship for every `Unknown` cell.
pub fn compute_field(grid: &Grid, fleet: &Fleet) -> ProbabilityField {
    let mut scores = BTreeMap::new();
    for cell in grid.cells() {
        if grid.get(cell) != Some(CellState::Unknown) {
            continue;
        }
        let score: u32 = fleet
            .lengths()
            .iter()
            .map(|&len| fit_score(grid, len, cell))
            .sum();
        scores.insert(cell, score);
    }
    ProbabilityField {
        size: grid.size(),
        scores,
    }
}

/// Every cell reaching the maximal score. Ties are all kept.
pub fn select_best(field: &ProbabilityField) -> Vec<Cell> {
    best_of(field, field.scores.keys().copied())
}

/// Restrict `select_best` to `candidates`, which must be distinct.
/// Candidates missing from the field are ignored.
pub fn best_of<I>(field: &ProbabilityField, candidates: I) -> Vec<Cell>
where
    I: IntoIterator<Item = Cell>,
{
    let mut max = 0u32;
    let mut best = Vec::new();
    for cell in candidates {
        let Some(score) = field.get(cell) else {
            continue;
        };
        if score > max {
            max = score;
            best.clear();
            best.push(cell);
        } else if score == max {
            best.push(cell);
        }
    }
    best
}

/// Pick uniformly among `cells`.
pub fn choose_cell<R: Rng + ?Sized>(cells: &[Cell], rng: &mut R) -> Option<Cell> {
    if cells.is_empty() {
        return None;
    }
    Some(cells[rng.random_range(0..cells.len())])
}

/// Convenience wrapper: compute the field and pick one of its best cells.
pub fn compute_field_and_guess<R: Rng + ?Sized>(
    grid: &Grid,
    fleet: &Fleet,
    rng: &mut R,
) -> Option<Cell> {
    let field = compute_field(grid, fleet);
    choose_cell(&select_best(&field), rng)
}

impl fmt::Display for ProbabilityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.size {
            write!(f, " {:>3}", ColumnLabel(x))?;
        }
        writeln!(f)?;
        for y in 0..self.size {
            write!(f, "{:>2}|", y + 1)?;
            for x in 0..self.size {
                match self.get(Cell::new(x, y)) {
                    Some(score) => write!(f, " {:>3}", score)?,
                    None => write!(f, " {:>3}", '.')?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
