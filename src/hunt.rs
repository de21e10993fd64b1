//! Follow-up targeting while a hit ship is still afloat.

use alloc::vec::Vec;

use crate::{
    ai::{best_of, choose_cell, compute_field, select_best},
    grid::{Cell, CellState, Grid, ORTHOGONAL},
    ship::Fleet,
};
use rand::Rng;

/// Cells that could extend the ship through `hit`.
///
/// For each orthogonal direction: an unknown neighbour is a candidate; a hit
/// neighbour is walked past until the first unknown cell, which becomes the
/// candidate for that direction. Leaving the board or meeting water or a
/// sunk cell discards the direction. Each direction yields at most one cell,
/// so the candidates are distinct.
pub fn follow_up_candidates(grid: &Grid, hit: Cell) -> Vec<Cell> {
    let mut candidates = Vec::with_capacity(ORTHOGONAL.len());
    for &(dx, dy) in ORTHOGONAL.iter() {
        let mut current = hit;
        loop {
            let Some(next) = grid.offset(current, dx, dy) else {
                break;
            };
            match grid.get(next) {
                Some(CellState::Unknown) => {
                    candidates.push(next);
                    break;
                }
                Some(CellState::Hit) => current = next,
                _ => break,
            }
        }
    }
    candidates
}

/// Propose the next attack around `hit`, scoring candidates with the
/// probability field of the remaining fleet and breaking ties with `rng`.
/// Falls back to the whole-grid best cell when every direction is exhausted.
pub fn propose_follow_up<R: Rng + ?Sized>(
    grid: &Grid,
    fleet: &Fleet,
    hit: Cell,
    rng: &mut R,
) -> Option<Cell> {
    let field = compute_field(grid, fleet);
    let candidates = follow_up_candidates(grid, hit);
    let best = best_of(&field, candidates);
    if best.is_empty() {
        log::warn!("no follow-up around {}, falling back to full field", hit);
        return choose_cell(&select_best(&field), rng);
    }
    log::debug!("follow-up around {}: {} best candidate(s)", hit, best.len());
    choose_cell(&best, rng)
}
