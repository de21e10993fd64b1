//! Hidden opponent fleet used for self-play and simulations.

use alloc::vec;
use alloc::vec::Vec;

use crate::{
    common::{AdvisorError, Outcome},
    config::{AdjacencyRule, AdvisorConfig},
    game::TargetingEngine,
    grid::{Cell, Grid},
};
use rand::Rng;

/// Attempts per ship before the whole layout is restarted.
const PLACEMENT_ATTEMPTS: usize = 100;
/// Full layouts tried before giving up.
const LAYOUT_ATTEMPTS: usize = 50;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PlacedShip {
    cells: Vec<Cell>,
    hits: usize,
}

impl PlacedShip {
    fn is_sunk(&self) -> bool {
        self.hits == self.cells.len()
    }
}

/// Opponent board: knows where every ship is and answers attacks.
#[derive(Debug, Clone)]
pub struct Referee {
    bounds: Grid,
    adjacency: AdjacencyRule,
    ships: Vec<PlacedShip>,
    occupancy: Vec<Option<usize>>,
    attacked: Vec<bool>,
}

impl Referee {
    /// Empty board of `size` with no ships.
    pub fn new(size: usize, adjacency: AdjacencyRule) -> Self {
        Self {
            bounds: Grid::new(size),
            adjacency,
            ships: Vec::new(),
            occupancy: vec![None; size * size],
            attacked: vec![false; size * size],
        }
    }

    /// Lay out the configured fleet at random, longest ships first.
    pub fn random<R: Rng + ?Sized>(
        config: &AdvisorConfig,
        rng: &mut R,
    ) -> Result<Self, AdvisorError> {
        config.validate()?;
        let mut lengths = config.fleet.clone();
        lengths.sort_unstable_by(|a, b| b.cmp(a));

        'layout: for _ in 0..LAYOUT_ATTEMPTS {
            let mut referee = Referee::new(config.size, config.adjacency);
            for &len in lengths.iter() {
                let Some((origin, orient)) = referee.random_placement(rng, len) else {
                    continue 'layout;
                };
                referee.place(origin, len, orient)?;
            }
            return Ok(referee);
        }
        Err(AdvisorError::PlacementFailed)
    }

    pub fn size(&self) -> usize {
        self.bounds.size()
    }

    /// Place a ship of `length` starting at `origin`, extending right or down.
    pub fn place(
        &mut self,
        origin: Cell,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), AdvisorError> {
        let cells = self
            .ship_cells(origin, length, orientation)
            .ok_or(AdvisorError::OutOfBounds {
                x: origin.x,
                y: origin.y,
            })?;
        if !self.is_free(&cells) {
            return Err(AdvisorError::PlacementFailed);
        }
        let id = self.ships.len();
        for c in cells.iter() {
            let idx = self.index(*c);
            self.occupancy[idx] = Some(id);
        }
        self.ships.push(PlacedShip { cells, hits: 0 });
        Ok(())
    }

    /// Returns a random legal (origin, orientation) for a ship of `length`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Option<(Cell, Orientation)> {
        let size = self.size();
        if length == 0 || length > size {
            return None;
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orient {
                Orientation::Horizontal => (size - length, size - 1),
                Orientation::Vertical => (size - 1, size - length),
            };
            let origin = Cell::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
            if let Some(cells) = self.ship_cells(origin, length, orient) {
                if self.is_free(&cells) {
                    return Some((origin, orient));
                }
            }
        }
        None
    }

    /// Answer an attack on `cell`.
    pub fn answer(&mut self, cell: Cell) -> Result<Outcome, AdvisorError> {
        if !self.bounds.contains(cell) {
            return Err(AdvisorError::OutOfBounds {
                x: cell.x,
                y: cell.y,
            });
        }
        let idx = self.index(cell);
        if self.attacked[idx] {
            return Err(AdvisorError::AlreadyResolved {
                x: cell.x,
                y: cell.y,
            });
        }
        self.attacked[idx] = true;
        match self.occupancy[idx] {
            None => Ok(Outcome::Miss),
            Some(id) => {
                let ship = &mut self.ships[id];
                ship.hits += 1;
                if ship.is_sunk() {
                    Ok(Outcome::Sunk)
                } else {
                    Ok(Outcome::Hit)
                }
            }
        }
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(PlacedShip::is_sunk)
    }

    /// Whether `cell` holds a ship segment.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.bounds.contains(cell) && self.occupancy[self.index(cell)].is_some()
    }

    /// Lengths of the placed ships, in placement order.
    pub fn ship_lengths(&self) -> Vec<usize> {
        self.ships.iter().map(|s| s.cells.len()).collect()
    }

    fn ship_cells(&self, origin: Cell, length: usize, orientation: Orientation) -> Option<Vec<Cell>> {
        (0..length as isize)
            .map(|k| match orientation {
                Orientation::Horizontal => self.bounds.offset(origin, k, 0),
                Orientation::Vertical => self.bounds.offset(origin, 0, k),
            })
            .collect()
    }

    fn is_free(&self, cells: &[Cell]) -> bool {
        cells.iter().all(|&c| {
            if self.is_occupied(c) {
                return false;
            }
            match self.adjacency {
                AdjacencyRule::Touching => true,
                AdjacencyRule::NoTouch => self
                    .bounds
                    .neighbors(c)
                    .chain(self.bounds.diagonals(c))
                    .all(|n| !self.is_occupied(n)),
            }
        })
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.y * self.size() + cell.x
    }
}

/// Let `engine` play against `referee` until every ship is sunk.
/// Returns the number of turns taken.
pub fn play_out<R: Rng + ?Sized>(
    engine: &mut TargetingEngine,
    referee: &mut Referee,
    rng: &mut R,
) -> Result<usize, AdvisorError> {
    let limit = referee.size() * referee.size();
    while !engine.is_finished() {
        if engine.turns() >= limit {
            return Err(AdvisorError::NoTarget);
        }
        let target = engine.next_target(rng)?;
        let outcome = referee.answer(target)?;
        log::debug!("turn {}: {} -> {:?}", engine.turns() + 1, target, outcome);
        engine.apply_result(target, outcome)?;
    }
    Ok(engine.turns())
}
