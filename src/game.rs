use crate::{
    ai,
    common::{AdvisorError, Outcome},
    config::{AdjacencyRule, AdvisorConfig},
    grid::{Cell, CellState, Grid},
    hunt,
    ship::Fleet,
    sink,
};
use rand::Rng;

/// Where the engine is in its targeting cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineState {
    /// No hit is pending; targets come from the probability field.
    Scanning,
    /// A hit ship is still afloat; targets extend the line through it.
    Hunting,
    /// Every ship is sunk.
    Finished,
}

/// Targeting engine owning the opponent grid and the remaining fleet.
#[derive(Debug, Clone)]
pub struct TargetingEngine {
    grid: Grid,
    fleet: Fleet,
    adjacency: AdjacencyRule,
    active_hunt: Option<Cell>,
    state: EngineState,
    turns: usize,
    sunk_cells: usize,
}

impl TargetingEngine {
    /// Create an engine for the given board and fleet.
    pub fn new(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Engine for the standard 10×10 board and fleet.
    pub fn standard() -> Self {
        Self::from_config(AdvisorConfig::default())
    }

    fn from_config(config: AdvisorConfig) -> Self {
        Self {
            grid: Grid::new(config.size),
            fleet: Fleet::new(config.fleet),
            adjacency: config.adjacency,
            active_hunt: None,
            state: EngineState::Scanning,
            turns: 0,
            sunk_cells: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Cell of the latest unresolved hit, if any.
    pub fn active_hunt(&self) -> Option<Cell> {
        self.active_hunt
    }

    pub fn is_finished(&self) -> bool {
        self.state == EngineState::Finished
    }

    /// Number of results applied so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Cells of every ship sunk so far.
    pub fn sunk_cells(&self) -> usize {
        self.sunk_cells
    }

    /// Current heat map over unresolved cells.
    pub fn probability_field(&self) -> ai::ProbabilityField {
        ai::compute_field(&self.grid, &self.fleet)
    }

    /// Recommend the next cell to attack.
    pub fn next_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Cell, AdvisorError> {
        let target = match (self.state, self.active_hunt) {
            (EngineState::Finished, _) => return Err(AdvisorError::GameFinished),
            (EngineState::Hunting, Some(hit)) => {
                hunt::propose_follow_up(&self.grid, &self.fleet, hit, rng)
            }
            _ => {
                let field = ai::compute_field(&self.grid, &self.fleet);
                let best = ai::select_best(&field);
                log::debug!(
                    "scanning: best score {:?} shared by {} cell(s)",
                    field.max_score(),
                    best.len()
                );
                ai::choose_cell(&best, rng)
            }
        };
        target.ok_or(AdvisorError::NoTarget)
    }

    /// Record the real-world result of attacking `cell`.
    ///
    /// Rejected calls leave the engine untouched.
    pub fn apply_result(&mut self, cell: Cell, outcome: Outcome) -> Result<(), AdvisorError> {
        if self.is_finished() {
            return Err(AdvisorError::GameFinished);
        }
        let current = self.grid.get(cell).ok_or(AdvisorError::OutOfBounds {
            x: cell.x,
            y: cell.y,
        })?;
        match (current, outcome) {
            (CellState::Water | CellState::Sunk, _) => {
                return Err(AdvisorError::AlreadyResolved {
                    x: cell.x,
                    y: cell.y,
                })
            }
            (CellState::Hit, Outcome::Miss | Outcome::Hit) => {
                return Err(AdvisorError::ConflictingOutcome {
                    x: cell.x,
                    y: cell.y,
                })
            }
            _ => {}
        }

        match outcome {
            Outcome::Miss => {
                self.grid.set(cell, CellState::Water)?;
            }
            Outcome::Hit => {
                self.grid.set(cell, CellState::Hit)?;
                self.exclude_diagonals(cell);
                self.active_hunt = Some(cell);
                self.state = EngineState::Hunting;
            }
            Outcome::Sunk => {
                let size = sink::measure_component(&self.grid, cell);
                if !self.fleet.contains(size) {
                    return Err(AdvisorError::NoMatchingShip { size });
                }
                self.grid.set(cell, CellState::Hit)?;
                self.exclude_diagonals(cell);
                let resolved =
                    sink::resolve_sink(&mut self.grid, cell, self.adjacency.excludes_neighbors());
                debug_assert_eq!(resolved, size);
                self.fleet.remove(size);
                self.sunk_cells += size;
                // Another ship may already be hit when ships are allowed to
                // touch; keep hunting it instead of scanning.
                self.active_hunt = self
                    .grid
                    .cells()
                    .find(|&c| self.grid.get(c) == Some(CellState::Hit));
                if self.fleet.is_empty() {
                    self.active_hunt = None;
                }
                self.state = if self.fleet.is_empty() {
                    EngineState::Finished
                } else if self.active_hunt.is_some() {
                    EngineState::Hunting
                } else {
                    EngineState::Scanning
                };
                log::info!(
                    "sunk ship of length {} at {}, {} ship(s) left",
                    size,
                    cell,
                    self.fleet.len()
                );
            }
        }
        self.turns += 1;
        Ok(())
    }

    fn exclude_diagonals(&mut self, cell: Cell) {
        if self.adjacency.excludes_neighbors() {
            sink::exclude_diagonals(&mut self.grid, cell);
        }
    }
}

impl Default for TargetingEngine {
    fn default() -> Self {
        Self::standard()
    }
}
