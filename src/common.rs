//! Common types for the advisor: turn outcomes and engine errors.

/// Real-world result of attacking a cell, as reported by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The attack landed in water.
    Miss,
    /// The attack hit a ship that is still afloat.
    Hit,
    /// The attack sank a ship.
    Sunk,
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorError {
    /// Coordinate lies outside the board.
    OutOfBounds { x: usize, y: usize },
    /// Cell is already known to be water or part of a sunk ship.
    AlreadyResolved { x: usize, y: usize },
    /// A miss or a second hit was reported for a cell already recorded as hit.
    ConflictingOutcome { x: usize, y: usize },
    /// A sunk ship's size matches no ship still afloat.
    NoMatchingShip { size: usize },
    /// Every ship is sunk; the game is over.
    GameFinished,
    /// No unresolved cell is left to attack.
    NoTarget,
    /// Board size or fleet is unusable.
    InvalidConfig(&'static str),
    /// Unable to lay out a hidden fleet on the board.
    PlacementFailed,
}

impl core::fmt::Display for AdvisorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AdvisorError::OutOfBounds { x, y } => {
                write!(f, "Cell ({}, {}) is outside the board", x, y)
            }
            AdvisorError::AlreadyResolved { x, y } => {
                write!(f, "Cell ({}, {}) is already resolved", x, y)
            }
            AdvisorError::ConflictingOutcome { x, y } => {
                write!(f, "Cell ({}, {}) is already recorded as a hit", x, y)
            }
            AdvisorError::NoMatchingShip { size } => {
                write!(f, "No remaining ship has length {}", size)
            }
            AdvisorError::GameFinished => write!(f, "All ships are already sunk"),
            AdvisorError::NoTarget => write!(f, "No unresolved cell left to attack"),
            AdvisorError::InvalidConfig(reason) => write!(f, "Invalid configuration: {}", reason),
            AdvisorError::PlacementFailed => write!(f, "Unable to place fleet"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AdvisorError {}
