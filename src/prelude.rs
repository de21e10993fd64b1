//! Commonly used types and utilities for ease of import.

pub use crate::{
    compute_field, fit_score, play_out, select_best, AdvisorConfig, AdvisorError, Cell,
    CellState, EngineState, Fleet, Grid, Outcome, Referee, TargetingEngine,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, shell::run_session, shell::ShellOptions};
