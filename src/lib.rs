#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod common;
mod config;
mod game;
pub mod grid;
mod hunt;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod referee;
#[cfg(feature = "std")]
pub mod shell;
mod ship;
pub mod sink;

pub use ai::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::{Cell, CellState, ColumnLabel, Grid};
pub use hunt::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use referee::*;
pub use ship::*;
