//! Board and fleet configuration.

use alloc::vec::Vec;

use crate::common::AdvisorError;

/// Default side length of the square board.
pub const BOARD_SIZE: usize = 10;

/// Largest accepted board side length.
pub const MAX_BOARD_SIZE: usize = 100;

/// Default fleet: four 1-length, three 2-length, two 3-length and one
/// 4-length ship, 20 occupied cells in total.
pub const DEFAULT_FLEET: [usize; 10] = [1, 1, 1, 1, 2, 2, 2, 3, 3, 4];

/// Whether ships may touch each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdjacencyRule {
    /// Ships never touch, not even diagonally. Cells around a hit or a sunk
    /// ship are ruled out as water.
    #[default]
    NoTouch,
    /// Ships may touch; no cells are ruled out by adjacency.
    Touching,
}

impl AdjacencyRule {
    pub fn excludes_neighbors(self) -> bool {
        matches!(self, AdjacencyRule::NoTouch)
    }
}

/// Everything the engine needs at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvisorConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
    pub adjacency: AdjacencyRule,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
            adjacency: AdjacencyRule::NoTouch,
        }
    }
}

impl AdvisorConfig {
    pub fn new(size: usize, fleet: Vec<usize>) -> Self {
        Self {
            size,
            fleet,
            adjacency: AdjacencyRule::NoTouch,
        }
    }

    pub fn with_adjacency(mut self, adjacency: AdjacencyRule) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Total number of cells occupied by the configured fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().sum()
    }

    /// Reject boards and fleets the engine cannot reason about.
    pub fn validate(&self) -> Result<(), AdvisorError> {
        if self.size == 0 {
            return Err(AdvisorError::InvalidConfig("board size must be positive"));
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(AdvisorError::InvalidConfig("board size exceeds 100"));
        }
        if self.fleet.is_empty() {
            return Err(AdvisorError::InvalidConfig("fleet must not be empty"));
        }
        if self.fleet.iter().any(|&len| len == 0) {
            return Err(AdvisorError::InvalidConfig("ship length must be positive"));
        }
        if self.fleet.iter().any(|&len| len > self.size) {
            return Err(AdvisorError::InvalidConfig(
                "ship length exceeds board size",
            ));
        }
        let area = self
            .size
            .checked_mul(self.size)
            .ok_or(AdvisorError::InvalidConfig("board size overflows"))?;
        let ship_cells = self
            .fleet
            .iter()
            .try_fold(0usize, |acc, &len| acc.checked_add(len))
            .ok_or(AdvisorError::InvalidConfig("fleet does not fit on board"))?;
        if ship_cells > area {
            return Err(AdvisorError::InvalidConfig("fleet does not fit on board"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn default_config_is_valid() {
        let config = AdvisorConfig::default();
        assert_eq!(config.size, 10);
        assert_eq!(config.total_ship_cells(), 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_configs() {
        assert!(AdvisorConfig::new(0, vec![1]).validate().is_err());
        assert!(AdvisorConfig::new(4, vec![]).validate().is_err());
        assert!(AdvisorConfig::new(4, vec![0, 2]).validate().is_err());
        assert!(AdvisorConfig::new(4, vec![5]).validate().is_err());
        assert!(AdvisorConfig::new(2, vec![2, 2, 1]).validate().is_err());
        assert!(AdvisorConfig::new(MAX_BOARD_SIZE + 1, vec![1]).validate().is_err());
        assert!(AdvisorConfig::new(1usize << 32, vec![1]).validate().is_err());
        assert!(AdvisorConfig::new(usize::MAX, vec![1]).validate().is_err());
    }

    #[test]
    fn largest_board_is_accepted() {
        assert!(AdvisorConfig::new(MAX_BOARD_SIZE, vec![1, 2, 3])
            .validate()
            .is_ok());
    }
}
