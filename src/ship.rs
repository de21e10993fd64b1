//! Remaining enemy fleet, tracked as a multiset of ship lengths.

use alloc::vec::Vec;

/// Ship lengths still afloat. Order is kept, duplicates allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    lengths: Vec<usize>,
}

impl Fleet {
    pub fn new(lengths: Vec<usize>) -> Self {
        Self { lengths }
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Returns `true` when every ship has been sunk.
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Total number of cells still occupied by afloat ships.
    pub fn total_cells(&self) -> usize {
        self.lengths.iter().sum()
    }

    pub fn contains(&self, length: usize) -> bool {
        self.lengths.contains(&length)
    }

    /// Remove the first ship of `length`. Returns `false` if none is afloat.
    pub fn remove(&mut self, length: usize) -> bool {
        match self.lengths.iter().position(|&l| l == length) {
            Some(idx) => {
                self.lengths.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl From<&[usize]> for Fleet {
    fn from(lengths: &[usize]) -> Self {
        Self::new(lengths.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn remove_takes_first_match_only() {
        let mut fleet = Fleet::new(vec![1, 2, 2, 3]);
        assert!(fleet.remove(2));
        assert_eq!(fleet.lengths(), &[1, 2, 3]);
        assert!(!fleet.remove(4));
        assert_eq!(fleet.total_cells(), 6);
    }
}
