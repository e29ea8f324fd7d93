//! Detects when the automaton revisits a recent generation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::Cell;

/// How many past generations are remembered.
pub const HISTORY_LEN: usize = 10;

/// Ring of hashes of the most recent generations.
#[derive(Debug, Clone, Default)]
pub struct History {
    hashes: [u64; HISTORY_LEN],
    count: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hash_cells(cells: &[Cell]) -> u64 {
        let mut hasher = DefaultHasher::new();
        cells.hash(&mut hasher);
        hasher.finish()
    }

    /// Records `cells` and reports whether they match one of the remembered generations.
    pub fn observe(&mut self, cells: &[Cell]) -> bool {
        let hash = Self::hash_cells(cells);
        let remembered = self.count.min(HISTORY_LEN);
        if self.hashes[..remembered].contains(&hash) {
            return true;
        }
        self.hashes[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    pub fn clear(&mut self) {
        self.hashes = [0; HISTORY_LEN];
        self.count = 0;
    }
}
