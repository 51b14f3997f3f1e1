//! Merge tracking for a single tilt.
//!
//! A cell that received a merge during the current tilt must not receive a
//! second one, otherwise `[2, 2, 4]` would collapse into `8` in one move.
//! The table is keyed by physical cell and cleared once the tilt completes.

/// Per-cell "already merged this tilt" flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeTable {
    size: usize,
    flags: Vec<bool>,
}

impl MergeTable {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            flags: vec![false; size * size],
        }
    }

    pub fn is_merged(&self, col: usize, row: usize) -> bool {
        self.flags[row * self.size + col]
    }

    pub fn mark(&mut self, col: usize, row: usize) {
        self.flags[row * self.size + col] = true;
    }

    /// Number of cells marked since the last reset
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Clear every flag
    pub fn reset(&mut self) {
        self.flags.fill(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_reset() {
        let mut table = MergeTable::new(4);
        assert!(!table.is_merged(1, 2));

        table.mark(1, 2);
        table.mark(3, 3);
        assert!(table.is_merged(1, 2));
        assert!(!table.is_merged(2, 1));
        assert_eq!(table.count(), 2);

        table.reset();
        assert!(!table.is_merged(1, 2));
        assert_eq!(table.count(), 0);
    }
}
