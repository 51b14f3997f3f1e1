//! Board module - manages the game grid
//!
//! The board is an `n x n` grid where each cell is empty or holds one tile value.
//! Uses a flat vector (row-major, `row * size + col`) allocated once per board.
//! Coordinates: `(col, row)` with `(0, 0)` at the lower-left corner.
//!
//! All `(col, row)` arguments except those of [`Board::get`] and
//! [`Board::add_tile`] are *logical*: they are interpreted through the
//! current viewing perspective (see [`crate::orientation`]). Outside of a
//! tilt the perspective is always north, so logical and physical agree.

use crate::orientation::{to_logical, to_physical};
use crate::types::{Cell, Side, Tile};

/// The game board - `size` columns x `size` rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
    viewing: Side,
}

impl Board {
    /// Create a new empty board
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![None; size * size],
            viewing: Side::North,
        }
    }

    /// Create from rows listed top to bottom; `0` marks an empty cell
    ///
    /// `rows[0]` is the north edge, matching the text layout of a printed board.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or not square.
    pub fn from_rows(rows: &[Vec<u32>]) -> Self {
        let size = rows.len();
        let mut board = Self::new(size);
        for (i, values) in rows.iter().enumerate() {
            assert_eq!(values.len(), size, "board rows must form a square");
            let row = size - 1 - i;
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    board.cells[row * size + col] = Some(value);
                }
            }
        }
        board
    }

    /// Convert to rows listed top to bottom, `0` for empty cells
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.size)
            .rev()
            .map(|row| {
                let start = row * self.size;
                self.cells[start..start + self.size]
                    .iter()
                    .map(|cell| cell.unwrap_or(0))
                    .collect()
            })
            .collect()
    }

    /// Number of cells on one side
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current viewing perspective
    pub fn viewing(&self) -> Side {
        self.viewing
    }

    /// Interpret subsequent logical coordinates as seen from `side`
    ///
    /// Storage is untouched.
    pub fn set_viewing_perspective(&mut self, side: Side) {
        self.viewing = side;
    }

    /// Back to the identity mapping
    pub fn reset_perspective(&mut self) {
        self.viewing = Side::North;
    }

    /// Physical cell behind logical `(col, row)`
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `[0, size)`.
    pub fn physical(&self, col: usize, row: usize) -> (usize, usize) {
        self.check_bounds(col, row);
        to_physical(self.viewing, col, row, self.size)
    }

    /// Logical coordinates of physical cell `(col, row)` under the current perspective
    pub fn logical(&self, col: usize, row: usize) -> (usize, usize) {
        self.check_bounds(col, row);
        to_logical(self.viewing, col, row, self.size)
    }

    #[inline(always)]
    fn check_bounds(&self, col: usize, row: usize) {
        assert!(
            col < self.size && row < self.size,
            "cell ({}, {}) out of bounds for {}x{} board",
            col,
            row,
            self.size,
            self.size
        );
    }

    #[inline(always)]
    fn index(&self, col: usize, row: usize) -> usize {
        let (pc, pr) = self.physical(col, row);
        pr * self.size + pc
    }

    /// Get physical cell at `(col, row)`, ignoring the viewing perspective
    /// Returns None if out of bounds
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= self.size || row >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// Value at logical `(col, row)`
    ///
    /// # Panics
    ///
    /// Panics if out of bounds.
    pub fn value(&self, col: usize, row: usize) -> Cell {
        self.cells[self.index(col, row)]
    }

    /// Tile at logical `(col, row)`; the returned tile carries physical coordinates
    ///
    /// # Panics
    ///
    /// Panics if out of bounds.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        let (pc, pr) = self.physical(col, row);
        self.cells[pr * self.size + pc].map(|value| Tile::new(value, pc, pr))
    }

    /// Place `tile` at its own (physical) position
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds or already occupied.
    pub fn add_tile(&mut self, tile: Tile) {
        let (col, row) = (tile.col(), tile.row());
        self.check_bounds(col, row);
        let idx = row * self.size + col;
        assert!(
            self.cells[idx].is_none(),
            "cell ({}, {}) is already occupied",
            col,
            row
        );
        self.cells[idx] = Some(tile.value());
    }

    /// Move `tile` to logical `(col, row)`
    ///
    /// If the destination already holds a tile of the same value the two
    /// merge into one of twice the value and this returns `true`.
    /// Moving a tile onto its own cell is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `tile` is not on the board, or if the destination holds a
    /// tile of a different value.
    pub fn move_tile(&mut self, col: usize, row: usize, tile: Tile) -> bool {
        self.check_bounds(tile.col(), tile.row());
        let src = tile.row() * self.size + tile.col();
        assert_eq!(
            self.cells[src],
            Some(tile.value()),
            "tile {:?} is not on the board",
            tile
        );

        let dst = self.index(col, row);
        if dst == src {
            return false;
        }

        let existing = self.cells[dst];

        let merged = match existing {
            None => {
                self.cells[dst] = Some(tile.value());
                false
            }
            Some(value) if value == tile.value() => {
                self.cells[dst] = Some(tile.doubled().value());
                true
            }
            Some(value) => panic!(
                "cannot move {} onto a tile of value {}",
                tile.value(),
                value
            ),
        };
        self.cells[src] = None;
        merged
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    /// Physical `(col, row)` of the `n`-th empty cell in storage order
    pub fn nth_empty(&self, n: usize) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .nth(n)
            .map(|(idx, _)| (idx % self.size, idx / self.size))
    }

    /// Iterate over all tiles in storage order (physical coordinates)
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|value| Tile::new(value, idx % self.size, idx / self.size))
        })
    }

    /// Largest tile value on the board, if any
    pub fn highest_value(&self) -> Option<u32> {
        self.cells.iter().flatten().copied().max()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_BOARD_SIZE)
    }
}
