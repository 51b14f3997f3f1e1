//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types used by the engine, the spawner
//! and the replay driver. Nothing here depends on board storage or I/O.
//!
//! # Coordinates
//!
//! Cells are addressed as `(col, row)`, both 0-based:
//!
//! - `(0, 0)` is the **lower-left** corner
//! - `row` grows toward [`Side::North`] (up)
//! - `col` grows toward [`Side::East`] (right)
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_SIZE` | 4 | Cells per side of a standard board |
//! | `MAX_PIECE` | 2048 | Winning tile value; reaching it ends the game |
//! | `SPAWN_FOUR_PERCENT` | 10 | Chance (in percent) that a spawned tile is a 4 |
//! | `INITIAL_TILES` | 2 | Tiles spawned on a fresh board |
//!
//! # Examples
//!
//! ```
//! use twenty48_types::{Side, Tile, MAX_PIECE};
//!
//! let side = Side::from_str("left").unwrap();
//! assert_eq!(side, Side::West);
//! assert_eq!(side.opposite(), Side::East);
//!
//! let tile = Tile::new(2, 0, 3);
//! assert_eq!(tile.value(), 2);
//! assert_eq!(tile.at(1, 3).col(), 1);
//!
//! assert_eq!(MAX_PIECE, 2048);
//! ```

use std::fmt;

/// Standard board edge length (4x4)
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Winning tile value
pub const MAX_PIECE: u32 = 2048;

/// Probability, in percent, that a spawned tile has value 4 instead of 2
pub const SPAWN_FOUR_PERCENT: u32 = 10;

/// Number of tiles placed on an empty board before the first move
pub const INITIAL_TILES: usize = 2;

/// A cell on the board
///
/// - `None`: empty
/// - `Some(v)`: holds a tile of value `v`
pub type Cell = Option<u32>;

/// The four directions a board can be tilted toward.
///
/// A side doubles as a viewing perspective: looking at the board "from"
/// a side makes that side the top edge, so every tilt can be computed as
/// a tilt toward north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    North,
    East,
    South,
    West,
}

impl Side {
    /// All sides in clockwise order starting at north
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// Parse a side from string (case-insensitive)
    ///
    /// Accepts compass names, screen directions and their initials.
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_types::Side;
    ///
    /// assert_eq!(Side::from_str("north"), Some(Side::North));
    /// assert_eq!(Side::from_str("D"), Some(Side::South));
    /// assert_eq!(Side::from_str("right"), Some(Side::East));
    /// assert_eq!(Side::from_str("diagonal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" | "up" | "u" => Some(Side::North),
            "east" | "e" | "right" | "r" => Some(Side::East),
            "south" | "s" | "down" | "d" => Some(Side::South),
            "west" | "w" | "left" | "l" => Some(Side::West),
            _ => None,
        }
    }

    /// Convert to lowercase compass name
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::North => "north",
            Side::East => "east",
            Side::South => "south",
            Side::West => "west",
        }
    }

    /// The side across the board
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_types::Side;
    ///
    /// assert_eq!(Side::North.opposite(), Side::South);
    /// assert_eq!(Side::West.opposite(), Side::East);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Side::North => Side::South,
            Side::East => Side::West,
            Side::South => Side::North,
            Side::West => Side::East,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numbered tile at a physical board position.
///
/// Tiles are values, not handles: moving a tile produces a new `Tile`
/// (see [`Tile::at`]); the board owns what is stored in its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    value: u32,
    col: usize,
    row: usize,
}

impl Tile {
    /// Create a tile of `value` at physical `(col, row)`
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero; zero is the wire encoding of an empty cell.
    pub fn new(value: u32, col: usize, row: usize) -> Self {
        assert!(value > 0, "tile value must be positive");
        Self { value, col, row }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Same value, different position
    pub fn at(&self, col: usize, row: usize) -> Self {
        Self { col, row, ..*self }
    }

    /// The tile produced when this tile merges with an equal one
    ///
    /// # Panics
    ///
    /// Panics if the doubled value does not fit in a `u32`.
    pub fn doubled(&self) -> Self {
        let value = match self.value.checked_mul(2) {
            Some(value) => value,
            None => panic!("tile value {} overflows when doubled", self.value),
        };
        Self { value, ..*self }
    }
}

/// Summary of one completed tilt.
///
/// Engine-internal; the replay driver maps it onto its `step` log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiltEvent {
    pub side: Side,
    /// At least one tile changed cell
    pub moved: bool,
    /// Number of merges performed
    pub merges: u32,
    /// Sum of the values created by merging (added to the score)
    pub score_delta: u32,
}

impl TiltEvent {
    /// A tilt in which nothing moved
    pub fn unchanged(side: Side) -> Self {
        Self {
            side,
            moved: false,
            merges: 0,
            score_delta: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_constants() {
        assert_eq!(DEFAULT_BOARD_SIZE, 4);
        assert_eq!(MAX_PIECE, 2048);
        assert!(MAX_PIECE.is_power_of_two());
        assert_eq!(SPAWN_FOUR_PERCENT, 10);
        assert_eq!(INITIAL_TILES, 2);
    }

    #[test]
    fn test_side_parse_roundtrip() {
        for side in Side::ALL {
            assert_eq!(Side::from_str(side.as_str()), Some(side));
            assert_eq!(Side::from_str(&side.as_str().to_uppercase()), Some(side));
        }
    }

    #[test]
    fn test_side_screen_aliases() {
        assert_eq!(Side::from_str("up"), Some(Side::North));
        assert_eq!(Side::from_str("down"), Some(Side::South));
        assert_eq!(Side::from_str("l"), Some(Side::West));
        assert_eq!(Side::from_str("R"), Some(Side::East));
        assert_eq!(Side::from_str(""), None);
    }

    #[test]
    fn test_side_opposite_is_involution() {
        for side in Side::ALL {
            assert_ne!(side.opposite(), side);
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    #[test]
    fn test_default_side_is_north() {
        assert_eq!(Side::default(), Side::North);
    }

    #[test]
    fn test_tile_at_keeps_value() {
        let tile = Tile::new(8, 1, 2);
        let moved = tile.at(3, 0);
        assert_eq!(moved.value(), 8);
        assert_eq!((moved.col(), moved.row()), (3, 0));
    }

    #[test]
    fn test_tile_doubled_keeps_position() {
        let tile = Tile::new(16, 2, 2).doubled();
        assert_eq!(tile.value(), 32);
        assert_eq!((tile.col(), tile.row()), (2, 2));
    }

    #[test]
    #[should_panic(expected = "overflows when doubled")]
    fn test_doubling_largest_tile_panics() {
        let _ = Tile::new(1 << 31, 0, 0).doubled();
    }

    #[test]
    #[should_panic(expected = "tile value must be positive")]
    fn test_zero_tile_rejected() {
        let _ = Tile::new(0, 0, 0);
    }
}
