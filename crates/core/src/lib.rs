//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 tile-merge rules, board storage and game
//! state. It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: same board and direction always give the same result
//! - **Testable**: unit tests for every rule next to the code
//! - **Portable**: usable from a replay driver, a renderer or a solver
//!
//! # Module Structure
//!
//! - [`board`]: square grid with a switchable viewing perspective
//! - [`orientation`]: logical/physical coordinate remapping per side
//! - [`game_state`]: score, max score and the tilt engine
//! - [`merge`]: per-tilt "already merged" tracking
//! - [`rules`]: end-of-game predicates
//! - [`rng`]: deterministic tile spawner
//! - [`snapshot`]: owned copies of the state for observers
//!
//! # Game Rules
//!
//! - Tilting slides every tile as far as it can toward one side.
//! - Two equal tiles that meet merge into one of twice the value; the new
//!   value is added to the score.
//! - A tile takes part in at most one merge per tilt; of three equal tiles in
//!   a line the two nearest the wall merge.
//! - The game is over when a tile reaches the winning value (2048 by default)
//!   or when no tilt could change the board. The max score is updated only
//!   at that moment.
//!
//! # Example
//!
//! ```
//! use twenty48_core::GameState;
//! use twenty48_types::{Side, Tile};
//!
//! let mut game = GameState::new(4);
//! game.add_tile(Tile::new(2, 0, 0));
//! game.add_tile(Tile::new(2, 3, 0));
//!
//! game.tilt(Side::East);
//!
//! assert_eq!(game.tile(3, 0).map(|t| t.value()), Some(4));
//! assert_eq!(game.score(), 4);
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod merge;
pub mod orientation;
pub mod rng;
pub mod rules;
pub mod snapshot;

pub use twenty48_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use merge::MergeTable;
pub use orientation::{to_logical, to_physical};
pub use rng::{SimpleRng, TileSpawner};
pub use rules::{at_least_one_move_exists, empty_space_exists, is_game_over, max_tile_exists};
pub use snapshot::{board_hash, GameSnapshot};
