//! Replay module - headless driver for the tile-merge engine
//!
//! Plays a move list against a seeded game and records every step as
//! line-delimited JSON, so runs can be diffed, hashed and re-checked.
//!
//! # Log Records
//!
//! - **start**: seed, winning value, opening board and the tiles spawned on it
//! - **step**: the tilt summary, the spawned tile (if any), board, score, game-over flag
//! - **summary**: moves requested/applied, final score, max score, highest tile
//!
//! # Environment Variables
//!
//! - `TWENTY48_SIZE`: board edge length (default: 4)
//! - `TWENTY48_SEED`: spawner seed (default: 1)
//! - `TWENTY48_TARGET`: winning tile value (default: 2048)
//! - `TWENTY48_INITIAL_TILES`: tiles on the opening board (default: 2)
//! - `TWENTY48_LOG_PATH`: append the JSONL log to this file
//! - `TWENTY48_KEEP_PLAYING`: set to "1" or "true" to keep moving after game over
//!
//! # Example Log
//!
//! ```text
//! {"type":"start","seq":1,"ts":1700000000000,"seed":1,"target":2048,"board":{...},"spawned":[...]}
//! {"type":"step","seq":2,"ts":1700000000001,"tilt":{"side":"west","moved":true,"merges":0,"score_delta":0},...}
//! {"type":"summary","seq":3,"ts":1700000000001,"moves_requested":1,"moves_applied":1,...}
//! ```

pub mod config;
pub mod protocol;
pub mod runner;

pub use twenty48_core as core;
pub use twenty48_types as types;

pub use config::ReplayConfig;
pub use protocol::{parse_moves, parse_record, LogRecord};
pub use runner::{Replay, ReplaySummary};
