//! Protocol module - move parsing and JSONL log records
//!
//! Every line of a replay log is one JSON object with a `type` tag:
//! `start`, `step` or `summary`. Records carry a sequence number and a
//! timestamp in milliseconds.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::core::GameSnapshot;
use crate::types::{Side, Tile, TiltEvent};

// ============== Moves ==============

/// Parse a move list
///
/// Tokens are separated by whitespace or commas. A token is either a full
/// direction name (`north`, `left`, ...) or a run of single-letter moves
/// (`nesw`, `uldr`).
pub fn parse_moves(input: &str) -> Result<Vec<Side>> {
    let mut moves = Vec::new();
    for token in input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        if let Some(side) = Side::from_str(token) {
            moves.push(side);
            continue;
        }
        for ch in token.chars() {
            let mut buf = [0u8; 4];
            match Side::from_str(ch.encode_utf8(&mut buf)) {
                Some(side) => moves.push(side),
                None => bail!("unknown move '{}' in '{}'", ch, token),
            }
        }
    }
    Ok(moves)
}

/// Lowercase side name on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideLower {
    #[serde(rename = "north")]
    North,
    #[serde(rename = "east")]
    East,
    #[serde(rename = "south")]
    South,
    #[serde(rename = "west")]
    West,
}

impl From<Side> for SideLower {
    fn from(value: Side) -> Self {
        match value {
            Side::North => SideLower::North,
            Side::East => SideLower::East,
            Side::South => SideLower::South,
            Side::West => SideLower::West,
        }
    }
}

impl From<SideLower> for Side {
    fn from(value: SideLower) -> Self {
        match value {
            SideLower::North => Side::North,
            SideLower::East => Side::East,
            SideLower::South => Side::South,
            SideLower::West => Side::West,
        }
    }
}

// ============== Log Records ==============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardInfo {
    pub size: usize,
    /// Rows listed top to bottom, `0` for empty cells
    pub rows: Vec<Vec<u32>>,
    pub hash: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnInfo {
    pub col: usize,
    pub row: usize,
    pub value: u32,
}

impl From<Tile> for SpawnInfo {
    fn from(value: Tile) -> Self {
        Self {
            col: value.col(),
            row: value.row(),
            value: value.value(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TiltInfo {
    pub side: SideLower,
    pub moved: bool,
    pub merges: u32,
    pub score_delta: u32,
}

impl From<TiltEvent> for TiltInfo {
    fn from(value: TiltEvent) -> Self {
        Self {
            side: value.side.into(),
            moved: value.moved,
            merges: value.merges,
            score_delta: value.score_delta,
        }
    }
}

/// First record of a replay: configuration and opening board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartRecord {
    pub seq: u64,
    pub ts: u64,
    pub seed: u32,
    pub target: u32,
    pub board: BoardInfo,
    pub spawned: Vec<SpawnInfo>,
}

/// One applied move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub seq: u64,
    pub ts: u64,
    pub tilt: TiltInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub spawned: Option<SpawnInfo>,
    pub board: BoardInfo,
    pub score: u32,
    pub max_score: u32,
    pub game_over: bool,
}

/// Last record of a replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub seq: u64,
    pub ts: u64,
    pub moves_requested: usize,
    pub moves_applied: usize,
    pub score: u32,
    pub max_score: u32,
    pub highest_tile: u32,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LogRecord {
    #[serde(rename = "start")]
    Start(StartRecord),
    #[serde(rename = "step")]
    Step(StepRecord),
    #[serde(rename = "summary")]
    Summary(SummaryRecord),
}

impl From<&GameSnapshot> for BoardInfo {
    fn from(value: &GameSnapshot) -> Self {
        Self {
            size: value.size,
            rows: value.rows.clone(),
            hash: value.board_hash,
        }
    }
}

/// Parse one log line
pub fn parse_record(line: &str) -> Result<LogRecord, serde_json::Error> {
    serde_json::from_str(line)
}

/// Get current timestamp in milliseconds
pub(crate) fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
