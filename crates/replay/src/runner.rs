//! Headless replay driver.
//!
//! Plays a fixed move list against a seeded game: each move tilts the board
//! and, if anything moved, spawns one new tile. Progress is written as
//! line-delimited JSON to any `Write` sink.

use std::io::Write;

use anyhow::{Context, Result};

use crate::config::ReplayConfig;
use crate::core::{GameState, TileSpawner};
use crate::protocol::{
    current_timestamp_ms, BoardInfo, LogRecord, SpawnInfo, StartRecord, StepRecord,
    SummaryRecord, TiltInfo,
};
use crate::types::{Side, TiltEvent};

/// Result of a full replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub moves_requested: usize,
    pub moves_applied: usize,
    pub score: u32,
    pub max_score: u32,
    pub highest_tile: u32,
    pub game_over: bool,
}

pub struct Replay {
    config: ReplayConfig,
    game: GameState,
    spawner: TileSpawner,
    opening: Vec<SpawnInfo>,
    seq: u64,
    buf: Vec<u8>,
}

impl Replay {
    /// Validate `config`, then build the game and place the opening tiles
    pub fn new(config: ReplayConfig) -> Result<Self> {
        config.validate().context("invalid replay configuration")?;

        let mut game = GameState::with_max_piece(config.size, config.max_piece);
        let mut spawner = TileSpawner::new(config.seed);
        let mut opening = Vec::with_capacity(config.initial_tiles);
        for _ in 0..config.initial_tiles {
            // validate() guarantees room for every opening tile
            if let Some(tile) = spawner.spawn(game.board()) {
                game.add_tile(tile);
                opening.push(SpawnInfo::from(tile));
            }
        }

        Ok(Self {
            config,
            game,
            spawner,
            opening,
            seq: 0,
            buf: Vec::with_capacity(512),
        })
    }

    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Apply one move and log it
    ///
    /// A tile is spawned only when the tilt moved something.
    pub fn step<W: Write>(&mut self, side: Side, log: &mut W) -> Result<StepRecord> {
        self.game.tilt(side);
        let event = self
            .game
            .take_last_event()
            .unwrap_or_else(|| TiltEvent::unchanged(side));

        let spawned = if event.moved {
            self.spawner.spawn(self.game.board()).map(|tile| {
                self.game.add_tile(tile);
                SpawnInfo::from(tile)
            })
        } else {
            None
        };

        let snap = self.game.snapshot();
        let record = StepRecord {
            seq: self.next_seq(),
            ts: current_timestamp_ms(),
            tilt: TiltInfo::from(event),
            spawned,
            board: BoardInfo::from(&snap),
            score: snap.score,
            max_score: snap.max_score,
            game_over: snap.game_over,
        };
        self.write_record(log, &LogRecord::Step(record.clone()))?;
        Ok(record)
    }

    /// Log the opening board, apply `moves` in order, log a summary
    ///
    /// Stops early once the game is over unless `keep_playing` is set.
    pub fn run<W: Write>(&mut self, moves: &[Side], log: &mut W) -> Result<ReplaySummary> {
        let snap = self.game.snapshot();
        let start = StartRecord {
            seq: self.next_seq(),
            ts: current_timestamp_ms(),
            seed: self.config.seed,
            target: self.config.max_piece,
            board: BoardInfo::from(&snap),
            spawned: self.opening.clone(),
        };
        self.write_record(log, &LogRecord::Start(start))?;

        let mut applied = 0usize;
        for &side in moves {
            if self.game.game_over() && !self.config.keep_playing {
                eprintln!(
                    "[Replay] game over after {} of {} moves",
                    applied,
                    moves.len()
                );
                break;
            }
            self.step(side, log)?;
            applied += 1;
        }

        let snap = self.game.snapshot();
        let summary = ReplaySummary {
            moves_requested: moves.len(),
            moves_applied: applied,
            score: snap.score,
            max_score: snap.max_score,
            highest_tile: snap.highest_value(),
            game_over: snap.game_over,
        };
        let record = SummaryRecord {
            seq: self.next_seq(),
            ts: current_timestamp_ms(),
            moves_requested: summary.moves_requested,
            moves_applied: summary.moves_applied,
            score: summary.score,
            max_score: summary.max_score,
            highest_tile: summary.highest_tile,
            game_over: summary.game_over,
        };
        self.write_record(log, &LogRecord::Summary(record))?;
        log.flush().context("failed to flush replay log")?;

        Ok(summary)
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn write_record<W: Write>(&mut self, log: &mut W, record: &LogRecord) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record).context("failed to encode log record")?;
        self.buf.push(b'\n');
        log.write_all(&self.buf)
            .context("failed to write replay log")?;
        Ok(())
    }
}
