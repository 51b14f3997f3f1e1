//! Game state module - board, score and the tilt engine
//!
//! This module ties together the board, merge tracking and end-of-game rules.
//! A tilt is computed column by column as a tilt toward north, with the board
//! viewed from the requested side.

use std::fmt;

use crate::board::Board;
use crate::merge::MergeTable;
use crate::rules;
use crate::snapshot::{board_hash, GameSnapshot};
use crate::types::{Side, Tile, TiltEvent, DEFAULT_BOARD_SIZE, MAX_PIECE};

/// Outcome of sliding one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slide {
    Stayed,
    Moved,
    Merged(u32),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    score: u32,
    /// Highest score seen when the game was over; only updated then.
    max_score: u32,
    /// Winning tile value.
    max_piece: u32,
    /// Cells that received a merge during the current tilt.
    merged: MergeTable,
    /// Last completed tilt (consumed by observers).
    last_event: Option<TiltEvent>,
}

impl GameState {
    /// A new game on an empty `size x size` board with score 0
    pub fn new(size: usize) -> Self {
        Self::with_max_piece(size, MAX_PIECE)
    }

    /// A new game that is won on reaching `max_piece`
    pub fn with_max_piece(size: usize, max_piece: u32) -> Self {
        let board = Board::new(size);
        Self {
            merged: MergeTable::new(board.size()),
            board,
            score: 0,
            max_score: 0,
            max_piece,
            last_event: None,
        }
    }

    /// A game with the given tiles, listed top row first (`0` = empty)
    ///
    /// # Panics
    ///
    /// Panics if `rows` is not square.
    pub fn from_rows(rows: &[Vec<u32>], score: u32, max_score: u32) -> Self {
        let board = Board::from_rows(rows);
        Self {
            merged: MergeTable::new(board.size()),
            board,
            score,
            max_score,
            max_piece: MAX_PIECE,
            last_event: None,
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn max_piece(&self) -> u32 {
        self.max_piece
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Tile at `(col, row)`, or `None` if the cell is empty
    ///
    /// # Panics
    ///
    /// Panics if out of bounds.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.board.tile(col, row)
    }

    /// Empty the board and reset the score; the max score is kept
    pub fn clear(&mut self) {
        self.score = 0;
        self.board.clear();
        self.last_event = None;
    }

    /// Add `tile` to the board at its position
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds or already holds a tile.
    pub fn add_tile(&mut self, tile: Tile) {
        self.board.add_tile(tile);
        self.check_game_over();
    }

    /// True iff no tilt can change the board or the winning tile is present
    pub fn game_over(&self) -> bool {
        rules::is_game_over(&self.board, self.max_piece)
    }

    fn check_game_over(&mut self) {
        if self.game_over() {
            self.max_score = self.max_score.max(self.score);
        }
    }

    /// Tilt the board toward `side`
    ///
    /// 1. Each tile moves to the cell nearest the wall that is empty or holds
    ///    an equal value. Equal values merge into one tile of twice the value,
    ///    which is added to the score.
    /// 2. A tile produced by a merge does not merge again during this tilt.
    /// 3. Of three equal tiles in a line, the leading two merge and the
    ///    trailing one does not.
    pub fn tilt(&mut self, side: Side) {
        self.board.set_viewing_perspective(side);

        let mut event = TiltEvent::unchanged(side);
        for col in 0..self.board.size() {
            self.tilt_column(col, &mut event);
        }

        self.board.reset_perspective();
        self.merged.reset();

        self.score += event.score_delta;
        self.last_event = Some(event);
        self.check_game_over();
    }

    /// Slide every tile of logical column `col`, nearest the wall first
    ///
    /// The top row is already against the wall and never moves.
    fn tilt_column(&mut self, col: usize, event: &mut TiltEvent) {
        let size = self.board.size();
        for row in (0..size.saturating_sub(1)).rev() {
            match self.tilt_tile(col, row) {
                Slide::Stayed => {}
                Slide::Moved => event.moved = true,
                Slide::Merged(value) => {
                    event.moved = true;
                    event.merges += 1;
                    event.score_delta += value;
                }
            }
        }
    }

    /// Slide the tile at logical `(col, row)` toward the north wall
    ///
    /// Cells are scanned from the wall back toward the tile. The tile lands
    /// on the first cell that is empty or holds an equal value that has not
    /// merged this tilt; any other cell is skipped and the scan goes on.
    fn tilt_tile(&mut self, col: usize, row: usize) -> Slide {
        let Some(tile) = self.board.tile(col, row) else {
            return Slide::Stayed;
        };

        let mut target = None;
        for next in (row + 1..self.board.size()).rev() {
            match self.board.value(col, next) {
                None => {
                    target = Some(next);
                    break;
                }
                Some(value) if value == tile.value() && !self.merged_at(col, next) => {
                    target = Some(next);
                    break;
                }
                Some(_) => continue,
            }
        }

        let Some(to_row) = target else {
            return Slide::Stayed;
        };

        if !self.board.move_tile(col, to_row, tile) {
            return Slide::Moved;
        }

        let (pc, pr) = self.board.physical(col, to_row);
        self.merged.mark(pc, pr);
        Slide::Merged(tile.doubled().value())
    }

    fn merged_at(&self, col: usize, row: usize) -> bool {
        let (pc, pr) = self.board.physical(col, row);
        self.merged.is_merged(pc, pr)
    }

    /// Consume the summary of the last tilt
    pub fn take_last_event(&mut self) -> Option<TiltEvent> {
        self.last_event.take()
    }

    pub fn last_event(&self) -> Option<TiltEvent> {
        self.last_event
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.board.size(),
            rows: self.board.to_rows(),
            board_hash: board_hash(&self.board),
            score: self.score,
            max_score: self.max_score,
            game_over: self.game_over(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.score == other.score
            && self.max_score == other.max_score
            && self.max_piece == other.max_piece
    }
}

impl Eq for GameState {}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "[")?;
        let size = self.board.size();
        for row in (0..size).rev() {
            for col in 0..size {
                match self.board.get(col, row).flatten() {
                    Some(value) => write!(f, "|{:4}", value)?,
                    None => write!(f, "|    ")?,
                }
            }
            writeln!(f, "|")?;
        }
        let over = if self.game_over() { "over" } else { "not over" };
        writeln!(
            f,
            "] {} (max: {}) (game is {}) ",
            self.score, self.max_score, over
        )
    }
}
