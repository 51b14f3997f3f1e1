//! Rules module - end-of-game predicates
//!
//! A game is over when the winning tile is on the board or when no tilt in
//! any direction could change it. All predicates read physical cells, so
//! they give the same answer whatever perspective the board is viewed from.

use crate::board::Board;

/// True if at least one cell is empty
pub fn empty_space_exists(board: &Board) -> bool {
    board.cells().iter().any(|cell| cell.is_none())
}

/// True if any tile equals `max_piece`
pub fn max_tile_exists(board: &Board, max_piece: u32) -> bool {
    board.cells().iter().any(|&cell| cell == Some(max_piece))
}

/// True if some tilt could change the board
///
/// Either a cell is empty, or two horizontally or vertically adjacent
/// tiles hold the same value.
pub fn at_least_one_move_exists(board: &Board) -> bool {
    if empty_space_exists(board) {
        return true;
    }

    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            let here = board.get(col, row).flatten();
            if col + 1 < size && here == board.get(col + 1, row).flatten() {
                return true;
            }
            if row + 1 < size && here == board.get(col, row + 1).flatten() {
                return true;
            }
        }
    }
    false
}

/// Winning tile reached, or stuck
pub fn is_game_over(board: &Board, max_piece: u32) -> bool {
    max_tile_exists(board, max_piece) || !at_least_one_move_exists(board)
}
