use crate::board::Board;

/// Stable FNV-1a 64-bit hash over the board values.
///
/// `DefaultHasher` output is not guaranteed stable across Rust versions, and
/// board hashes end up in replay logs.
pub fn board_hash(board: &Board) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    let mut h = OFFSET_BASIS;
    for cell in board.cells() {
        for b in cell.unwrap_or(0).to_le_bytes() {
            h ^= b as u64;
            h = h.wrapping_mul(PRIME);
        }
    }
    h
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub size: usize,
    /// Rows listed top to bottom, `0` for empty cells
    pub rows: Vec<Vec<u32>>,
    pub board_hash: u64,
    pub score: u32,
    pub max_score: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn highest_value(&self) -> u32 {
        self.rows.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn tile_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&v| v != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;

    #[test]
    fn test_board_hash_tracks_contents() {
        let mut board = Board::new(4);
        let empty = board_hash(&board);
        assert_eq!(empty, board_hash(&Board::new(4)));

        board.add_tile(Tile::new(2, 0, 0));
        assert_ne!(board_hash(&board), empty);
    }

    #[test]
    fn test_board_hash_depends_on_position() {
        let a = Board::from_rows(&[vec![2, 0], vec![0, 0]]);
        let b = Board::from_rows(&[vec![0, 2], vec![0, 0]]);
        assert_ne!(board_hash(&a), board_hash(&b));
    }
}
