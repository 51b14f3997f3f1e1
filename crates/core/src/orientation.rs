//! Orientation module - logical/physical coordinate remapping
//!
//! The tilt engine only knows how to push tiles toward increasing rows
//! ("north"). To tilt toward any other side we look at the board through a
//! rotated frame in which that side is north.
//!
//! Mapping of logical `(c, r)` to physical cells on an `n`-sized board:
//!
//! | Side  | Physical `(col, row)` | Logical `+row` points |
//! |-------|-----------------------|-----------------------|
//! | North | `(c, r)`              | north                 |
//! | East  | `(r, n-1-c)`          | east                  |
//! | South | `(n-1-c, n-1-r)`      | south                 |
//! | West  | `(n-1-r, c)`          | west                  |
//!
//! Every mapping is a rotation, so it is a bijection on the board and
//! [`to_logical`] is its exact inverse.

use crate::types::Side;

/// Translate a logical `(col, row)` seen from `side` into the physical cell
///
/// Both coordinates must be `< size`.
#[inline(always)]
pub fn to_physical(side: Side, col: usize, row: usize, size: usize) -> (usize, usize) {
    debug_assert!(col < size && row < size);
    let last = size - 1;
    match side {
        Side::North => (col, row),
        Side::East => (row, last - col),
        Side::South => (last - col, last - row),
        Side::West => (last - row, col),
    }
}

/// Translate a physical `(col, row)` into logical coordinates seen from `side`
#[inline(always)]
pub fn to_logical(side: Side, col: usize, row: usize, size: usize) -> (usize, usize) {
    debug_assert!(col < size && row < size);
    let last = size - 1;
    match side {
        Side::North => (col, row),
        Side::East => (last - row, col),
        Side::South => (last - col, last - row),
        Side::West => (row, last - col),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_is_identity() {
        for col in 0..4 {
            for row in 0..4 {
                assert_eq!(to_physical(Side::North, col, row, 4), (col, row));
                assert_eq!(to_logical(Side::North, col, row, 4), (col, row));
            }
        }
    }

    #[test]
    fn test_roundtrip_all_sides_and_sizes() {
        for size in 1..=6 {
            for side in Side::ALL {
                for col in 0..size {
                    for row in 0..size {
                        let (pc, pr) = to_physical(side, col, row, size);
                        assert!(pc < size && pr < size);
                        assert_eq!(to_logical(side, pc, pr, size), (col, row));
                    }
                }
            }
        }
    }

    #[test]
    fn test_logical_far_row_is_the_wall_being_tilted_toward() {
        // Top logical row lands on the physical edge named by the side.
        for c in 0..4 {
            assert_eq!(to_physical(Side::North, c, 3, 4).1, 3);
            assert_eq!(to_physical(Side::East, c, 3, 4).0, 3);
            assert_eq!(to_physical(Side::South, c, 3, 4).1, 0);
            assert_eq!(to_physical(Side::West, c, 3, 4).0, 0);
        }
    }

    #[test]
    fn test_logical_column_is_a_physical_line() {
        // Seen from east, one logical column is one physical row.
        let rows: Vec<usize> = (0..4).map(|r| to_physical(Side::East, 1, r, 4).1).collect();
        assert!(rows.iter().all(|&r| r == 2));
        // Seen from west, one logical column is one physical row as well.
        let rows: Vec<usize> = (0..4).map(|r| to_physical(Side::West, 1, r, 4).1).collect();
        assert!(rows.iter().all(|&r| r == 1));
    }
}
