//! Rotation and gravity as whole-board transforms.
//!
//! The periodic mechanic is a quarter-turn followed by a per-column stable
//! partition: empty cells rise to the top and occupied cells keep their
//! relative order, packed against row 8. No cell-by-cell falling is
//! simulated.

use crate::core::{Board, Rotation, CELLS, COLUMNS, EMPTY, ROWS};

/// Rotate the board a quarter-turn.
#[must_use]
pub fn rotate(board: &Board, rotation: Rotation) -> Board {
    let mut out = Board::empty();
    for row in 0..ROWS {
        for col in 0..COLUMNS {
            let value = match rotation {
                Rotation::Clockwise => board.get(ROWS - 1 - col, row),
                Rotation::CounterClockwise => board.get(col, COLUMNS - 1 - row),
            };
            out.set(row, col, value);
        }
    }
    out
}

/// Settle every column: empties first, occupied cells in their original
/// top-to-bottom order underneath.
#[must_use]
pub fn settle(board: &Board) -> Board {
    let mut cells = [EMPTY; CELLS];
    for col in 0..COLUMNS {
        // Fill from the bottom with occupied cells read bottom-up, which keeps
        // their relative order.
        let mut dest = ROWS;
        for row in (0..ROWS).rev() {
            let value = board.get(row, col);
            if value >= 0 {
                dest -= 1;
                cells[dest * COLUMNS + col] = value;
            }
        }
    }
    Board::from_cells(cells)
}

/// Quarter-turn followed by gravity.
#[must_use]
pub fn rotate_and_settle(board: &Board, rotation: Rotation) -> Board {
    settle(&rotate(board, rotation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn board(diagram: &str) -> Board {
        diagram.parse().unwrap()
    }

    #[test]
    fn test_clockwise_moves_corners() {
        let mut b = Board::empty();
        b.set(0, 0, 0); // top-left
        b.set(8, 0, 1); // bottom-left

        let r = rotate(&b, Rotation::Clockwise);
        assert_eq!(r.get(0, 8), 0); // top-left -> top-right
        assert_eq!(r.get(0, 0), 1); // bottom-left -> top-left
        assert_eq!(r.piece_count(), 2);
    }

    #[test]
    fn test_counter_clockwise_inverts_clockwise() {
        let b = board(
            "
            .........
            .........
            .........
            .........
            ...O.....
            ...X.....
            ..OX.....
            .XXO.O...
            XOOXXOX..
            ",
        );
        let there = rotate(&b, Rotation::Clockwise);
        assert_eq!(rotate(&there, Rotation::CounterClockwise), b);
    }

    #[test]
    fn test_four_turns_identity() {
        let b = board(
            "
            X........
            .O.......
            ..X......
            .........
            .........
            .........
            ......O..
            .......X.
            ........O
            ",
        );
        let mut r = b;
        for _ in 0..4 {
            r = rotate(&r, Rotation::Clockwise);
        }
        assert_eq!(r, b);
    }

    #[test]
    fn test_settle_preserves_order() {
        let b = board(
            "
            X........
            .........
            O........
            .........
            X........
            .........
            .........
            .........
            .........
            ",
        );
        let s = settle(&b);

        assert_eq!(s.get(6, 0), 0);
        assert_eq!(s.get(7, 0), 1);
        assert_eq!(s.get(8, 0), 0);
        assert_eq!(s.column_count(0), 3);
        assert!(s.is_settled());
    }

    #[test]
    fn test_settle_is_idempotent() {
        let b = board(
            "
            .X.......
            .........
            .O..X....
            .........
            ..O......
            .........
            ........X
            .........
            .........
            ",
        );
        let once = settle(&b);
        assert_eq!(settle(&once), once);
    }

    #[test]
    fn test_rotate_and_settle_keeps_counts() {
        let b = board(
            "
            .........
            .........
            .........
            .........
            .........
            .........
            ....O....
            ...XXO...
            ..OXOXX..
            ",
        );
        let r = rotate_and_settle(&b, Rotation::Clockwise);

        assert_eq!(r.count_of(PlayerId::FIRST), b.count_of(PlayerId::FIRST));
        assert_eq!(r.count_of(PlayerId::SECOND), b.count_of(PlayerId::SECOND));
        assert!(r.is_settled());
    }

    #[test]
    fn test_bottom_row_becomes_left_column() {
        // Bottom row, read left to right, becomes column 0 read top to bottom,
        // then packs to the bottom of that column.
        let b = board(
            "
            .........
            .........
            .........
            .........
            .........
            .........
            .........
            .........
            XO.X.....
            ",
        );
        let r = rotate_and_settle(&b, Rotation::Clockwise);

        assert_eq!(r.get(6, 0), 0);
        assert_eq!(r.get(7, 0), 1);
        assert_eq!(r.get(8, 0), 0);
        assert_eq!(r.piece_count(), 3);
    }
}
