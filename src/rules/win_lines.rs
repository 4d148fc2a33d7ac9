//! Precomputed winning lines.
//!
//! Every line is a quintuple of flat board indices. The table is built at
//! compile time and shared by every win check; nothing recomputes it.
//!
//! Anchor ranges per orientation (anchor = `row * 9 + col`):
//!
//! | Orientation | Rows | Columns | Stride | Lines |
//! |-------------|------|---------|--------|-------|
//! | Vertical    | 0..4 | 0..9    | 9      | 36    |
//! | Horizontal  | 0..9 | 0..4    | 1      | 36    |
//! | Diagonal ↘  | 0..4 | 0..4    | 10     | 16    |
//! | Diagonal ↙  | 0..4 | 4..9    | 8      | 20    |
//!
//! These ranges are the rule set the game is played under; they are narrower
//! than every geometrically possible five-cell run (a vertical run occupying
//! rows 4..=8 does not score, for example).

use std::ops::Range;

use crate::core::{Board, PlayerId, COLUMNS};

/// Pieces in a winning line.
pub const LINE_LENGTH: usize = 5;

/// Number of lines in the table.
pub const WIN_LINE_COUNT: usize = 108;

/// Flat board indices of one line.
pub type WinLine = [u8; LINE_LENGTH];

/// Index ranges of each orientation inside [`WIN_LINES`].
pub const VERTICAL: Range<usize> = 0..36;
pub const HORIZONTAL: Range<usize> = 36..72;
pub const DIAGONAL_DOWN_RIGHT: Range<usize> = 72..88;
pub const DIAGONAL_DOWN_LEFT: Range<usize> = 88..108;

/// All winning lines.
pub static WIN_LINES: [WinLine; WIN_LINE_COUNT] = build_win_lines();

const fn line(anchor: usize, stride: usize) -> WinLine {
    let mut out = [0u8; LINE_LENGTH];
    let mut k = 0;
    while k < LINE_LENGTH {
        out[k] = (anchor + k * stride) as u8;
        k += 1;
    }
    out
}

const fn push_block(
    mut lines: [WinLine; WIN_LINE_COUNT],
    mut n: usize,
    rows: Range<usize>,
    cols: Range<usize>,
    stride: usize,
) -> ([WinLine; WIN_LINE_COUNT], usize) {
    let mut row = rows.start;
    while row < rows.end {
        let mut col = cols.start;
        while col < cols.end {
            lines[n] = line(row * COLUMNS + col, stride);
            n += 1;
            col += 1;
        }
        row += 1;
    }
    (lines, n)
}

const fn build_win_lines() -> [WinLine; WIN_LINE_COUNT] {
    let lines = [[0u8; LINE_LENGTH]; WIN_LINE_COUNT];
    let (lines, n) = push_block(lines, 0, 0..4, 0..9, COLUMNS);
    let (lines, n) = push_block(lines, n, 0..9, 0..4, 1);
    let (lines, n) = push_block(lines, n, 0..4, 0..4, COLUMNS + 1);
    let (lines, n) = push_block(lines, n, 0..4, 4..9, COLUMNS - 1);
    assert!(n == WIN_LINE_COUNT, "win-line table size mismatch");
    lines
}

/// True iff every cell of `line` holds `color`.
#[inline]
fn line_owned(cells: &[i8], line: &WinLine, color: i8) -> bool {
    line.iter().all(|&i| cells[i as usize] == color)
}

/// Whether `player` owns every cell of at least one winning line.
#[must_use]
pub fn has_won(board: &Board, player: PlayerId) -> bool {
    let cells = board.cells();
    let color = player.color();
    WIN_LINES.iter().any(|l| line_owned(cells, l, color))
}

/// The lines `player` currently owns.
pub fn owned_lines(board: &Board, player: PlayerId) -> impl Iterator<Item = &'static WinLine> + '_ {
    let color = player.color();
    WIN_LINES
        .iter()
        .filter(move |l| line_owned(board.cells(), l, color))
}
