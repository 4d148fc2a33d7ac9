//! The 9×9 board as a flat, row-major array of cells.
//!
//! ```text
//! [[ 0,  1,  2,  3,  4,  5,  6,  7,  8],
//!  [ 9, 10, 11, 12, 13, 14, 15, 16, 17],
//!  ...
//!  [72, 73, 74, 75, 76, 77, 78, 79, 80]]
//! ```
//!
//! Row 0 is the top of the board; pieces fall toward row 8. Each cell holds
//! `EMPTY` (-1) or the colour of the owning player (0 or 1).

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::error::BoardParseError;

/// Number of rows.
pub const ROWS: usize = 9;
/// Number of columns.
pub const COLUMNS: usize = 9;
/// Number of cells.
pub const CELLS: usize = ROWS * COLUMNS;
/// Marker for an unoccupied cell.
pub const EMPTY: i8 = -1;

/// Flat index of `(row, col)`.
#[inline]
#[must_use]
pub const fn cell_index(row: usize, col: usize) -> usize {
    row * COLUMNS + col
}

/// A 9×9 board value. Cheap to copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [i8; CELLS],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: [EMPTY; CELLS] }
    }

    /// Build a board from raw cells.
    ///
    /// Values other than -1, 0 and 1 are not checked here; the engine never
    /// writes them.
    #[must_use]
    pub const fn from_cells(cells: [i8; CELLS]) -> Self {
        Self { cells }
    }

    /// Raw cells in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &[i8; CELLS] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> i8 {
        self.cells[cell_index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i8) {
        self.cells[cell_index(row, col)] = value;
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col) >= 0
    }

    /// Number of occupied cells in a column.
    #[must_use]
    pub fn column_count(&self, col: usize) -> usize {
        (0..ROWS).filter(|&row| self.is_occupied(row, col)).count()
    }

    /// Occupied-cell count for every column.
    #[must_use]
    pub fn column_counts(&self) -> [usize; COLUMNS] {
        let mut counts = [0; COLUMNS];
        for (i, &cell) in self.cells.iter().enumerate() {
            if cell >= 0 {
                counts[i % COLUMNS] += 1;
            }
        }
        counts
    }

    #[must_use]
    pub fn is_column_full(&self, col: usize) -> bool {
        self.column_count(col) == ROWS
    }

    /// Every column holds nine pieces.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.column_counts().iter().all(|&n| n == ROWS)
    }

    /// Total number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c >= 0).count()
    }

    /// Number of pieces owned by `player`.
    #[must_use]
    pub fn count_of(&self, player: PlayerId) -> usize {
        self.cells.iter().filter(|&&c| c == player.color()).count()
    }

    /// Row a new piece lands on in `col`.
    ///
    /// A full column yields row 0, so dropping into it overwrites the top
    /// cell instead of leaving the board.
    #[inline]
    #[must_use]
    pub fn landing_row(&self, col: usize) -> usize {
        (ROWS - 1).saturating_sub(self.column_count(col))
    }

    /// True when no column has an empty cell beneath an occupied one.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        (0..COLUMNS).all(|col| {
            let mut seen_piece = false;
            (0..ROWS).all(|row| {
                let occupied = self.is_occupied(row, col);
                let ok = occupied || !seen_piece;
                seen_piece |= occupied;
                ok
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

fn cell_char(cell: i8) -> char {
    match cell {
        0 => 'X',
        1 => 'O',
        _ => '.',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..COLUMNS {
                write!(f, "{}", cell_char(self.get(row, col)))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        writeln!(f, "{}", self)?;
        write!(f, "}}")
    }
}

/// Parses a nine-line diagram: `.` empty, `X` player 0, `O` player 1.
///
/// Whitespace inside a line and blank lines are ignored, so fixtures may be
/// indented and spaced for readability.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != COLUMNS {
                return Err(BoardParseError::RowLength { row, len: chars.len() });
            }
            for (col, &ch) in chars.iter().enumerate() {
                let cell = match ch {
                    '.' => EMPTY,
                    'X' | 'x' => 0,
                    'O' | 'o' => 1,
                    _ => return Err(BoardParseError::InvalidCell { row, col, ch }),
                };
                board.set(row, col, cell);
            }
        }
        Ok(board)
    }
}

// serde only derives for arrays up to 32 elements, so the cells go through a
// plain sequence.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.iter())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CellsVisitor;

        impl<'de> Visitor<'de> for CellsVisitor {
            type Value = Board;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {} cells", CELLS)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Board, A::Error> {
                let mut cells = [EMPTY; CELLS];
                for (i, cell) in cells.iter_mut().enumerate() {
                    let value: i8 = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                    if !(-1..=1).contains(&value) {
                        return Err(de::Error::custom(format!("invalid cell value {}", value)));
                    }
                    *cell = value;
                }
                if seq.next_element::<i8>()?.is_some() {
                    return Err(de::Error::invalid_length(CELLS + 1, &self));
                }
                Ok(Board { cells })
            }
        }

        deserializer.deserialize_seq(CellsVisitor)
    }
}
