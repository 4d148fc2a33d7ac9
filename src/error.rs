//! Error types for the host-facing boundary.
//!
//! The rule engine itself is total: `step` never fails. These errors come
//! from the optional validating wrapper, board diagrams, deserialized
//! players and configuration.

/// A move rejected by `ConnectFive::checked_step`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is off the board")]
    InvalidColumn(u8),

    #[error("column {0} is full")]
    ColumnFull(u8),

    #[error("game is already over")]
    GameOver,
}

/// A board diagram that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 9 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 9")]
    RowLength { row: usize, len: usize },

    #[error("invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },
}

/// A colour outside 0..=1 where a player was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("player colour must be 0 or 1, got {0}")]
pub struct InvalidPlayer(pub u8);

/// Invalid rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("rotation period must be at least 1")]
    ZeroRotationPeriod,
}
