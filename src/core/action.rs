//! Action representation: the column a piece is dropped into.
//!
//! The engine does not validate actions. A column index outside `0..9` is
//! clamped to the last column when applied, and a full column has its top
//! cell overwritten. Hosts filter with the legal-action mask first, or go
//! through `ConnectFive::checked_step`.

use serde::{Deserialize, Serialize};

use super::board::COLUMNS;

/// Size of the action space (one action per column).
pub const ACTION_SPACE: usize = COLUMNS;

/// Drop a piece into a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action(pub u8);

impl Action {
    /// Create an action targeting `column`.
    #[must_use]
    pub const fn new(column: u8) -> Self {
        Self(column)
    }

    /// The raw column index as given by the caller.
    #[must_use]
    pub const fn column(self) -> usize {
        self.0 as usize
    }

    /// Whether the column index lies on the board.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.column() < COLUMNS
    }

    /// All actions in column order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..ACTION_SPACE as u8).map(Action)
    }
}

impl From<u8> for Action {
    fn from(column: u8) -> Self {
        Self(column)
    }
}
