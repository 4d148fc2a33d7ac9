//! Game state: the complete, immutable description of one game.
//!
//! ## GameState
//!
//! - `color`: player to move
//! - `board`: 81 cells, row-major
//! - `winner`: none, one player, or both (simultaneous win after rotation)
//! - `round`: plies played so far
//!
//! States are plain `Copy` values. The engine never mutates a state it was
//! handed; every transition returns a fresh value.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::PlayerId;

/// Outcome recorded on the state.
///
/// The integer encoding used by array-based hosts is available through
/// [`Winner::as_i8`]: -1 none, 0 or 1 for a single winner, 2 for both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// Nobody has completed a line.
    #[default]
    None,
    /// One player completed a line.
    Player(PlayerId),
    /// Both players completed a line in the same rotation.
    Both,
}

impl Winner {
    /// Encode as -1, 0, 1 or 2.
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        match self {
            Winner::None => -1,
            Winner::Player(p) => p.0 as i8,
            Winner::Both => 2,
        }
    }

    /// Decode the integer encoding. Returns `None` for values outside -1..=2.
    #[must_use]
    pub const fn from_i8(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Winner::None),
            0 | 1 => Some(Winner::Player(PlayerId(value as u8))),
            2 => Some(Winner::Both),
            _ => None,
        }
    }

    /// Whether the game has been decided.
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Winner::None)
    }
}

/// Complete game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Player to move.
    pub color: PlayerId,

    /// Board cells.
    pub board: Board,

    /// Recorded outcome.
    pub winner: Winner,

    /// Number of plies played.
    pub round: u32,
}

impl GameState {
    /// Empty board, player 0 to move, no winner, round 0.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            color: PlayerId::FIRST,
            board: Board::empty(),
            winner: Winner::None,
            round: 0,
        }
    }

    /// Arbitrary position with no recorded winner.
    ///
    /// Used to set up fixtures; nothing checks that `board` is reachable.
    #[must_use]
    pub const fn from_board(board: Board, color: PlayerId, round: u32) -> Self {
        Self {
            color,
            board,
            winner: Winner::None,
            round,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
