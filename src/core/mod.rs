//! Core engine types: players, actions, board, state, configuration.
//!
//! Everything here is a plain value. The rules that transform these values
//! live in `rules` and `games`.

pub mod player;
pub mod action;
pub mod board;
pub mod state;
pub mod config;

pub use player::{PlayerId, PLAYER_COUNT};
pub use action::{Action, ACTION_SPACE};
pub use board::{cell_index, Board, CELLS, COLUMNS, EMPTY, ROWS};
pub use state::{GameState, Winner};
pub use config::{GameConfig, Rotation};
