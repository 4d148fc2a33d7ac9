//! # connect-five
//!
//! Rule engine for rotating connect-five, built to run as an environment
//! inside RL/MCTS training loops.
//!
//! ## Rules
//!
//! - 9×9 board, pieces drop into columns and fall to the bottom
//! - Five in a row (vertical, horizontal or diagonal) wins
//! - After every third ply without a win, the board rotates a quarter-turn
//!   clockwise and every column re-settles under gravity
//! - If a rotation completes lines for both players, the game ends with no
//!   reward for either side
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `step` takes a state and returns a new one. No
//!    I/O, no shared mutable storage, bit-identical output for identical
//!    input.
//!
//! 2. **Whole-board transforms**: rotation and gravity are array transforms,
//!    and wins are checked against a compile-time table of every scoring
//!    line.
//!
//! 3. **Total functions**: the engine never rejects a move. Hosts that want
//!    validation use `RulesEngine::checked_step`.
//!
//! ## Modules
//!
//! - `core`: Players, actions, board, state, configuration
//! - `rules`: `RulesEngine` trait, win-line table, rotation and gravity, observations
//! - `games`: The `ConnectFive` engine
//! - `nn`: Tensor encoding for neural networks
//! - `error`: Host-boundary error types
//!
//! ## Example
//!
//! ```
//! use connect_five::{Action, ConnectFive, RulesEngine};
//!
//! let game = ConnectFive::new();
//! let mut state = game.init();
//! for _ in 0..7 {
//!     state = game.step(&state, Action::new(4));
//! }
//!
//! assert_eq!(state.round, 7);
//! assert!(!game.is_terminal(&state));
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod games;
pub mod nn;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, GameConfig, GameState, PlayerId, Rotation, Winner,
    ACTION_SPACE, CELLS, COLUMNS, EMPTY, PLAYER_COUNT, ROWS,
};

pub use crate::error::{BoardParseError, ConfigError, InvalidPlayer, MoveError};

pub use crate::rules::{GameResult, Observation, RulesEngine, WIN_LINES};

pub use crate::games::ConnectFive;

pub use crate::nn::{ConnectFiveEncoder, EncodedState, StateEncoder};
