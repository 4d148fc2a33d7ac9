//! Game rules: the engine trait, the win-line table, rotation and gravity,
//! and the observation planes.
//!
//! `RulesEngine` is the surface hosts program against. The free functions in
//! `win_lines` and `gravity` are the board transforms it is built from.

pub mod engine;
pub mod gravity;
pub mod observation;
pub mod win_lines;

pub use engine::{GameResult, RulesEngine};
pub use gravity::{rotate, rotate_and_settle, settle};
pub use observation::{Observation, PLANES};
pub use win_lines::{has_won, owned_lines, WinLine, LINE_LENGTH, WIN_LINES, WIN_LINE_COUNT};
