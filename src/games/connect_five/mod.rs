//! Rotating connect-five.
//!
//! Five in a row on a 9×9 board with gravity:
//! - Players alternate dropping pieces into columns
//! - Five of your pieces in a row (vertical, horizontal or diagonal) wins
//! - After every third ply without a win, the board turns a quarter-turn
//!   clockwise and every column re-settles under gravity
//! - A rotation can complete lines for both players at once, which ends the
//!   game with no reward for either side

mod game;

pub use game::ConnectFive;
