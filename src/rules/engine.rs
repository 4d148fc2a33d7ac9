//! Rules engine trait for the game's query and transition surface.
//!
//! Implementors define:
//! - The initial state
//! - How a move transforms a state
//! - Legal moves, terminal detection, observations and rewards
//!
//! Every method takes the state by reference and returns a new value; the
//! engine itself holds nothing but its configuration, so one engine can
//! serve any number of games from any number of threads.

use smallvec::SmallVec;

use crate::core::{Action, GameConfig, GameState, PlayerId, Winner, ACTION_SPACE, PLAYER_COUNT};
use crate::error::MoveError;
use crate::rules::observation::Observation;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Board filled up without a winner.
    Draw,
    /// Both players completed a line in the same rotation.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `step`: Must be deterministic; identical inputs give identical output
/// - `step`: Does not validate the action (see `checked_step`)
/// - `is_terminal`: True once a winner is recorded or the board is full
/// - `rewards`: Indexed by player colour
pub trait RulesEngine: Send + Sync {
    /// Get the rule configuration.
    fn config(&self) -> &GameConfig;

    /// Fresh game.
    fn init(&self) -> GameState;

    /// Apply `action` for the player to move and return the next state.
    ///
    /// Callers must only pass actions allowed by `legal_action_mask`. A full
    /// or off-board column is not rejected and corrupts the board
    /// deterministically.
    fn step(&self, state: &GameState, action: Action) -> GameState;

    /// Board planes from `viewer`'s perspective; `None` means the player to
    /// move.
    fn observe(&self, state: &GameState, viewer: Option<PlayerId>) -> Observation;

    /// `true` for every column that can still take a piece.
    fn legal_action_mask(&self, state: &GameState) -> [bool; ACTION_SPACE];

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> bool;

    /// Per-player rewards, indexed by colour.
    fn rewards(&self, state: &GameState) -> [f32; PLAYER_COUNT];

    // === Convenience Methods ===

    /// Enumerate the legal actions.
    fn legal_actions(&self, state: &GameState) -> SmallVec<[Action; ACTION_SPACE]> {
        self.legal_action_mask(state)
            .iter()
            .zip(Action::all())
            .filter_map(|(&legal, action)| legal.then_some(action))
            .collect()
    }

    /// Outcome of a finished game, `None` while it continues.
    fn result(&self, state: &GameState) -> Option<GameResult> {
        match state.winner {
            Winner::Player(p) => Some(GameResult::Winner(p)),
            Winner::Both => Some(GameResult::Winners(PlayerId::all().collect())),
            Winner::None if self.is_terminal(state) => Some(GameResult::Draw),
            Winner::None => None,
        }
    }

    /// `step` behind a precondition check.
    ///
    /// For hosts that want hard validation at their boundary. The rule
    /// transition itself is unchanged.
    fn checked_step(&self, state: &GameState, action: Action) -> Result<GameState, MoveError> {
        let rejection = if self.is_terminal(state) {
            Some(MoveError::GameOver)
        } else if !action.is_on_board() {
            Some(MoveError::InvalidColumn(action.0))
        } else if !self.legal_action_mask(state)[action.column()] {
            Some(MoveError::ColumnFull(action.0))
        } else {
            None
        };

        match rejection {
            Some(err) => {
                log::warn!("rejected {:?} at round {}: {}", action, state.round, err);
                Err(err)
            }
            None => Ok(self.step(state, action)),
        }
    }
}
