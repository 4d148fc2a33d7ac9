//! Connect-five rule engine.

use crate::core::{
    Action, Board, GameConfig, GameState, PlayerId, Winner, ACTION_SPACE, COLUMNS, PLAYER_COUNT,
    ROWS,
};
use crate::error::ConfigError;
use crate::rules::{has_won, owned_lines, rotate_and_settle, Observation, RulesEngine};

/// Rewards when player 0 wins.
const FIRST_WINS: [f32; PLAYER_COUNT] = [1.0, -1.0];
/// Rewards when player 1 wins.
const SECOND_WINS: [f32; PLAYER_COUNT] = [-1.0, 1.0];
/// Rewards for every other state.
const NO_REWARD: [f32; PLAYER_COUNT] = [0.0, 0.0];

/// The connect-five rule engine.
///
/// Holds only its configuration. Cloning is cheap and one instance can be
/// shared across threads.
#[derive(Clone, Debug, Default)]
pub struct ConnectFive {
    config: GameConfig,
}

impl ConnectFive {
    /// Engine with the standard rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom rules.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The rotation-gravity mechanic.
    ///
    /// Turns the board, settles every column, then re-checks both players
    /// against the new geometry. `color` and `round` are carried through
    /// untouched.
    #[must_use]
    pub fn rotate_update(&self, state: &GameState) -> GameState {
        let board = rotate_and_settle(&state.board, self.config.rotation);
        let winner = resolve_winner(
            has_won(&board, PlayerId::FIRST),
            has_won(&board, PlayerId::SECOND),
        );

        log::trace!("rotated board at round {}: winner {:?}", state.round, winner);
        if winner == Winner::Both {
            log::debug!(
                "rotation at round {} completed lines for both players ({} for player 0, {} for player 1)",
                state.round,
                owned_lines(&board, PlayerId::FIRST).count(),
                owned_lines(&board, PlayerId::SECOND).count(),
            );
        }

        GameState {
            board,
            winner,
            ..*state
        }
    }
}

/// First matching condition wins: both, then player 0, then player 1.
fn resolve_winner(first: bool, second: bool) -> Winner {
    [
        (first && second, Winner::Both),
        (first, Winner::Player(PlayerId::FIRST)),
        (second, Winner::Player(PlayerId::SECOND)),
    ]
    .into_iter()
    .find_map(|(hit, winner)| hit.then_some(winner))
    .unwrap_or(Winner::None)
}

/// Drop a piece for `player` into `col`, clamped onto the board.
fn drop_piece(board: &Board, col: usize, player: PlayerId) -> Board {
    let col = col.min(COLUMNS - 1);
    let mut next = *board;
    next.set(board.landing_row(col), col, player.color());
    next
}

impl RulesEngine for ConnectFive {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn init(&self) -> GameState {
        GameState::initial()
    }

    fn step(&self, state: &GameState, action: Action) -> GameState {
        let mover = state.color;
        let board = drop_piece(&state.board, action.column(), mover);
        let won = has_won(&board, mover);

        let next = GameState {
            color: mover.opponent(),
            board,
            winner: if won { Winner::Player(mover) } else { Winner::None },
            // Wraps at u32::MAX so the transition stays total.
            round: state.round.wrapping_add(1),
        };

        // An immediate win always suppresses the rotation.
        let rotates = self.config.rotates_at(next.round) && !won;
        if rotates {
            self.rotate_update(&next)
        } else {
            next
        }
    }

    fn observe(&self, state: &GameState, viewer: Option<PlayerId>) -> Observation {
        Observation::new(&state.board, viewer.unwrap_or(state.color))
    }

    fn legal_action_mask(&self, state: &GameState) -> [bool; ACTION_SPACE] {
        state.board.column_counts().map(|n| n < ROWS)
    }

    fn is_terminal(&self, state: &GameState) -> bool {
        state.winner.is_decided() || state.board.is_full()
    }

    fn rewards(&self, state: &GameState) -> [f32; PLAYER_COUNT] {
        match state.winner {
            Winner::Player(PlayerId::FIRST) => FIRST_WINS,
            Winner::Player(PlayerId::SECOND) => SECOND_WINS,
            _ => NO_REWARD,
        }
    }
}
