//! State encoding for neural network input.
//!
//! Transforms game state into tensor representations suitable for neural networks.

use crate::core::{GameState, PlayerId, ACTION_SPACE, PLAYER_COUNT};
use crate::nn::tensor::{EncodedState, ENCODED_SHAPE};
use crate::rules::Observation;

/// Encodes game state into tensors for neural network input.
///
/// Each encoder defines:
/// - How to convert state to a tensor from a player's perspective
/// - The shape of the output tensor
/// - The size of the action space
pub trait StateEncoder: Send + Sync {
    /// Encode the game state from a player's perspective.
    fn encode(&self, state: &GameState, perspective: PlayerId) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions.
    ///
    /// This defines the size of the policy output vector.
    fn action_space_size(&self) -> usize;

    /// Get the number of players this encoder supports.
    fn player_count(&self) -> usize;
}

/// Channels-first encoding of the two observation planes.
///
/// Shape `[2, 9, 9]`: plane 0 holds 1.0 where the perspective player has a
/// piece, plane 1 where the opponent does.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectFiveEncoder;

impl ConnectFiveEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl StateEncoder for ConnectFiveEncoder {
    fn encode(&self, state: &GameState, perspective: PlayerId) -> EncodedState {
        EncodedState::from_observation(&Observation::new(&state.board, perspective))
    }

    fn output_shape(&self) -> Vec<usize> {
        ENCODED_SHAPE.to_vec()
    }

    fn action_space_size(&self) -> usize {
        ACTION_SPACE
    }

    fn player_count(&self) -> usize {
        PLAYER_COUNT
    }
}
