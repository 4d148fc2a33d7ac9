//! Flat `f32` planes handed to neural networks.

use serde::{Deserialize, Serialize};

use crate::core::{COLUMNS, ROWS};
use crate::rules::{Observation, PLANES};

/// Channels-first shape of every encoded state.
pub const ENCODED_SHAPE: [usize; 3] = [PLANES, ROWS, COLUMNS];

/// One observation as `[plane][row][col]` floats, 1.0 where a piece sits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// `PLANES * ROWS * COLUMNS` values in channels-first order.
    pub tensor: Vec<f32>,

    /// Always [`ENCODED_SHAPE`].
    pub shape: [usize; 3],
}

impl EncodedState {
    /// Convert both observation planes to floats.
    #[must_use]
    pub fn from_observation(obs: &Observation) -> Self {
        let tensor = obs
            .to_channels_first()
            .into_iter()
            .map(|occupied| if occupied { 1.0 } else { 0.0 })
            .collect();
        Self {
            tensor,
            shape: ENCODED_SHAPE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{cell_index, Board, PlayerId, CELLS};

    fn at(encoded: &EncodedState, plane: usize, row: usize, col: usize) -> f32 {
        encoded.tensor[plane * CELLS + cell_index(row, col)]
    }

    fn sample() -> Observation {
        let mut board = Board::empty();
        board.set(8, 2, 0);
        board.set(8, 3, 1);
        board.set(7, 2, 1);
        Observation::new(&board, PlayerId::SECOND)
    }

    #[test]
    fn test_from_observation_layout() {
        let encoded = EncodedState::from_observation(&sample());

        assert_eq!(encoded.shape, [2, 9, 9]);
        assert_eq!(encoded.tensor.len(), ENCODED_SHAPE.iter().product::<usize>());
        // Viewer is player 1: its pieces fill plane 0.
        assert_eq!(at(&encoded, 0, 8, 3), 1.0);
        assert_eq!(at(&encoded, 0, 7, 2), 1.0);
        assert_eq!(at(&encoded, 1, 8, 2), 1.0);
        assert_eq!(at(&encoded, 1, 8, 3), 0.0);
        assert_eq!(encoded.tensor[..CELLS].iter().sum::<f32>(), 2.0);
        assert_eq!(encoded.tensor[CELLS..].iter().sum::<f32>(), 1.0);
    }

    #[test]
    fn test_serialization() {
        let encoded = EncodedState::from_observation(&sample());
        let json = serde_json::to_string(&encoded).unwrap();
        let deserialized: EncodedState = serde_json::from_str(&json).unwrap();
        assert_eq!(encoded, deserialized);
    }
}
