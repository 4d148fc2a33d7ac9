//! Rule configuration.
//!
//! The defaults reproduce the standard game: a clockwise quarter-turn after
//! every third ply. Variants may change the period or the direction; the
//! board size and line length are fixed by the win-line table.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Direction of the periodic quarter-turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// `new[r][c] = old[8 - c][r]`
    #[default]
    Clockwise,
    /// `new[r][c] = old[c][8 - r]`
    CounterClockwise,
}

/// Rule parameters for a `ConnectFive` engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// The board rotates after every ply whose round is a multiple of this
    /// (default: 3). Must be non-zero.
    pub rotation_period: u32,

    /// Direction of the quarter-turn (default: clockwise).
    pub rotation: Rotation,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rotation_period: 3,
            rotation: Rotation::Clockwise,
        }
    }
}

impl GameConfig {
    /// Set the rotation period.
    pub fn with_rotation_period(mut self, period: u32) -> Self {
        self.rotation_period = period;
        self
    }

    /// Set the rotation direction.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Check the parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rotation_period == 0 {
            return Err(ConfigError::ZeroRotationPeriod);
        }
        Ok(())
    }

    /// Whether the board rotates once `round` plies have been played.
    #[inline]
    #[must_use]
    pub fn rotates_at(&self, round: u32) -> bool {
        self.rotation_period != 0 && round % self.rotation_period == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.rotation_period, 3);
        assert_eq!(config.rotation, Rotation::Clockwise);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_rotation_period(4)
            .with_rotation(Rotation::CounterClockwise);

        assert_eq!(config.rotation_period, 4);
        assert_eq!(config.rotation, Rotation::CounterClockwise);
    }

    #[test]
    fn test_rotates_at() {
        let config = GameConfig::default();
        let rounds: Vec<u32> = (1..=9).filter(|&r| config.rotates_at(r)).collect();
        assert_eq!(rounds, vec![3, 6, 9]);
    }

    #[test]
    fn test_zero_period_rejected() {
        let config = GameConfig::default().with_rotation_period(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroRotationPeriod));
        assert!(!config.rotates_at(3));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_rotation(Rotation::CounterClockwise);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
