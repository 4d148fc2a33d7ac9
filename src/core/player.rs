//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe colour identifier for the two players. Player 0 moves first.
//! The raw value doubles as the cell marker on the board, so `PlayerId(0)`
//! owns cells holding `0` and `PlayerId(1)` owns cells holding `1`.

use serde::{Deserialize, Serialize};

use crate::error::InvalidPlayer;

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier (colour 0 or 1).
///
/// Deserialization rejects any other value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(0);
    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The cell marker this player leaves on the board.
    #[must_use]
    pub const fn color(self) -> i8 {
        self.0 as i8
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Iterate over both players in turn order.
    ///
    /// ```
    /// use connect_five::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayer;

    fn try_from(color: u8) -> Result<Self, Self::Error> {
        match color {
            0 | 1 => Ok(Self(color)),
            _ => Err(InvalidPlayer(color)),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.color(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_opponent_flips() {
        assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
        assert_eq!(PlayerId::FIRST.opponent().opponent(), PlayerId::FIRST);
    }

    #[test]
    fn test_try_from_u8() {
        assert_eq!(PlayerId::try_from(0), Ok(PlayerId::FIRST));
        assert_eq!(PlayerId::try_from(1), Ok(PlayerId::SECOND));
        assert_eq!(PlayerId::try_from(2), Err(InvalidPlayer(2)));
    }

    #[test]
    fn test_player_id_serialization() {
        let json = serde_json::to_string(&PlayerId::SECOND).unwrap();
        assert_eq!(json, "1");
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, PlayerId::SECOND);
    }

    #[test]
    fn test_deserialize_rejects_unknown_colour() {
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
        assert!(serde_json::from_str::<PlayerId>("255").is_err());
    }
}
