//! Player identity for the two-mark game.
//!
//! Every cell distribution carries one probability slot per player, so the
//! engine is hardwired to exactly two players. Turn order alternates strictly
//! via [`Player::opponent`].

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First mark.
    A,
    /// Second mark.
    B,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "A"),
            Player::B => write!(f, "B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Player::A.opponent(), Player::B);
        assert_eq!(Player::B.opponent(), Player::A);
        assert_eq!(Player::A.opponent().opponent(), Player::A);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::A), "A");
        assert_eq!(format!("{}", Player::B), "B");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Player::B).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Player::B);
    }
}
