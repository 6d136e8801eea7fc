//! Player identity and kill-count tracking.
//!
//! A [`Player`] is identified by name, unique within one game. The
//! environment sentinel [`WORLD_PLAYER`] marks deaths with no killing
//! player (falling damage, triggers, lava); it never joins a roster and
//! never accrues kills of its own.

use serde::{Deserialize, Serialize};

/// Sentinel name the game server uses for environmental deaths.
pub const WORLD_PLAYER: &str = "<world>";

/// A player seen in the log, with their accumulated kill count.
///
/// Created on first reference by a kill event and kept for the lifetime
/// of the game it belongs to. Kill counts never go negative: world-caused
/// deaths subtract with saturation at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player name as it appears in the log. Unique within a game.
    pub name: String,
    /// Number of kills credited to this player, floored at zero.
    pub kills: u32,
}

impl Player {
    /// Create a player with zero kills.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kills: 0,
        }
    }

    /// Whether this player is the environment sentinel.
    pub fn is_world(&self) -> bool {
        self.name == WORLD_PLAYER
    }

    /// Credit kills to this player.
    pub const fn increase_kills(&mut self, count: u32) {
        self.kills = self.kills.saturating_add(count);
    }

    /// Deduct kills from this player, saturating at zero.
    ///
    /// Used when the world kills a player: the victim loses a kill
    /// rather than the environment gaining one.
    pub const fn decrease_kills(&mut self, count: u32) {
        self.kills = self.kills.saturating_sub(count);
    }
}

impl core::fmt::Display for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name)
    }
}
