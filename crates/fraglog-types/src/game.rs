//! The per-match aggregate the pipeline folds kill events into.
//!
//! A [`Game`] owns its roster. Roster membership is by name and
//! idempotent: re-adding a known player is a no-op that preserves the
//! player's accumulated kill count (never a duplicate entry, never a
//! stats reset). The roster keeps insertion order, which is the order
//! players first appeared in the log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::GameUid;
use crate::player::Player;

/// Aggregate state for one game on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Opaque unique identifier, generated when the game is created.
    pub uid: GameUid,
    /// Total kills in this game, including world kills. Monotonically
    /// non-decreasing.
    pub total_kills: u32,
    /// Whether a shutdown event has been seen for this game. One-way
    /// false-to-true transition.
    pub is_shut_down: bool,
    /// Roster of players seen in this game, in order of first
    /// appearance. Unique by name; never contains the world sentinel.
    pub players: Vec<Player>,
    /// When this game was created by ingestion.
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Create an empty game with the given identifier.
    pub fn new(uid: GameUid) -> Self {
        Self {
            uid,
            total_kills: 0,
            is_shut_down: false,
            players: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Add a player to the roster if no player with that name is
    /// present yet.
    ///
    /// Idempotent: an already-rostered name is left untouched, keeping
    /// its kill count.
    pub fn add_player(&mut self, player: Player) {
        if !self.has_player(&player.name) {
            self.players.push(player);
        }
    }

    /// Whether a player with this name is on the roster.
    pub fn has_player(&self, name: &str) -> bool {
        self.players.iter().any(|player| player.name == name)
    }

    /// Look up a rostered player by name.
    pub fn get_player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name == name)
    }

    /// Look up a rostered player by name for mutation.
    pub fn get_player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.name == name)
    }

    /// Count one more kill in this game.
    pub const fn increase_total_kills(&mut self) {
        self.total_kills = self.total_kills.saturating_add(1);
    }

    /// Mark the game as shut down. Idempotent.
    pub const fn shutdown(&mut self) {
        self.is_shut_down = true;
    }
}
