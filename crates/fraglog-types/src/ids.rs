//! Type-safe identifier wrapper around [`Uuid`].
//!
//! Games are keyed by an opaque unique identifier generated when the
//! `InitGame` event is handled. UUID v7 (time-ordered) keeps a
//! `BTreeMap<GameUid, Game>` iterating in creation order, so the query
//! API lists games in the order they appeared in the log.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single game in the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameUid(pub Uuid);

impl GameUid {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for GameUid {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for GameUid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for GameUid {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<GameUid> for Uuid {
    fn from(id: GameUid) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_is_nonzero() {
        let uid = GameUid::new();
        assert_ne!(uid.into_inner(), Uuid::nil());
    }

    #[test]
    fn uid_roundtrip_serde() {
        let original = GameUid::new();
        let json = serde_json::to_string(&original).ok();
        assert!(json.is_some());
        let restored: Result<GameUid, _> = serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(original));
    }

    #[test]
    fn uid_display_matches_uuid() {
        let uid = GameUid::new();
        assert_eq!(uid.to_string(), uid.into_inner().to_string());
    }

    #[test]
    fn uids_are_time_ordered() {
        // v7 UUIDs sort by creation time, which is what keeps the
        // repository's BTreeMap in log order.
        let first = GameUid::new();
        let second = GameUid::new();
        assert!(first <= second);
    }
}
