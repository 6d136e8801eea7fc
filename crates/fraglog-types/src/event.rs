//! The closed set of log event types the pipeline tracks.
//!
//! The game server emits many more event kinds (item pickups, client
//! connects, chat). Only the three below mutate game state; everything
//! else is classified as unmapped and skipped by the driver.

use serde::{Deserialize, Serialize};

/// A tracked event tag, extracted from one raw log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// A new game started. Creates a fresh [`Game`](crate::Game) and
    /// makes it the active mutation target.
    InitGame,
    /// The active game ended, either via an explicit `ShutdownGame:`
    /// line or the dashed separator line that closes a match.
    ShutdownGame,
    /// One player (or the world) killed another.
    Kill,
}

impl EventType {
    /// Map a raw event name from the log to a tracked tag.
    ///
    /// Returns `None` for event kinds outside the tracked set, which is
    /// the common case for a real server log.
    pub fn from_event_name(name: &str) -> Option<Self> {
        match name {
            "InitGame" => Some(Self::InitGame),
            "ShutdownGame" => Some(Self::ShutdownGame),
            "Kill" => Some(Self::Kill),
            _ => None,
        }
    }

    /// The event name as it appears in the log.
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::InitGame => "InitGame",
            Self::ShutdownGame => "ShutdownGame",
            Self::Kill => "Kill",
        }
    }
}

impl core::fmt::Display for EventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.event_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracked_names_map_to_tags() {
        assert_eq!(
            EventType::from_event_name("InitGame"),
            Some(EventType::InitGame)
        );
        assert_eq!(
            EventType::from_event_name("ShutdownGame"),
            Some(EventType::ShutdownGame)
        );
        assert_eq!(EventType::from_event_name("Kill"), Some(EventType::Kill));
    }

    #[test]
    fn untracked_names_are_unmapped() {
        assert_eq!(EventType::from_event_name("Item"), None);
        assert_eq!(EventType::from_event_name("ClientConnect"), None);
        assert_eq!(EventType::from_event_name(""), None);
        // Matching is exact, not case-insensitive.
        assert_eq!(EventType::from_event_name("kill"), None);
    }

    #[test]
    fn name_roundtrip() {
        for tag in [EventType::InitGame, EventType::ShutdownGame, EventType::Kill] {
            assert_eq!(EventType::from_event_name(tag.event_name()), Some(tag));
        }
    }
}
