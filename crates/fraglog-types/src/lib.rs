//! Shared domain types for the Fraglog game-log ingestion service.
//!
//! A match on the game server produces an ordered stream of log lines.
//! Ingestion folds that stream into [`Game`] aggregates: a roster of
//! [`Player`]s, per-player kill counts, and an overall kill total. This
//! crate defines those aggregates plus the closed set of tracked
//! [`EventType`]s; the parser and store crates build on top of them.

pub mod event;
pub mod game;
pub mod ids;
pub mod player;

pub use event::EventType;
pub use game::Game;
pub use ids::GameUid;
pub use player::{Player, WORLD_PLAYER};
