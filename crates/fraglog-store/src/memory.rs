//! In-process implementation of [`GameRepository`].
//!
//! Games live in a `BTreeMap` keyed by [`GameUid`]. Uids are UUID v7
//! (time-ordered), so map iteration order is creation order and the
//! query API lists games as they appeared in the log.

use std::collections::BTreeMap;

use fraglog_types::{Game, GameUid};
use tracing::debug;

use crate::error::StoreError;
use crate::repository::GameRepository;

/// In-memory game store. State lives for the process lifetime only.
#[derive(Debug, Default)]
pub struct MemoryGameRepository {
    store: BTreeMap<GameUid, Game>,
    active_game_uid: Option<GameUid>,
}

impl MemoryGameRepository {
    /// Create an empty repository with no active game.
    pub const fn new() -> Self {
        Self {
            store: BTreeMap::new(),
            active_game_uid: None,
        }
    }
}

impl GameRepository for MemoryGameRepository {
    fn games(&self) -> Vec<Game> {
        self.store.values().cloned().collect()
    }

    fn get_game_by_uid(&self, uid: &GameUid) -> Result<Game, StoreError> {
        self.store
            .get(uid)
            .cloned()
            .ok_or(StoreError::GameDoesNotExist)
    }

    fn get_active_game(&self) -> Result<Game, StoreError> {
        let uid = self.active_game_uid.ok_or(StoreError::GameDoesNotExist)?;
        self.get_game_by_uid(&uid)
    }

    fn add(&mut self, game: Game) {
        let uid = game.uid;
        self.store.insert(uid, game);
        // The pointer is set together with the insert so it can never
        // name a missing entry.
        self.active_game_uid = Some(uid);
        debug!(%uid, games = self.store.len(), "game added and made active");
    }

    fn update(&mut self, game: Game) -> Result<(), StoreError> {
        if !self.store.contains_key(&game.uid) {
            return Err(StoreError::GameDoesNotExist);
        }
        self.store.insert(game.uid, game);
        Ok(())
    }

    fn len(&self) -> usize {
        self.store.len()
    }
}
