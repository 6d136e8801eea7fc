//! The repository contract shared by ingestion and the query layer.

use fraglog_types::{Game, GameUid};

use crate::error::StoreError;

/// Keyed store of games plus the active-game pointer.
///
/// Lookups return owned snapshots rather than references: an event
/// handler mutates its copy and writes it back through [`update`],
/// which is the single point where a transactional backend would
/// persist. Handlers must not hold a snapshot across events -- the next
/// event may replace the active game.
///
/// Invariant: the active-game pointer, once set by [`add`], always
/// refers to an existing entry.
///
/// [`add`]: GameRepository::add
/// [`update`]: GameRepository::update
pub trait GameRepository {
    /// All games, in creation order.
    fn games(&self) -> Vec<Game>;

    /// Snapshot of the game with the given uid.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::GameDoesNotExist`] if the uid is unknown.
    fn get_game_by_uid(&self, uid: &GameUid) -> Result<Game, StoreError>;

    /// Snapshot of the currently active game.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::GameDoesNotExist`] if no game has been
    /// added yet.
    fn get_active_game(&self) -> Result<Game, StoreError>;

    /// Insert a game and atomically make it the active one.
    fn add(&mut self, game: Game);

    /// Persist a mutated game snapshot, replacing the stored entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::GameDoesNotExist`] if the game's uid was
    /// never added.
    fn update(&mut self, game: Game) -> Result<(), StoreError>;

    /// Number of games in the store.
    fn len(&self) -> usize;

    /// Whether the store holds no games.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
