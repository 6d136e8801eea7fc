//! Stateful event handlers, one per tracked event tag.
//!
//! A handler applies one event's mutations to the active game through
//! the repository passed by the driver, then persists the result via
//! `update`. Handlers never retain a game snapshot across calls.

use std::sync::LazyLock;

use fraglog_store::{GameRepository, StoreError};
use fraglog_types::{Game, GameUid, Player, WORLD_PLAYER};
use regex::Regex;
use tracing::{debug, warn};

use crate::error::HandlerError;

/// A polymorphic unit over one event tag's mutation logic.
pub trait EventHandler {
    /// Apply one raw event line to the repository's active game.
    ///
    /// # Errors
    ///
    /// Returns a recoverable [`HandlerError`]; the driver logs it and
    /// continues with the next line.
    fn handle(
        &self,
        raw_line: &str,
        repository: &mut dyn GameRepository,
    ) -> Result<(), HandlerError>;
}

// ---------------------------------------------------------------------------
// InitGame
// ---------------------------------------------------------------------------

/// Handles `InitGame`: creates a fresh game and makes it active.
#[derive(Debug, Default)]
pub struct InitGameHandler;

impl EventHandler for InitGameHandler {
    fn handle(
        &self,
        _raw_line: &str,
        repository: &mut dyn GameRepository,
    ) -> Result<(), HandlerError> {
        let game = Game::new(GameUid::new());
        debug!(uid = %game.uid, "new game started");
        repository.add(game);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ShutdownGame
// ---------------------------------------------------------------------------

/// Handles `ShutdownGame`: flags the active game as shut down.
///
/// A shutdown with no active game is an expected ordering anomaly, not
/// corruption: log streams may begin mid-match, so the leading
/// separator line arrives before any `InitGame`. The event is logged
/// and dropped.
#[derive(Debug, Default)]
pub struct ShutdownGameHandler;

impl EventHandler for ShutdownGameHandler {
    fn handle(
        &self,
        _raw_line: &str,
        repository: &mut dyn GameRepository,
    ) -> Result<(), HandlerError> {
        match repository.get_active_game() {
            Ok(mut game) => {
                game.shutdown();
                repository.update(game)?;
                Ok(())
            }
            Err(StoreError::GameDoesNotExist) => {
                warn!("shutdown event with no active game, dropping (stream may start mid-match)");
                Ok(())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Kill
// ---------------------------------------------------------------------------

/// Kill body grammar: the last colon-delimited span holding
/// `<killer> killed <killed> by <cause>`. Names may contain spaces and
/// are captured greedily up to the literal ` killed ` / ` by ` tokens;
/// the killer may be the `<world>` sentinel.
#[allow(clippy::expect_used)] // the pattern is a literal and always compiles
static KILL_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":\s(?P<killer>[^:]+) killed (?P<killed>.+) by (?P<cause>\S+)\s*$")
        .expect("kill body pattern compiles")
});

/// Handles `Kill`: updates the killer's and victim's counts and the
/// game total.
///
/// Two mutually exclusive mutation rules:
///
/// - world killer: the victim loses one kill (floored at zero) and the
///   world is never rostered;
/// - player killer: the killer is rostered if absent and gains one kill.
///
/// In both cases the victim is rostered (environmental deaths still
/// register the victim as a known player) and `total_kills` grows by
/// one.
#[derive(Debug, Default)]
pub struct KillHandler;

impl KillHandler {
    /// Extract the killer and victim names from a kill event line.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::MalformedKillBody`] if the line does not
    /// match the kill body grammar.
    pub fn player_names(raw_line: &str) -> Result<(String, String), HandlerError> {
        let captures = KILL_BODY
            .captures(raw_line)
            .ok_or_else(|| HandlerError::MalformedKillBody(raw_line.to_owned()))?;
        match (captures.name("killer"), captures.name("killed")) {
            (Some(killer), Some(killed)) => {
                Ok((killer.as_str().to_owned(), killed.as_str().to_owned()))
            }
            _ => Err(HandlerError::MalformedKillBody(raw_line.to_owned())),
        }
    }
}

impl EventHandler for KillHandler {
    fn handle(
        &self,
        raw_line: &str,
        repository: &mut dyn GameRepository,
    ) -> Result<(), HandlerError> {
        let mut game = repository.get_active_game()?;
        let (killer_name, killed_name) = Self::player_names(raw_line)?;

        if killer_name == WORLD_PLAYER {
            // The world is never rostered; the victim pays instead.
            game.add_player(Player::new(killed_name.clone()));
            if let Some(victim) = game.get_player_mut(&killed_name) {
                victim.decrease_kills(1);
            }
        } else {
            game.add_player(Player::new(killer_name.clone()));
            if let Some(killer) = game.get_player_mut(&killer_name) {
                killer.increase_kills(1);
            }
            game.add_player(Player::new(killed_name.clone()));
        }

        game.increase_total_kills();
        repository.update(game)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fraglog_store::MemoryGameRepository;

    use super::*;

    fn repo_with_game() -> MemoryGameRepository {
        let mut repo = MemoryGameRepository::new();
        repo.add(Game::new(GameUid::new()));
        repo
    }

    #[test]
    fn extracts_world_killer() {
        let line = " 1:26 Kill: 1022 4 22: <world> killed Zeh by MOD_TRIGGER_HURT";
        let names = KillHandler::player_names(line);
        assert_eq!(
            names,
            Ok((String::from(WORLD_PLAYER), String::from("Zeh")))
        );
    }

    #[test]
    fn extracts_player_names_with_spaces() {
        let line = " 1:23 Kill: 5 7 7: Oootsimo killed Assasinu Credi by MOD_ROCKET_SPLASH";
        let names = KillHandler::player_names(line);
        assert_eq!(
            names,
            Ok((String::from("Oootsimo"), String::from("Assasinu Credi")))
        );
    }

    #[test]
    fn malformed_kill_body_is_rejected() {
        let line = " 1:23 Kill: 5 7 7: this line lost its grammar";
        let names = KillHandler::player_names(line);
        assert!(matches!(names, Err(HandlerError::MalformedKillBody(_))));
    }

    #[test]
    fn init_game_creates_and_activates() {
        let mut repo = MemoryGameRepository::new();
        let handled = InitGameHandler.handle(
            r"  0:00 InitGame: \sv_floodProtect\1\sv_maxPing\0",
            &mut repo,
        );
        assert_eq!(handled, Ok(()));
        assert_eq!(repo.len(), 1);
        assert!(repo.get_active_game().is_ok());
    }

    #[test]
    fn shutdown_flags_active_game() {
        let mut repo = repo_with_game();
        let handled = ShutdownGameHandler.handle("20:37 ShutdownGame:", &mut repo);
        assert_eq!(handled, Ok(()));
        assert_eq!(repo.get_active_game().map(|g| g.is_shut_down), Ok(true));
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut repo = repo_with_game();
        let first = ShutdownGameHandler.handle("20:37 ShutdownGame:", &mut repo);
        let second = ShutdownGameHandler.handle("20:37 ShutdownGame:", &mut repo);
        assert_eq!(first, Ok(()));
        assert_eq!(second, Ok(()));
        assert_eq!(repo.get_active_game().map(|g| g.is_shut_down), Ok(true));
    }

    #[test]
    fn shutdown_before_init_is_dropped() {
        let mut repo = MemoryGameRepository::new();
        let handled = ShutdownGameHandler.handle("20:37 ShutdownGame:", &mut repo);
        // Must not propagate the missing-game condition, and must not
        // create any state.
        assert_eq!(handled, Ok(()));
        assert!(repo.is_empty());
    }

    #[test]
    fn kill_credits_killer_and_rosters_victim() {
        let mut repo = repo_with_game();
        let handled = KillHandler.handle(
            " 1:23 Kill: 5 7 7: Oootsimo killed Assasinu Credi by MOD_ROCKET_SPLASH",
            &mut repo,
        );
        assert_eq!(handled, Ok(()));

        let game = repo.get_active_game();
        assert!(game.is_ok());
        if let Ok(game) = game {
            assert_eq!(game.total_kills, 1);
            assert_eq!(game.players.len(), 2);
            assert!(game.has_player("Oootsimo"));
            assert!(game.has_player("Assasinu Credi"));
            assert_eq!(game.get_player("Oootsimo").map(|p| p.kills), Some(1));
            assert_eq!(game.get_player("Assasinu Credi").map(|p| p.kills), Some(0));
        }
    }

    #[test]
    fn kills_accumulate_across_events() {
        let mut repo = repo_with_game();
        let first = KillHandler.handle(
            " 1:23 Kill: 5 7 7: Oootsimo killed Assasinu Credi by MOD_ROCKET_SPLASH",
            &mut repo,
        );
        let second = KillHandler.handle(
            " 1:41 Kill: 5 7 7: Oootsimo killed Fulera by MOD_ROCKET_SPLASH",
            &mut repo,
        );
        assert_eq!(first, Ok(()));
        assert_eq!(second, Ok(()));

        let game = repo.get_active_game();
        assert!(game.is_ok());
        if let Ok(game) = game {
            assert_eq!(game.total_kills, 2);
            assert_eq!(game.players.len(), 3);
            assert_eq!(game.get_player("Oootsimo").map(|p| p.kills), Some(2));
        }
    }

    #[test]
    fn world_kill_penalizes_victim_and_stays_off_roster() {
        let mut repo = repo_with_game();
        let handled = KillHandler.handle(
            " 1:26 Kill: 1022 4 22: <world> killed Zeh by MOD_TRIGGER_HURT",
            &mut repo,
        );
        assert_eq!(handled, Ok(()));

        let game = repo.get_active_game();
        assert!(game.is_ok());
        if let Ok(game) = game {
            assert_eq!(game.total_kills, 1);
            assert!(!game.has_player(WORLD_PLAYER));
            assert!(game.has_player("Zeh"));
            // Floored at zero, never negative.
            assert_eq!(game.get_player("Zeh").map(|p| p.kills), Some(0));
        }
    }

    #[test]
    fn world_kill_decrements_an_earned_kill() {
        let mut repo = repo_with_game();
        let earn = KillHandler.handle(
            " 1:10 Kill: 2 3 7: Zeh killed Dono da Bola by MOD_ROCKET",
            &mut repo,
        );
        let lose = KillHandler.handle(
            " 1:26 Kill: 1022 4 22: <world> killed Zeh by MOD_TRIGGER_HURT",
            &mut repo,
        );
        assert_eq!(earn, Ok(()));
        assert_eq!(lose, Ok(()));

        let game = repo.get_active_game();
        assert!(game.is_ok());
        if let Ok(game) = game {
            assert_eq!(game.total_kills, 2);
            assert_eq!(game.get_player("Zeh").map(|p| p.kills), Some(0));
        }
    }

    #[test]
    fn kill_before_init_propagates_missing_game() {
        let mut repo = MemoryGameRepository::new();
        let handled = KillHandler.handle(
            " 1:26 Kill: 1022 4 22: <world> killed Zeh by MOD_TRIGGER_HURT",
            &mut repo,
        );
        assert_eq!(
            handled,
            Err(HandlerError::Store(StoreError::GameDoesNotExist))
        );
    }
}
