//! REST API endpoint handlers for the query server.
//!
//! All handlers read from the shared repository via [`AppState`]. The
//! projection is read-only: nothing here mutates game state.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/ping` | Liveness probe, returns `pong!` |
//! | `GET` | `/games` | List all games with rosters and kill counts |
//! | `GET` | `/games/{uid}` | Get a single game |

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use fraglog_store::GameRepository;
use fraglog_types::{Game, GameUid};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Liveness probe.
#[allow(clippy::unused_async)] // Axum handlers are async even without awaits
pub async fn ping() -> &'static str {
    "pong!"
}

/// List all games in log order, with roster and per-player kill counts.
pub async fn list_games(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let repository = state.repository.read().await;

    let games: Vec<serde_json::Value> = repository.games().iter().map(game_to_json).collect();

    Json(serde_json::json!({
        "games": games,
    }))
}

/// Return a single game by uid, or a 404 if the uid is unknown.
pub async fn get_game_by_uid(
    State(state): State<Arc<AppState>>,
    Path(uid_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    // A path segment that is not a UUID can name no game; same 404 as
    // a well-formed unknown uid.
    let uid: GameUid = uid_str
        .parse::<Uuid>()
        .map_err(|_| ApiError::GameNotFound)?
        .into();

    let repository = state.repository.read().await;
    let game = repository.get_game_by_uid(&uid)?;

    Ok(Json(game_to_json(&game)))
}

/// Project a game to its wire shape: uid, totals, player name list,
/// and a name-to-kills map.
fn game_to_json(game: &Game) -> serde_json::Value {
    let players: Vec<&str> = game.players.iter().map(|p| p.name.as_str()).collect();
    let kills: serde_json::Map<String, serde_json::Value> = game
        .players
        .iter()
        .map(|p| (p.name.clone(), serde_json::Value::from(p.kills)))
        .collect();

    serde_json::json!({
        "uid": game.uid,
        "total_kills": game.total_kills,
        "is_shut_down": game.is_shut_down,
        "created_at": game.created_at,
        "players": players,
        "kills": kills,
    })
}
