//! Axum router construction for the query API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the query server.
///
/// The router includes:
/// - `GET /ping` -- liveness probe
/// - `GET /games` -- list all games
/// - `GET /games/{uid}` -- single game
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/games", get(handlers::list_games))
        .route("/games/{uid}", get(handlers::get_game_by_uid))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
