//! Query API server for Fraglog.
//!
//! This crate provides an Axum HTTP server that exposes a read-only
//! projection of the game repository:
//!
//! - `GET /ping` -- liveness probe
//! - `GET /games` -- all games with rosters and kill counts
//! - `GET /games/{uid}` -- a single game, or 404
//!
//! # Architecture
//!
//! Handlers read from the shared repository behind an async `RwLock`
//! in [`AppState`](state::AppState). Ingestion completes before the
//! server starts in the current deployment, but reads are safe at any
//! time and never mutate state.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
