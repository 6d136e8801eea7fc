//! Event-sourcing pipeline for Quake-style game server logs.
//!
//! The pipeline is a sequential fold over an ordered stream of log
//! lines. For each line:
//!
//! 1. the [classifier](classifier) maps the raw line to a tracked
//!    [`EventType`](fraglog_types::EventType), or reports it unmapped;
//! 2. the [driver](driver) looks up the handler registered for that
//!    tag (one handler per tag, fixed at construction);
//! 3. the [handler](handlers) mutates the active game through the
//!    repository and persists the result.
//!
//! Failures are contained within one line's processing: unmapped event
//! types, malformed kill bodies, and out-of-order records are counted,
//! logged, and skipped. Only an unreadable input stream aborts a run.

pub mod classifier;
pub mod driver;
pub mod error;
pub mod handlers;

pub use classifier::classify;
pub use driver::{LogParser, ParseReport};
pub use error::{ClassifyError, HandlerError, ParserError};
