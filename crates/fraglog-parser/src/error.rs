//! Error types for the ingestion pipeline.
//!
//! Everything except [`ParserError::Io`] is a recoverable per-line
//! condition: the driver logs it, counts it in the
//! [`ParseReport`](crate::ParseReport), and moves to the next line.

use fraglog_store::StoreError;

/// A raw line could not be classified as a tracked event.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClassifyError {
    /// The event name is outside the tracked set, or the line has no
    /// leading timestamp header at all. Expected for most lines of a
    /// real server log.
    #[error("event type not mapped")]
    EventTypeNotMapped,
}

/// A handler could not apply an event to the active game.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HandlerError {
    /// A repository lookup failed, e.g. a kill event arrived before
    /// any game was initialized.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The kill event body did not match the
    /// `<killer> killed <killed> by <cause>` grammar.
    #[error("malformed kill body: {0}")]
    MalformedKillBody(String),
}

/// Errors that abort an ingestion run.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    /// The input stream could not be opened or read.
    #[error("failed to read log: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
