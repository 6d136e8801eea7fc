//! The log driver: reads lines, classifies, and dispatches to handlers.
//!
//! Pure sequential iteration with no state beyond "has more lines".
//! Registration is static: exactly one handler per tracked tag, fixed
//! at construction. No error crosses the per-line boundary -- unmapped
//! lines and handler failures are counted in the [`ParseReport`] and
//! skipped, so one bad record never aborts the whole parse.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fraglog_store::GameRepository;
use fraglog_types::EventType;
use tracing::{debug, warn};

use crate::classifier::classify;
use crate::error::ParserError;
use crate::handlers::{EventHandler, InitGameHandler, KillHandler, ShutdownGameHandler};

/// Counters describing one ingestion run.
///
/// `lines_skipped` covers lines outside the tracked grammar (the
/// common case); `lines_failed` covers tracked events a handler could
/// not apply (malformed kill bodies, kills before any init). Both are
/// surfaced so that dropped records are observable rather than silent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Total lines read from the input.
    pub lines_read: u64,
    /// Lines classified and applied successfully.
    pub events_handled: u64,
    /// Lines whose event type is not tracked.
    pub lines_skipped: u64,
    /// Tracked events that failed in their handler.
    pub lines_failed: u64,
}

/// Line-oriented log reader and event dispatcher.
pub struct LogParser {
    handlers: BTreeMap<EventType, Box<dyn EventHandler>>,
}

impl LogParser {
    /// Create a driver with the standard handler registration: one
    /// handler for each tracked event tag.
    pub fn new() -> Self {
        let mut handlers: BTreeMap<EventType, Box<dyn EventHandler>> = BTreeMap::new();
        handlers.insert(EventType::InitGame, Box::new(InitGameHandler));
        handlers.insert(EventType::ShutdownGame, Box::new(ShutdownGameHandler));
        handlers.insert(EventType::Kill, Box::new(KillHandler));
        Self { handlers }
    }

    /// Ingest a log file into the repository.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::Io`] if the file cannot be opened or
    /// read. Per-line failures never abort the run; they are reported
    /// through the returned [`ParseReport`].
    pub fn parse_file(
        &self,
        path: &Path,
        repository: &mut dyn GameRepository,
    ) -> Result<ParseReport, ParserError> {
        let file = File::open(path)?;
        self.parse_reader(BufReader::new(file), repository)
    }

    /// Ingest from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::Io`] if reading a line fails.
    pub fn parse_reader<R: BufRead>(
        &self,
        reader: R,
        repository: &mut dyn GameRepository,
    ) -> Result<ParseReport, ParserError> {
        let mut report = ParseReport::default();
        for line in reader.lines() {
            let line = line?;
            self.parse_line(&line, repository, &mut report);
        }
        Ok(report)
    }

    /// Ingest an in-memory log, one event per line.
    pub fn parse_str(&self, log: &str, repository: &mut dyn GameRepository) -> ParseReport {
        let mut report = ParseReport::default();
        for line in log.lines() {
            self.parse_line(line, repository, &mut report);
        }
        report
    }

    /// Classify and dispatch one line, containing any failure.
    fn parse_line(&self, line: &str, repository: &mut dyn GameRepository, report: &mut ParseReport) {
        report.lines_read = report.lines_read.saturating_add(1);

        let Ok(event_type) = classify(line) else {
            debug!(line, "event type not mapped, skipping");
            report.lines_skipped = report.lines_skipped.saturating_add(1);
            return;
        };

        let Some(handler) = self.handlers.get(&event_type) else {
            // Unreachable with the standard registration, but a missing
            // handler is still a skip, not an abort.
            warn!(%event_type, "no handler registered, skipping");
            report.lines_skipped = report.lines_skipped.saturating_add(1);
            return;
        };

        match handler.handle(line, repository) {
            Ok(()) => {
                report.events_handled = report.events_handled.saturating_add(1);
            }
            Err(error) => {
                warn!(%event_type, %error, line, "event handling failed, skipping line");
                report.lines_failed = report.lines_failed.saturating_add(1);
            }
        }
    }
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new()
    }
}
