//! Raw log line to event tag classification.
//!
//! Two pattern rules, checked in order:
//!
//! 1. The dashed separator line the server prints at match boundaries
//!    (`20:37 ------------...`) classifies as
//!    [`EventType::ShutdownGame`] and takes precedence over the
//!    generic rule.
//! 2. Otherwise the leading `<timestamp> <EventName>:` header is
//!    extracted and the name mapped against the tracked set.
//!
//! Anything else -- unknown event names, lines with no timestamp
//! header -- is [`ClassifyError::EventTypeNotMapped`], which the driver
//! treats as skip-and-continue.

use std::sync::LazyLock;

use fraglog_types::EventType;
use regex::Regex;

use crate::error::ClassifyError;

/// Match-boundary separator: optional leading text, then a timestamp
/// followed by only space/dash filler to end of line.
#[allow(clippy::expect_used)] // the pattern is a literal and always compiles
static SHUTDOWN_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\s.*)?\d{1,3}:\d{2} [ -]+$").expect("separator pattern compiles")
});

/// Generic `<timestamp> <EventName>:` event header.
#[allow(clippy::expect_used)] // the pattern is a literal and always compiles
static EVENT_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d{1,3}:\d{2}\s+(?P<event_type>\w+):").expect("header pattern compiles")
});

/// Classify one raw log line as a tracked event tag.
///
/// # Errors
///
/// Returns [`ClassifyError::EventTypeNotMapped`] for any line outside
/// the tracked grammar. This is the expected outcome for most lines of
/// a real server log and must not abort the pipeline.
pub fn classify(line: &str) -> Result<EventType, ClassifyError> {
    if SHUTDOWN_SEPARATOR.is_match(line) {
        return Ok(EventType::ShutdownGame);
    }

    EVENT_HEADER
        .captures(line)
        .and_then(|captures| captures.name("event_type"))
        .and_then(|name| EventType::from_event_name(name.as_str()))
        .ok_or(ClassifyError::EventTypeNotMapped)
}
