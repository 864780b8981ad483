//! Application telemetry events and sinks.
//!
//! Reviewdesk is a local tool, but it still records lightweight operational
//! signals such as the active database schema version and moderation
//! outcomes. Events are structured so they can be emitted as JSON lines.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by reviewdesk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records the current database schema version after migrations apply.
    SchemaVersionRecorded {
        /// Diesel migration version string (e.g. `20261002000000`).
        schema_version: String,
    },
    /// A review was stored.
    ReviewCreated {
        /// Identifier assigned to the new review.
        review_id: i64,
        /// Rating given in the review.
        rating: u8,
    },
    /// A delete request passed the admin gate.
    ReviewDeleted {
        /// Identifier the delete targeted.
        review_id: i64,
        /// Whether a row was actually removed.
        removed: bool,
    },
    /// An admin comment was written.
    AdminCommentSet {
        /// Identifier the comment targeted.
        review_id: i64,
        /// Whether a row was actually updated.
        updated: bool,
    },
    /// An admin action was refused because the secret did not match.
    AdminActionRejected {
        /// Name of the refused action (`delete` or `comment`).
        action: String,
        /// Identifier the action targeted.
        review_id: i64,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Test helpers for capturing telemetry.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::{Arc, Mutex};

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    ///
    /// Clones share the same event buffer.
    #[derive(Debug, Default, Clone)]
    pub struct RecordingTelemetrySink {
        events: Arc<Mutex<Vec<TelemetryEvent>>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a snapshot of the recorded events.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}
