//! Headless mode - NDJSON event output for scripted runs
//!
//! The list runs without a terminal UI. Commands are read from stdin one
//! per line and every engine event is written to stdout as one JSON
//! object per line.
//!
//! # Example Output
//!
//! ```json
//! {"event":"list_loaded","count":2,"timestamp":1704700001000}
//! {"event":"row","id":"1","title":"Work (email)","subtitle":"work@example.com","icon":null,"actions":["Edit","Delete","Send Test"],"inline_reactivate":false,"timestamp":1704700001000}
//! {"event":"dialog_opened","kind":"verify","id":"2","timestamp":1704700002000}
//! ```

pub mod command;
pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;

use cmlist_app::{EngineEvent, RowDescriptor, StatusIcon};
use cmlist_core::prelude::*;
use cmlist_core::{Breakpoint, ContactMethodId};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A fetch completed; followed by one `row` event per row
    ListLoaded { count: usize, timestamp: i64 },

    /// A fetch failed
    ListError { message: String, timestamp: i64 },

    /// One rendered row, in display order
    Row {
        id: ContactMethodId,
        title: String,
        subtitle: String,
        icon: Option<&'static str>,
        actions: Vec<&'static str>,
        inline_reactivate: bool,
        timestamp: i64,
    },

    BreakpointChanged {
        breakpoint: Breakpoint,
        timestamp: i64,
    },

    DialogOpened {
        kind: String,
        id: ContactMethodId,
        timestamp: i64,
    },

    DialogClosed {
        kind: String,
        id: ContactMethodId,
        timestamp: i64,
    },

    TestSendStarted { id: ContactMethodId, timestamp: i64 },

    TestSendSucceeded { id: ContactMethodId, timestamp: i64 },

    TestSendFailed {
        id: ContactMethodId,
        error: String,
        timestamp: i64,
    },

    ErrorDialogDismissed { timestamp: i64 },

    /// The list was unmounted
    Shutdown { timestamp: i64 },

    /// Bad command or startup failure
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Emit this event to stdout
    pub fn emit(&self) {
        if let Err(e) = self.write_to(&mut io::stdout().lock()) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn row(row: &RowDescriptor) -> Self {
        Self::Row {
            id: row.id.clone(),
            title: row.title.clone(),
            subtitle: row.subtitle.clone(),
            icon: row.icon.as_ref().map(|icon| match icon {
                StatusIcon::Warning => "warning",
                StatusIcon::ReactivateControl { .. } => "reactivate",
            }),
            actions: row
                .actions
                .iter()
                .flatten()
                .map(|action| action.label)
                .collect(),
            inline_reactivate: row.inline_reactivate.is_some(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// The headless form of an engine event. `ListLoaded` is returned
    /// without its rows; the runner appends them from the current state.
    pub fn from_engine_event(event: EngineEvent) -> Self {
        let timestamp = Self::now();
        match event {
            EngineEvent::ListLoaded { count } => Self::ListLoaded { count, timestamp },
            EngineEvent::ListError { message } => Self::ListError { message, timestamp },
            EngineEvent::BreakpointChanged { breakpoint } => Self::BreakpointChanged {
                breakpoint,
                timestamp,
            },
            EngineEvent::DialogOpened { kind, id } => Self::DialogOpened {
                kind: kind.label().to_string(),
                id,
                timestamp,
            },
            EngineEvent::DialogClosed { kind, id } => Self::DialogClosed {
                kind: kind.label().to_string(),
                id,
                timestamp,
            },
            EngineEvent::TestSendStarted { id } => Self::TestSendStarted { id, timestamp },
            EngineEvent::TestSendSucceeded { id } => Self::TestSendSucceeded { id, timestamp },
            EngineEvent::TestSendFailed { id, message } => Self::TestSendFailed {
                id,
                error: message,
                timestamp,
            },
            EngineEvent::ErrorDialogDismissed => Self::ErrorDialogDismissed { timestamp },
            EngineEvent::Shutdown => Self::Shutdown { timestamp },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmlist_app::test_utils::{disabled_cm, loaded_state};
    use cmlist_app::view_model::row;
    use cmlist_app::DialogKind;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let mut out = Vec::new();
        event.write_to(&mut out).expect("write failed");
        assert_eq!(out.last(), Some(&b'\n'));
        serde_json::from_slice(&out).expect("invalid JSON")
    }

    #[test]
    fn test_dialog_opened_serialization() {
        let event = HeadlessEvent::from_engine_event(EngineEvent::DialogOpened {
            kind: DialogKind::Verify,
            id: ContactMethodId::from("2"),
        });

        let value = to_value(&event);

        assert_eq!(value["event"], "dialog_opened");
        assert_eq!(value["kind"], "verify");
        assert_eq!(value["id"], "2");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_test_send_failed_serialization() {
        let event = HeadlessEvent::from_engine_event(EngineEvent::TestSendFailed {
            id: ContactMethodId::from("2"),
            message: "network timeout".to_string(),
        });

        let value = to_value(&event);

        assert_eq!(value["event"], "test_send_failed");
        assert_eq!(value["error"], "network timeout");
    }

    #[test]
    fn test_breakpoint_serialization() {
        let event = HeadlessEvent::from_engine_event(EngineEvent::BreakpointChanged {
            breakpoint: Breakpoint::Lg,
        });

        assert_eq!(to_value(&event)["breakpoint"], "lg");
    }

    #[test]
    fn test_disabled_row_serialization() {
        let state = loaded_state(vec![disabled_cm("2", "Home")]);
        let cm = state.sorted_contact_methods().remove(0);

        let value = to_value(&HeadlessEvent::row(&row(&cm, &state.context)));

        assert_eq!(value["event"], "row");
        assert_eq!(value["title"], "Home (sms) - Disabled");
        assert_eq!(value["icon"], "reactivate");
        assert!(value["actions"].is_array());
    }

    #[test]
    fn test_error_serialization() {
        let value = to_value(&HeadlessEvent::error("Unknown command: foo", false));

        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "Unknown command: foo");
        assert_eq!(value["fatal"], false);
    }
}
