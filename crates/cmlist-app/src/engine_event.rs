//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use cmlist_core::{Breakpoint, ContactMethodId};

use crate::dialog::DialogKind;

/// Domain events emitted by the Engine
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Query
    // ─────────────────────────────────────────────────────────
    /// A fetch completed and replaced the list
    ListLoaded { count: usize },

    /// A fetch failed
    ListError { message: String },

    /// The viewport width class changed
    BreakpointChanged { breakpoint: Breakpoint },

    // ─────────────────────────────────────────────────────────
    // Dialog Selector
    // ─────────────────────────────────────────────────────────
    DialogOpened {
        kind: DialogKind,
        id: ContactMethodId,
    },

    DialogClosed {
        kind: DialogKind,
        id: ContactMethodId,
    },

    // ─────────────────────────────────────────────────────────
    // Test-Send
    // ─────────────────────────────────────────────────────────
    TestSendStarted { id: ContactMethodId },

    TestSendSucceeded { id: ContactMethodId },

    /// A test-send failed and the error dialog was raised
    TestSendFailed {
        id: ContactMethodId,
        message: String,
    },

    ErrorDialogDismissed,

    // ─────────────────────────────────────────────────────────
    // Engine Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ListLoaded { .. } => "list_loaded",
            Self::ListError { .. } => "list_error",
            Self::BreakpointChanged { .. } => "breakpoint_changed",
            Self::DialogOpened { .. } => "dialog_opened",
            Self::DialogClosed { .. } => "dialog_closed",
            Self::TestSendStarted { .. } => "test_send_started",
            Self::TestSendSucceeded { .. } => "test_send_succeeded",
            Self::TestSendFailed { .. } => "test_send_failed",
            Self::ErrorDialogDismissed => "error_dialog_dismissed",
            Self::Shutdown => "shutdown",
        }
    }
}
