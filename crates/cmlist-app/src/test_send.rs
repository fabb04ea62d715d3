//! Test-send controller state.
//!
//! Tracks the asynchronous "send test" call and its isolated error dialog.
//! This state never touches [`crate::dialog::ActiveDialog`]; the error dialog
//! can be visible while a modal workflow is open.

use tracing::{debug, info, warn};

use cmlist_core::ContactMethodId;

/// Outcome of the most recent test-send call
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TestSendStatus {
    #[default]
    Idle,
    Pending { id: ContactMethodId },
    Succeeded { id: ContactMethodId },
    Failed { id: ContactMethodId },
}

/// Error payload from a failed test-send attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSendError {
    pub id: ContactMethodId,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct TestSendState {
    pub status: TestSendStatus,
    pub last_error: Option<TestSendError>,
    /// Set exactly when an attempt fails, cleared only by dismissal
    pub error_dialog_visible: bool,
    /// Targets of the calls still outstanding, in dispatch order
    in_flight: Vec<ContactMethodId>,
    /// Calls dispatched since mount
    pub dispatch_count: u64,
    /// Calls that succeeded since mount
    pub success_count: u64,
    /// Calls that failed since mount
    pub failure_count: u64,
    /// Target of the most recent successful call
    pub last_success: Option<ContactMethodId>,
}

impl TestSendState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while any backend call is outstanding
    pub fn pending(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Target of the newest outstanding call
    pub fn pending_id(&self) -> Option<&ContactMethodId> {
        self.in_flight.last()
    }

    /// Number of outstanding calls
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Record a dispatch. The previous error is dropped; a new attempt
    /// starts with a clean result.
    pub fn begin(&mut self, id: ContactMethodId) {
        if let Some(prev) = self.pending_id() {
            debug!("Test send for {} overlaps pending call to {}", id, prev);
        }
        info!("Sending test to contact method {}", id);
        self.last_error = None;
        self.dispatch_count += 1;
        self.in_flight.push(id.clone());
        self.status = TestSendStatus::Pending { id };
    }

    pub fn succeed(&mut self, id: ContactMethodId) {
        info!("Test send to {} succeeded", id);
        self.settle(&id);
        self.success_count += 1;
        self.last_success = Some(id.clone());
        if !self.pending() {
            self.status = TestSendStatus::Succeeded { id };
        }
    }

    /// Record a failure and raise the error dialog.
    ///
    /// A failure while other calls are outstanding still raises the
    /// dialog, but leaves the newer call pending.
    pub fn fail(&mut self, id: ContactMethodId, message: impl Into<String>) {
        let message = message.into();
        warn!("Test send to {} failed: {}", id, message);
        self.settle(&id);
        self.failure_count += 1;
        if !self.pending() {
            self.status = TestSendStatus::Failed { id: id.clone() };
        }
        self.last_error = Some(TestSendError { id, message });
        self.error_dialog_visible = true;
    }

    /// Drop one outstanding call to `id`; the status follows the newest
    /// call still in flight.
    fn settle(&mut self, id: &ContactMethodId) {
        match self.in_flight.iter().position(|pending| pending == id) {
            Some(index) => {
                self.in_flight.remove(index);
            }
            None => debug!("Result for {} with no outstanding call", id),
        }
        if let Some(newest) = self.in_flight.last() {
            self.status = TestSendStatus::Pending { id: newest.clone() };
        }
    }

    /// Hide the error dialog. `last_error` stays for diagnostics.
    pub fn dismiss_error(&mut self) {
        self.error_dialog_visible = false;
    }

    /// Message shown in the error dialog body
    pub fn error_message(&self) -> &str {
        self.last_error
            .as_ref()
            .map(|e| e.message.as_str())
            .unwrap_or("")
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
