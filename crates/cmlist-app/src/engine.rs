//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the controller state, the message channel, the shutdown
//! signal and the backend service. Both runners feed it messages and read
//! state (TUI) or events (headless) back out.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use tracing::info;

use cmlist_core::{Breakpoint, ContactMethodId, UserId};

use crate::config::Settings;
use crate::dialog::{ActiveDialog, DialogKind};
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::services::ContactMethodService;
use crate::state::AppState;
use crate::test_send::TestSendError;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit the matching EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    fetch_count: u64,
    row_count: usize,
    query_error: Option<String>,
    breakpoint: Breakpoint,
    dialog: ActiveDialog,
    dispatch_count: u64,
    success_count: u64,
    failure_count: u64,
    pending_id: Option<ContactMethodId>,
    last_success: Option<ContactMethodId>,
    last_error: Option<TestSendError>,
    error_dialog_visible: bool,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            fetch_count: state.query.fetch_count,
            row_count: state.row_count(),
            query_error: state.query.error.clone(),
            breakpoint: state.context.breakpoint,
            dialog: state.dialog.clone(),
            dispatch_count: state.test_send.dispatch_count,
            success_count: state.test_send.success_count,
            failure_count: state.test_send.failure_count,
            pending_id: state.test_send.pending_id().cloned(),
            last_success: state.test_send.last_success.clone(),
            last_error: state.test_send.last_error.clone(),
            error_dialog_visible: state.test_send.error_dialog_visible,
        }
    }
}

/// Orchestration engine for the contact method list.
///
/// Encapsulates everything shared between the TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Shutdown signaling
/// - Backend service
/// - Event broadcasting for external consumers
pub struct Engine<S> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Sender for the shutdown signal. Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    /// Settings the engine was created with
    pub settings: Settings,

    service: Arc<S>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<S> Engine<S>
where
    S: ContactMethodService + Sync + 'static,
{
    /// Create a new Engine for a user's contact method list.
    pub fn new(user_id: impl Into<UserId>, settings: Settings, service: Arc<S>) -> Self {
        let state = AppState::with_settings(user_id, &settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            settings,
            service,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Mount the list: issue the initial fetch.
    pub fn mount(&mut self) {
        info!("Mounting contact method list for {}", self.state.user_id);
        self.process_message(Message::Refresh);
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Emits EngineEvents based on state changes detected by comparing
    /// before/after snapshots.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.service,
            &self.shutdown_rx,
        );

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Get a clone of the shutdown receiver for background tasks.
    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    /// Unmount: signal background tasks so late results are dropped, then
    /// discard dialog and test-send state.
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        let _ = self.shutdown_tx.send(true);
        self.state.unmount();
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        self.emit_list_events(pre, post);
        self.emit_test_send_events(pre, post);

        if pre.error_dialog_visible && !post.error_dialog_visible {
            self.emit(EngineEvent::ErrorDialogDismissed);
        }
    }

    fn emit_list_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.fetch_count > pre.fetch_count {
            self.emit(EngineEvent::ListLoaded {
                count: post.row_count,
            });
        }

        if post.query_error != pre.query_error {
            if let Some(message) = &post.query_error {
                self.emit(EngineEvent::ListError {
                    message: message.clone(),
                });
            }
        }

        if post.breakpoint != pre.breakpoint {
            self.emit(EngineEvent::BreakpointChanged {
                breakpoint: post.breakpoint,
            });
        }

        if post.dialog != pre.dialog {
            if let Some((kind, id)) = pre.dialog.current() {
                self.emit_dialog(kind, id, false);
            }
            if let Some((kind, id)) = post.dialog.current() {
                self.emit_dialog(kind, id, true);
            }
        }
    }

    /// One event per dispatch and per result, keyed off the counters so
    /// repeated sends to the same id are not collapsed.
    fn emit_test_send_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.dispatch_count > pre.dispatch_count {
            if let Some(id) = &post.pending_id {
                self.emit(EngineEvent::TestSendStarted { id: id.clone() });
            }
        }

        if post.success_count > pre.success_count {
            if let Some(id) = &post.last_success {
                self.emit(EngineEvent::TestSendSucceeded { id: id.clone() });
            }
        }

        if post.failure_count > pre.failure_count {
            if let Some(error) = &post.last_error {
                self.emit(EngineEvent::TestSendFailed {
                    id: error.id.clone(),
                    message: error.message.clone(),
                });
            }
        }
    }

    fn emit_dialog(&self, kind: DialogKind, id: &ContactMethodId, opened: bool) {
        let id = id.clone();
        self.emit(if opened {
            EngineEvent::DialogOpened { kind, id }
        } else {
            EngineEvent::DialogClosed { kind, id }
        });
    }

    /// send() returns Err only if there are no receivers, which is fine.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
