//! Main update function - handles state transitions (TEA pattern)
//!
//! Navigation and action-menu handlers live in `navigation`; key mapping
//! lives in `keys`.

use tracing::{debug, info};

use cmlist_core::ContactMethod;

use crate::message::Message;
use crate::state::{AppState, Phase};

use super::{keys::handle_key, navigation, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = Phase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Query Messages
        // ─────────────────────────────────────────────────────────
        Message::Refresh => {
            state.query.loading = true;
            state.query.error = None;
            UpdateResult::action(UpdateAction::FetchContactMethods {
                user_id: state.user_id.clone(),
            })
        }

        Message::ContactMethodsLoaded { methods } => {
            handle_contact_methods_loaded(state, methods);
            UpdateResult::none()
        }

        Message::ContactMethodsFetchFailed { error } => {
            state.query.loading = false;
            state.query.error = Some(error);
            UpdateResult::none()
        }

        Message::BreakpointChanged(breakpoint) => {
            if state.context.breakpoint != breakpoint {
                debug!("Breakpoint {} -> {}", state.context.breakpoint, breakpoint);
                state.context.breakpoint = breakpoint;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dialog Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenDialog { kind, id } => {
            state.action_menu = None;
            state.dialog.open(kind, id);
            UpdateResult::none()
        }

        Message::CloseDialog { kind } => {
            state.dialog.close(kind);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Test-Send Messages
        // ─────────────────────────────────────────────────────────
        Message::SendTest { id } => {
            state.action_menu = None;
            state.test_send.begin(id.clone());
            UpdateResult::action(UpdateAction::SendTest { id })
        }

        Message::TestSendCompleted { id } => {
            state.test_send.succeed(id);
            UpdateResult::none()
        }

        Message::TestSendFailed { id, error } => {
            state.test_send.fail(id, error);
            UpdateResult::none()
        }

        Message::DismissTestSendError => {
            state.test_send.dismiss_error();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => navigation::handle_select_next(state),
        Message::SelectPrevious => navigation::handle_select_previous(state),
        Message::SelectFirst => navigation::handle_select_first(state),
        Message::SelectLast => navigation::handle_select_last(state),
        Message::ActivateStatusIcon => navigation::handle_activate_status_icon(state),

        Message::OpenActionMenu => navigation::handle_open_action_menu(state),
        Message::CloseActionMenu => {
            state.action_menu = None;
            UpdateResult::none()
        }
        Message::ActionMenuNext => navigation::handle_action_menu_next(state),
        Message::ActionMenuPrevious => navigation::handle_action_menu_previous(state),
        Message::ActionMenuConfirm => navigation::handle_action_menu_confirm(state),
    }
}

/// Replace the list and drop UI state that points at vanished rows.
///
/// An open dialog whose target is gone is closed; so is an action menu.
/// A pending test-send is left alone, its result still drives the error
/// dialog.
fn handle_contact_methods_loaded(state: &mut AppState, methods: Vec<ContactMethod>) {
    info!(
        "Loaded {} contact methods for {}",
        methods.len(),
        state.user_id
    );
    state.query.loading = false;
    state.query.error = None;
    state.query.data = Some(methods);
    state.query.fetch_count += 1;
    state.clamp_selection();

    if let Some((kind, id)) = state.dialog.current() {
        if !state.query.contains(id) {
            info!(
                "Closing {} dialog: contact method {} no longer exists",
                kind, id
            );
            state.dialog.close_all();
        }
    }

    let menu_target_gone = state
        .action_menu
        .as_ref()
        .is_some_and(|menu| !state.query.contains(&menu.id));
    if menu_target_gone {
        state.action_menu = None;
    }
}
