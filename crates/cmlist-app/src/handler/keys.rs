//! Key event handlers, one per focus layer
//!
//! Focus order, topmost first: test-send error dialog, open modal workflow,
//! action menu, list.

use crate::catalog::{find_action, ActionKind};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on what currently has focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.test_send.error_dialog_visible {
        return handle_key_error_dialog(key);
    }
    if state.dialog.is_open() {
        return handle_key_dialog(state, key);
    }
    if state.action_menu.is_some() {
        return handle_key_action_menu(key);
    }
    handle_key_list(state, key)
}

fn handle_key_error_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char('o') => {
            Some(Message::DismissTestSendError)
        }
        _ => None,
    }
}

/// The dialog collaborator owns its content; from here it can only signal
/// that it is done.
fn handle_key_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    let kind = state.dialog.kind()?;
    match key {
        InputKey::Enter | InputKey::Esc => Some(Message::CloseDialog { kind }),
        _ => None,
    }
}

fn handle_key_action_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Down | InputKey::Char('j') | InputKey::Tab => Some(Message::ActionMenuNext),
        InputKey::Up | InputKey::Char('k') | InputKey::BackTab => {
            Some(Message::ActionMenuPrevious)
        }
        InputKey::Enter => Some(Message::ActionMenuConfirm),
        InputKey::Esc | InputKey::Char('m') => Some(Message::CloseActionMenu),
        _ => None,
    }
}

fn handle_key_list(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),
        InputKey::Char('r') => Some(Message::Refresh),
        InputKey::Enter | InputKey::Char('m') => Some(Message::OpenActionMenu),
        InputKey::Char('v') => Some(Message::ActivateStatusIcon),
        InputKey::Char('e') => selected_action(state, ActionKind::Edit),
        InputKey::Char('d') => selected_action(state, ActionKind::Delete),
        InputKey::Char('t') => selected_action(state, ActionKind::SendTest),
        _ => None,
    }
}

/// Shortcut for a catalog action on the selected row; unavailable actions
/// (read-only, or send test on a disabled method) produce nothing.
fn selected_action(state: &AppState, kind: ActionKind) -> Option<Message> {
    let cm = state.selected_contact_method()?;
    find_action(&cm, state.context.read_only, kind).map(|action| action.message)
}
