//! Row selection and action menu handlers

use tracing::debug;

use crate::catalog::{compute_actions, status_icon};
use crate::state::{ActionMenuState, AppState};

use super::UpdateResult;

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    let count = state.row_count();
    if count > 0 && state.selected + 1 < count {
        state.selected += 1;
    }
    UpdateResult::none()
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    state.selected = state.selected.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_select_first(state: &mut AppState) -> UpdateResult {
    state.selected = 0;
    UpdateResult::none()
}

pub fn handle_select_last(state: &mut AppState) -> UpdateResult {
    state.selected = state.row_count().saturating_sub(1);
    UpdateResult::none()
}

/// Run the selected row's status icon, when it is interactive
pub fn handle_activate_status_icon(state: &mut AppState) -> UpdateResult {
    let Some(cm) = state.selected_contact_method() else {
        return UpdateResult::none();
    };
    match status_icon(&cm, state.context.read_only).and_then(|icon| icon.on_activate().cloned()) {
        Some(msg) => UpdateResult::message(msg),
        None => UpdateResult::none(),
    }
}

/// Open the menu for the selected row. Read-only viewers have no menu.
pub fn handle_open_action_menu(state: &mut AppState) -> UpdateResult {
    if state.context.read_only {
        debug!("Action menu suppressed for read-only viewer");
        return UpdateResult::none();
    }
    if let Some(cm) = state.selected_contact_method() {
        state.action_menu = Some(ActionMenuState {
            id: cm.id,
            highlighted: 0,
        });
    }
    UpdateResult::none()
}

fn menu_len(state: &AppState) -> usize {
    state
        .action_menu
        .as_ref()
        .and_then(|menu| state.contact_method(&menu.id))
        .map(|cm| compute_actions(cm, state.context.read_only).len())
        .unwrap_or(0)
}

pub fn handle_action_menu_next(state: &mut AppState) -> UpdateResult {
    let len = menu_len(state);
    if let Some(menu) = state.action_menu.as_mut() {
        if len > 0 {
            menu.highlighted = (menu.highlighted + 1) % len;
        }
    }
    UpdateResult::none()
}

pub fn handle_action_menu_previous(state: &mut AppState) -> UpdateResult {
    let len = menu_len(state);
    if let Some(menu) = state.action_menu.as_mut() {
        if len > 0 {
            menu.highlighted = (menu.highlighted + len - 1) % len;
        }
    }
    UpdateResult::none()
}

/// Close the menu and dispatch the highlighted action's effect
pub fn handle_action_menu_confirm(state: &mut AppState) -> UpdateResult {
    let Some(menu) = state.action_menu.take() else {
        return UpdateResult::none();
    };
    let action = state
        .contact_method(&menu.id)
        .map(|cm| compute_actions(cm, state.context.read_only))
        .and_then(|actions| actions.into_iter().nth(menu.highlighted));

    match action {
        Some(action) => {
            debug!("Action menu: {} on {}", action.label, menu.id);
            UpdateResult::message(action.message)
        }
        None => UpdateResult::none(),
    }
}
