//! Test utilities for contact method fixtures
//!
//! Provides helper functions for creating test ContactMethod objects and a
//! loaded AppState.

use cmlist_core::{ContactMethod, ContactMethodType};

use crate::state::AppState;

/// Creates an enabled email contact method.
pub fn email_cm(id: &str, name: &str) -> ContactMethod {
    ContactMethod::new(id, name, ContactMethodType::Email, format!("{id}@example.com"))
}

/// Creates an enabled SMS contact method.
pub fn sms_cm(id: &str, name: &str) -> ContactMethod {
    ContactMethod::new(id, name, ContactMethodType::Sms, "+15555550100")
        .with_formatted_value("+1 555-555-0100")
}

/// Creates a disabled SMS contact method.
pub fn disabled_cm(id: &str, name: &str) -> ContactMethod {
    sms_cm(id, name).disabled(true)
}

/// Creates an AppState that has finished loading `methods`.
pub fn loaded_state(methods: Vec<ContactMethod>) -> AppState {
    let mut state = AppState::new("user-1");
    state.query.data = Some(methods);
    state
}
