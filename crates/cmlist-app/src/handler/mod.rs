//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for each focus layer
//! - `navigation`: Row selection and action menu handlers

pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;


use cmlist_core::{ContactMethodId, UserId};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

pub use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch the user's contact methods from the backend
    FetchContactMethods { user_id: UserId },

    /// Issue the test-send call; the result comes back as
    /// `TestSendCompleted` or `TestSendFailed`
    SendTest { id: ContactMethodId },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
