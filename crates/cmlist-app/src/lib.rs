//! cmlist-app - Application state and orchestration for the contact method list
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the list
//! controller: the action catalog, the single-slot dialog selector, the
//! test-send controller and the render model, plus the Engine abstraction
//! that wires them to an asynchronous backend service.

pub mod actions;
pub mod catalog;
pub mod config;
pub mod dialog;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod services;
pub mod state;
pub mod test_send;
pub mod view_model;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Re-export primary types
pub use catalog::{compute_actions, inline_reactivate, status_icon, Action, ActionKind, StatusIcon};
pub use dialog::{ActiveDialog, DialogKind};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, ListContext};
pub use test_send::{TestSendError, TestSendState, TestSendStatus};
pub use view_model::{render_model, ListView, ReadyView, RowDescriptor};
