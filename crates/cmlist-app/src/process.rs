//! Message processing
//!
//! Runs a message through the TEA update function, follows up any chained
//! messages and dispatches the resulting actions.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::services::ContactMethodService;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &Arc<S>,
    shutdown_rx: &watch::Receiver<bool>,
) where
    S: ContactMethodService + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(
                action,
                msg_tx.clone(),
                service.clone(),
                shutdown_rx.clone(),
            );
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
