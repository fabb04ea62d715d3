//! Action handlers: UpdateAction dispatch and background task spawning

use std::future::Future;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use cmlist_core::{ContactMethodId, UserId};

use crate::message::Message;
use crate::services::ContactMethodService;
use crate::UpdateAction;

/// Execute an action by spawning a background task
///
/// Results are delivered back to the event loop as messages. A task that
/// finishes after shutdown was signalled drops its result.
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
    shutdown_rx: watch::Receiver<bool>,
) where
    S: ContactMethodService + Sync + 'static,
{
    match action {
        UpdateAction::FetchContactMethods { user_id } => {
            spawn_fetch(user_id, msg_tx, service, shutdown_rx);
        }

        UpdateAction::SendTest { id } => {
            spawn_test_send(id, msg_tx, service, shutdown_rx);
        }
    }
}

fn spawn_fetch<S>(
    user_id: UserId,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
    shutdown_rx: watch::Receiver<bool>,
) where
    S: ContactMethodService + Sync + 'static,
{
    tokio::spawn(async move {
        let Some(result) = until_shutdown(shutdown_rx, service.contact_methods(&user_id)).await
        else {
            debug!("Dropping contact method fetch for {} after shutdown", user_id);
            return;
        };

        let msg = match result {
            Ok(methods) => Message::ContactMethodsLoaded { methods },
            Err(e) => {
                warn!("Fetching contact methods for {} failed: {}", user_id, e);
                Message::ContactMethodsFetchFailed {
                    error: e.to_string(),
                }
            }
        };
        let _ = msg_tx.send(msg).await;
    });
}

fn spawn_test_send<S>(
    id: ContactMethodId,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
    shutdown_rx: watch::Receiver<bool>,
) where
    S: ContactMethodService + Sync + 'static,
{
    tokio::spawn(async move {
        let Some(result) = until_shutdown(shutdown_rx, service.send_test(&id)).await else {
            debug!("Dropping test send result for {} after shutdown", id);
            return;
        };

        let msg = match result {
            Ok(()) => Message::TestSendCompleted { id },
            Err(e) => Message::TestSendFailed {
                id,
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

/// Run `fut` unless shutdown is signalled first. `None` means the result
/// must not reach the state.
async fn until_shutdown<F: Future>(
    mut shutdown_rx: watch::Receiver<bool>,
    fut: F,
) -> Option<F::Output> {
    if *shutdown_rx.borrow() {
        return None;
    }

    tokio::select! {
        output = fut => {
            if *shutdown_rx.borrow() {
                None
            } else {
                Some(output)
            }
        }
        _ = shutdown_rx.changed() => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FixtureBackend;
    use crate::test_utils::email_cm;
    use std::time::Duration;

    fn backend() -> Arc<FixtureBackend> {
        Arc::new(
            FixtureBackend::new()
                .with_user("u1", vec![email_cm("1", "Work"), email_cm("2", "Home")])
                .fail_test_send("2", "network timeout"),
        )
    }

    #[tokio::test]
    async fn test_fetch_sends_loaded_message() {
        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        handle_action(
            UpdateAction::FetchContactMethods {
                user_id: UserId::from("u1"),
            },
            msg_tx,
            backend(),
            shutdown_rx,
        );

        match msg_rx.recv().await {
            Some(Message::ContactMethodsLoaded { methods }) => assert_eq!(methods.len(), 2),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_sends_error_message() {
        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        handle_action(
            UpdateAction::FetchContactMethods {
                user_id: UserId::from("nobody"),
            },
            msg_tx,
            backend(),
            shutdown_rx,
        );

        match msg_rx.recv().await {
            Some(Message::ContactMethodsFetchFailed { error }) => {
                assert_eq!(error, "User not found: nobody")
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_test_outcomes() {
        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let service = backend();

        handle_action(
            UpdateAction::SendTest {
                id: ContactMethodId::from("1"),
            },
            msg_tx.clone(),
            service.clone(),
            shutdown_rx.clone(),
        );
        assert_eq!(
            msg_rx.recv().await,
            Some(Message::TestSendCompleted {
                id: ContactMethodId::from("1")
            })
        );

        handle_action(
            UpdateAction::SendTest {
                id: ContactMethodId::from("2"),
            },
            msg_tx,
            service,
            shutdown_rx,
        );
        assert_eq!(
            msg_rx.recv().await,
            Some(Message::TestSendFailed {
                id: ContactMethodId::from("2"),
                error: "network timeout".to_string(),
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_result_dropped_after_shutdown() {
        let (msg_tx, mut msg_rx) = mpsc::channel(8);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let service = Arc::new(
            FixtureBackend::new()
                .with_user("u1", vec![email_cm("1", "Work")])
                .with_latency(Duration::from_secs(1)),
        );

        handle_action(
            UpdateAction::SendTest {
                id: ContactMethodId::from("1"),
            },
            msg_tx,
            service,
            shutdown_rx,
        );
        shutdown_tx.send(true).unwrap();

        // The task exits without sending, so the channel closes empty
        assert_eq!(msg_rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_until_shutdown_short_circuits_when_already_shut_down() {
        let (_shutdown_tx, shutdown_rx) = watch::channel(true);
        assert_eq!(until_shutdown(shutdown_rx, async { 42 }).await, None);
    }
}
