//! Headless mode runner - main event loop without TUI
//!
//! Reads commands from stdin, feeds them to the engine and writes every
//! engine event to stdout as NDJSON. When stdin closes the runner waits
//! for the in-flight fetch and test-send to settle, then exits.

use std::io::{self, Write};

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use cmlist_app::services::ContactMethodService;
use cmlist_app::{render_model, AppState, Engine, EngineEvent, ListView};
use cmlist_core::prelude::*;

use super::command::HeadlessCommand;
use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless<S>(mut engine: Engine<S>) -> Result<()>
where
    S: ContactMethodService + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("Contact method list starting in HEADLESS mode");
    info!("User: {}", engine.state.user_id);
    info!("═══════════════════════════════════════════════════════");

    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(cmd_tx);
    });

    let result = drive(&mut engine, cmd_rx, &mut io::stdout()).await;

    if let Err(ref e) = result {
        error!("Headless run failed: {:?}", e);
        HeadlessEvent::error(e.to_string(), true).emit();
    }

    info!("Contact method list headless mode exiting");
    result
}

/// Mount the list, run until quit or input exhaustion, then unmount.
pub async fn drive<S, W>(
    engine: &mut Engine<S>,
    commands: mpsc::Receiver<HeadlessCommand>,
    out: &mut W,
) -> Result<()>
where
    S: ContactMethodService + Sync + 'static,
    W: Write,
{
    let mut events = engine.subscribe();

    engine.mount();
    flush_events(&mut events, &engine.state, out)?;

    let result = headless_event_loop(engine, commands, &mut events, out).await;

    engine.shutdown();
    flush_events(&mut events, &engine.state, out)?;
    result
}

enum Input {
    Message(Option<cmlist_app::Message>),
    Command(Option<HeadlessCommand>),
}

/// Main headless event loop
async fn headless_event_loop<S, W>(
    engine: &mut Engine<S>,
    mut commands: mpsc::Receiver<HeadlessCommand>,
    events: &mut broadcast::Receiver<EngineEvent>,
    out: &mut W,
) -> Result<()>
where
    S: ContactMethodService + Sync + 'static,
    W: Write,
{
    let mut input_closed = false;

    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }
        if input_closed && is_idle(&engine.state) {
            info!("Input closed and nothing in flight");
            break;
        }

        let input = tokio::select! {
            msg = engine.msg_rx.recv() => Input::Message(msg),
            cmd = commands.recv(), if !input_closed => Input::Command(cmd),
        };

        match input {
            Input::Message(Some(msg)) => engine.process_message(msg),
            Input::Message(None) => {
                info!("Message channel closed");
                break;
            }
            Input::Command(Some(HeadlessCommand::Invalid(reason))) => {
                warn!("Bad stdin command: {}", reason);
                HeadlessEvent::error(reason, false).write_to(out)?;
            }
            Input::Command(Some(cmd)) => {
                if let Some(msg) = cmd.into_message(&engine.state) {
                    engine.process_message(msg);
                }
            }
            Input::Command(None) => {
                info!("Stdin closed");
                input_closed = true;
            }
        }

        flush_events(events, &engine.state, out)?;
    }

    Ok(())
}

/// No fetch or test-send outstanding
fn is_idle(state: &AppState) -> bool {
    !state.query.loading && !state.test_send.pending()
}

/// Write every queued engine event. A `list_loaded` is followed by the
/// rows as currently rendered.
fn flush_events<W: Write>(
    events: &mut broadcast::Receiver<EngineEvent>,
    state: &AppState,
    out: &mut W,
) -> Result<()> {
    loop {
        let event = match events.try_recv() {
            Ok(event) => event,
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output lagged, {} events dropped", skipped);
                continue;
            }
            Err(_) => return Ok(()),
        };

        let loaded = matches!(event, EngineEvent::ListLoaded { .. });
        HeadlessEvent::from_engine_event(event).write_to(out)?;

        if loaded {
            if let ListView::Ready(view) = render_model(state) {
                for row in &view.rows {
                    HeadlessEvent::row(row).write_to(out)?;
                }
            }
        }
    }
}

/// Read stdin lines into commands until EOF or `quit`
fn spawn_stdin_reader_blocking(cmd_tx: mpsc::Sender<HeadlessCommand>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                let Some(cmd) = HeadlessCommand::parse(&line) else {
                    continue;
                };
                let quit = cmd == HeadlessCommand::Quit;
                if cmd_tx.blocking_send(cmd).is_err() || quit {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmlist_app::config::Settings;
    use cmlist_app::services::FixtureBackend;
    use cmlist_app::test_utils::{disabled_cm, email_cm};
    use std::sync::Arc;
    use std::time::Duration;

    fn engine() -> Engine<FixtureBackend> {
        let backend = FixtureBackend::new()
            .with_user("u1", vec![email_cm("1", "Work"), disabled_cm("2", "Home")])
            .fail_test_send("2", "network timeout");
        Engine::new("u1", Settings::default(), Arc::new(backend))
    }

    /// Run with `commands` already queued and stdin closed afterwards
    async fn run(commands: Vec<HeadlessCommand>) -> Vec<serde_json::Value> {
        let mut engine = engine();
        let (tx, rx) = mpsc::channel(16);
        for cmd in commands {
            tx.send(cmd).await.unwrap();
        }
        drop(tx);

        let mut out = Vec::new();
        tokio::time::timeout(Duration::from_secs(5), drive(&mut engine, rx, &mut out))
            .await
            .expect("headless run did not finish")
            .unwrap();

        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn names(events: &[serde_json::Value]) -> Vec<&str> {
        events
            .iter()
            .map(|e| e["event"].as_str().unwrap_or_default())
            .collect()
    }

    #[tokio::test]
    async fn test_eof_waits_for_initial_fetch() {
        let events = run(vec![]).await;

        assert_eq!(
            names(&events),
            vec!["list_loaded", "row", "row", "shutdown"]
        );
        assert_eq!(events[0]["count"], 2);
        assert_eq!(events[1]["title"], "Home (sms) - Disabled");
        assert_eq!(events[1]["icon"], "reactivate");
        assert_eq!(events[2]["title"], "Work (email)");
    }

    #[tokio::test]
    async fn test_failed_test_send_reports_error() {
        let events = run(vec![HeadlessCommand::Test("2".into())]).await;
        let names = names(&events);

        assert!(names.contains(&"test_send_started"));
        let failed = events
            .iter()
            .find(|e| e["event"] == "test_send_failed")
            .expect("no test_send_failed event");
        assert_eq!(failed["id"], "2");
        assert_eq!(failed["error"], "network timeout");
    }

    #[tokio::test]
    async fn test_repeated_test_sends_all_reported_before_exit() {
        let events = run(vec![
            HeadlessCommand::Test("2".into()),
            HeadlessCommand::Test("2".into()),
        ])
        .await;
        let names = names(&events);

        let count = |name: &str| names.iter().filter(|n| **n == name).count();
        assert_eq!(count("test_send_started"), 2);
        assert_eq!(count("test_send_failed"), 2);
        assert_eq!(names.last(), Some(&"shutdown"));
    }

    #[tokio::test]
    async fn test_invalid_command_is_reported_and_run_continues() {
        let events = run(vec![HeadlessCommand::Invalid("Unknown command: x".into())]).await;

        let error = events
            .iter()
            .find(|e| e["event"] == "error")
            .expect("no error event");
        assert_eq!(error["fatal"], false);
        assert!(names(&events).contains(&"list_loaded"));
    }

    #[tokio::test]
    async fn test_quit_stops_immediately() {
        let mut engine = engine();
        let (tx, rx) = mpsc::channel(16);
        tx.send(HeadlessCommand::Quit).await.unwrap();

        let mut out = Vec::new();
        drive(&mut engine, rx, &mut out).await.unwrap();

        assert!(engine.should_quit());
        assert!(String::from_utf8(out).unwrap().contains("\"event\":\"shutdown\""));
    }
}
