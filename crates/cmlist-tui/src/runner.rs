//! Main TUI runner - entry point and event loop

use cmlist_app::message::Message;
use cmlist_app::services::ContactMethodService;
use cmlist_app::Engine;
use cmlist_core::prelude::*;
use cmlist_core::Breakpoint;

use super::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// The breakpoint follows the terminal width unless the settings pin one.
pub async fn run<S>(mut engine: Engine<S>) -> Result<()>
where
    S: ContactMethodService + Sync + 'static,
{
    let mut term = terminal::init()?;

    let pinned = engine.settings.ui.breakpoint.is_some();
    if !pinned {
        let size = term.size()?;
        engine.process_message(Message::BreakpointChanged(Breakpoint::from_columns(
            size.width,
        )));
    }
    info!(
        "Starting TUI for {} (breakpoint {}{})",
        engine.state.user_id,
        engine.state.context.breakpoint,
        if pinned { ", pinned" } else { "" }
    );

    engine.mount();
    let result = run_loop(&mut term, &mut engine, pinned);

    engine.shutdown();
    terminal::restore();

    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<S>,
    pinned_breakpoint: bool,
) -> Result<()>
where
    S: ContactMethodService + Sync + 'static,
{
    while !engine.should_quit() {
        // Backend results
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            if pinned_breakpoint && matches!(message, Message::BreakpointChanged(_)) {
                continue;
            }
            engine.process_message(message);
        }
    }
    Ok(())
}
