//! Terminal setup and restoration

use cmlist_core::prelude::*;
use ratatui::DefaultTerminal;

/// Enter raw mode and the alternate screen.
///
/// Installs the panic hook first so a panic during the session still
/// leaves the user's shell usable.
pub fn init() -> Result<DefaultTerminal> {
    install_panic_hook();
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave the alternate screen. Failures are logged, not returned: this
/// runs on the way out.
pub fn restore() {
    if let Err(e) = ratatui::try_restore() {
        warn!("Failed to restore terminal: {}", e);
    }
}

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
