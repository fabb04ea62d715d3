//! Contact method list
//!
//! Binary support library: engine construction from CLI options and
//! settings, and the headless NDJSON runner. The TUI lives in cmlist-tui.

pub mod headless;
pub mod startup;

pub use headless::runner::run_headless;
pub use startup::{build_engine, StartupOptions};
