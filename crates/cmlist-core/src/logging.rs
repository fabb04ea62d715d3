//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "CMLIST_LOG";

const DEFAULT_FILTER: &str = "contact_method_list=info,cmlist_app=info,cmlist_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/contact-method-list/logs/`.
/// The terminal belongs to the TUI (or to NDJSON output in headless mode), so
/// nothing is logged to stdout.
/// Log level is controlled by the `CMLIST_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CMLIST_LOG=debug cmlist --user-id u1
/// CMLIST_LOG=cmlist_app=trace cmlist --user-id u1
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "cmlist.log");

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Contact method list starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("contact-method-list").join("logs"))
}
