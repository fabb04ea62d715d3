//! Contact method list - manage a user's notification contact methods
//!
//! This is the binary entry point. All logic lives in the libraries.

use std::path::PathBuf;

use clap::Parser;
use cmlist_core::prelude::*;
use cmlist_core::{Breakpoint, UserId};
use contact_method_list::headless::HeadlessEvent;
use contact_method_list::{build_engine, run_headless, StartupOptions};

/// Contact method list - manage a user's notification contact methods
#[derive(Parser, Debug)]
#[command(name = "cmlist")]
#[command(about = "List and manage a user's contact methods", long_about = None)]
struct Args {
    /// Directory holding .cmlist/config.toml
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// User whose contact methods are listed
    #[arg(long)]
    user_id: Option<String>,

    /// Fixture file for the backend
    #[arg(long, value_name = "FILE")]
    fixture: Option<PathBuf>,

    /// Hide every mutating action
    #[arg(long)]
    read_only: bool,

    /// Pin the breakpoint instead of following the terminal width
    #[arg(long, value_parser = parse_breakpoint)]
    breakpoint: Option<Breakpoint>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,
}

fn parse_breakpoint(s: &str) -> std::result::Result<Breakpoint, String> {
    Breakpoint::parse(s).ok_or_else(|| format!("expected one of xs, sm, md, lg, xl; got {s}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    cmlist_core::logging::init()?;

    let options = StartupOptions {
        base: args
            .path
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))),
        user_id: args.user_id.map(UserId::from),
        fixture: args.fixture,
        read_only: args.read_only,
        breakpoint: args.breakpoint,
    };

    let engine = match build_engine(&options) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Startup failed: {}", e);
            if args.headless {
                HeadlessEvent::error(e.to_string(), true).emit();
            } else {
                eprintln!("❌ {}", e);
            }
            std::process::exit(1);
        }
    };

    let result = if args.headless {
        run_headless(engine).await
    } else {
        cmlist_tui::run(engine).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}
