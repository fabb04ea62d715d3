//! Configuration file parsing for the contact method list
//!
//! Supports:
//! - `.cmlist/config.toml` - Global settings

pub mod settings;
pub mod types;

pub use settings::{config_path, load_settings, CONFIG_DIR, CONFIG_FILENAME};
pub use types::*;
