//! Settings loading

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::types::Settings;

/// Directory holding configuration files
pub const CONFIG_DIR: &str = ".cmlist";

/// Settings file name inside [`CONFIG_DIR`]
pub const CONFIG_FILENAME: &str = "config.toml";

/// Path of the settings file for a base directory
pub fn config_path(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from .cmlist/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(base: &Path) -> Settings {
    let config_path = config_path(base);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    let mut settings = match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                return Settings::default();
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            return Settings::default();
        }
    };

    // Relative fixture paths are relative to the base directory
    if let Some(fixture) = settings.backend.fixture.take() {
        settings.backend.fixture = Some(if fixture.is_relative() {
            base.join(fixture)
        } else {
            fixture
        });
    }

    settings
}
