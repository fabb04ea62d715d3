//! Configuration types
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use cmlist_core::Breakpoint;

/// Application settings (.cmlist/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub backend: BackendSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Hide every mutating action (viewer without edit permission)
    #[serde(default)]
    pub read_only: bool,
}

/// UI settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UiSettings {
    /// Pin the breakpoint instead of deriving it from the terminal width
    #[serde(default)]
    pub breakpoint: Option<Breakpoint>,
}

/// Backend settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Fixture file served by the fixture backend
    #[serde(default)]
    pub fixture: Option<PathBuf>,

    /// Simulated round-trip latency for every backend call
    #[serde(default)]
    pub latency_ms: u64,
}
