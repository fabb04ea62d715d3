//! Engine construction from CLI options and `.cmlist/config.toml`

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use cmlist_app::config::{self, Settings};
use cmlist_app::services::FixtureBackend;
use cmlist_app::Engine;
use cmlist_core::prelude::*;
use cmlist_core::{Breakpoint, UserId};

/// Command-line overrides applied on top of the settings file
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Directory holding `.cmlist/config.toml`
    pub base: PathBuf,
    pub user_id: Option<UserId>,
    pub fixture: Option<PathBuf>,
    pub read_only: bool,
    pub breakpoint: Option<Breakpoint>,
}

/// Merge CLI flags into settings. Flags only ever turn things on or pin
/// values; they never reset a setting from the file.
pub fn apply_overrides(mut settings: Settings, options: &StartupOptions) -> Settings {
    if options.read_only {
        settings.behavior.read_only = true;
    }
    if let Some(breakpoint) = options.breakpoint {
        settings.ui.breakpoint = Some(breakpoint);
    }
    if let Some(fixture) = &options.fixture {
        settings.backend.fixture = Some(fixture.clone());
    }
    settings
}

/// Load settings, open the fixture backend and create the engine
pub fn build_engine(options: &StartupOptions) -> Result<Engine<FixtureBackend>> {
    let settings = apply_overrides(config::load_settings(&options.base), options);

    let fixture = settings.backend.fixture.clone().ok_or_else(|| {
        Error::config(format!(
            "No fixture configured: pass --fixture or set [backend] fixture in {}",
            config::config_path(&options.base).display()
        ))
    })?;

    let mut backend = FixtureBackend::from_file(&fixture)?;
    if settings.backend.latency_ms > 0 {
        backend = backend.with_latency(Duration::from_millis(settings.backend.latency_ms));
    }

    let user_id = match &options.user_id {
        Some(id) => id.clone(),
        None => backend.sole_user().cloned().ok_or_else(|| {
            Error::config("Fixture defines several users: pass --user-id")
        })?,
    };

    info!(
        "Contact methods for {} from {} (read_only={})",
        user_id,
        fixture.display(),
        settings.behavior.read_only
    );

    Ok(Engine::new(user_id, settings, Arc::new(backend)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    const FIXTURE: &str = r#"
[[users]]
id = "u1"

[[users.contact_methods]]
id = "1"
name = "Work"
type = "email"
value = "work@example.com"
"#;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_overrides_pin_values() {
        let options = StartupOptions {
            read_only: true,
            breakpoint: Some(Breakpoint::Lg),
            fixture: Some(PathBuf::from("f.toml")),
            ..Default::default()
        };

        let settings = apply_overrides(Settings::default(), &options);

        assert!(settings.behavior.read_only);
        assert_eq!(settings.ui.breakpoint, Some(Breakpoint::Lg));
        assert_eq!(settings.backend.fixture, Some(PathBuf::from("f.toml")));
    }

    #[test]
    fn test_overrides_keep_file_values() {
        let mut file = Settings::default();
        file.behavior.read_only = true;

        let settings = apply_overrides(file, &StartupOptions::default());

        assert!(settings.behavior.read_only);
    }

    #[test]
    fn test_build_engine_from_config_file() {
        let temp = tempdir().unwrap();
        write(&temp.path().join("users.toml"), FIXTURE);
        write(
            &config::config_path(temp.path()),
            "[behavior]\nread_only = true\n\n[backend]\nfixture = \"users.toml\"\n",
        );

        let engine = build_engine(&StartupOptions {
            base: temp.path().to_path_buf(),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(engine.state.user_id, UserId::from("u1"));
        assert!(engine.state.context.read_only);
    }

    #[test]
    fn test_build_engine_with_relative_base() {
        let temp = tempfile::tempdir_in(".").unwrap();
        let base = PathBuf::from(temp.path().file_name().unwrap());
        write(&base.join("users.toml"), FIXTURE);
        write(
            &config::config_path(&base),
            "[backend]\nfixture = \"users.toml\"\n",
        );

        let engine = build_engine(&StartupOptions {
            base,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(engine.state.user_id, UserId::from("u1"));
    }

    #[test]
    fn test_build_engine_without_fixture_fails() {
        let temp = tempdir().unwrap();

        let result = build_engine(&StartupOptions {
            base: temp.path().to_path_buf(),
            ..Default::default()
        });

        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
