//! Fixture-backed implementation of [`ContactMethodService`]
//!
//! Serves contact methods from a TOML file and simulates latency and
//! failures, so the controller can run without a live backend.
//!
//! ```toml
//! latency_ms = 150
//!
//! [test_send]
//! fail = ["2"]
//! error = "network timeout"
//!
//! [[users]]
//! id = "u1"
//!
//! [[users.contact_methods]]
//! id = "1"
//! name = "Work"
//! type = "email"
//! value = "work@example.com"
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde::Deserialize;

use cmlist_core::prelude::*;
use cmlist_core::{ContactMethod, ContactMethodId, UserId};

use super::ContactMethodService;

const DEFAULT_TEST_SEND_ERROR: &str = "Failed to send test notification";

#[derive(Debug, Default, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    latency_ms: u64,
    #[serde(default)]
    fetch: FetchFixture,
    #[serde(default)]
    test_send: TestSendFixture,
    #[serde(default)]
    users: Vec<FixtureUser>,
}

#[derive(Debug, Default, Deserialize)]
struct FetchFixture {
    /// Every fetch fails with this message
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TestSendFixture {
    #[serde(default)]
    fail: Vec<ContactMethodId>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FixtureUser {
    id: UserId,
    #[serde(default)]
    contact_methods: Vec<ContactMethod>,
}

/// In-memory backend loaded from a fixture
#[derive(Debug, Default)]
pub struct FixtureBackend {
    users: HashMap<UserId, Vec<ContactMethod>>,
    fetch_error: Option<String>,
    failing: HashMap<ContactMethodId, String>,
    latency: Duration,
    test_sends: AtomicUsize,
}

impl FixtureBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a fixture file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture {}", path.display()))?;
        let backend = Self::from_toml_str(&content)?;
        info!(
            "Loaded fixture {} ({} users)",
            path.display(),
            backend.users.len()
        );
        Ok(backend)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: FixtureFile = toml::from_str(content)?;

        let mut ids = HashSet::new();
        for user in &file.users {
            for cm in &user.contact_methods {
                if !ids.insert(cm.id.clone()) {
                    return Err(Error::config(format!(
                        "Duplicate contact method id in fixture: {}",
                        cm.id
                    )));
                }
            }
        }

        let error = file
            .test_send
            .error
            .unwrap_or_else(|| DEFAULT_TEST_SEND_ERROR.to_string());
        let failing = file
            .test_send
            .fail
            .into_iter()
            .map(|id| (id, error.clone()))
            .collect();

        Ok(Self {
            users: file
                .users
                .into_iter()
                .map(|u| (u.id, u.contact_methods))
                .collect(),
            fetch_error: file.fetch.error,
            failing,
            latency: Duration::from_millis(file.latency_ms),
            test_sends: AtomicUsize::new(0),
        })
    }

    pub fn with_user(mut self, user_id: impl Into<UserId>, methods: Vec<ContactMethod>) -> Self {
        self.users.insert(user_id.into(), methods);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every fetch fail with `message`
    pub fn fail_fetch(mut self, message: impl Into<String>) -> Self {
        self.fetch_error = Some(message.into());
        self
    }

    /// Make test-sends to `id` fail with `message`
    pub fn fail_test_send(
        mut self,
        id: impl Into<ContactMethodId>,
        message: impl Into<String>,
    ) -> Self {
        self.failing.insert(id.into(), message.into());
        self
    }

    /// The fixture's user, when it defines exactly one
    pub fn sole_user(&self) -> Option<&UserId> {
        let mut ids = self.users.keys();
        match (ids.next(), ids.next()) {
            (Some(id), None) => Some(id),
            _ => None,
        }
    }

    /// Number of test-send calls received
    pub fn test_send_count(&self) -> usize {
        self.test_sends.load(Ordering::SeqCst)
    }

    fn knows(&self, id: &ContactMethodId) -> bool {
        self.users
            .values()
            .flatten()
            .any(|cm| &cm.id == id)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl ContactMethodService for FixtureBackend {
    async fn contact_methods(&self, user_id: &UserId) -> Result<Vec<ContactMethod>> {
        self.simulate_latency().await;
        if let Some(message) = &self.fetch_error {
            return Err(Error::fetch(message.clone()));
        }
        let methods = self
            .users
            .get(user_id)
            .cloned()
            .ok_or_else(|| Error::UserNotFound(user_id.clone()))?;
        debug!("Fixture: {} contact methods for {}", methods.len(), user_id);
        Ok(methods)
    }

    async fn send_test(&self, id: &ContactMethodId) -> Result<()> {
        self.test_sends.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        if !self.knows(id) {
            return Err(Error::UnknownContactMethod(id.clone()));
        }
        if let Some(message) = self.failing.get(id) {
            return Err(Error::test_send(id.clone(), message.clone()));
        }
        debug!("Fixture: test sent to {}", id);
        Ok(())
    }
}
