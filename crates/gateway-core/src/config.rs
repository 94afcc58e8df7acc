// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{PercentPasses, RedirectTarget};

/// File name of the persisted config inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Page opened by the in-app browser session.
    pub auth_start_url: String,
    /// Custom scheme that ends the browser session.
    pub callback_scheme: String,
    /// Run the browser session without shared cookies.
    pub prefers_ephemeral_session: bool,
    /// Prefix of redirect URLs built by this app.
    pub redirect: RedirectTarget,
    /// Percent-encoding passes applied to the `data` parameter.
    pub percent_passes: PercentPasses,
    /// Endpoint for "Call API".
    pub fetch_endpoint: String,
    /// Request timeout for "Call API"; none by default.
    pub fetch_timeout_secs: Option<u64>,
    /// How long the "copied" toast stays up.
    pub toast_duration_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_start_url: "https://webcode.tools/generators/html/hyperlink".into(),
            callback_scheme: "sc-assignment".into(),
            prefers_ephemeral_session: true,
            redirect: RedirectTarget::default(),
            percent_passes: PercentPasses::Double,
            fetch_endpoint: "https://jsonplaceholder.typicode.com/todos/1".into(),
            fetch_timeout_secs: None,
            toast_duration_ms: 1200,
        }
    }
}

impl AppConfig {
    /// Read `config.json` from `data_dir`.
    ///
    /// Returns `None` when the file is missing or unparseable so the caller
    /// can fall back to defaults.
    pub fn load_from(data_dir: &Path) -> Option<Self> {
        let path = data_dir.join(CONFIG_FILE);
        let data = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&data) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                None
            }
        }
    }

    /// Write this config to `config.json` in `data_dir`.
    pub fn persist_to(&self, data_dir: &Path) -> Result<()> {
        let path = data_dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(AppConfig::load_from(dir.path()).is_none());
    }

    #[test]
    fn persisted_config_loads_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            percent_passes: PercentPasses::Single,
            fetch_timeout_secs: Some(30),
            ..Default::default()
        };
        config.persist_to(dir.path()).expect("persist");

        let loaded = AppConfig::load_from(dir.path()).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "fetch_endpoint": "https://api.example.com/object" }"#,
        )
        .expect("write");

        let loaded = AppConfig::load_from(dir.path()).expect("load");
        assert_eq!(loaded.fetch_endpoint, "https://api.example.com/object");
        assert_eq!(loaded.callback_scheme, "sc-assignment");
        assert_eq!(loaded.percent_passes, PercentPasses::Double);
    }

    #[test]
    fn garbage_file_yields_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), "not json").expect("write");
        assert!(AppConfig::load_from(dir.path()).is_none());
    }
}
