// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer: owns the codec, the fetcher, and the platform
// bridge, and turns each user action into an `AlertRequest` the UI can show.

use std::sync::Arc;
use std::time::Duration;

use gateway_bridge::{PlatformBridge, platform_bridge, run_session};
use gateway_codec::CallbackCodec;
use gateway_core::AppConfig;
use gateway_core::config::CONFIG_FILE;
use gateway_core::error::{FetchError, GatewayError, Result};
use gateway_core::types::{AlertRequest, AuthSession, SessionId};
use gateway_fetch::RemoteFetcher;
use serde_json::json;
use tracing::{error, info, warn};

use super::alerts::{callback_alert, error_alert, fetch_alert};
use super::data_dir;

/// Status label of the startup demo redirect.
const DEMO_STATUS: &str = "Gateway-2023";
/// Code of the startup demo redirect.
const DEMO_CODE: i64 = 200;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// All fields are cheaply cloneable so the struct can move into async
/// blocks.
#[derive(Clone)]
pub struct AppServices {
    bridge: Arc<dyn PlatformBridge>,
    codec: CallbackCodec,
    fetcher: std::result::Result<RemoteFetcher, FetchError>,
    config: Arc<AppConfig>,
}

impl AppServices {
    /// Initialise all services. Call once at app startup.
    ///
    /// Loads `config.json` from the data directory, writing the defaults
    /// there first if it does not exist yet.
    pub fn init() -> Self {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");

        let config = match AppConfig::load_from(&dir) {
            Some(config) => config,
            None => {
                let config = AppConfig::default();
                if !dir.join(CONFIG_FILE).exists() {
                    if let Err(e) = config.persist_to(&dir) {
                        warn!(error = %e, "could not write default config");
                    }
                }
                config
            }
        };

        Self::with_bridge(config, Arc::from(platform_bridge()))
    }

    /// Build services around an explicit bridge and config.
    pub fn with_bridge(config: AppConfig, bridge: Arc<dyn PlatformBridge>) -> Self {
        let codec = CallbackCodec::from_config(&config);
        let fetcher = RemoteFetcher::from_config(&config);
        if let Err(ref e) = fetcher {
            error!(error = %e, endpoint = %config.fetch_endpoint, "fetch endpoint unusable");
        }
        info!(platform = bridge.platform_name(), "app services initialised");

        Self {
            bridge,
            codec,
            fetcher,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // -- Redirect round-trip -------------------------------------------------

    /// The sample redirect URL built at startup.
    pub fn demo_redirect_url(&self) -> Result<String> {
        let payload = json!({"id": 38, "name": "Festival 2"});
        let url = self.codec.build_redirect_url(&payload, DEMO_STATUS, DEMO_CODE)?;
        info!(url = %url, "demo redirect URL");
        Ok(url)
    }

    /// Run the in-app browser session and describe its callback.
    pub async fn open_in_app_browser(&self) -> AlertRequest {
        let mut session = AuthSession::new(&self.config.auth_start_url, &self.config.callback_scheme);
        session.ephemeral = self.config.prefers_ephemeral_session;

        match run_session(&*self.bridge, &session).await {
            Ok(url) => self.decode_callback(&url, Some(session.id)),
            Err(e) => {
                warn!(session = %session.id, error = %e, "web-auth session failed");
                error_alert(&e)
            }
        }
    }

    /// Describe a callback URL received from any source.
    pub fn decode_callback(&self, url: &str, session: Option<SessionId>) -> AlertRequest {
        let summary = self.codec.summarize_callback(url, session);
        info!(
            status = summary.status.as_deref().unwrap_or("-"),
            code = summary.code.as_deref().unwrap_or("-"),
            decoded = summary.data.is_ok(),
            "callback received"
        );
        callback_alert(&summary)
    }

    // -- Remote fetch --------------------------------------------------------

    /// Perform "Call API" and describe the result.
    pub async fn call_api(&self) -> AlertRequest {
        let result = match &self.fetcher {
            Ok(fetcher) => fetcher.fetch_remote_json().await,
            Err(e) => Err(e.clone()),
        };
        fetch_alert(result)
    }

    // -- Presentation --------------------------------------------------------

    /// Hand `alert` to the native alert sheet.
    ///
    /// Returns `false` when the platform has none and the UI must render it.
    pub fn present_natively(&self, alert: &AlertRequest) -> bool {
        match self.bridge.present_alert(alert) {
            Ok(()) => true,
            Err(GatewayError::PlatformUnavailable) => false,
            Err(e) => {
                warn!(error = %e, "native alert failed");
                false
            }
        }
    }

    /// Put `text` on the clipboard.
    pub fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        self.bridge.copy_text(text)?;
        info!(chars = text.chars().count(), "copied to clipboard");
        Ok(())
    }

    /// Show a toast natively; `false` when the UI must render it.
    pub fn toast_natively(&self, text: &str) -> bool {
        self.bridge.show_toast(text, self.toast_duration()).is_ok()
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.config.toast_duration_ms)
    }
}
