// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where native mobile APIs are unavailable.
//
// Every trait method returns `PlatformUnavailable`; the desktop app renders
// alerts and toasts itself when it sees that.

use std::time::Duration;

use async_trait::async_trait;
use gateway_core::error::{GatewayError, Result};
use gateway_core::types::{AlertRequest, AuthSession};

use crate::traits::*;

/// No-op bridge returned on non-mobile platforms.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

#[async_trait]
impl NativeWebAuth for StubBridge {
    async fn authenticate(&self, session: &AuthSession) -> Result<String> {
        tracing::warn!(session = %session.id, "NativeWebAuth::authenticate called on stub bridge");
        Err(GatewayError::PlatformUnavailable)
    }
}

impl NativeAlert for StubBridge {
    fn present_alert(&self, _alert: &AlertRequest) -> Result<()> {
        tracing::debug!("NativeAlert::present_alert called on stub bridge");
        Err(GatewayError::PlatformUnavailable)
    }
}

impl NativeClipboard for StubBridge {
    fn copy_text(&self, _text: &str) -> Result<()> {
        tracing::warn!("NativeClipboard::copy_text called on stub bridge");
        Err(GatewayError::PlatformUnavailable)
    }
}

impl NativeToast for StubBridge {
    fn show_toast(&self, _text: &str, _duration: Duration) -> Result<()> {
        Err(GatewayError::PlatformUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_capability_is_unavailable() {
        let bridge = StubBridge;
        let session = AuthSession::new("https://example.com", "sc-assignment");

        assert!(matches!(
            bridge.authenticate(&session).await,
            Err(GatewayError::PlatformUnavailable)
        ));
        assert!(matches!(
            bridge.present_alert(&AlertRequest::new("t", "m")),
            Err(GatewayError::PlatformUnavailable)
        ));
        assert!(matches!(bridge.copy_text("x"), Err(GatewayError::PlatformUnavailable)));
        assert!(matches!(
            bridge.show_toast("x", Duration::from_millis(10)),
            Err(GatewayError::PlatformUnavailable)
        ));
    }
}
