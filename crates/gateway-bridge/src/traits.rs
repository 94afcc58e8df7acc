// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.
//
// The app talks to the in-app browser, alert sheet, pasteboard, and toast
// overlay only through these traits.

use std::time::Duration;

use async_trait::async_trait;
use gateway_core::error::Result;
use gateway_core::types::{AlertRequest, AuthSession};

/// Unified bridge that groups all native capabilities.
pub trait PlatformBridge: NativeWebAuth + NativeAlert + NativeClipboard + NativeToast {
    /// Human-readable platform name (e.g. "iOS 17", "Desktop (stub)").
    fn platform_name(&self) -> &str;
}

/// In-app web-authentication session (ASWebAuthenticationSession,
/// Custom Tabs).
#[async_trait]
pub trait NativeWebAuth: Send + Sync {
    /// Open `session.start_url` and wait for a navigation to
    /// `session.callback_scheme`.
    ///
    /// Resolves once with the full callback URL, or
    /// `GatewayError::SessionCancelled` if the user closed the sheet.
    async fn authenticate(&self, session: &AuthSession) -> Result<String>;
}

/// Modal alert with an optional Copy button.
pub trait NativeAlert {
    /// Present the alert. Returns once it is on screen, not when dismissed.
    fn present_alert(&self, alert: &AlertRequest) -> Result<()>;
}

/// System pasteboard.
pub trait NativeClipboard {
    fn copy_text(&self, text: &str) -> Result<()>;
}

/// Short-lived overlay message.
pub trait NativeToast {
    fn show_toast(&self, text: &str, duration: Duration) -> Result<()>;
}
