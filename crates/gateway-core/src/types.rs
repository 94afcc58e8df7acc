// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Gateway callback round-trip.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DecodeError;
use crate::human_errors::Severity;

/// JSON object embedded in a redirect URL's `data` parameter.
pub type PayloadObject = serde_json::Map<String, serde_json::Value>;

/// Unique identifier for one web-authentication attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed `scheme://host/path` prefix both ends of a redirect agree on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectTarget {
    pub scheme: String,
    pub host: String,
    pub path: String,
}

impl RedirectTarget {
    /// `scheme://host/path`, without a query string.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}/{}",
            self.scheme,
            self.host,
            self.path.trim_start_matches('/')
        )
    }
}

impl Default for RedirectTarget {
    fn default() -> Self {
        Self {
            scheme: "sc-assignment".into(),
            host: "gateway".into(),
            path: "callback".into(),
        }
    }
}

/// How many times the `data` value is percent-encoded (and decoded).
///
/// Senders in the field encode the JSON twice, so `Double` is the default.
/// Encoder and decoder always apply the same number of passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentPasses {
    Single,
    #[default]
    Double,
}

impl PercentPasses {
    pub fn count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
        }
    }
}

/// Request-scoped web-authentication session.
///
/// Created for each attempt and handed to the platform bridge, which resolves
/// it to a callback URL. Nothing about the session outlives that call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub id: SessionId,
    /// Page the in-app browser opens first.
    pub start_url: String,
    /// Scheme whose navigation ends the session and yields the callback.
    pub callback_scheme: String,
    /// Don't share cookies with the system browser.
    pub ephemeral: bool,
}

impl AuthSession {
    pub fn new(start_url: impl Into<String>, callback_scheme: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            start_url: start_url.into(),
            callback_scheme: callback_scheme.into(),
            ephemeral: true,
        }
    }

    /// Whether `url` is the callback this session waits for.
    pub fn matches_callback(&self, url: &str) -> bool {
        url.split_once("://")
            .is_some_and(|(scheme, _)| scheme.eq_ignore_ascii_case(&self.callback_scheme))
    }
}

/// Everything the app shows about a received callback URL.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackSummary {
    pub session: Option<SessionId>,
    pub status: Option<String>,
    pub code: Option<String>,
    /// Pretty-printed JSON from the `data` parameter.
    pub data: std::result::Result<String, DecodeError>,
    pub received_at: DateTime<Utc>,
}

/// A modal alert for the presentation collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRequest {
    pub title: String,
    pub message: String,
    /// Preformatted block under the message (decoded JSON).
    pub detail: Option<String>,
    /// Text put on the clipboard by the Copy button; no button when `None`.
    pub copy_text: Option<String>,
    /// Set for error alerts; picks the title colour.
    pub severity: Option<Severity>,
}

impl AlertRequest {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            detail: None,
            copy_text: None,
            severity: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_copy(mut self, text: impl Into<String>) -> Self {
        self.copy_text = Some(text.into());
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn is_copy_allowed(&self) -> bool {
        self.copy_text.is_some()
    }
}
