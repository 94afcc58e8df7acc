// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Gateway.

use thiserror::Error;

/// Building a redirect URL failed.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The payload has no JSON representation (e.g. a map with non-string keys).
    #[error("payload is not JSON-representable: {0}")]
    Json(#[from] serde_json::Error),

    /// The status label is empty or would need escaping.
    #[error("invalid status label {0:?}: must be non-empty and URL-safe")]
    InvalidStatus(String),

    /// The code is not an optionally signed run of ASCII digits.
    #[error("invalid code {0:?}: must be an integer")]
    InvalidCode(String),
}

/// Extracting the JSON payload from a callback URL failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("callback URL has no `data` query parameter")]
    MissingDataParameter,

    #[error("callback URL has an empty `data` query parameter")]
    EmptyDataParameter,

    #[error("`data` query parameter is not valid JSON: {0}")]
    MalformedJson(String),
}

/// Fetching the remote JSON document failed.
///
/// Exactly three kinds, mirroring what the caller can do about each.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request was never sent or no response arrived.
    #[error("request could not be completed: {0}")]
    TransportFailure(String),

    /// A response arrived with an unexpected status code.
    #[error("unexpected response status {status}")]
    InvalidResponse { status: u16 },

    /// The response body was empty, unreadable, or not JSON.
    #[error("response body is invalid: {0}")]
    InvalidData(String),
}

/// Top-level error type for all Gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    // -- Codec --
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    // -- Network --
    #[error(transparent)]
    Fetch(#[from] FetchError),

    // -- Storage --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    /// The user dismissed the web-authentication sheet.
    #[error("authentication session was cancelled")]
    SessionCancelled,

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, GatewayError>;
