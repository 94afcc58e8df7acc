// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Remote JSON fetch for "Call API".
//
// One GET per call, no retry, no caching. The future resolves exactly once
// with either pretty-printed JSON or one of the three `FetchError` kinds.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, info, warn};
use url::Url;

use gateway_codec::pretty_json_bytes;
use gateway_core::AppConfig;
use gateway_core::error::FetchError;

/// The only status treated as success.
const EXPECTED_STATUS: StatusCode = StatusCode::OK;

/// GET client bound to a single configured endpoint.
#[derive(Debug, Clone)]
pub struct RemoteFetcher {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl RemoteFetcher {
    /// Create a fetcher for `endpoint`.
    ///
    /// An endpoint that is not an absolute `http(s)` URL can never be
    /// requested, so it is reported as `TransportFailure` up front.
    pub fn new(endpoint: &str) -> Result<Self, FetchError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            FetchError::TransportFailure(format!("invalid endpoint {endpoint:?}: {e}"))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(FetchError::TransportFailure(format!(
                "unsupported endpoint scheme {:?}",
                endpoint.scheme()
            )));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            timeout: None,
        })
    }

    /// Create a fetcher from the app settings.
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let fetcher = Self::new(&config.fetch_endpoint)?;
        Ok(match config.fetch_timeout_secs {
            Some(secs) => fetcher.with_timeout(Duration::from_secs(secs)),
            None => fetcher,
        })
    }

    /// Give up on a request that takes longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// GET the endpoint and return its JSON body pretty-printed.
    pub async fn fetch_remote_json(&self) -> Result<String, FetchError> {
        info!(endpoint = %self.endpoint, "fetching remote JSON");

        let mut request = self.client.get(self.endpoint.clone());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            warn!(endpoint = %self.endpoint, error = %e, "request failed");
            FetchError::TransportFailure(e.to_string())
        })?;

        let status = response.status();
        if status != EXPECTED_STATUS {
            warn!(endpoint = %self.endpoint, status = status.as_u16(), "unexpected status");
            return Err(FetchError::InvalidResponse {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::InvalidData(format!("could not read body: {e}")))?;
        if body.is_empty() {
            return Err(FetchError::InvalidData("empty body".into()));
        }
        debug!(bytes = body.len(), "response body received");

        pretty_json_bytes(&body).map_err(|e| {
            warn!(error = %e, "response body is not JSON");
            FetchError::InvalidData(format!("body is not JSON: {e}"))
        })
    }
}
