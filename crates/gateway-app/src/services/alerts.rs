// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Alert contents for each outcome the home page can produce.

use gateway_core::error::{FetchError, GatewayError};
use gateway_core::human_errors::humanize_error;
use gateway_core::types::{AlertRequest, CallbackSummary};

/// Placeholder for a status or code the callback didn't carry.
const MISSING_FIELD: &str = "ERROR";

/// Title of the "Call API" result alert.
pub const JSON_ALERT_TITLE: &str = "JSON DATA";

/// Alert for a decoded callback: status as title, code as message, decoded
/// JSON underneath. Copy is not offered.
pub fn callback_alert(summary: &CallbackSummary) -> AlertRequest {
    let status = summary.status.as_deref().unwrap_or(MISSING_FIELD);
    let code = summary.code.as_deref().unwrap_or(MISSING_FIELD);
    let detail = match &summary.data {
        Ok(pretty) => pretty.clone(),
        Err(e) => humanize_error(&GatewayError::Decode(e.clone())).message,
    };

    AlertRequest::new(format!("Status : {status}"), format!("Code : {code}")).with_detail(detail)
}

/// Alert for a "Call API" result. Successful output is copyable.
pub fn fetch_alert(result: Result<String, FetchError>) -> AlertRequest {
    match result {
        Ok(pretty) => AlertRequest::new(JSON_ALERT_TITLE, "").with_detail(pretty.clone()).with_copy(pretty),
        Err(e) => error_alert(&GatewayError::Fetch(e)),
    }
}

/// Alert for any other failure, tagged with its severity.
pub fn error_alert(err: &GatewayError) -> AlertRequest {
    let human = humanize_error(err);
    tracing::warn!(
        error = %err,
        severity = ?human.severity,
        retriable = human.retriable,
        "showing error alert"
    );
    AlertRequest::new(human.message, human.suggestion).with_severity(human.severity)
}
