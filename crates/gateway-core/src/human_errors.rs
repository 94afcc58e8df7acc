// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages shown in the app's alerts.
//
// Every technical error is mapped to a short sentence and a suggestion.
// Severity picks the alert's title colour; `retriable` is logged with it.

use crate::error::{DecodeError, EncodingError, FetchError, GatewayError};

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Network blip or timeout; trying again may work.
    Transient,
    /// The user has to do something first.
    ActionRequired,
    /// Retrying the same input will fail the same way.
    Permanent,
}

/// A human-readable error with a message and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Shown as the alert title.
    pub message: String,
    /// Shown as the alert body.
    pub suggestion: String,
    /// Whether pressing the button again is worthwhile.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a `GatewayError` into a `HumanError`.
pub fn humanize_error(err: &GatewayError) -> HumanError {
    match err {
        GatewayError::Fetch(fetch) => humanize_fetch_error(fetch),
        GatewayError::Decode(decode) => humanize_decode_error(decode),

        GatewayError::Encoding(EncodingError::InvalidStatus(status)) => HumanError {
            message: "The redirect status label can't be used.".into(),
            suggestion: format!("Use letters, digits, '-', '.', '_' or '~' only. (Got {status:?})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        GatewayError::Encoding(EncodingError::InvalidCode(code)) => HumanError {
            message: "The redirect code can't be used.".into(),
            suggestion: format!("Use a whole number such as 200. (Got {code:?})"),
            retriable: false,
            severity: Severity::Permanent,
        },

        GatewayError::Encoding(EncodingError::Json(_)) => HumanError {
            message: "The data couldn't be packed into a link.".into(),
            suggestion: "Some of the values aren't plain JSON. Check the payload and try again.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        GatewayError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app doesn't have permission to save its settings.".into(),
                    suggestion: "Check the permissions of the app's data folder.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your device's storage may be full.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        GatewayError::Serialization(_) => HumanError {
            message: "The app had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        GatewayError::Bridge(_) => HumanError {
            message: "A device-specific feature didn't work.".into(),
            suggestion: "Try again. Some features may not be available on all devices.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        GatewayError::SessionCancelled => HumanError {
            message: "Sign-in was cancelled.".into(),
            suggestion: "Tap \"Open in App Browser\" to start again.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        GatewayError::PlatformUnavailable => HumanError {
            message: "This feature isn't available on your device.".into(),
            suggestion: "The in-app browser needs a phone or tablet. Try \"Decode Demo Redirect\" instead.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

fn humanize_fetch_error(err: &FetchError) -> HumanError {
    match err {
        FetchError::TransportFailure(_) => HumanError {
            message: "There was a problem with the request. check your internet".into(),
            suggestion: "Make sure you're online, then tap \"Call API\" again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
        FetchError::InvalidResponse { status } => HumanError {
            message: "Invalid request".into(),
            suggestion: format!("The server answered with status {status}. Try again later."),
            retriable: (500..=599).contains(status),
            severity: if (500..=599).contains(status) {
                Severity::Transient
            } else {
                Severity::Permanent
            },
        },
        FetchError::InvalidData(_) => HumanError {
            message: "The data received was invalid please try again".into(),
            suggestion: "The server sent something that isn't JSON.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
    }
}

fn humanize_decode_error(err: &DecodeError) -> HumanError {
    match err {
        DecodeError::MissingDataParameter => HumanError {
            message: "The callback didn't include any data.".into(),
            suggestion: "The page that sent you back didn't attach a payload. Try signing in again.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },
        DecodeError::EmptyDataParameter => HumanError {
            message: "The callback data was empty.".into(),
            suggestion: "The page that sent you back attached an empty payload. Try signing in again.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },
        DecodeError::MalformedJson(_) => HumanError {
            message: "The callback data couldn't be read.".into(),
            suggestion: "The payload wasn't valid JSON after decoding. Check how the link is encoded.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failure_is_transient() {
        let err = GatewayError::Fetch(FetchError::TransportFailure("connection refused".into()));
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.retriable);
        assert!(human.message.contains("check your internet"));
    }

    #[test]
    fn client_status_is_permanent_server_status_is_not() {
        let not_found = humanize_error(&FetchError::InvalidResponse { status: 404 }.into());
        assert_eq!(not_found.severity, Severity::Permanent);
        assert!(!not_found.retriable);

        let unavailable = humanize_error(&FetchError::InvalidResponse { status: 503 }.into());
        assert_eq!(unavailable.severity, Severity::Transient);
        assert!(unavailable.retriable);
        assert_eq!(unavailable.message, "Invalid request");
    }

    #[test]
    fn decode_failures_are_distinguishable() {
        let missing = humanize_error(&DecodeError::MissingDataParameter.into());
        let empty = humanize_error(&DecodeError::EmptyDataParameter.into());
        let malformed = humanize_error(&DecodeError::MalformedJson("eof".into()).into());
        assert_ne!(missing.message, empty.message);
        assert_ne!(empty.message, malformed.message);
        assert_eq!(malformed.severity, Severity::Permanent);
    }

    #[test]
    fn unavailable_platform_is_permanent() {
        let human = humanize_error(&GatewayError::PlatformUnavailable);
        assert_eq!(human.severity, Severity::Permanent);
        assert!(!human.retriable);
    }

    #[test]
    fn bad_code_names_the_value() {
        let human = humanize_error(&EncodingError::InvalidCode("2a".into()).into());
        assert!(human.suggestion.contains("\"2a\""));
        assert!(!human.retriable);
    }
}
