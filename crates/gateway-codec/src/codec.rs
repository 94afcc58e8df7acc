// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Redirect URL builder and callback URL decoder.
//
// Outgoing: payload -> compact JSON -> percent-encoded (N passes) ->
// `scheme://host/path?status=..&code=..&data=..`.
// Incoming: `data=` segment -> percent-decoded (N passes) -> JSON ->
// pretty-printed text. N comes from `PercentPasses` and is the same both ways.

use std::fmt::Display;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, warn};

use gateway_core::AppConfig;
use gateway_core::error::{DecodeError, EncodingError};
use gateway_core::types::{CallbackSummary, PercentPasses, RedirectTarget, SessionId};

use crate::percent::{decode_passes, encode_passes, is_unreserved};
use crate::pretty::pretty_json;
use crate::query::{CODE_KEY, DATA_KEY, STATUS_KEY, code_of, query_value, status_of};

/// Encoder/decoder pair for one redirect target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackCodec {
    target: RedirectTarget,
    passes: PercentPasses,
}

impl CallbackCodec {
    pub fn new(target: RedirectTarget, passes: PercentPasses) -> Self {
        Self { target, passes }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.redirect.clone(), config.percent_passes)
    }

    pub fn target(&self) -> &RedirectTarget {
        &self.target
    }

    pub fn passes(&self) -> PercentPasses {
        self.passes
    }

    /// Build `scheme://host/path?status=<status>&code=<code>&data=<json>`.
    ///
    /// `status` is sent as-is and must be non-empty and URL-safe. `code` may be
    /// an integer or a numeric string and is written exactly as displayed, so
    /// `"007"` stays `007`. Fails with `EncodingError::Json` if `payload` has
    /// no JSON form.
    pub fn build_redirect_url<T, C>(
        &self,
        payload: &T,
        status: &str,
        code: C,
    ) -> Result<String, EncodingError>
    where
        T: Serialize + ?Sized,
        C: Display,
    {
        if status.is_empty() || !status.chars().all(is_unreserved) {
            return Err(EncodingError::InvalidStatus(status.to_owned()));
        }
        let code = code.to_string();
        if !is_numeric_code(&code) {
            return Err(EncodingError::InvalidCode(code));
        }

        let json = serde_json::to_string(payload)?;
        let data = encode_passes(&json, self.passes);
        let url = format!(
            "{}?{STATUS_KEY}={status}&{CODE_KEY}={code}&{DATA_KEY}={data}",
            self.target.base_url()
        );

        debug!(
            json_len = json.len(),
            url_len = url.len(),
            passes = self.passes.count(),
            "built redirect URL"
        );
        Ok(url)
    }

    /// Extract the `data` parameter of `url` as pretty-printed JSON.
    pub fn decode_callback_data(&self, url: &str) -> Result<String, DecodeError> {
        let raw = query_value(url, DATA_KEY).ok_or(DecodeError::MissingDataParameter)?;
        if raw.is_empty() {
            return Err(DecodeError::EmptyDataParameter);
        }

        let text = decode_passes(raw, self.passes)?;
        pretty_json(&text).map_err(|e| DecodeError::MalformedJson(e.to_string()))
    }

    /// Status, code, and decoded data of a callback URL, for display.
    pub fn summarize_callback(&self, url: &str, session: Option<SessionId>) -> CallbackSummary {
        let data = self.decode_callback_data(url);
        if let Err(ref e) = data {
            warn!(error = %e, "callback data could not be decoded");
        }

        CallbackSummary {
            session,
            status: status_of(url).map(str::to_owned),
            code: code_of(url).map(str::to_owned),
            data,
            received_at: Utc::now(),
        }
    }
}

/// Optional `-` followed by at least one ASCII digit.
fn is_numeric_code(code: &str) -> bool {
    let digits = code.strip_prefix('-').unwrap_or(code);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// [`CallbackCodec::build_redirect_url`] with the default target and passes.
pub fn build_redirect_url<T, C>(payload: &T, status: &str, code: C) -> Result<String, EncodingError>
where
    T: Serialize + ?Sized,
    C: Display,
{
    CallbackCodec::default().build_redirect_url(payload, status, code)
}

/// [`CallbackCodec::decode_callback_data`] with the default passes.
pub fn decode_callback_data(url: &str) -> Result<String, DecodeError> {
    CallbackCodec::default().decode_callback_data(url)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::{Value, json};

    use super::*;

    fn as_value(pretty: &str) -> Value {
        serde_json::from_str(pretty).expect("decoder output is JSON")
    }

    #[test]
    fn redirect_url_has_fixed_shape() {
        let url = build_redirect_url(&json!({"id": 38}), "Gateway-2023", 200).unwrap();
        assert!(url.starts_with("sc-assignment://gateway/callback?status=Gateway-2023&code=200&data="));
        assert_eq!(status_of(&url), Some("Gateway-2023"));
        assert_eq!(code_of(&url), Some("200"));
    }

    #[test]
    fn data_value_contains_no_raw_json_punctuation() {
        let url = build_redirect_url(&json!({"a b": "c,d:e"}), "ok", 1).unwrap();
        let data = query_value(&url, DATA_KEY).unwrap();
        assert!(data.chars().all(|c| is_unreserved(c) || c == '%'));
    }

    #[test]
    fn round_trip_preserves_payload() {
        let payload = json!({
            "id": 38,
            "name": "Festival 2",
            "tags": ["a&b", "c=d", "100%", "ünï"],
            "nested": {"ok": true, "none": null, "ratio": 0.25},
        });
        for passes in [PercentPasses::Single, PercentPasses::Double] {
            let codec = CallbackCodec::new(RedirectTarget::default(), passes);
            let url = codec.build_redirect_url(&payload, "Gateway-2023", 200).unwrap();
            let decoded = codec.decode_callback_data(&url).unwrap();
            assert_eq!(as_value(&decoded), payload, "passes = {passes:?}");
        }
    }

    #[test]
    fn payload_object_round_trips() {
        let mut payload = gateway_core::PayloadObject::new();
        payload.insert("empty".into(), json!({}));
        payload.insert("n".into(), json!(-7));
        let url = build_redirect_url(&payload, "s", 0).unwrap();
        assert_eq!(as_value(&decode_callback_data(&url).unwrap()), Value::Object(payload));
    }

    #[test]
    fn double_encoded_sample_decodes_to_pretty_text() {
        let once = urlencoding::encode(r#"{"id":38,"name":"Festival 2"}"#).into_owned();
        let twice = urlencoding::encode(&once).into_owned();
        let url = format!("sc-assignment://gateway/callback?status=Gateway-2023&code=200&data={twice}");

        assert_eq!(
            decode_callback_data(&url).unwrap(),
            "{\n  \"id\": 38,\n  \"name\": \"Festival 2\"\n}"
        );
    }

    #[test]
    fn single_encoded_plain_payload_still_decodes_twice() {
        let once = urlencoding::encode(r#"{"a":1}"#).into_owned();
        let url = format!("x://h/p?status=s&code=1&data={once}");
        assert_eq!(decode_callback_data(&url).unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn double_decoding_a_single_encoded_percent_literal_is_lossy() {
        let once = urlencoding::encode(r#"{"p":"100%41"}"#).into_owned();
        let url = format!("x://h/p?data={once}");

        let double = decode_callback_data(&url).unwrap();
        assert_eq!(as_value(&double), json!({"p": "100A"}));

        let single = CallbackCodec::new(RedirectTarget::default(), PercentPasses::Single);
        assert_eq!(as_value(&single.decode_callback_data(&url).unwrap()), json!({"p": "100%41"}));
    }

    #[test]
    fn missing_data_parameter() {
        let url = "sc-assignment://gateway/callback?status=ok&code=200";
        assert_eq!(decode_callback_data(url), Err(DecodeError::MissingDataParameter));
        assert_eq!(decode_callback_data(""), Err(DecodeError::MissingDataParameter));
    }

    #[test]
    fn empty_data_parameter() {
        let url = "sc-assignment://gateway/callback?status=ok&code=200&data=";
        assert_eq!(decode_callback_data(url), Err(DecodeError::EmptyDataParameter));
        let url = "sc-assignment://gateway/callback?data=&status=ok";
        assert_eq!(decode_callback_data(url), Err(DecodeError::EmptyDataParameter));
    }

    #[test]
    fn invalid_escape_is_malformed_json() {
        let url = "sc-assignment://gateway/callback?status=ok&code=200&data=%25zz";
        assert!(matches!(decode_callback_data(url), Err(DecodeError::MalformedJson(_))));
    }

    #[test]
    fn non_json_text_is_malformed_json() {
        let url = "x://h/p?data=hello%2520world";
        assert!(matches!(decode_callback_data(url), Err(DecodeError::MalformedJson(_))));
        let url = "x://h/p?data=%257B%2522a%2522%253A";
        assert!(matches!(decode_callback_data(url), Err(DecodeError::MalformedJson(_))));
    }

    #[test]
    fn non_string_keys_fail_to_encode() {
        let mut payload = HashMap::new();
        payload.insert((1, 2), "pair");
        let err = build_redirect_url(&payload, "ok", 200).unwrap_err();
        assert!(matches!(err, EncodingError::Json(_)));
    }

    #[test]
    fn unsafe_status_is_rejected() {
        for status in ["", "a&b", "two words", "x=y"] {
            let err = build_redirect_url(&json!({}), status, 200).unwrap_err();
            assert!(matches!(err, EncodingError::InvalidStatus(_)), "status = {status:?}");
        }
    }

    #[test]
    fn numeric_string_code_is_kept_verbatim() {
        let url = build_redirect_url(&json!({}), "ok", "007").unwrap();
        assert_eq!(code_of(&url), Some("007"));
        let url = build_redirect_url(&json!({}), "ok", String::from("-42")).unwrap();
        assert_eq!(code_of(&url), Some("-42"));
    }

    #[test]
    fn non_numeric_code_is_rejected() {
        for code in ["", "-", "2a", "20 0", "1&data=x", "+1"] {
            let err = build_redirect_url(&json!({}), "ok", code).unwrap_err();
            assert!(matches!(err, EncodingError::InvalidCode(_)), "code = {code:?}");
        }
    }

    #[test]
    fn custom_target_is_used() {
        let codec = CallbackCodec::new(
            RedirectTarget {
                scheme: "demo".into(),
                host: "app".into(),
                path: "done".into(),
            },
            PercentPasses::Single,
        );
        let url = codec.build_redirect_url(&json!([1]), "ok", -1).unwrap();
        assert_eq!(url, "demo://app/done?status=ok&code=-1&data=%5B1%5D");
    }

    #[test]
    fn summary_collects_all_parts() {
        let url = build_redirect_url(&json!({"a": 1}), "Gateway-2023", 200).unwrap();
        let session = SessionId::new();
        let summary = CallbackCodec::default().summarize_callback(&url, Some(session));
        assert_eq!(summary.session, Some(session));
        assert_eq!(summary.status.as_deref(), Some("Gateway-2023"));
        assert_eq!(summary.code.as_deref(), Some("200"));
        assert_eq!(summary.data.as_deref(), Ok("{\n  \"a\": 1\n}"));
    }

    #[test]
    fn summary_keeps_status_when_data_is_bad() {
        let summary = CallbackCodec::default()
            .summarize_callback("x://h/p?status=Denied&code=401", None);
        assert_eq!(summary.status.as_deref(), Some("Denied"));
        assert_eq!(summary.data, Err(DecodeError::MissingDataParameter));
    }
}
