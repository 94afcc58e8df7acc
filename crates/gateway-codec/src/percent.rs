// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Percent-encoding passes for the `data` query value.
//
// `urlencoding` leaves `A-Z a-z 0-9 - . _ ~` alone and escapes every other
// byte as `%XX`. On decode, `%` not followed by two hex digits is kept
// verbatim; the JSON parse that follows rejects it.

use gateway_core::error::DecodeError;
use gateway_core::types::PercentPasses;

/// Percent-encode `text` once per pass.
pub fn encode_passes(text: &str, passes: PercentPasses) -> String {
    let mut encoded = text.to_owned();
    for _ in 0..passes.count() {
        encoded = urlencoding::encode(&encoded).into_owned();
    }
    encoded
}

/// Percent-decode `raw` once per pass.
///
/// Fails with `MalformedJson` when a pass yields bytes that are not UTF-8,
/// since such text can never be parsed as JSON.
pub fn decode_passes(raw: &str, passes: PercentPasses) -> Result<String, DecodeError> {
    let mut decoded = raw.to_owned();
    for pass in 1..=passes.count() {
        decoded = urlencoding::decode(&decoded)
            .map_err(|e| {
                DecodeError::MalformedJson(format!(
                    "percent-decode pass {pass} produced invalid UTF-8: {e}"
                ))
            })?
            .into_owned();
    }
    Ok(decoded)
}

/// Whether `c` survives percent-encoding unchanged.
pub fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}
