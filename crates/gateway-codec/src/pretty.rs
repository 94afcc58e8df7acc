// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pretty-printing for JSON shown to the user.

use serde_json::Value;

/// Parse `text` as JSON and re-serialize it with two-space indentation.
///
/// Object keys come out sorted; the output is semantically equal to the input.
pub fn pretty_json(text: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    serde_json::to_string_pretty(&value)
}

/// Same as [`pretty_json`] for raw response bytes.
pub fn pretty_json_bytes(bytes: &[u8]) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_slice(bytes)?;
    serde_json::to_string_pretty(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_with_two_spaces() {
        let pretty = pretty_json(r#"{"name":"Festival 2","id":38}"#).unwrap();
        assert_eq!(pretty, "{\n  \"id\": 38,\n  \"name\": \"Festival 2\"\n}");
    }

    #[test]
    fn nested_values_are_indented() {
        let pretty = pretty_json_bytes(br#"{"a":[1,{"b":null}]}"#).unwrap();
        assert_eq!(
            pretty,
            "{\n  \"a\": [\n    1,\n    {\n      \"b\": null\n    }\n  ]\n}"
        );
    }

    #[test]
    fn scalars_are_accepted() {
        assert_eq!(pretty_json("true").unwrap(), "true");
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(pretty_json(r#"{"a":1} x"#).is_err());
        assert!(pretty_json("").is_err());
    }
}
