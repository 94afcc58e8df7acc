// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `key=value` extraction from a redirect URL's query string.

pub const STATUS_KEY: &str = "status";
pub const CODE_KEY: &str = "code";
pub const DATA_KEY: &str = "data";

/// The part of `url` after the first `?`, without any `#fragment`.
fn query_string(url: &str) -> Option<&str> {
    let (_, query) = url.split_once('?')?;
    Some(query.split_once('#').map_or(query, |(query, _)| query))
}

/// Raw value of the first `key=` segment in `url`'s query string.
///
/// Segments are split on `&`; the value runs to the next `&` or the end of
/// the query and is returned exactly as it appears (no percent-decoding).
/// `Some("")` means the key is present with an empty value.
pub fn query_value<'a>(url: &'a str, key: &str) -> Option<&'a str> {
    query_string(url)?
        .split('&')
        .find_map(|segment| segment.strip_prefix(key)?.strip_prefix('='))
}

/// The `status` label of a callback URL.
pub fn status_of(url: &str) -> Option<&str> {
    query_value(url, STATUS_KEY)
}

/// The `code` of a callback URL, as written.
pub fn code_of(url: &str) -> Option<&str> {
    query_value(url, CODE_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "sc-assignment://gateway/callback?status=Gateway-2023&code=200&data=%257B%257D";

    #[test]
    fn status_and_code_are_extracted_verbatim() {
        assert_eq!(status_of(URL), Some("Gateway-2023"));
        assert_eq!(code_of(URL), Some("200"));
        assert_eq!(query_value(URL, DATA_KEY), Some("%257B%257D"));
    }

    #[test]
    fn value_ends_at_end_of_string() {
        let url = "scheme://host/path?data=x&code=404";
        assert_eq!(code_of(url), Some("404"));
    }

    #[test]
    fn key_must_match_whole_segment_prefix() {
        let url = "scheme://host/path?errcode=1&codex=2";
        assert_eq!(code_of(url), None);
        let url = "scheme://host/path?errcode=1&code=2";
        assert_eq!(code_of(url), Some("2"));
    }

    #[test]
    fn empty_value_differs_from_missing_key() {
        let url = "scheme://host/path?status=&code=1";
        assert_eq!(status_of(url), Some(""));
        assert_eq!(query_value(url, DATA_KEY), None);
    }

    #[test]
    fn no_query_string_means_no_values() {
        assert_eq!(status_of("scheme://host/path"), None);
        assert_eq!(status_of(""), None);
    }

    #[test]
    fn fragment_is_not_part_of_the_value() {
        let url = "scheme://host/path?status=ok#frag";
        assert_eq!(status_of(url), Some("ok"));
    }
}
