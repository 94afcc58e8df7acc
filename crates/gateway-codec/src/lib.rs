// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// gateway-codec — URL-callback payload codec.
//
// Packs a JSON object into the `data` query parameter of a custom-scheme
// redirect URL and unpacks it again from the callback the browser session
// hands back. Everything here is pure; no I/O.

pub mod codec;
pub mod percent;
pub mod pretty;
pub mod query;

pub use codec::{CallbackCodec, build_redirect_url, decode_callback_data};
pub use pretty::{pretty_json, pretty_json_bytes};
pub use query::{code_of, query_value, status_of};
