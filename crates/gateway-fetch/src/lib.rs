// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// gateway-fetch — HTTP adapter for the "Call API" action.

pub mod fetch;

pub use fetch::RemoteFetcher;
