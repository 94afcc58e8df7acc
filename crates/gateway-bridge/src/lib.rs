// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Gateway — Native platform bridge abstractions.
//
// Traits for the in-app browser session, alert sheet, pasteboard, and toast,
// plus the desktop stub. Mobile shells provide their own `PlatformBridge`
// and hand it to the app at startup.

pub mod session;
pub mod stub;
pub mod traits;

pub use session::run_session;
pub use traits::PlatformBridge;

/// The bridge for builds that link no native shell.
pub fn platform_bridge() -> Box<dyn PlatformBridge> {
    Box::new(stub::StubBridge)
}
