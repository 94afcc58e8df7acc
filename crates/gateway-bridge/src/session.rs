// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// One web-authentication round-trip.

use gateway_core::error::{GatewayError, Result};
use gateway_core::types::AuthSession;
use tracing::{info, warn};

use crate::traits::NativeWebAuth;

/// Run `session` on `web_auth` and return the callback URL it produced.
///
/// A URL that does not use the session's callback scheme is rejected, so the
/// caller only ever decodes callbacks meant for this app.
pub async fn run_session<W>(web_auth: &W, session: &AuthSession) -> Result<String>
where
    W: NativeWebAuth + ?Sized,
{
    info!(
        session = %session.id,
        start_url = %session.start_url,
        ephemeral = session.ephemeral,
        "starting web-auth session"
    );

    let callback = web_auth.authenticate(session).await?;
    if !session.matches_callback(&callback) {
        warn!(session = %session.id, "callback used an unexpected scheme");
        return Err(GatewayError::Bridge(format!(
            "callback does not use the {:?} scheme",
            session.callback_scheme
        )));
    }

    info!(session = %session.id, "web-auth session completed");
    Ok(callback)
}
