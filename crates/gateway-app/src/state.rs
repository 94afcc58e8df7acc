// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state: reactive signals for the Dioxus UI.

use gateway_core::types::AlertRequest;

use crate::services::app_services::AppServices;

/// Which home-page action is waiting on a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Busy {
    Idle,
    Browsing,
    Fetching,
}

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Alert currently on screen, if the UI draws it itself.
    pub alert: Option<AlertRequest>,
    /// Toast text currently on screen.
    pub toast: Option<String>,
    /// Bumped for every toast so an older timer can't hide a newer one.
    pub toast_generation: u64,
    pub busy: Busy,
    /// Redirect URL built at startup; `None` if it couldn't be built.
    pub demo_redirect_url: Option<String>,
}

impl AppState {
    /// Create initial state from the backend services.
    pub fn new(svc: &AppServices) -> Self {
        let demo_redirect_url = match svc.demo_redirect_url() {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::error!(error = %e, "could not build demo redirect URL");
                None
            }
        };

        Self {
            alert: None,
            toast: None,
            toast_generation: 0,
            busy: Busy::Idle,
            demo_redirect_url,
        }
    }

    /// Show `text` as the toast and return its generation.
    pub fn show_toast(&mut self, text: &str) -> u64 {
        self.toast_generation += 1;
        self.toast = Some(text.to_owned());
        self.toast_generation
    }

    /// Hide the toast if it is still the one from `generation`.
    pub fn clear_toast(&mut self, generation: u64) {
        if self.toast_generation == generation {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> AppState {
        AppState {
            alert: None,
            toast: None,
            toast_generation: 0,
            busy: Busy::Idle,
            demo_redirect_url: None,
        }
    }

    #[test]
    fn toast_clears_after_its_own_timer() {
        let mut state = blank();
        let generation = state.show_toast("successfully copied");
        assert_eq!(state.toast.as_deref(), Some("successfully copied"));
        state.clear_toast(generation);
        assert_eq!(state.toast, None);
    }

    #[test]
    fn stale_timer_leaves_newer_toast_up() {
        let mut state = blank();
        let first = state.show_toast("successfully copied");
        let second = state.show_toast("successfully copied");

        state.clear_toast(first);
        assert_eq!(state.toast.as_deref(), Some("successfully copied"));

        state.clear_toast(second);
        assert_eq!(state.toast, None);
    }
}
