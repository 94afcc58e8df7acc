// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-page alert and toast, used when the platform has no native ones.

use dioxus::prelude::*;
use gateway_core::error::GatewayError;
use gateway_core::human_errors::Severity;

use crate::services::app_services::AppServices;
use crate::state::AppState;

/// Text of the toast shown after a copy.
pub const COPIED_TOAST: &str = "successfully copied";

/// Script that writes `text` to the webview clipboard and resolves to
/// whether the write was accepted.
fn clipboard_script(text: &str) -> serde_json::Result<String> {
    let literal = serde_json::to_string(text)?;
    Ok(format!(
        "return await navigator.clipboard.writeText({literal}).then(() => true, () => false);"
    ))
}

/// Interpret the clipboard script's result.
fn webview_copy_succeeded<E: std::fmt::Display>(result: Result<bool, E>) -> bool {
    match result {
        Ok(true) => true,
        Ok(false) => {
            tracing::warn!("webview rejected the clipboard write");
            false
        }
        Err(e) => {
            tracing::warn!(error = %e, "clipboard script failed");
            false
        }
    }
}

/// Put `text` on the clipboard through the bridge, or the webview's
/// clipboard when the platform has none. `true` once the text is there.
async fn copy_text(svc: &AppServices, text: &str) -> bool {
    match svc.copy_to_clipboard(text) {
        Ok(()) => true,
        Err(GatewayError::PlatformUnavailable) => {
            let script = match clipboard_script(text) {
                Ok(script) => script,
                Err(e) => {
                    tracing::error!(error = %e, "could not quote clipboard text");
                    return false;
                }
            };
            let copied = webview_copy_succeeded(document::eval(&script).join::<bool>().await);
            if copied {
                tracing::info!(chars = text.chars().count(), "copied to webview clipboard");
            }
            copied
        }
        Err(e) => {
            tracing::error!(error = %e, "copy failed");
            false
        }
    }
}

/// Title colour for an alert.
fn title_color(severity: Option<Severity>) -> &'static str {
    match severity {
        None => "#000",
        Some(Severity::Transient) => "#ff9500",
        Some(Severity::ActionRequired) => "#007aff",
        Some(Severity::Permanent) => "#ff3b30",
    }
}

#[component]
pub fn AlertModal() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let Some(alert) = state.read().alert.clone() else {
        return rsx! {};
    };
    let color = title_color(alert.severity);

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center;",
            div {
                style: "background: white; border-radius: 12px; padding: 20px; max-width: 90%; max-height: 80vh; overflow-y: auto; min-width: 260px;",
                h2 { style: "margin: 0 0 8px 0; font-size: 18px; color: {color};", "{alert.title}" }
                if !alert.message.is_empty() {
                    p { style: "color: #333; margin: 0 0 12px 0;", "{alert.message}" }
                }
                if let Some(ref detail) = alert.detail {
                    pre { style: "background: #f5f5f5; padding: 12px; border-radius: 8px; font-size: 12px; white-space: pre-wrap;",
                        "{detail}"
                    }
                }
                div { style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 12px;",
                    if let Some(text) = alert.copy_text.clone() {
                        button {
                            style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #007aff; background: white; color: #007aff;",
                            onclick: {
                                let svc = svc.clone();
                                move |_| {
                                    state.write().alert = None;
                                    let svc = svc.clone();
                                    let text = text.clone();
                                    spawn(async move {
                                        if !copy_text(&svc, &text).await || svc.toast_natively(COPIED_TOAST) {
                                            return;
                                        }
                                        let generation = state.write().show_toast(COPIED_TOAST);
                                        tokio::time::sleep(svc.toast_duration()).await;
                                        state.write().clear_toast(generation);
                                    });
                                }
                            },
                            "Copy"
                        }
                    }
                    button {
                        style: "padding: 8px 16px; border-radius: 8px; border: none; background: #007aff; color: white;",
                        onclick: move |_| state.write().alert = None,
                        "OK"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Toast() -> Element {
    let state = use_context::<Signal<AppState>>();

    let Some(text) = state.read().toast.clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "position: fixed; bottom: 32px; left: 50%; transform: translateX(-50%); background: rgba(0,0,0,0.8); color: white; padding: 10px 18px; border-radius: 20px; font-size: 14px;",
            "{text}"
        }
    }
}
