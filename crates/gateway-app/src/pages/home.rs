// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page: the three gateway actions.

use dioxus::prelude::*;
use gateway_core::types::AlertRequest;

use crate::pages::alert::{AlertModal, Toast};
use crate::services::app_services::AppServices;
use crate::state::{AppState, Busy};

/// Show `alert` natively, or hand it to the in-page modal.
fn show(svc: &AppServices, mut state: Signal<AppState>, alert: AlertRequest) {
    if !svc.present_natively(&alert) {
        state.write().alert = Some(alert);
    }
}

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    let busy = state.read().busy;
    let demo_url = state.read().demo_redirect_url.clone();

    rsx! {
        div {
            h1 { "Gateway" }
            p { style: "color: #666;", "Redirect and fetch round-trips" }

            div { style: "display: flex; flex-direction: column; gap: 12px; margin: 24px 0;",
                button {
                    style: "padding: 12px 16px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                    disabled: busy != Busy::Idle,
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let svc = svc.clone();
                            tracing::info!("opening in-app browser");
                            state.write().busy = Busy::Browsing;
                            spawn(async move {
                                let alert = svc.open_in_app_browser().await;
                                state.write().busy = Busy::Idle;
                                show(&svc, state, alert);
                            });
                        }
                    },
                    "Open in App Browser"
                }

                button {
                    style: "padding: 12px 16px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                    disabled: busy != Busy::Idle || demo_url.is_none(),
                    onclick: {
                        let svc = svc.clone();
                        let demo_url = demo_url.clone();
                        move |_| {
                            if let Some(ref url) = demo_url {
                                let alert = svc.decode_callback(url, None);
                                show(&svc, state, alert);
                            }
                        }
                    },
                    "Decode Demo Redirect"
                }

                button {
                    style: "padding: 12px 16px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                    disabled: busy != Busy::Idle,
                    onclick: {
                        let svc = svc.clone();
                        move |_| {
                            let svc = svc.clone();
                            tracing::info!(endpoint = %svc.config().fetch_endpoint, "calling API");
                            state.write().busy = Busy::Fetching;
                            spawn(async move {
                                let alert = svc.call_api().await;
                                state.write().busy = Busy::Idle;
                                show(&svc, state, alert);
                            });
                        }
                    },
                    "Call API"
                }
            }

            match busy {
                Busy::Browsing => rsx! {
                    p { style: "color: #007aff; font-size: 14px;", "Waiting for the browser..." }
                },
                Busy::Fetching => rsx! {
                    p { style: "color: #007aff; font-size: 14px;", "Loading..." }
                },
                Busy::Idle => rsx! {},
            }

            if let Some(url) = demo_url {
                div { style: "margin-top: 24px;",
                    h2 { style: "font-size: 16px;", "Demo redirect" }
                    code { style: "display: block; word-break: break-all; font-size: 12px; color: #555;",
                        "{url}"
                    }
                }
            }

            AlertModal {}
            Toast {}
        }
    }
}
