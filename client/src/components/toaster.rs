//! Toast region and the notifier that feeds it.
//!
//! DESIGN
//! ======
//! `ToastNotifier` is the browser implementation of `Notifier`. It is `Copy`
//! so pages can move it into event handlers and async continuations freely.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::notify::{Notice, Notifier, Severity, ToastState};

#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
    ttl: Duration,
}

impl ToastNotifier {
    pub fn new(ttl: Duration) -> Self {
        Self { toasts: RwSignal::new(ToastState::default()), ttl }
    }

    pub fn dismiss(self, id: u64) {
        self.toasts.update(|t| {
            t.dismiss(id);
        });
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        let toasts = self.toasts;
        let id = toasts.try_update(|t| t.push(notice));
        #[cfg(feature = "hydrate")]
        if let Some(id) = id {
            let ttl = self.ttl;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(ttl).await;
                toasts.try_update(|t| t.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, self.ttl);
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "toast toast--info",
        Severity::Success => "toast toast--success",
        Severity::Error => "toast toast--error",
    }
}

/// Fixed-position list of live toasts.
#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = expect_context::<ToastNotifier>();

    view! {
        <ol class="toaster" aria-live="polite">
            {move || {
                notifier
                    .toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <li class=severity_class(toast.notice.severity) role="status">
                                <div class="toast__body">
                                    <p class="toast__title">{toast.notice.title}</p>
                                    <p class="toast__description">{toast.notice.description}</p>
                                </div>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| notifier.dismiss(id)
                                >
                                    "✕"
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ol>
    }
}
