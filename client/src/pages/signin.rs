//! Sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submission waits `DemoTimings::sign_in_delay`, asks the context-provided
//! `Authenticator`, then redirects. Field validation is left to the browser
//! (`required`, `type="email"`).

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::site_layout::SiteLayout;
use crate::components::toaster::ToastNotifier;
use crate::config::DemoTimings;
use crate::content::landing::PRODUCT_NAME;
use crate::routes;
use crate::state::auth::{SharedAuthenticator, SignInState};
use crate::util::lifecycle::AliveFlag;

#[component]
pub fn SignInPage() -> impl IntoView {
    let notifier = expect_context::<ToastNotifier>();
    let timings = expect_context::<DemoTimings>();
    let authenticator = expect_context::<SharedAuthenticator>();
    let form = RwSignal::new(SignInState::default());
    let navigate = use_navigate();

    let alive = AliveFlag::default();
    on_cleanup({
        let alive = alive.clone();
        move || alive.kill()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(SignInState::begin_submit).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let authenticator = authenticator.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(timings.sign_in_delay).await;
                if !alive.is_alive() {
                    return;
                }
                let result = authenticator.authenticate(&credentials);
                if let Some(route) = form.try_update(|f| f.complete_submit(result, &notifier)).flatten() {
                    navigate(route, leptos_router::NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, &navigate, &authenticator, &alive, timings, notifier);
    };

    view! {
        <SiteLayout>
            <div class="auth">
                <a class="auth__back" href=routes::HOME>
                    "← Back to home"
                </a>
                <div class="auth__card">
                    <span class="auth__logo" aria-hidden="true">"🖐"</span>
                    <h1>{format!("Sign in to {PRODUCT_NAME}")}</h1>
                    <p class="auth__subtitle">"Enter your email below to sign in to your account"</p>
                    <form class="auth__form" on:submit=on_submit>
                        <label class="field__label" for="email">
                            "Email"
                        </label>
                        <input
                            id="email"
                            class="field__input"
                            type="email"
                            placeholder="name@example.com"
                            autocapitalize="none"
                            autocomplete="email"
                            required=true
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.email = value);
                            }
                        />
                        <div class="auth__password-row">
                            <label class="field__label" for="password">
                                "Password"
                            </label>
                            <a class="auth__forgot" href="/forgot-password">
                                "Forgot password?"
                            </a>
                        </div>
                        <input
                            id="password"
                            class="field__input"
                            type="password"
                            autocapitalize="none"
                            autocomplete="current-password"
                            required=true
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.password = value);
                            }
                        />
                        <button class="btn btn--primary btn--block" type="submit" disabled=move || form.with(|f| f.loading)>
                            {move || form.with(SignInState::submit_label)}
                        </button>
                    </form>
                    <p class="auth__footer">
                        "Don't have an account? "
                        <a href="/signup">"Sign up"</a>
                    </p>
                </div>
            </div>
        </SiteLayout>
    }
}
