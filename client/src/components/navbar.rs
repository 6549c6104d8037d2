//! Site header with desktop links or a mobile menu, depending on layout.

use leptos::prelude::*;

use crate::content::landing::{NAV_LINKS, PRODUCT_NAME};
use crate::routes;
use crate::state::ui::UiState;

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let narrow = move || ui.with(|u| u.layout().is_narrow());
    let menu_open = move || ui.with(|u| u.mobile_menu_open);
    let close_menu = move |_| ui.update(UiState::close_mobile_menu);

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href=routes::HOME>
                    <span class="navbar__logo" aria-hidden="true">"🖐"</span>
                    <span class="navbar__name">{PRODUCT_NAME}</span>
                </a>
                <Show
                    when=move || !narrow()
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn--ghost navbar__toggle"
                                aria-label="Toggle menu"
                                aria-expanded=move || menu_open().to_string()
                                on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                            >
                                {move || if menu_open() { "✕" } else { "☰" }}
                            </button>
                        }
                    }
                >
                    <nav class="navbar__links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <a class="navbar__link" href=link.href>{link.label}</a> })
                            .collect::<Vec<_>>()}
                        <a class="btn btn--outline btn--sm" href=routes::DASHBOARD>
                            "Dashboard"
                        </a>
                        <a class="btn btn--primary btn--sm" href=routes::SIGN_IN>
                            "Sign In"
                        </a>
                    </nav>
                </Show>
            </div>
            <Show when=move || narrow() && menu_open()>
                <nav class="navbar__mobile">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a class="navbar__mobile-link" href=link.href on:click=close_menu>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <a class="navbar__mobile-link" href=routes::DASHBOARD on:click=close_menu>
                        "Dashboard"
                    </a>
                    <a class="navbar__mobile-link" href=routes::SIGN_IN on:click=close_menu>
                        "Sign In"
                    </a>
                </nav>
            </Show>
        </header>
    }
}
