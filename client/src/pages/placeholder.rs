//! Coming-soon and not-found pages.

#[cfg(test)]
#[path = "placeholder_test.rs"]
mod placeholder_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::site_layout::SiteLayout;
use crate::routes::{self, placeholder_title};

fn coming_soon_heading(path: &str) -> String {
    placeholder_title(path).map_or_else(|| "Coming Soon".to_owned(), |title| format!("{title} is coming soon"))
}

/// Rendered for every linked page that has not been built.
#[component]
pub fn ComingSoonPage() -> impl IntoView {
    let location = use_location();
    let heading = move || coming_soon_heading(&location.pathname.get());

    view! {
        <SiteLayout>
            <section class="placeholder">
                <h1>{heading}</h1>
                <p>"This page is under construction. Check back soon."</p>
                <a class="btn btn--outline" href=routes::HOME>
                    "Back to home"
                </a>
            </section>
        </SiteLayout>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <SiteLayout>
            <section class="placeholder">
                <h1>"Page not found."</h1>
                <a class="btn btn--outline" href=routes::HOME>
                    "Back to home"
                </a>
            </section>
        </SiteLayout>
    }
}
