//! Landing hero with the primary calls to action.

use leptos::prelude::*;

use crate::content::landing::{HERO_BODY, HERO_TITLE};
use crate::routes;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__glow" aria-hidden="true"></div>
            <div class="hero__content">
                <h1 class="hero__title">{HERO_TITLE}</h1>
                <p class="hero__body">{HERO_BODY}</p>
                <div class="hero__actions">
                    <a class="btn btn--primary btn--lg" href=routes::DASHBOARD>
                        "Start New Case"
                    </a>
                    <a class="hero__more" href=routes::FEATURES>
                        "Learn more →"
                    </a>
                </div>
            </div>
        </section>
    }
}
