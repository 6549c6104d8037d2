//! About page assembled from the existing marketing copy.

use leptos::prelude::*;

use crate::components::site_layout::SiteLayout;
use crate::components::testimonials::Testimonials;
use crate::content::landing::{FEATURES_INTRO, FOOTER_TAGLINE, PRODUCT_NAME};
use crate::routes;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <SiteLayout>
            <section class="about">
                <h1 class="about__title">{format!("About {PRODUCT_NAME}")}</h1>
                <p class="about__lead">{FOOTER_TAGLINE}</p>
                <p>{FEATURES_INTRO}</p>
                <div class="about__actions">
                    <a class="btn btn--primary" href=routes::DASHBOARD>
                        "Open the Dashboard"
                    </a>
                    <a class="btn btn--outline" href=routes::FEATURES>
                        "See Features"
                    </a>
                </div>
            </section>
            <Testimonials/>
        </SiteLayout>
    }
}
