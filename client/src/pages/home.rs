use leptos::prelude::*;

use crate::components::feature_grid::FeatureGrid;
use crate::components::hero::Hero;
use crate::components::site_layout::SiteLayout;
use crate::components::testimonials::Testimonials;

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SiteLayout>
            <Hero/>
            <FeatureGrid/>
            <Testimonials/>
        </SiteLayout>
    }
}
