use leptos::prelude::*;

use crate::components::feature_grid::FeatureGrid;
use crate::components::site_layout::SiteLayout;
use crate::routes;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <SiteLayout>
            <FeatureGrid/>
            <div class="cta">
                <a class="btn btn--primary btn--lg" href=routes::DASHBOARD>
                    "Start New Case"
                </a>
            </div>
        </SiteLayout>
    }
}
