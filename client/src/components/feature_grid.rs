//! "Advanced Capabilities" feature list.

use leptos::prelude::*;

use crate::content::landing::{FEATURES, FEATURES_EYEBROW, FEATURES_HEADING, FEATURES_INTRO};

#[component]
pub fn FeatureGrid() -> impl IntoView {
    view! {
        <section class="features" id="features">
            <div class="section-heading">
                <h2 class="section-heading__eyebrow">{FEATURES_EYEBROW}</h2>
                <p class="section-heading__title">{FEATURES_HEADING}</p>
                <p class="section-heading__intro">{FEATURES_INTRO}</p>
            </div>
            <dl class="features__grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="feature">
                                <dt class="feature__name">
                                    <span class="feature__glyph" aria-hidden="true">{feature.glyph}</span>
                                    {feature.name}
                                </dt>
                                <dd class="feature__description">{feature.description}</dd>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </dl>
        </section>
    }
}
