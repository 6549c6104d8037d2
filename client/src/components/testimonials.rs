use leptos::prelude::*;

use crate::content::landing::{TESTIMONIALS, TESTIMONIALS_EYEBROW, TESTIMONIALS_HEADING};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <div class="section-heading">
                <h2 class="section-heading__eyebrow">{TESTIMONIALS_EYEBROW}</h2>
                <p class="section-heading__title">{TESTIMONIALS_HEADING}</p>
            </div>
            <div class="testimonials__grid">
                {TESTIMONIALS
                    .iter()
                    .map(|t| {
                        view! {
                            <figure class="testimonial">
                                <blockquote class="testimonial__body">
                                    <p>{format!("\"{}\"", t.body)}</p>
                                </blockquote>
                                <figcaption class="testimonial__author">
                                    <span class="avatar">{t.initials}</span>
                                    <span>
                                        <span class="testimonial__name">{t.name}</span>
                                        <span class="testimonial__role">{t.role}</span>
                                    </span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
