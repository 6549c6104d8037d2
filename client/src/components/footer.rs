//! Site footer with link columns and copyright.

use leptos::prelude::*;

use crate::content::landing::{FOOTER_COLUMNS, FOOTER_TAGLINE, PRODUCT_NAME, copyright_line};
use crate::routes;
use crate::util::clock;

#[component]
pub fn Footer() -> impl IntoView {
    let year = clock::today().year();

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <a class="footer__logo" href=routes::HOME>
                        <span aria-hidden="true">"🖐"</span>
                        <span>{PRODUCT_NAME}</span>
                    </a>
                    <p class="footer__tagline">{FOOTER_TAGLINE}</p>
                </div>
                {FOOTER_COLUMNS
                    .iter()
                    .map(|column| {
                        view! {
                            <div class="footer__column">
                                <h3>{column.heading}</h3>
                                <ul>
                                    {column
                                        .links
                                        .iter()
                                        .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <p class="footer__copyright">{copyright_line(year)}</p>
        </footer>
    }
}
