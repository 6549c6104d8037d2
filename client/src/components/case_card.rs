//! Dashboard card for one case.

use leptos::prelude::*;

use crate::routes;
use crate::state::cases::{Case, STATUS_COMPLETED, STATUS_IN_PROGRESS};
use crate::util::clock::format_date;

fn status_class(status: &str) -> &'static str {
    match status {
        STATUS_COMPLETED => "badge badge--completed",
        STATUS_IN_PROGRESS => "badge badge--progress",
        _ => "badge badge--new",
    }
}

/// A clickable card linking to the case workspace.
#[component]
pub fn CaseCard(case: Case) -> impl IntoView {
    let href = routes::case_path(&case.id);
    let badge = status_class(&case.status);

    view! {
        <a class="case-card" href=href>
            <div class="case-card__header">
                <h3 class="case-card__title">{case.title}</h3>
                <span class=badge>{case.status}</span>
            </div>
            <p class="case-card__meta">
                <span class="case-card__type">{case.kind}</span>
                <span class="case-card__created">{format!("Created on {}", format_date(case.created))}</span>
            </p>
            <div class="case-card__footer">
                <span class="case-card__updated">{format!("Updated {}", format_date(case.last_updated))}</span>
            </div>
        </a>
    }
}
