//! Case information sidebar with editable name and description.

use leptos::prelude::*;

use crate::state::workspace::WorkspaceState;
use crate::util::clock;

const FORENSIC_TOOLS: [(&str, &str); 4] = [
    ("🔬", "Evidence Analysis"),
    ("🖐", "Pattern Recognition"),
    ("📷", "Image Enhancement"),
    ("📊", "Data Visualization"),
];

#[component]
pub fn CaseSidebar(workspace: RwSignal<WorkspaceState>) -> impl IntoView {
    let opened = clock::format_date(clock::today());

    view! {
        <aside class="case-sidebar">
            <div class="card">
                <h2 class="card__title">"Case Information"</h2>
                <label class="field__label" for="case-name">
                    "Case Name"
                </label>
                <input
                    id="case-name"
                    class="field__input"
                    type="text"
                    prop:value=move || workspace.with(|w| w.case_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        workspace.update(|w| w.case_name = value);
                    }
                />
                <label class="field__label" for="case-description">
                    "Case Description"
                </label>
                <textarea
                    id="case-description"
                    class="field__input"
                    rows="5"
                    placeholder="Enter case details..."
                    prop:value=move || workspace.with(|w| w.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        workspace.update(|w| w.description = value);
                    }
                ></textarea>
                <p class="field__label">"Case ID"</p>
                <p class="field__value">{move || workspace.with(|w| w.case_id.clone())}</p>
                <p class="field__label">"Created"</p>
                <p class="field__value">{opened}</p>
            </div>
            <div class="card">
                <h2 class="card__title">"Forensic Tools"</h2>
                {FORENSIC_TOOLS
                    .iter()
                    .map(|(glyph, label)| {
                        view! {
                            <button class="btn btn--outline btn--sm btn--block">
                                <span aria-hidden="true">{*glyph}</span>
                                {*label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </aside>
    }
}
