//! Case dashboard: search, sort and create cases, then open one.
//!
//! SYSTEM CONTEXT
//! ==============
//! The case collection is page-local and seeded on mount. The visible list is
//! derived from it on every render.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::case_card::CaseCard;
use crate::components::site_layout::SiteLayout;
use crate::components::toaster::ToastNotifier;
use crate::state::cases::{CasesState, SortField, SortState};
use crate::util::clock;

/// Hint under "No cases found".
fn empty_state_hint(query: &str) -> &'static str {
    if query.is_empty() { "Create your first case to get started" } else { "No cases match your search query" }
}

/// Label for an entry in the sort menu, marking the active field.
fn sort_menu_label(field: SortField, sort: SortState) -> String {
    if field == sort.field { format!("{} {}", field.label(), sort.direction.arrow()) } else { field.label().to_owned() }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let notifier = expect_context::<ToastNotifier>();
    let cases = RwSignal::new(CasesState::default());
    let sort_menu_open = RwSignal::new(false);

    let visible = move || cases.with(CasesState::visible);
    let query = move || cases.with(|s| s.query.clone());
    let open_create = move |_| cases.update(CasesState::open_create);

    let on_create = Callback::new(move |()| {
        let today = clock::today();
        if let Some(Ok(case)) = cases.try_update(|s| s.create_case(today, &notifier)) {
            log::debug!("created {}", case.id);
        }
    });
    let on_cancel = Callback::new(move |()| cases.update(CasesState::close_create));

    view! {
        <SiteLayout>
            <div class="dashboard">
                <header class="dashboard__header">
                    <div>
                        <h1 class="dashboard__title">"Case Dashboard"</h1>
                        <p class="dashboard__subtitle">"Manage your forensic investigation cases"</p>
                    </div>
                    <div class="dashboard__controls">
                        <input
                            class="field__input dashboard__search"
                            type="search"
                            placeholder="Search cases..."
                            prop:value=query
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                cases.update(|s| s.query = value);
                            }
                        />
                        <div class="menu">
                            <button class="btn btn--outline" on:click=move |_| sort_menu_open.update(|o| *o = !*o)>
                                "Sort "
                                {move || cases.with(|s| s.sort.direction.arrow())}
                            </button>
                            <Show when=move || sort_menu_open.get()>
                                <div class="menu__content" role="menu">
                                    <p class="menu__label">"Sort By"</p>
                                    {SortField::ALL
                                        .iter()
                                        .map(|field| {
                                            let field = *field;
                                            view! {
                                                <button
                                                    class="menu__item"
                                                    role="menuitem"
                                                    on:click=move |_| {
                                                        cases.update(|s| s.sort.toggle(field));
                                                        sort_menu_open.set(false);
                                                    }
                                                >
                                                    {move || cases.with(|s| sort_menu_label(field, s.sort))}
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </Show>
                        </div>
                        <button class="btn btn--primary" on:click=open_create>
                            "New Case"
                        </button>
                    </div>
                </header>
                <Show
                    when=move || !visible().is_empty()
                    fallback=move || {
                        view! {
                            <div class="empty-state">
                                <span class="empty-state__glyph" aria-hidden="true">"📄"</span>
                                <h3>"No cases found"</h3>
                                <p>{move || empty_state_hint(&query())}</p>
                                <Show when=move || query().is_empty()>
                                    <button class="btn btn--outline" on:click=open_create>
                                        "Create a case"
                                    </button>
                                </Show>
                            </div>
                        }
                    }
                >
                    <div class="dashboard__grid">
                        {move || visible().into_iter().map(|case| view! { <CaseCard case=case/> }).collect::<Vec<_>>()}
                    </div>
                </Show>
                <Show when=move || cases.with(|s| s.create_open)>
                    <CreateCaseDialog cases=cases on_create=on_create on_cancel=on_cancel/>
                </Show>
            </div>
        </SiteLayout>
    }
}

/// Modal dialog for a new case.
#[component]
fn CreateCaseDialog(cases: RwSignal<CasesState>, on_create: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" role="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create New Case"</h2>
                <p class="dialog__description">"Enter the details for your new investigation case."</p>
                <label class="dialog__label" for="case-title">
                    "Case Title"
                </label>
                <input
                    id="case-title"
                    class="dialog__input"
                    type="text"
                    placeholder="Enter case title"
                    prop:value=move || cases.with(|s| s.draft_title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        cases.update(|s| s.draft_title = value);
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_create.run(());
                        }
                    }
                />
                <label class="dialog__label" for="case-type">
                    "Case Type"
                </label>
                <input
                    id="case-type"
                    class="dialog__input"
                    type="text"
                    placeholder="E.g., Homicide, Robbery, Burglary"
                    prop:value=move || cases.with(|s| s.draft_kind.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        cases.update(|s| s.draft_kind = value);
                    }
                />
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_create.run(())>
                        "Create Case"
                    </button>
                </div>
            </div>
        </div>
    }
}
