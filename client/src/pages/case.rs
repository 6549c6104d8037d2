//! Case workspace page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `caseId` from the route, builds a fresh `WorkspaceState`, and drives
//! the mocked analysis timer. The timer continuation checks both the page
//! liveness flag and the run token, so leaving the page or restarting
//! analysis never lets an old timer flip state.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::analyze_panel::AnalyzePanel;
use crate::components::case_sidebar::CaseSidebar;
use crate::components::report_panel::ReportPanel;
use crate::components::site_layout::SiteLayout;
use crate::components::sources_panel::SourcesPanel;
use crate::components::toaster::ToastNotifier;
use crate::config::DemoTimings;
use crate::routes;
use crate::state::ui::UiState;
use crate::state::workspace::{Panel, WorkspaceState};
use crate::util::lifecycle::AliveFlag;

#[component]
pub fn CasePage() -> impl IntoView {
    let notifier = expect_context::<ToastNotifier>();
    let timings = expect_context::<DemoTimings>();
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();

    let case_id = move || params.read().get("caseId").unwrap_or_default();
    let initial_id = params.read_untracked().get("caseId").unwrap_or_default();
    let workspace = RwSignal::new(WorkspaceState::new(&initial_id));

    // Same route with a different id reuses this component; start over.
    Effect::new(move || {
        let id = case_id();
        if workspace.with_untracked(|w| w.case_id != id) {
            workspace.update(|w| w.reset(&id));
        }
    });

    let alive = AliveFlag::default();
    on_cleanup({
        let alive = alive.clone();
        move || {
            alive.kill();
            workspace.try_update(WorkspaceState::cancel_analysis);
        }
    });

    let on_analyze = Callback::new({
        let alive = alive.clone();
        move |()| {
            let Some(run) = workspace.try_update(|w| w.begin_analysis(&notifier)).flatten() else {
                return;
            };
            log::debug!("analysis {run:?} started for {}", workspace.with_untracked(|w| w.case_id.clone()));
            #[cfg(feature = "hydrate")]
            {
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(timings.analysis_delay).await;
                    if !alive.is_alive() {
                        return;
                    }
                    let finished = workspace.try_update(|w| w.finish_analysis(run, &ui, &notifier)).unwrap_or(false);
                    if !finished {
                        log::debug!("dropped stale analysis {run:?}");
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (run, &alive, timings, ui);
        }
    });

    let active = move || workspace.with(|w| w.active_panel);
    let show_details = move || workspace.with(|w| w.show_details);

    view! {
        <SiteLayout>
            <div class="case">
                <header class="case__header">
                    <div>
                        <a class="case__back" href=routes::DASHBOARD>
                            "← Back to Dashboard"
                        </a>
                        <h1 class="case__title">{move || workspace.with(|w| w.case_name.clone())}</h1>
                    </div>
                    <div class="case__actions">
                        <button
                            class="btn btn--outline btn--sm"
                            on:click=move |_| workspace.update(WorkspaceState::toggle_details)
                        >
                            {move || if show_details() { "Hide Details" } else { "Show Details" }}
                        </button>
                        <button class="btn btn--outline btn--sm">"Share"</button>
                        <button class="btn btn--primary btn--sm" on:click=move |_| workspace.with_untracked(|w| w.save(&notifier))>
                            "Save"
                        </button>
                    </div>
                </header>
                <div class="case__body" class:case__body--full=move || !show_details()>
                    <Show when=show_details>
                        <CaseSidebar workspace=workspace/>
                    </Show>
                    <div class="case__main">
                        <nav class="tabs" role="tablist">
                            {Panel::ALL
                                .iter()
                                .map(|panel| {
                                    let panel = *panel;
                                    view! {
                                        <button
                                            class="tabs__trigger"
                                            role="tab"
                                            class:tabs__trigger--active=move || active() == panel
                                            aria-selected=move || (active() == panel).to_string()
                                            on:click=move |_| workspace.update(|w| w.set_panel(panel))
                                        >
                                            {panel.label()}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </nav>
                        {
                            let alive = alive.clone();
                            move || match active() {
                                Panel::Sources => view! { <SourcesPanel workspace=workspace alive=alive.clone()/> }.into_any(),
                                Panel::Chat => view! { <AnalyzePanel workspace=workspace on_analyze=on_analyze/> }.into_any(),
                                Panel::Studio => view! { <ReportPanel workspace=workspace/> }.into_any(),
                            }
                        }
                    </div>
                </div>
            </div>
        </SiteLayout>
    }
}
