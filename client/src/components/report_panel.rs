//! Report panel showing the fixed forensic report.

use leptos::prelude::*;

use crate::content::report::{EXECUTIVE_SUMMARY, FINDINGS, RECOMMENDATIONS, REPORT_SUBTITLE, REPORT_TITLE};
use crate::state::workspace::{Panel, WorkspaceState};

#[component]
pub fn ReportPanel(workspace: RwSignal<WorkspaceState>) -> impl IntoView {
    let show_generated = RwSignal::new(false);
    let close_dialog = Callback::new(move |()| show_generated.set(false));

    view! {
        <section class="panel panel--report">
            <h2 class="panel__title">{REPORT_TITLE}</h2>
            <p class="panel__hint">{REPORT_SUBTITLE}</p>
            <Show
                when=move || workspace.with(WorkspaceState::has_report)
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <span class="empty-state__glyph" aria-hidden="true">"📄"</span>
                            <h3>"No Report Available"</h3>
                            <p>"Please upload and analyze images before generating a report."</p>
                            <button
                                class="btn btn--outline"
                                on:click=move |_| workspace.update(|w| w.set_panel(Panel::Sources))
                            >
                                "Go to Upload"
                            </button>
                        </div>
                    }
                }
            >
                <div class="report">
                    <div class="report__summary">
                        <h3>"Executive Summary"</h3>
                        <p>{EXECUTIVE_SUMMARY}</p>
                    </div>
                    <h3>"Evidence Analysis"</h3>
                    <div class="report__findings">
                        {FINDINGS
                            .iter()
                            .map(|finding| {
                                view! {
                                    <article class="finding">
                                        <h4>{finding.heading}</h4>
                                        <p class="finding__headline">{finding.headline}</p>
                                        <div class="finding__visual">
                                            <span>{finding.visual_caption}</span>
                                        </div>
                                        <ul>
                                            {finding.details.iter().map(|d| view! { <li>{*d}</li> }).collect::<Vec<_>>()}
                                        </ul>
                                    </article>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <h3>"Recommendations"</h3>
                    <ul class="report__recommendations">
                        {RECOMMENDATIONS
                            .iter()
                            .map(|rec| {
                                view! {
                                    <li class="recommendation">
                                        <span class="recommendation__glyph" aria-hidden="true">{rec.glyph}</span>
                                        <div>
                                            <p class="recommendation__action">{rec.action}</p>
                                            <p class="recommendation__rationale">{rec.rationale}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                    <div class="panel__actions">
                        <button
                            class="btn btn--outline"
                            on:click=move |_| workspace.update(|w| w.set_panel(Panel::Chat))
                        >
                            "Back to Analysis"
                        </button>
                        <button class="btn btn--primary" on:click=move |_| show_generated.set(true)>
                            "Generate Full Report"
                        </button>
                    </div>
                </div>
            </Show>
            <Show when=move || show_generated.get()>
                <div class="dialog-backdrop" on:click=move |_| close_dialog.run(())>
                    <div class="dialog" role="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Report Generated"</h2>
                        <p class="dialog__description">
                            "Your forensic analysis report has been generated successfully."
                        </p>
                        <p>"The complete report is now available for download or sharing."</p>
                        <div class="dialog__actions">
                            <button class="btn btn--outline" on:click=move |_| close_dialog.run(())>
                                "Share Report"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| close_dialog.run(())>
                                "Download PDF"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}
