//! Analysis panel: option toggles, evidence preview and the start button.

use leptos::prelude::*;

use crate::state::workspace::{AnalysisOption, Panel, WorkspaceState};

#[component]
pub fn AnalyzePanel(workspace: RwSignal<WorkspaceState>, on_analyze: Callback<()>) -> impl IntoView {
    let has_images = move || workspace.with(|w| !w.images.is_empty());
    let analyzing = move || workspace.with(|w| w.is_analyzing);
    let back_to_upload = move |_| workspace.update(|w| w.set_panel(Panel::Sources));

    view! {
        <section class="panel panel--analyze">
            <h2 class="panel__title">"Analyze Evidence"</h2>
            <p class="panel__hint">
                "Our AI will process your uploaded images to identify key evidence and patterns."
            </p>
            <Show
                when=has_images
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <span class="empty-state__glyph" aria-hidden="true">"🖼"</span>
                            <h3>"No Images Uploaded"</h3>
                            <p>"Please upload images in the previous step before proceeding with analysis."</p>
                            <button class="btn btn--outline" on:click=back_to_upload>
                                "Go to Upload"
                            </button>
                        </div>
                    }
                }
            >
                <div class="analyze__grid">
                    <div class="analyze__options">
                        <h3>"Analysis Options"</h3>
                        {AnalysisOption::ALL
                            .iter()
                            .map(|option| {
                                let option = *option;
                                view! {
                                    <div class="checkbox-row">
                                        <input
                                            type="checkbox"
                                            id=option.input_id()
                                            prop:checked=move || workspace.with(|w| w.option_enabled(option))
                                            on:change=move |ev| {
                                                let enabled = event_target_checked(&ev);
                                                workspace.update(|w| w.set_option(option, enabled));
                                            }
                                        />
                                        <label for=option.input_id()>{option.label()}</label>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="analyze__preview">
                        <h3>"Evidence Preview"</h3>
                        <div class="preview-grid">
                            {move || {
                                workspace
                                    .with(|w| {
                                        let (shown, more) = w.preview();
                                        let mut tiles = shown
                                            .iter()
                                            .enumerate()
                                            .map(|(index, image)| {
                                                view! {
                                                    <div class="preview-grid__tile">
                                                        <img src=image.data_url.clone() alt=format!("Evidence {}", index + 1)/>
                                                    </div>
                                                }
                                                    .into_any()
                                            })
                                            .collect::<Vec<_>>();
                                        if more > 0 {
                                            tiles.push(
                                                view! {
                                                    <div class="preview-grid__tile preview-grid__more">
                                                        {format!("+{more} more")}
                                                    </div>
                                                }
                                                    .into_any(),
                                            );
                                        }
                                        tiles
                                    })
                            }}
                        </div>
                        {move || {
                            workspace
                                .with(|w| {
                                    w.selected_image()
                                        .map(|image| {
                                            view! {
                                                <figure class="selected-image">
                                                    <img src=image.data_url.clone() alt=image.name.clone()/>
                                                    <figcaption>{image.name.clone()}</figcaption>
                                                </figure>
                                            }
                                        })
                                })
                        }}
                    </div>
                </div>
                <hr class="separator"/>
                <div class="panel__actions">
                    <button class="btn btn--outline" on:click=back_to_upload>
                        "Back to Upload"
                    </button>
                    <button class="btn btn--primary" disabled=analyzing on:click=move |_| on_analyze.run(())>
                        {move || if analyzing() { "Analyzing..." } else { "Start Analysis" }}
                    </button>
                </div>
            </Show>
        </section>
    }
}
