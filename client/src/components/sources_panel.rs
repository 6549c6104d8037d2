//! Evidence upload panel: file picker, drop target and image grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Picked or dropped files are decoded off the click handler in a local task.
//! The decoded batch is appended only if the page is still mounted and still
//! showing the case the upload started on.

use leptos::prelude::*;

use super::toaster::ToastNotifier;
use crate::state::workspace::{Panel, WorkspaceState, image_count_label};
use crate::util::lifecycle::AliveFlag;

#[cfg(feature = "hydrate")]
use crate::state::ingest::decode_batch;
#[cfg(feature = "hydrate")]
use crate::util::files::{BrowserFile, from_file_list};

#[cfg(feature = "hydrate")]
fn start_ingest(files: Vec<BrowserFile>, workspace: RwSignal<WorkspaceState>, notifier: ToastNotifier, alive: AliveFlag) {
    if files.is_empty() {
        return;
    }
    let ticket = workspace.with_untracked(WorkspaceState::ingest_ticket);
    log::debug!("ingesting {} file(s) under {ticket:?}", files.len());
    leptos::task::spawn_local(async move {
        let batch = decode_batch(files, &notifier).await;
        if !alive.is_alive() {
            log::debug!("workspace unmounted; dropping ingest batch");
            return;
        }
        let pending = batch.images.len();
        let added = workspace.try_update(|w| w.append_batch(ticket, batch, &notifier)).unwrap_or(0);
        if added < pending {
            log::debug!("dropped stale ingest batch {ticket:?}");
        }
    });
}

#[component]
pub fn SourcesPanel(workspace: RwSignal<WorkspaceState>, alive: AliveFlag) -> impl IntoView {
    let notifier = expect_context::<ToastNotifier>();
    let dragging = RwSignal::new(false);

    let on_change = {
        let alive = alive.clone();
        move |ev: leptos::ev::Event| {
            #[cfg(feature = "hydrate")]
            {
                use wasm_bindgen::JsCast as _;
                let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                    return;
                };
                let files = from_file_list(input.files());
                input.set_value("");
                start_ingest(files, workspace, notifier, alive.clone());
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&ev, &alive);
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        #[cfg(feature = "hydrate")]
        {
            let files = from_file_list(ev.data_transfer().and_then(|dt| dt.files()));
            start_ingest(files, workspace, notifier, alive.clone());
        }
    };

    let count = move || workspace.with(|w| w.images.len());

    view! {
        <section class="panel panel--sources">
            <h2 class="panel__title">"Upload Crime Scene Images"</h2>
            <div
                class="dropzone"
                class:dropzone--active=move || dragging.get()
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    dragging.set(true);
                }
                on:dragleave=move |_| dragging.set(false)
                on:drop=on_drop
            >
                <span class="dropzone__glyph" aria-hidden="true">"⇪"</span>
                <p class="dropzone__hint">"Drag and drop images, or browse files"</p>
                <input
                    id="file-upload"
                    class="dropzone__input"
                    type="file"
                    accept="image/*"
                    multiple=true
                    on:change=on_change
                />
                <label class="btn btn--secondary" for="file-upload">
                    "Select Files"
                </label>
            </div>
            <Show when=move || { count() > 0 }>
                <h3 class="panel__subtitle">"Uploaded Images"</h3>
                <p class="panel__hint">{move || format!("{} ready for analysis", image_count_label(count()))}</p>
                <div class="evidence-grid">
                    {move || {
                        workspace
                            .with(|w| {
                                w.images
                                    .iter()
                                    .enumerate()
                                    .map(|(index, image)| {
                                        let id = image.id;
                                        let selected = w.selected == Some(id);
                                        view! {
                                            <div
                                                class="evidence-tile"
                                                class:evidence-tile--selected=selected
                                                title=image.name.clone()
                                                on:click=move |_| {
                                                    workspace.update(|w| {
                                                        w.select_image(id);
                                                    });
                                                }
                                            >
                                                <img
                                                    src=image.data_url.clone()
                                                    alt=format!("Uploaded image {}", index + 1)
                                                />
                                                <button
                                                    class="btn btn--danger btn--icon evidence-tile__delete"
                                                    aria-label="Delete image"
                                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                                        ev.stop_propagation();
                                                        workspace.update(|w| {
                                                            w.delete_image(index, &notifier);
                                                        });
                                                    }
                                                >
                                                    "🗑"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </div>
                <div class="panel__actions">
                    <button class="btn btn--primary" on:click=move |_| workspace.update(|w| w.set_panel(Panel::Chat))>
                        "Continue to Analysis"
                    </button>
                </div>
            </Show>
        </section>
    }
}
