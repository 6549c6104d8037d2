//! Browser viewport sampling.
//!
//! TRADE-OFFS
//! ==========
//! Server rendering has no window, so the first paint always assumes the wide
//! layout and the client corrects it once hydrated.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::state::viewport::{Layout, ViewportObserver};

impl ViewportObserver for RwSignal<UiState> {
    fn layout(&self) -> Layout {
        self.with_untracked(UiState::layout)
    }
}

/// Current `window.innerWidth`, when running in a browser.
pub fn current_width() -> Option<u32> {
    #[cfg(feature = "hydrate")]
    {
        let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let width = width.max(0.0) as u32;
        Some(width)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sample the width now and on every resize for the lifetime of the app.
pub fn track(ui: RwSignal<UiState>) {
    if let Some(width) = current_width() {
        ui.update(|u| u.resize(width));
    }
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = current_width() {
                if width != ui.with_untracked(|u| u.viewport.width) {
                    ui.update(|u| u.resize(width));
                }
            }
        });
        on_cleanup(move || handle.remove());
    }
}
