//! Local UI chrome state for the navigation shell.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (mobile menu, viewport) out of the
//! page models so each page owns only its own domain state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::viewport::{Layout, ViewportState};

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub mobile_menu_open: bool,
    pub viewport: ViewportState,
}

impl UiState {
    pub fn layout(&self) -> Layout {
        self.viewport.layout()
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Record a new viewport width. Growing past the breakpoint closes the
    /// mobile menu since it is no longer rendered.
    pub fn resize(&mut self, width: u32) {
        self.viewport.width = width;
        if !self.layout().is_narrow() {
            self.mobile_menu_open = false;
        }
    }
}
