//! Viewport layout classification.
//!
//! The workspace and navigation shell only care whether the screen is narrow
//! (phone-sized) or wide. Width sampling lives in `util::viewport`; this
//! module holds the pure classification and the observer capability.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::config::MOBILE_BREAKPOINT_PX;

/// Width assumed before the browser reports one (server render).
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1024;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    Narrow,
    #[default]
    Wide,
}

impl Layout {
    pub fn is_narrow(self) -> bool {
        self == Layout::Narrow
    }
}

/// Classify a viewport width against a breakpoint. Widths strictly below the
/// breakpoint are narrow.
pub fn layout_for_width(width: u32, breakpoint: u32) -> Layout {
    if width < breakpoint { Layout::Narrow } else { Layout::Wide }
}

/// Answers "what layout is the screen in right now".
pub trait ViewportObserver {
    fn layout(&self) -> Layout;
}

/// A fixed layout observes itself.
impl ViewportObserver for Layout {
    fn layout(&self) -> Layout {
        *self
    }
}

/// Last sampled viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportState {
    pub width: u32,
    pub breakpoint: u32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self { width: DEFAULT_VIEWPORT_WIDTH, breakpoint: MOBILE_BREAKPOINT_PX }
    }
}

impl ViewportState {
    pub fn layout(&self) -> Layout {
        layout_for_width(self.width, self.breakpoint)
    }
}
