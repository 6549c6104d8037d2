//! Demo timing constants.
//!
//! Every simulated wait in the site comes from here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 3000;
pub const DEFAULT_SIGN_IN_DELAY_MS: u64 = 1500;
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Simulated delays, provided to pages through Leptos context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoTimings {
    /// Time between "Analysis Started" and "Analysis Complete".
    pub analysis_delay: Duration,
    /// Time between submitting the sign-in form and the redirect.
    pub sign_in_delay: Duration,
    /// How long a toast stays on screen.
    pub toast_duration: Duration,
}

impl Default for DemoTimings {
    fn default() -> Self {
        Self {
            analysis_delay: Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS),
            sign_in_delay: Duration::from_millis(DEFAULT_SIGN_IN_DELAY_MS),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
        }
    }
}
