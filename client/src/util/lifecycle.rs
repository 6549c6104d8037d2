//! Liveness flag for deferred work started by a page.
//!
//! Timers and file reads outlive the click that started them. Each page
//! creates one `AliveFlag`, clears it in `on_cleanup`, and every deferred
//! continuation checks it before touching page state.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct AliveFlag(Arc<AtomicBool>);

impl Default for AliveFlag {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl AliveFlag {
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn kill(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
