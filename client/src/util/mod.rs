//! Browser glue and small helpers shared by pages.

pub mod clock;
pub mod files;
pub mod lifecycle;
pub mod viewport;
