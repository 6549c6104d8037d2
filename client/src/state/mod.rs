//! Page and chrome state models. Each is a plain struct wrapped in an
//! `RwSignal` by the page that owns it.

pub mod auth;
pub mod cases;
pub mod ingest;
pub mod notify;
pub mod ui;
pub mod viewport;
pub mod workspace;
