//! Static copy for the marketing pages and the mocked report.

pub mod landing;
pub mod report;
