pub mod api;
pub mod core;
pub mod format;
pub mod report;
