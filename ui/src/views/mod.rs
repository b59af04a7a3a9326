//! Routed pages.

mod dashboard;
pub use dashboard::Dashboard;
