//! Cross-cutting helpers shared by the pipeline and the views.

pub mod config;
pub mod format;
