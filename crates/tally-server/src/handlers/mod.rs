//! HTTP request handlers organized by domain

pub mod analytics;
pub mod health;
pub mod insights;

// Re-export all handlers for use in router
pub use analytics::*;
pub use health::*;
pub use insights::*;
