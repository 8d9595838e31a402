//! Dashboard view
//!
//! Split into one module per panel: expense form, expense table, budget
//! prediction, activity log and key hints.

pub mod components;
pub mod renderer;
pub mod utils;

// Re-export main functions for external use
pub use renderer::render_dashboard;
