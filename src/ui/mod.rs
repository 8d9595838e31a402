// Module declarations
mod app;
pub mod dashboard;
pub mod input;
mod navbar;
// Re-exports for external use
pub use app::{App, run};
