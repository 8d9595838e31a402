//! Dashboard controller
//!
//! State, backend commands and the sequential driver for the expense and
//! budget-prediction workflows.

pub mod command;
pub mod controller;
pub mod state;

// Re-export main types for external use
pub use command::{Command, Outcome, execute};
pub use controller::{DashboardController, Mutation};
pub use state::DashboardState;
