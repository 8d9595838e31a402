//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod expense_form;
pub mod expenses_table;
pub mod footer;
pub mod logs;
pub mod ml_panel;
