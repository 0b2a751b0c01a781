//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the console chrome and shared form controls while
//! reading/writing shared state from Leptos context providers.

pub mod alert;
pub mod sidebar;
pub mod typeahead;
