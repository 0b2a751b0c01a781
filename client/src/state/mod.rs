//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `chat`, `feedback`, `ui`) so pages
//! and components depend on small focused models.

pub mod auth;
pub mod chat;
pub mod feedback;
pub mod ui;
