//! Networking modules for the facility REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and maps failures to `ApiError`, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
