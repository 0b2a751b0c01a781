//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, submit,
//! delete) and delegates shared controls to `components`. Pure helpers such
//! as drafts and payload builders sit next to the page that uses them.

pub mod appointment_form;
pub mod appointments;
pub mod chat;
pub mod login;
pub mod medication_form;
pub mod medications;
pub mod register;
pub mod resident_form;
pub mod residents;
pub mod users;
pub mod verify_email;
