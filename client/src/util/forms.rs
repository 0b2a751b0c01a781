//! Form validation and list bookkeeping shared by the CRUD pages.
//!
//! DESIGN
//! ======
//! Validators return `Result<_, String>` carrying the French message the
//! page shows inline, so a page can chain them with `?` and bail out before
//! any request is issued.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::Identified;

/// Pause between a successful create/update and the redirect to the list.
pub const REDIRECT_DELAY_MS: u32 = 1500;
/// Pause between a successful register/verify and the redirect to login.
pub const AUTH_REDIRECT_DELAY_MS: u32 = 2000;

/// Minimum username length accepted by registration.
pub const USERNAME_MIN_LEN: usize = 3;
/// Minimum password length accepted by registration.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Whether a form page creates a record or edits an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    /// Mode for an optional `:id` route parameter.
    pub fn from_route(id: Option<&str>) -> Self {
        id.and_then(|raw| raw.parse().ok()).map_or(Self::Create, Self::Edit)
    }

    pub fn is_edit(self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

/// Trimmed `value`, or `message` when it is blank.
pub fn require(value: &str, message: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(message.to_owned()) } else { Ok(trimmed.to_owned()) }
}

/// Parse a required integer field.
pub fn require_int(value: &str, message: &str) -> Result<i64, String> {
    require(value, message)?.parse().map_err(|_| message.to_owned())
}

/// Drop the record with `id`, leaving every other record in place.
pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: i64) {
    items.retain(|item| item.id() != id);
}

/// `local@domain.tld` shape: one `@`, no whitespace, a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// At least three ASCII letters, digits or underscores.
pub fn is_valid_username(username: &str) -> bool {
    username.chars().count() >= USERNAME_MIN_LEN
        && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN
}

pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    !confirmation.is_empty() && password == confirmation
}
