//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard, the side navigation and the chat page. The role
//! and username are the only persisted client state: written on login,
//! removed on logout, read once when the browser takes over from SSR.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::storage;

/// Storage key holding the signed-in role.
pub const ROLE_KEY: &str = "role";
/// Storage key holding the signed-in username.
pub const USERNAME_KEY: &str = "username";
/// The only role allowed to administer user accounts.
pub const DIRECTOR_ROLE: &str = "Directeur";

/// Authentication state: role, username and restore status.
///
/// `loading` stays true until the persisted pair has been read in the
/// browser, so guards do not redirect during hydration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub role: Option<String>,
    pub username: String,
    pub loading: bool,
}

impl AuthState {
    /// State used for the first render, before storage is readable.
    pub fn pending() -> Self {
        Self { role: None, username: String::new(), loading: true }
    }

    /// Read the persisted pair from storage.
    pub fn restore() -> Self {
        Self::from_stored(storage::load_string(ROLE_KEY), storage::load_string(USERNAME_KEY))
    }

    fn from_stored(role: Option<String>, username: Option<String>) -> Self {
        Self {
            role: role.filter(|r| !r.trim().is_empty()),
            username: username.unwrap_or_default(),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    pub fn is_director(&self) -> bool {
        self.role.as_deref() == Some(DIRECTOR_ROLE)
    }

    /// Record a successful login and persist it.
    pub fn login(&mut self, role: String, username: String) {
        storage::save_string(ROLE_KEY, &role);
        storage::save_string(USERNAME_KEY, &username);
        leptos::logging::log!("signed in: username={username} role={role}");
        self.role = Some(role);
        self.username = username;
        self.loading = false;
    }

    /// Forget the session, in memory and in storage.
    pub fn logout(&mut self) {
        storage::remove(ROLE_KEY);
        storage::remove(USERNAME_KEY);
        leptos::logging::log!("signed out: username={}", self.username);
        self.role = None;
        self.username.clear();
        self.loading = false;
    }

    /// Name shown in the navigation and chat greeting.
    pub fn display_name(&self) -> String {
        display_name(&self.username)
    }
}

/// Turn `first_last` usernames into `First Last`.
pub fn display_name(username: &str) -> String {
    username
        .split('_')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
