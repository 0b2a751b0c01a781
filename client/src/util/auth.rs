//! Role-gated routing rules shared by the shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route goes through [`redirect_for`], so pages never repeat their
//! own "signed in?" checks. The rules only look at the persisted role; the
//! backend stays the authority for what a role may actually do.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Landing route for signed-in users.
pub const HOME_PATH: &str = "/residents";
/// Route of the sign-in form.
pub const LOGIN_PATH: &str = "/login";

/// Access class of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Login, register and e-mail verification.
    Public,
    /// The bare `/` route.
    Root,
    /// User administration, reserved to the director.
    DirectorOnly,
    /// Everything else: requires a role.
    Protected,
}

impl RouteAccess {
    pub fn of(path: &str) -> Self {
        let path = normalize(path);
        if path == "/" {
            Self::Root
        } else if path == LOGIN_PATH || path == "/register" || path.starts_with("/verify-email") {
            Self::Public
        } else if path == "/users" || path.starts_with("/users/") {
            Self::DirectorOnly
        } else {
            Self::Protected
        }
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Where to send the user for `path`, or `None` when the page may render.
pub fn redirect_for(path: &str, auth: &AuthState) -> Option<&'static str> {
    if auth.loading {
        return None;
    }
    let access = RouteAccess::of(path);
    if !auth.is_authenticated() {
        return match access {
            RouteAccess::Public => None,
            RouteAccess::Root | RouteAccess::Protected | RouteAccess::DirectorOnly => Some(LOGIN_PATH),
        };
    }
    match access {
        RouteAccess::Root => Some(HOME_PATH),
        RouteAccess::Public if matches!(normalize(path), LOGIN_PATH | "/register") => Some(HOME_PATH),
        RouteAccess::DirectorOnly if !auth.is_director() => Some(LOGIN_PATH),
        _ => None,
    }
}

/// Whether `path` may render its content for `auth` right now.
pub fn may_render(path: &str, auth: &AuthState) -> bool {
    !auth.loading && redirect_for(path, auth).is_none()
}

/// Login-style pages render without the side navigation.
pub fn is_chrome_hidden(path: &str) -> bool {
    RouteAccess::of(path) == RouteAccess::Public
}

/// Re-evaluate [`redirect_for`] whenever the path or the session changes
/// and navigate (replacing history) when a redirect applies.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = pathname.get();
        let state = auth.get();
        if let Some(target) = redirect_for(&path, &state) {
            leptos::logging::log!("route guard: {path} -> {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
