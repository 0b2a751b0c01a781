//! Collapsible side navigation for signed-in staff.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the app shell on every page except the login-style ones. The
//! user-administration entry only appears for the director; the route guard
//! enforces the same rule for typed URLs.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::ui::UiState;
use crate::util::auth::LOGIN_PATH;

/// One navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const RESIDENTS: NavEntry = NavEntry { href: "/residents", label: "Résidents", icon: "👤" };
const APPOINTMENTS: NavEntry = NavEntry { href: "/appointments", label: "Rendez-vous", icon: "📅" };
const MEDICATIONS: NavEntry = NavEntry { href: "/medications", label: "Médicaments", icon: "💊" };
const USERS: NavEntry = NavEntry { href: "/users", label: "Utilisateurs", icon: "🛡" };
const CHAT: NavEntry = NavEntry { href: "/chat", label: "Chat", icon: "💬" };

/// Entries visible for the given role, in display order.
pub fn nav_entries(is_director: bool) -> Vec<NavEntry> {
    let mut entries = vec![RESIDENTS, APPOINTMENTS, MEDICATIONS];
    if is_director {
        entries.push(USERS);
    }
    entries.push(CHAT);
    entries
}

/// An entry is active on its own path and every path below it.
pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let location = use_location();
    let navigate = use_navigate();

    let entries = move || nav_entries(auth.get().is_director());

    let on_logout = move |_| {
        auth.update(AuthState::logout);
        chat.set(ChatState::default());
        navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <nav class=move || if ui.get().sidebar_open { "sidebar" } else { "sidebar sidebar--collapsed" }>
            <div class="sidebar__header">
                <span class="sidebar__brand">"iSenior"</span>
                <button
                    class="sidebar__toggle"
                    type="button"
                    title="Réduire / agrandir le menu"
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                >
                    {move || if ui.get().sidebar_open { "«" } else { "»" }}
                </button>
            </div>
            <ul class="sidebar__links">
                {move || {
                    entries()
                        .into_iter()
                        .map(|entry| {
                            let active = move || is_active(&location.pathname.get(), entry.href);
                            view! {
                                <li>
                                    <a
                                        href=entry.href
                                        class="sidebar__link"
                                        class:sidebar__link--active=active
                                        title=entry.label
                                    >
                                        <span class="sidebar__icon">{entry.icon}</span>
                                        <Show when=move || ui.get().sidebar_open>
                                            <span class="sidebar__label">{entry.label}</span>
                                        </Show>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <div class="sidebar__footer">
                <Show when=move || ui.get().sidebar_open>
                    <span class="sidebar__user">{move || auth.get().display_name()}</span>
                </Show>
                <button class="btn sidebar__logout" type="button" on:click=on_logout>
                    "Déconnexion"
                </button>
            </div>
        </nav>
    }
}
