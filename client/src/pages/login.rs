//! Login page: username + password against `/auth/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend answers with the account role only. Role and username are
//! then persisted through `AuthState::login`, which is what every guard and
//! the side navigation read afterwards.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::alert::Alert;
use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::state::feedback::Feedback;

/// Shown when the backend rejects the credentials without a detail.
pub const LOGIN_FAILED: &str = "Identifiants incorrects";

/// Build the login body, refusing blank fields before any request.
pub fn login_request(username: &str, password: &str) -> Result<LoginRequest, String> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Veuillez saisir votre nom d'utilisateur et votre mot de passe".to_owned());
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let feedback = RwSignal::new(Feedback::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match login_request(&username.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                feedback.update(|f| f.fail(message));
                return;
            }
        };
        busy.set(true);
        feedback.update(Feedback::clear);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await {
                    Ok(response) => {
                        auth.update(|a| a.login(response.role, request.username));
                        navigate("/residents", NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        feedback.update(|f| f.fail(e.user_message(LOGIN_FAILED)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, auth, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"iSenior"</h1>
                <h2>"Connexion"</h2>
                <Alert feedback=feedback/>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Nom d'utilisateur"</span>
                        <input
                            class="field__input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Mot de passe"</span>
                        <input
                            class="field__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Se connecter"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Pas encore de compte ? "
                    <a href="/register">"S'inscrire"</a>
                </p>
            </div>
        </div>
    }
}
