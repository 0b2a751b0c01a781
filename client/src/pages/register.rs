//! Self-service registration with live field validation.
//!
//! DESIGN
//! ======
//! Each field is validated on every keystroke so the form can show inline
//! hints; submit re-runs the same checks and issues no request while any
//! of them fails. The role comes from a typeahead over a fixed list.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert::Alert;
use crate::components::typeahead::TypeaheadField;
use crate::net::types::RegisterRequest;
use crate::state::feedback::Feedback;
use crate::util::forms::{self, AUTH_REDIRECT_DELAY_MS};
use crate::util::typeahead::{Suggestion, TypeaheadState};

/// Roles offered at registration.
pub const ROLES: [&str; 8] =
    ["Directeur", "Infirmier Cheffe", "Infirmier", "Kiné", "Ergo", "Logo", "Diététicien", "Aide-Soignant"];

/// Role sent when none was picked.
pub const DEFAULT_ROLE: &str = "Personnel";

pub const INVALID_EMAIL: &str = "Email invalide";
pub const INVALID_USERNAME: &str = "Le nom d'utilisateur doit contenir au moins 3 caractères alphanumériques";
pub const INVALID_PASSWORD: &str = "Le mot de passe doit contenir au moins 6 caractères";
pub const PASSWORD_MISMATCH: &str = "Les mots de passe ne correspondent pas";
pub const REGISTER_SUCCESS: &str = "Inscription réussie ! Vérifiez votre email pour activer votre compte.";
pub const REGISTER_FAILED: &str = "Erreur lors de l'inscription";

pub fn role_suggestions() -> Vec<Suggestion> {
    ROLES.iter().copied().map(Suggestion::from_label).collect()
}

/// Raw registration inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirmation: String,
}

impl RegisterDraft {
    /// Per-field hints for non-empty fields, in form order.
    pub fn live_errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if !self.email.is_empty() && !forms::is_valid_email(self.email.trim()) {
            errors.push(INVALID_EMAIL);
        }
        if !self.username.is_empty() && !forms::is_valid_username(self.username.trim()) {
            errors.push(INVALID_USERNAME);
        }
        if !self.password.is_empty() && !forms::is_valid_password(&self.password) {
            errors.push(INVALID_PASSWORD);
        }
        if !self.confirmation.is_empty() && self.password != self.confirmation {
            errors.push(PASSWORD_MISMATCH);
        }
        errors
    }

    /// Validate every field and build the request body.
    pub fn to_request(&self, role: Option<&str>) -> Result<RegisterRequest, String> {
        let email = self.email.trim();
        let username = self.username.trim();
        if !forms::is_valid_email(email) {
            return Err(INVALID_EMAIL.to_owned());
        }
        if !forms::is_valid_username(username) {
            return Err(INVALID_USERNAME.to_owned());
        }
        if !forms::is_valid_password(&self.password) {
            return Err(INVALID_PASSWORD.to_owned());
        }
        if !forms::passwords_match(&self.password, &self.confirmation) {
            return Err(PASSWORD_MISMATCH.to_owned());
        }
        Ok(RegisterRequest {
            email: email.to_owned(),
            username: username.to_owned(),
            password: self.password.clone(),
            role: role.filter(|r| !r.trim().is_empty()).unwrap_or(DEFAULT_ROLE).to_owned(),
        })
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let draft = RwSignal::new(RegisterDraft::default());
    let role = RwSignal::new(TypeaheadState::default());
    let roles = Signal::derive(role_suggestions);
    let feedback = RwSignal::new(Feedback::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match draft.get().to_request(role.get().committed_value()) {
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
                match crate::net::api::register(&request).await {
                    Ok(_) => {
                        leptos::logging::log!("registered username={} role={}", request.username, request.role);
                        feedback.update(|f| f.succeed(REGISTER_SUCCESS));
                        crate::util::nav::navigate_after(AUTH_REDIRECT_DELAY_MS, "/login", navigate);
                    }
                    Err(e) => {
                        leptos::logging::warn!("register failed: {e}");
                        feedback.update(|f| f.fail(e.user_message(REGISTER_FAILED)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate, AUTH_REDIRECT_DELAY_MS, REGISTER_FAILED);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Inscription"</h2>
                <Alert feedback=feedback/>
                <form class="auth-form" on:submit=on_submit>
                    {text_field(draft, "Email", "email", |d| d.email.clone(), |d, v| d.email = v)}
                    {text_field(draft, "Nom d'utilisateur", "text", |d| d.username.clone(), |d, v| d.username = v)}
                    {text_field(draft, "Mot de passe", "password", |d| d.password.clone(), |d, v| d.password = v)}
                    {text_field(draft, "Confirmer le mot de passe", "password", |d| d.confirmation.clone(), |d, v| d.confirmation = v)}
                    <TypeaheadField label="Rôle" placeholder="Sélectionner un rôle..." state=role candidates=roles/>
                    <ul class="field-hints">
                        {move || {
                            draft
                                .get()
                                .live_errors()
                                .into_iter()
                                .map(|hint| view! { <li class="field-hints__item">{hint}</li> })
                                .collect_view()
                        }}
                    </ul>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "S'inscrire"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Déjà inscrit ? "
                    <a href="/login">"Se connecter"</a>
                </p>
            </div>
        </div>
    }
}

fn text_field(
    draft: RwSignal<RegisterDraft>,
    label: &'static str,
    kind: &'static str,
    get: fn(&RegisterDraft) -> String,
    set: fn(&mut RegisterDraft, String),
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=kind
                prop:value=move || draft.with(get)
                on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
            />
        </label>
    }
}
