//! E-mail verification landing page reached from the activation link.

#[cfg(test)]
#[path = "verify_email_test.rs"]
mod verify_email_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::alert::Alert;
use crate::net::api::ApiError;
use crate::net::types::MessageResponse;
use crate::state::feedback::Feedback;

pub const VERIFY_FAILED: &str = "Erreur lors de la vérification de l'e-mail";
const VERIFY_DONE: &str = "Adresse e-mail vérifiée.";

/// Message to show for a verification outcome.
pub fn verify_feedback(result: &Result<MessageResponse, ApiError>) -> Feedback {
    let mut feedback = Feedback::default();
    match result {
        Ok(response) if !response.message.trim().is_empty() => feedback.succeed(response.message.clone()),
        Ok(_) => feedback.succeed(VERIFY_DONE),
        Err(e) => feedback.fail(e.user_message(VERIFY_FAILED)),
    }
    feedback
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let feedback = RwSignal::new(Feedback::default());
    let started = RwSignal::new(false);

    Effect::new(move || {
        if started.get_untracked() {
            return;
        }
        let token = params.with(|p| p.get("token")).unwrap_or_default();
        started.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::verify_email(&token).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("email verification failed: {e}");
                }
                let verified = result.is_ok();
                feedback.set(verify_feedback(&result));
                if verified {
                    crate::util::nav::navigate_after(crate::util::forms::AUTH_REDIRECT_DELAY_MS, "/login", navigate);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, &navigate);
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Vérification de l'e-mail"</h2>
                <Show
                    when=move || feedback.with(|f| f.error.is_some() || f.success.is_some())
                    fallback=|| view! { <p class="auth-card__pending">"Vérification en cours..."</p> }
                >
                    <Alert feedback=feedback/>
                </Show>
                <p class="auth-card__footer">
                    <a href="/login">"Retour à la connexion"</a>
                </p>
            </div>
        </div>
    }
}
