//! Inline error / success banner bound to a page's `Feedback` signal.

use leptos::prelude::*;

use crate::state::feedback::Feedback;

#[component]
pub fn Alert(feedback: RwSignal<Feedback>) -> impl IntoView {
    view! {
        <Show when=move || feedback.get().error.is_some()>
            <div class="alert alert--error" role="alert">
                <span>{move || feedback.get().error.unwrap_or_default()}</span>
                <button
                    class="alert__close"
                    type="button"
                    title="Fermer"
                    on:click=move |_| feedback.update(Feedback::dismiss)
                >
                    "×"
                </button>
            </div>
        </Show>
        <Show when=move || feedback.get().success.is_some()>
            <div class="alert alert--success" role="status">
                {move || feedback.get().success.unwrap_or_default()}
            </div>
        </Show>
    }
}
