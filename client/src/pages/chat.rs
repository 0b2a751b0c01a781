//! Assistant chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The conversation lives in the `ChatState` context so it survives page
//! switches within a session. Replies are rendered as plain text; nothing
//! from the backend is interpreted as markup.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::chat::ChatState;

#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let state = auth.get();
        if state.is_authenticated() && chat.with_untracked(|c| c.messages.is_empty()) {
            chat.set(ChatState::greeting(&state.display_name()));
        }
    });

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.pending));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(text) = chat.try_update(|c| c.push_outgoing(&input.get_untracked())).flatten() else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let reply = crate::net::api::send_chat(&text).await.map_err(|e| {
                leptos::logging::warn!("chat request failed: {e}");
                e.user_message("le service de chat est indisponible")
            });
            chat.update(|c| c.push_reply(reply));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-page">
            <h2>"Chat"</h2>
            <div class="chat-page__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .into_iter()
                        .map(|message| {
                            view! {
                                <div class="chat-page__message" class:chat-page__message--sent=message.sent>
                                    {message.text}
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || chat.get().pending>
                    <div class="chat-page__message chat-page__message--pending">"..."</div>
                </Show>
            </div>
            <Show when=move || chat.get().error.is_some()>
                <div class="alert alert--error" role="alert">
                    <span>{move || chat.get().error.unwrap_or_default()}</span>
                    <button
                        class="alert__close"
                        type="button"
                        title="Fermer"
                        on:click=move |_| chat.update(ChatState::dismiss_error)
                    >
                        "×"
                    </button>
                </div>
            </Show>
            <div class="chat-page__input-row">
                <input
                    class="field__input chat-page__input"
                    type="text"
                    placeholder="Écrivez votre message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary"
                    type="button"
                    disabled=move || chat.get().pending
                    on:click=move |_| do_send()
                >
                    "Envoyer"
                </button>
            </div>
        </div>
    }
}
