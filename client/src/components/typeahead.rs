//! Text input with a filtered suggestion list.
//!
//! DESIGN
//! ======
//! The field owns no data. Candidates come from the page (fetched once on
//! mount) and the selection lives in a `TypeaheadState` signal the page
//! reads at submit time. Suggestions commit on `mousedown` so the input's
//! blur handler cannot close the list before the pick lands.

use leptos::prelude::*;

use crate::util::typeahead::{Suggestion, TypeaheadState};

#[component]
pub fn TypeaheadField(
    label: &'static str,
    state: RwSignal<TypeaheadState>,
    #[prop(into)] candidates: Signal<Vec<Suggestion>>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let visible = move || candidates.with(|c| state.with(|s| s.visible(c)));

    view! {
        <label class="field typeahead">
            <span class="field__label">
                {label}
                {required.then_some(" *")}
            </span>
            <input
                class="field__input"
                type="text"
                autocomplete="off"
                placeholder=placeholder
                prop:value=move || state.get().query
                on:focus=move |_| state.update(TypeaheadState::focus)
                on:input=move |ev| state.update(|s| s.input(event_target_value(&ev)))
                on:blur=move |_| state.update(TypeaheadState::close)
            />
            <Show when=move || !state.get().query.is_empty()>
                <button
                    class="typeahead__clear"
                    type="button"
                    title="Effacer"
                    on:click=move |_| state.update(TypeaheadState::clear)
                >
                    "×"
                </button>
            </Show>
            <Show when=move || !visible().is_empty()>
                <ul class="typeahead__list">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|suggestion| {
                                let text = suggestion.label.clone();
                                view! {
                                    <li
                                        class="typeahead__item"
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            let pick = suggestion.clone();
                                            state.update(|s| s.select(pick));
                                        }
                                    >
                                        {text}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </label>
    }
}
