//! Prescription table with edit, delete and nurse validation.
//!
//! ERROR HANDLING
//! ==============
//! Validation is a read-modify-write: the detail row is fetched and re-sent
//! with `status` = validated. Either step failing leaves the table row as is
//! and surfaces the backend detail.

#[cfg(test)]
#[path = "medications_test.rs"]
mod medications_test;

use leptos::prelude::*;

use crate::components::alert::Alert;
use crate::net::types::{PRESCRIPTION_VALIDATED, PrescriptionSummary};
use crate::state::feedback::Feedback;

pub fn status_label(prescription: &PrescriptionSummary) -> &'static str {
    if prescription.is_validated() { "Validé" } else { "Non validé" }
}

/// Flip the row with `id` to validated after the backend accepted it.
pub fn mark_validated(rows: &mut [PrescriptionSummary], id: i64) {
    if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
        row.status = PRESCRIPTION_VALIDATED;
    }
}

#[cfg(feature = "hydrate")]
async fn validate(id: i64) -> Result<(), crate::net::api::ApiError> {
    let detail = crate::net::api::fetch_prescription(id).await?;
    crate::net::api::update_prescription(id, &detail.validated_payload()).await
}

#[component]
pub fn MedicationsPage() -> impl IntoView {
    let rows = RwSignal::new(Vec::<PrescriptionSummary>::new());
    let feedback = RwSignal::new(Feedback::default());
    let busy = RwSignal::new(false);

    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        loaded.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_prescriptions(None).await {
                Ok(list) => rows.set(list),
                Err(e) => {
                    leptos::logging::warn!("prescriptions load failed: {e}");
                    feedback.update(|f| f.fail(e.user_message("Erreur de chargement des données")));
                }
            }
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_prescription(id).await {
                Ok(()) => {
                    rows.update(|list| crate::util::forms::remove_by_id(list, id));
                    feedback.update(|f| f.succeed("Prescription supprimée avec succès"));
                }
                Err(e) => {
                    leptos::logging::warn!("prescription {id} delete failed: {e}");
                    feedback.update(|f| f.fail(e.user_message("Erreur lors de la suppression")));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_validate = Callback::new(move |id: i64| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match validate(id).await {
                Ok(()) => {
                    leptos::logging::log!("prescription {id} validated");
                    rows.update(|list| mark_validated(list, id));
                    feedback.update(|f| f.succeed("Prescription validée avec succès"));
                }
                Err(e) => {
                    leptos::logging::warn!("prescription {id} validation failed: {e}");
                    feedback.update(|f| f.fail(e.user_message("Erreur lors de la validation")));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h2>"Gestion des Médicaments"</h2>
                <a href="/medications/new" class="btn btn--primary">"Ajouter une prescription"</a>
            </header>
            <Alert feedback=feedback/>
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <p class="empty">"Aucune prescription"</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Résident"</th>
                            <th>"Médicament"</th>
                            <th>"Posologie"</th>
                            <th>"Moment de la journée"</th>
                            <th>"Fréquence"</th>
                            <th>"Statut"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    let id = row.id;
                                    let validated = row.is_validated();
                                    view! {
                                        <tr>
                                            <td>{row.resident_name.clone()}</td>
                                            <td>{row.medication_name.clone()}</td>
                                            <td>{row.dosage.clone()}</td>
                                            <td>{row.time_of_day.clone()}</td>
                                            <td>{row.frequency.clone()}</td>
                                            <td>
                                                <span class="badge" class:badge--ok=validated>{status_label(&row)}</span>
                                            </td>
                                            <td class="data-table__actions">
                                                <a href=format!("/medications/{id}") class="btn btn--small">"Modifier"</a>
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    type="button"
                                                    disabled=move || busy.get()
                                                    on:click=move |_| on_delete.run(id)
                                                >
                                                    "Supprimer"
                                                </button>
                                                <Show when=move || !validated>
                                                    <button
                                                        class="btn btn--small"
                                                        type="button"
                                                        disabled=move || busy.get()
                                                        on:click=move |_| on_validate.run(id)
                                                    >
                                                        "Valider"
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
