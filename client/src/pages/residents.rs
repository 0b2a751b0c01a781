//! Resident directory with a detail card for the selected resident.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves `/residents` and `/residents/:id`. The directory (residents plus
//! the insurer and physician lookups) loads once; the detail card (resident,
//! appointments, prescriptions) loads whenever the selection changes. Each
//! group is fetched concurrently and fails as a whole.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface in the page alert; already-rendered data stays on screen.
//! A detail response that arrives after the selection moved on is dropped.

#[cfg(test)]
#[path = "residents_test.rs"]
mod residents_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::alert::Alert;
use crate::net::types::{Appointment, Medecin, Mutuelle, PrescriptionSummary, Resident};
use crate::state::feedback::Feedback;
#[cfg(feature = "hydrate")]
use crate::util::forms::remove_by_id;

const NOT_AVAILABLE: &str = "N/A";
#[cfg(feature = "hydrate")]
const DIRECTORY_FAILED: &str = "Erreur lors de la récupération des résidents";
#[cfg(feature = "hydrate")]
const DETAIL_FAILED: &str = "Erreur lors de la récupération du résident";
#[cfg(feature = "hydrate")]
const DELETE_FAILED: &str = "Erreur lors de la suppression";

/// Lookup tables resolved against the selected resident.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Directory {
    pub residents: Vec<Resident>,
    pub mutuelles: Vec<Mutuelle>,
    pub medecins: Vec<Medecin>,
}

impl Directory {
    /// Insurer and physician names for a resident's lookup ids.
    pub fn lookup_names(&self, mutuelle_id: Option<i64>, medecin_id: Option<i64>) -> (String, String) {
        (mutuelle_name(&self.mutuelles, mutuelle_id), medecin_name(&self.medecins, medecin_id))
    }
}

/// Everything the detail card shows for one resident.
#[derive(Clone, Debug, PartialEq)]
pub struct ResidentDetail {
    pub resident: Resident,
    pub appointments: Vec<Appointment>,
    pub prescriptions: Vec<PrescriptionSummary>,
}

/// Residents whose "prenom nom" contains `query`, case-insensitively.
pub fn filter_residents(residents: &[Resident], query: &str) -> Vec<Resident> {
    let needle = query.trim().to_lowercase();
    residents.iter().filter(|r| r.full_name().to_lowercase().contains(&needle)).cloned().collect()
}

/// The route id when present, else the first listed resident.
pub fn initial_selection(route_id: Option<i64>, residents: &[Resident]) -> Option<i64> {
    route_id.or_else(|| residents.first().map(|r| r.id))
}

pub fn mutuelle_name(mutuelles: &[Mutuelle], id: Option<i64>) -> String {
    id.and_then(|id| mutuelles.iter().find(|m| m.id == id))
        .map_or_else(|| NOT_AVAILABLE.to_owned(), |m| m.name.clone())
}

pub fn medecin_name(medecins: &[Medecin], id: Option<i64>) -> String {
    id.and_then(|id| medecins.iter().find(|m| m.id == id))
        .map_or_else(|| NOT_AVAILABLE.to_owned(), |m| m.name.clone())
}

/// `date à time - reason`.
pub fn appointment_line(appointment: &Appointment) -> String {
    format!("{} à {} - {}", appointment.date, appointment.time, appointment.reason)
}

/// `medication - dosage - frequency`.
pub fn prescription_line(prescription: &PrescriptionSummary) -> String {
    format!("{} - {} - {}", prescription.medication_name, prescription.dosage, prescription.frequency)
}

fn parse_route_id(raw: Option<String>) -> Option<i64> {
    raw.and_then(|id| id.parse().ok())
}

#[cfg(feature = "hydrate")]
async fn load_directory() -> Result<Directory, crate::net::api::ApiError> {
    use crate::net::api;
    let (residents, mutuelles, medecins) =
        futures::try_join!(api::fetch_residents(), api::fetch_mutuelles(), api::fetch_medecins())?;
    Ok(Directory { residents, mutuelles, medecins })
}

#[cfg(feature = "hydrate")]
async fn load_detail(id: i64) -> Result<ResidentDetail, crate::net::api::ApiError> {
    use crate::net::api;
    let (resident, appointments, prescriptions) =
        futures::try_join!(api::fetch_resident(id), api::fetch_appointments(Some(id)), api::fetch_prescriptions(Some(id)))?;
    Ok(ResidentDetail { resident, appointments, prescriptions })
}

#[component]
pub fn ResidentsPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    #[cfg(not(feature = "hydrate"))]
    let _ = &navigate;
    let directory = RwSignal::new(Directory::default());
    let detail = RwSignal::new(None::<ResidentDetail>);
    let selected = RwSignal::new(None::<i64>);
    let query = RwSignal::new(String::new());
    let feedback = RwSignal::new(Feedback::default());
    let route_id = Memo::new(move |_| parse_route_id(params.with(|p| p.get("id"))));

    // Directory, once per mount.
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        loaded.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match load_directory().await {
                Ok(dir) => {
                    let first = initial_selection(route_id.get_untracked(), &dir.residents);
                    directory.set(dir);
                    if selected.get_untracked().is_none() {
                        selected.set(first);
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("resident directory load failed: {e}");
                    feedback.update(|f| f.fail(e.user_message(DIRECTORY_FAILED)));
                }
            }
        });
    });

    // Route id wins over the current selection.
    Effect::new(move || {
        if let Some(id) = route_id.get() {
            selected.set(Some(id));
        }
    });

    // Detail card follows the selection.
    Effect::new(move || {
        let Some(id) = selected.get() else {
            detail.set(None);
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = load_detail(id).await;
            if selected.get_untracked() != Some(id) {
                return;
            }
            match result {
                Ok(loaded) => detail.set(Some(loaded)),
                Err(e) => {
                    leptos::logging::warn!("resident {id} detail load failed: {e}");
                    feedback.update(|f| f.fail(e.user_message(DETAIL_FAILED)));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    // Deleting the open resident returns to the bare list route.
    let deleted_selected = RwSignal::new(false);
    Effect::new(move || {
        if deleted_selected.get() {
            deleted_selected.set(false);
            #[cfg(feature = "hydrate")]
            navigate("/residents", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_delete_resident = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_resident(id).await {
                Ok(()) => {
                    leptos::logging::log!("resident {id} deleted");
                    directory.update(|d| remove_by_id(&mut d.residents, id));
                    if selected.get_untracked() == Some(id) {
                        selected.set(None);
                        deleted_selected.set(true);
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("resident {id} delete failed: {e}");
                    feedback.update(|f| f.fail(e.user_message(DELETE_FAILED)));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_delete_appointment = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_appointment(id).await {
                Ok(()) => detail.update(|d| {
                    if let Some(d) = d {
                        remove_by_id(&mut d.appointments, id);
                    }
                }),
                Err(e) => feedback.update(|f| f.fail(e.user_message(DELETE_FAILED))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_delete_prescription = Callback::new(move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_prescription(id).await {
                Ok(()) => detail.update(|d| {
                    if let Some(d) = d {
                        remove_by_id(&mut d.prescriptions, id);
                    }
                }),
                Err(e) => feedback.update(|f| f.fail(e.user_message(DELETE_FAILED))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let visible = move || directory.with(|d| filter_residents(&d.residents, &query.get()));

    view! {
        <div class="residents-page">
            <aside class="residents-page__list">
                <div class="residents-page__title">"Résidents"</div>
                <input
                    class="field__input residents-page__search"
                    type="search"
                    placeholder="Rechercher un résident..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <a href="/residents/new" class="btn btn--primary">"Ajouter un résident"</a>
                <ul class="residents-page__items">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|resident| {
                                let id = resident.id;
                                view! {
                                    <li
                                        class="residents-page__item"
                                        class:residents-page__item--active=move || selected.get() == Some(id)
                                        on:click=move |_| selected.set(Some(id))
                                    >
                                        {resident.full_name()}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </aside>
            <section class="residents-page__detail">
                <Alert feedback=feedback/>
                {move || {
                    detail
                        .get()
                        .map(|d| {
                            view! {
                                <ResidentCard
                                    detail=d
                                    directory=directory
                                    on_delete_resident=on_delete_resident
                                    on_delete_appointment=on_delete_appointment
                                    on_delete_prescription=on_delete_prescription
                                />
                            }
                        })
                }}
            </section>
        </div>
    }
}

#[component]
fn ResidentCard(
    detail: ResidentDetail,
    directory: RwSignal<Directory>,
    on_delete_resident: Callback<i64>,
    on_delete_appointment: Callback<i64>,
    on_delete_prescription: Callback<i64>,
) -> impl IntoView {
    let ResidentDetail { resident, appointments, prescriptions } = detail;
    let id = resident.id;
    // Tracked: the detail group can land before the directory does.
    let (mutuelle_id, medecin_id) = (resident.mutuelle_id, resident.medecin_traitant_id);
    let names = move || directory.with(|d| d.lookup_names(mutuelle_id, medecin_id));
    let mutuelle = move || names().0;
    let medecin = move || names().1;
    let room = resident.room_number.map(|n| n.to_string()).unwrap_or_default();

    view! {
        <article class="resident-card">
            <header class="resident-card__header">
                <h3>{resident.full_name()}</h3>
                <div class="resident-card__actions">
                    <a href=format!("/residents/{id}/edit") class="btn">"Modifier"</a>
                    <button class="btn btn--danger" type="button" on:click=move |_| on_delete_resident.run(id)>
                        "Supprimer"
                    </button>
                </div>
            </header>
            <dl class="resident-card__facts">
                <dt>"Date de naissance"</dt>
                <dd>{resident.date_naissance.clone()}</dd>
                <dt>"Mutuelle"</dt>
                <dd>{mutuelle}</dd>
                <dt>"NISS"</dt>
                <dd>{resident.niss.clone().unwrap_or_default()}</dd>
                <dt>"Médecin traitant"</dt>
                <dd>{medecin}</dd>
                <dt>"Numéro de chambre"</dt>
                <dd>{room}</dd>
            </dl>
            <section class="resident-card__section">
                <h4>"Rendez-vous"</h4>
                {if appointments.is_empty() {
                    view! { <p class="empty">"Aucun rendez-vous"</p> }.into_any()
                } else {
                    view! {
                        <ul class="data-list">
                            {appointments
                                .into_iter()
                                .map(|appt| {
                                    let appt_id = appt.id;
                                    view! {
                                        <li>
                                            <span>{appointment_line(&appt)}</span>
                                            <a href=format!("/appointments/{appt_id}") class="btn btn--small">"Modifier"</a>
                                            <button
                                                class="btn btn--small btn--danger"
                                                type="button"
                                                on:click=move |_| on_delete_appointment.run(appt_id)
                                            >
                                                "Supprimer"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }}
            </section>
            <section class="resident-card__section">
                <h4>"Médicaments"</h4>
                {if prescriptions.is_empty() {
                    view! { <p class="empty">"Aucun médicament"</p> }.into_any()
                } else {
                    view! {
                        <ul class="data-list">
                            {prescriptions
                                .into_iter()
                                .map(|med| {
                                    let med_id = med.id;
                                    view! {
                                        <li>
                                            <span>{prescription_line(&med)}</span>
                                            <a href=format!("/medications/{med_id}") class="btn btn--small">"Modifier"</a>
                                            <button
                                                class="btn btn--small btn--danger"
                                                type="button"
                                                on:click=move |_| on_delete_prescription.run(med_id)
                                            >
                                                "Supprimer"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }}
            </section>
        </article>
    }
}
