//! Create / edit form for an appointment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves `/appointments/new` and `/appointments/:id`. Creating picks the
//! resident and the reason from typeaheads. Editing shows the resident
//! read-only and always re-submits the fetched `resident_id`.

#[cfg(test)]
#[path = "appointment_form_test.rs"]
mod appointment_form_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::alert::Alert;
use crate::components::typeahead::TypeaheadField;
use crate::net::api::ApiError;
use crate::net::types::{Appointment, AppointmentPayload};
use crate::state::feedback::Feedback;
use crate::util::forms::{FormMode, require};
use crate::util::typeahead::{Suggestion, TypeaheadState};

pub const RESIDENT_REQUIRED: &str = "Veuillez sélectionner un résident";
pub const DATE_REQUIRED: &str = "La date est requise";
pub const TIME_REQUIRED: &str = "L'heure est requise";
pub const MOTIF_REQUIRED: &str = "Veuillez sélectionner un motif";
const CREATE_FAILED: &str = "Erreur lors de l'ajout du rendez-vous";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub date: String,
    pub time: String,
    pub transporteur: String,
    pub heure_transport: String,
}

impl AppointmentDraft {
    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            date: appointment.date.clone(),
            time: appointment.time.clone(),
            transporteur: appointment.transporteur.clone(),
            heure_transport: appointment.heure_transport.clone(),
        }
    }

    /// Validate and build the body; transport fields are optional.
    pub fn to_payload(&self, resident_id: Option<i64>, reason: Option<&str>) -> Result<AppointmentPayload, String> {
        let resident_id = resident_id.ok_or_else(|| RESIDENT_REQUIRED.to_owned())?;
        let date = require(&self.date, DATE_REQUIRED)?;
        let time = require(&self.time, TIME_REQUIRED)?;
        let reason = require(reason.unwrap_or_default(), MOTIF_REQUIRED)?;
        Ok(AppointmentPayload {
            resident_id,
            date,
            time,
            reason,
            transporteur: self.transporteur.trim().to_owned(),
            heure_transport: self.heure_transport.trim().to_owned(),
        })
    }
}

/// Edit failures read `Erreur {status}: {detail}`; transport failures fall
/// back to the generic text.
pub fn edit_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Status { status, detail } => {
            format!("Erreur {status}: {}", detail.as_deref().unwrap_or("Données invalides"))
        }
        other => other.user_message("Erreur lors de la modification du rendez-vous"),
    }
}

/// Motif typeahead pre-filled with the stored reason text.
pub fn motif_preset(reason: &str) -> TypeaheadState {
    if reason.trim().is_empty() {
        TypeaheadState::default()
    } else {
        TypeaheadState::preset(Suggestion::from_label(reason))
    }
}

#[component]
pub fn AppointmentFormPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let mode = FormMode::from_route(params.with_untracked(|p| p.get("id")).as_deref());

    let draft = RwSignal::new(AppointmentDraft::default());
    let resident = RwSignal::new(TypeaheadState::default());
    let motif = RwSignal::new(TypeaheadState::default());
    let residents = RwSignal::new(Vec::<Suggestion>::new());
    let motifs = RwSignal::new(Vec::<Suggestion>::new());
    // Edit mode: the stored resident, shown read-only and re-submitted as is.
    let fixed_resident = RwSignal::new(None::<(i64, String)>);
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
            use crate::net::api;
            use crate::util::typeahead::suggestions;

            let result = match mode {
                FormMode::Create => futures::try_join!(api::fetch_residents(), api::fetch_motifs()).map(|(rows, motif_rows)| {
                    residents.set(suggestions(&rows));
                    motifs.set(suggestions(&motif_rows));
                }),
                FormMode::Edit(id) => futures::try_join!(api::fetch_appointment(id), api::fetch_motifs()).map(|(appt, motif_rows)| {
                    motifs.set(suggestions(&motif_rows));
                    draft.set(AppointmentDraft::from_appointment(&appt));
                    motif.set(motif_preset(&appt.reason));
                    fixed_resident.set(Some((appt.resident_id, appt.resident_name)));
                }),
            };
            if let Err(e) = result {
                leptos::logging::warn!("appointment form load failed: {e}");
                feedback.update(|f| f.fail(e.user_message("Erreur lors de la récupération des données")));
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let resident_id = match mode {
            FormMode::Create => resident.get().committed_id(),
            FormMode::Edit(_) => fixed_resident.get().map(|(id, _)| id),
        };
        let payload = match draft.get().to_payload(resident_id, motif.get().committed_value()) {
            Ok(payload) => payload,
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
                let result = match mode {
                    FormMode::Create => crate::net::api::create_appointment(&payload).await.map(|()| "Rendez-vous ajouté avec succès !"),
                    FormMode::Edit(id) => crate::net::api::update_appointment(id, &payload).await.map(|()| "Rendez-vous modifié avec succès !"),
                };
                match result {
                    Ok(message) => {
                        leptos::logging::log!("appointment saved for resident {}", payload.resident_id);
                        feedback.update(|f| f.succeed(message));
                        crate::util::nav::navigate_after(crate::util::forms::REDIRECT_DELAY_MS, "/appointments", navigate);
                    }
                    Err(e) => {
                        leptos::logging::warn!("appointment save failed: {e}");
                        let message = if mode.is_edit() { edit_error_message(&e) } else { e.user_message(CREATE_FAILED) };
                        feedback.update(|f| f.fail(message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &navigate, CREATE_FAILED);
        }
    };

    let title = if mode.is_edit() { "Modifier le rendez-vous" } else { "Ajouter un rendez-vous" };
    let submit_label = if mode.is_edit() { "Enregistrer" } else { "Ajouter" };

    view! {
        <div class="form-page">
            <h2>{title}</h2>
            <Alert feedback=feedback/>
            <form class="form-page__form" on:submit=on_submit>
                {if mode.is_edit() {
                    view! {
                        <label class="field">
                            <span class="field__label">"Résident"</span>
                            <input
                                class="field__input"
                                type="text"
                                readonly=true
                                prop:value=move || fixed_resident.get().map(|(_, name)| name).unwrap_or_default()
                            />
                        </label>
                    }
                        .into_any()
                } else {
                    view! {
                        <TypeaheadField
                            label="Résident"
                            placeholder="Rechercher un résident..."
                            state=resident
                            candidates=residents
                            required=true
                        />
                    }
                        .into_any()
                }}
                {draft_input(draft, "Date", "date", true, |d| d.date.clone(), |d, v| d.date = v)}
                {draft_input(draft, "Heure", "time", true, |d| d.time.clone(), |d, v| d.time = v)}
                <TypeaheadField
                    label="Motif"
                    placeholder="Rechercher un motif..."
                    state=motif
                    candidates=motifs
                    required=true
                />
                {draft_input(draft, "Transporteur", "text", false, |d| d.transporteur.clone(), |d, v| d.transporteur = v)}
                {draft_input(draft, "Heure de transport", "time", false, |d| d.heure_transport.clone(), |d, v| d.heure_transport = v)}
                <div class="form-page__actions">
                    <a href="/appointments" class="btn">"Annuler"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {submit_label}
                    </button>
                </div>
            </form>
        </div>
    }
}

fn draft_input(
    draft: RwSignal<AppointmentDraft>,
    label: &'static str,
    kind: &'static str,
    required: bool,
    get: fn(&AppointmentDraft) -> String,
    set: fn(&mut AppointmentDraft, String),
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">
                {label}
                {required.then_some(" *")}
            </span>
            <input
                class="field__input"
                type=kind
                prop:value=move || draft.with(get)
                on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
            />
        </label>
    }
}
