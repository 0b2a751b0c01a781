//! Create / edit form for a prescription.
//!
//! DESIGN
//! ======
//! The backend exposes no medication catalog, so the medication is entered
//! by id. Times of day are checkboxes joined with `,` in a fixed order so
//! the stored string does not depend on click order.

#[cfg(test)]
#[path = "medication_form_test.rs"]
mod medication_form_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::alert::Alert;
use crate::components::typeahead::TypeaheadField;
use crate::net::types::{PRESCRIPTION_VALIDATED, Prescription, PrescriptionPayload};
use crate::state::feedback::Feedback;
use crate::util::forms::{FormMode, require, require_int};
use crate::util::typeahead::{Suggestion, TypeaheadState};

pub const DOSAGE_SUGGESTIONS: [&str; 4] = ["50 mg", "100 mg", "500 mg", "1 g"];
pub const TIMES_OF_DAY: [&str; 4] = ["matin", "midi", "soir", "nuit"];
/// `(value, label)` pairs for the frequency select.
pub const FREQUENCIES: [(&str, &str); 5] = [
    ("quotidien", "Quotidien"),
    ("toutes les 6h", "Toutes les 6h"),
    ("toutes les 8h", "Toutes les 8h"),
    ("toutes les 12h", "Toutes les 12h"),
    ("hebdomadaire", "Hebdomadaire"),
];

pub const RESIDENT_REQUIRED: &str = "Veuillez sélectionner un résident";
pub const MEDICATION_INVALID: &str = "L'identifiant du médicament doit être un nombre";
pub const DOSAGE_REQUIRED: &str = "Veuillez indiquer une posologie";
pub const TIMES_REQUIRED: &str = "Veuillez choisir au moins un moment de la journée";
pub const FREQUENCY_REQUIRED: &str = "Veuillez choisir une fréquence";
const SAVE_FAILED: &str = "Erreur lors de l'opération";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrescriptionDraft {
    pub medication_id: String,
    pub dosage: String,
    pub times: Vec<String>,
    pub frequency: String,
    pub validated: bool,
}

impl PrescriptionDraft {
    pub fn from_prescription(prescription: &Prescription) -> Self {
        Self {
            medication_id: prescription.medication_id.to_string(),
            dosage: prescription.dosage.clone(),
            times: split_times(&prescription.time_of_day),
            frequency: prescription.frequency.clone(),
            validated: prescription.status == PRESCRIPTION_VALIDATED,
        }
    }

    pub fn has_time(&self, time: &str) -> bool {
        self.times.iter().any(|t| t == time)
    }

    pub fn set_time(&mut self, time: &str, checked: bool) {
        if checked {
            if !self.has_time(time) {
                self.times.push(time.to_owned());
            }
        } else {
            self.times.retain(|t| t != time);
        }
    }

    /// Known times in day order, then any others as stored.
    pub fn joined_times(&self) -> String {
        let known = TIMES_OF_DAY.iter().copied().filter(|t| self.has_time(t));
        let extra = self.times.iter().map(String::as_str).filter(|t| !TIMES_OF_DAY.contains(t));
        known.chain(extra).collect::<Vec<_>>().join(",")
    }

    pub fn to_payload(&self, resident_id: Option<i64>) -> Result<PrescriptionPayload, String> {
        let resident_id = resident_id.ok_or_else(|| RESIDENT_REQUIRED.to_owned())?;
        let medication_id = require_int(&self.medication_id, MEDICATION_INVALID)?;
        let dosage = require(&self.dosage, DOSAGE_REQUIRED)?;
        if self.times.is_empty() {
            return Err(TIMES_REQUIRED.to_owned());
        }
        let frequency = require(&self.frequency, FREQUENCY_REQUIRED)?;
        Ok(PrescriptionPayload {
            resident_id,
            medication_id,
            dosage,
            time_of_day: self.joined_times(),
            frequency,
            status: i64::from(self.validated),
        })
    }
}

/// Split a stored `matin,soir` list, dropping blanks.
pub fn split_times(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty()).map(str::to_owned).collect()
}

#[component]
pub fn MedicationFormPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let mode = FormMode::from_route(params.with_untracked(|p| p.get("id")).as_deref());

    let draft = RwSignal::new(PrescriptionDraft::default());
    let resident = RwSignal::new(TypeaheadState::default());
    let residents = RwSignal::new(Vec::<Suggestion>::new());
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
                FormMode::Create => api::fetch_residents().await.map(|rows| residents.set(suggestions(&rows))),
                FormMode::Edit(id) => futures::try_join!(api::fetch_residents(), api::fetch_prescription(id)).map(|(rows, detail)| {
                    let candidates = suggestions(&rows);
                    resident.set(TypeaheadState::preset_matching(&candidates, &detail.resident_id.to_string()));
                    residents.set(candidates);
                    draft.set(PrescriptionDraft::from_prescription(&detail));
                }),
            };
            if let Err(e) = result {
                leptos::logging::warn!("prescription form load failed: {e}");
                feedback.update(|f| f.fail(e.user_message("Erreur de chargement des données")));
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match draft.get().to_payload(resident.get().committed_id()) {
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
                    FormMode::Create => crate::net::api::create_prescription(&payload).await.map(|()| "Prescription ajoutée avec succès"),
                    FormMode::Edit(id) => {
                        crate::net::api::update_prescription(id, &payload).await.map(|()| "Prescription mise à jour avec succès")
                    }
                };
                match result {
                    Ok(message) => {
                        leptos::logging::log!("prescription saved for resident {}", payload.resident_id);
                        feedback.update(|f| f.succeed(message));
                        crate::util::nav::navigate_after(crate::util::forms::REDIRECT_DELAY_MS, "/medications", navigate);
                    }
                    Err(e) => {
                        leptos::logging::warn!("prescription save failed: {e}");
                        feedback.update(|f| f.fail(e.user_message(SAVE_FAILED)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &navigate, SAVE_FAILED);
        }
    };

    let title = if mode.is_edit() { "Modifier la prescription" } else { "Ajouter une prescription" };
    let submit_label = if mode.is_edit() { "Enregistrer" } else { "Ajouter" };

    view! {
        <div class="form-page">
            <h2>{title}</h2>
            <Alert feedback=feedback/>
            <form class="form-page__form" on:submit=on_submit>
                <TypeaheadField
                    label="Résident"
                    placeholder="Rechercher un résident..."
                    state=resident
                    candidates=residents
                    required=true
                />
                <label class="field">
                    <span class="field__label">"ID du médicament *"</span>
                    <input
                        class="field__input"
                        type="number"
                        min="1"
                        prop:value=move || draft.get().medication_id
                        on:input=move |ev| draft.update(|d| d.medication_id = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Posologie *"</span>
                    <input
                        class="field__input"
                        type="text"
                        list="dosage-suggestions"
                        prop:value=move || draft.get().dosage
                        on:input=move |ev| draft.update(|d| d.dosage = event_target_value(&ev))
                    />
                    <datalist id="dosage-suggestions">
                        {DOSAGE_SUGGESTIONS.iter().map(|d| view! { <option value=*d></option> }).collect_view()}
                    </datalist>
                </label>
                <fieldset class="field field--checkboxes">
                    <legend class="field__label">"Moment de la journée *"</legend>
                    {TIMES_OF_DAY
                        .iter()
                        .copied()
                        .map(|time| {
                            view! {
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || draft.with(|d| d.has_time(time))
                                        on:change=move |ev| draft.update(|d| d.set_time(time, event_target_checked(&ev)))
                                    />
                                    {time}
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>
                <label class="field">
                    <span class="field__label">"Fréquence *"</span>
                    <select
                        class="field__input"
                        prop:value=move || draft.get().frequency
                        on:change=move |ev| draft.update(|d| d.frequency = event_target_value(&ev))
                    >
                        <option value="">"Sélectionner une fréquence"</option>
                        {FREQUENCIES
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().validated
                        on:change=move |ev| draft.update(|d| d.validated = event_target_checked(&ev))
                    />
                    "Validé"
                </label>
                <div class="form-page__actions">
                    <a href="/medications" class="btn">"Annuler"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {submit_label}
                    </button>
                </div>
            </form>
        </div>
    }
}
