//! Create / edit form for a resident.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves `/residents/new` and `/residents/:id/edit`. The insurer and
//! physician lookups load on mount; in edit mode the resident is fetched in
//! the same concurrent group and its ids pre-select both typeaheads. Any
//! failure fails the whole group.

#[cfg(test)]
#[path = "resident_form_test.rs"]
mod resident_form_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::alert::Alert;
use crate::components::typeahead::TypeaheadField;
#[cfg(feature = "hydrate")]
use crate::net::api::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::types::{Medecin, Mutuelle};
use crate::net::types::{Resident, ResidentPayload};
use crate::state::feedback::Feedback;
use crate::util::forms::{FormMode, require, require_int};
use crate::util::typeahead::{Suggestion, TypeaheadState};

pub const NOM_REQUIRED: &str = "Le nom est requis";
pub const PRENOM_REQUIRED: &str = "Le prénom est requis";
pub const BIRTH_DATE_REQUIRED: &str = "La date de naissance est requise";
pub const MUTUELLE_REQUIRED: &str = "Veuillez sélectionner une mutuelle";
pub const MEDECIN_REQUIRED: &str = "Veuillez sélectionner un médecin traitant";
pub const ROOM_INVALID: &str = "Le numéro de chambre doit être un nombre";

/// Plain-text inputs of the resident form; lookups live in typeaheads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResidentDraft {
    pub nom: String,
    pub prenom: String,
    pub date_naissance: String,
    pub niss: String,
    pub room_number: String,
}

impl ResidentDraft {
    pub fn from_resident(resident: &Resident) -> Self {
        Self {
            nom: resident.nom.clone(),
            prenom: resident.prenom.clone(),
            date_naissance: resident.date_naissance.clone(),
            niss: resident.niss.clone().unwrap_or_default(),
            room_number: resident.room_number.map(|n| n.to_string()).unwrap_or_default(),
        }
    }

    /// Validate in form order and build the request body.
    pub fn to_payload(&self, mutuelle_id: Option<i64>, medecin_id: Option<i64>) -> Result<ResidentPayload, String> {
        let nom = require(&self.nom, NOM_REQUIRED)?;
        let prenom = require(&self.prenom, PRENOM_REQUIRED)?;
        let date_naissance = require(&self.date_naissance, BIRTH_DATE_REQUIRED)?;
        let mutuelle_id = mutuelle_id.ok_or_else(|| MUTUELLE_REQUIRED.to_owned())?;
        let medecin_traitant_id = medecin_id.ok_or_else(|| MEDECIN_REQUIRED.to_owned())?;
        let room_number = require_int(&self.room_number, ROOM_INVALID)?;
        Ok(ResidentPayload {
            nom,
            prenom,
            date_naissance,
            mutuelle_id,
            niss: self.niss.trim().to_owned(),
            medecin_traitant_id,
            room_number,
        })
    }
}

/// Success and fallback error text for each mode.
pub fn outcome_messages(mode: FormMode) -> (&'static str, &'static str) {
    match mode {
        FormMode::Create => ("Résident ajouté avec succès !", "Erreur lors de l'ajout du résident"),
        FormMode::Edit(_) => ("Résident modifié avec succès !", "Erreur lors de la modification du résident"),
    }
}

/// Typeahead states pre-selecting the resident's insurer and physician.
pub fn lookup_presets(
    resident: &Resident,
    mutuelles: &[Suggestion],
    medecins: &[Suggestion],
) -> (TypeaheadState, TypeaheadState) {
    let mutuelle_id = resident.mutuelle_id.map(|v| v.to_string()).unwrap_or_default();
    let medecin_id = resident.medecin_traitant_id.map(|v| v.to_string()).unwrap_or_default();
    (
        TypeaheadState::preset_matching(mutuelles, &mutuelle_id),
        TypeaheadState::preset_matching(medecins, &medecin_id),
    )
}

/// Lookups, plus the edited resident in edit mode, as one group.
#[cfg(feature = "hydrate")]
async fn load_form(mode: FormMode) -> Result<(Vec<Mutuelle>, Vec<Medecin>, Option<Resident>), ApiError> {
    use crate::net::api;
    match mode {
        FormMode::Create => {
            let (mutuelles, medecins) = futures::try_join!(api::fetch_mutuelles(), api::fetch_medecins())?;
            Ok((mutuelles, medecins, None))
        }
        FormMode::Edit(id) => {
            let (mutuelles, medecins, resident) =
                futures::try_join!(api::fetch_mutuelles(), api::fetch_medecins(), api::fetch_resident(id))?;
            Ok((mutuelles, medecins, Some(resident)))
        }
    }
}

#[component]
pub fn ResidentFormPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let mode = FormMode::from_route(params.with_untracked(|p| p.get("id")).as_deref());

    let draft = RwSignal::new(ResidentDraft::default());
    let mutuelle = RwSignal::new(TypeaheadState::default());
    let medecin = RwSignal::new(TypeaheadState::default());
    let mutuelles = RwSignal::new(Vec::<Suggestion>::new());
    let medecins = RwSignal::new(Vec::<Suggestion>::new());
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
            use crate::util::typeahead::suggestions;

            let (mutuelle_rows, medecin_rows, resident) = match load_form(mode).await {
                Ok(loaded) => loaded,
                Err(e) => {
                    leptos::logging::warn!("resident form load failed: {e}");
                    feedback.update(|f| f.fail(e.user_message("Erreur lors de la récupération des données")));
                    return;
                }
            };
            let mutuelle_candidates = suggestions(&mutuelle_rows);
            let medecin_candidates = suggestions(&medecin_rows);
            if let Some(resident) = resident {
                draft.set(ResidentDraft::from_resident(&resident));
                let (mutuelle_state, medecin_state) =
                    lookup_presets(&resident, &mutuelle_candidates, &medecin_candidates);
                mutuelle.set(mutuelle_state);
                medecin.set(medecin_state);
            }
            mutuelles.set(mutuelle_candidates);
            medecins.set(medecin_candidates);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match draft.get().to_payload(mutuelle.get().committed_id(), medecin.get().committed_id()) {
            Ok(payload) => payload,
            Err(message) => {
                feedback.update(|f| f.fail(message));
                return;
            }
        };
        busy.set(true);
        feedback.update(Feedback::clear);
        let (success, failure) = outcome_messages(mode);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match mode {
                    FormMode::Create => crate::net::api::create_resident(&payload).await,
                    FormMode::Edit(id) => crate::net::api::update_resident(id, &payload).await,
                };
                match result {
                    Ok(()) => {
                        leptos::logging::log!("resident saved: {} {}", payload.prenom, payload.nom);
                        feedback.update(|f| f.succeed(success));
                        crate::util::nav::navigate_after(crate::util::forms::REDIRECT_DELAY_MS, "/residents", navigate);
                    }
                    Err(e) => {
                        leptos::logging::warn!("resident save failed: {e}");
                        feedback.update(|f| f.fail(e.user_message(failure)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, success, failure, &navigate);
        }
    };

    let title = if mode.is_edit() { "Modifier le résident" } else { "Ajouter un résident" };
    let submit_label = if mode.is_edit() { "Enregistrer" } else { "Ajouter" };

    view! {
        <div class="form-page">
            <h2>{title}</h2>
            <Alert feedback=feedback/>
            <form class="form-page__form" on:submit=on_submit>
                {draft_input(draft, "Nom", "text", true, |d| d.nom.clone(), |d, v| d.nom = v)}
                {draft_input(draft, "Prénom", "text", true, |d| d.prenom.clone(), |d, v| d.prenom = v)}
                {draft_input(draft, "Date de naissance", "date", true, |d| d.date_naissance.clone(), |d, v| d.date_naissance = v)}
                <TypeaheadField
                    label="Mutuelle"
                    placeholder="Rechercher une mutuelle..."
                    state=mutuelle
                    candidates=mutuelles
                    required=true
                />
                {draft_input(draft, "NISS", "text", false, |d| d.niss.clone(), |d, v| d.niss = v)}
                <TypeaheadField
                    label="Médecin traitant"
                    placeholder="Rechercher un médecin..."
                    state=medecin
                    candidates=medecins
                    required=true
                />
                {draft_input(draft, "Numéro de chambre", "number", true, |d| d.room_number.clone(), |d, v| d.room_number = v)}
                <div class="form-page__actions">
                    <a href="/residents" class="btn">"Annuler"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {submit_label}
                    </button>
                </div>
            </form>
        </div>
    }
}

fn draft_input(
    draft: RwSignal<ResidentDraft>,
    label: &'static str,
    kind: &'static str,
    required: bool,
    get: fn(&ResidentDraft) -> String,
    set: fn(&mut ResidentDraft, String),
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
