use super::*;

fn filled() -> AppointmentDraft {
    AppointmentDraft {
        date: "2026-10-20".to_owned(),
        time: "09:30".to_owned(),
        transporteur: String::new(),
        heure_transport: String::new(),
    }
}

#[test]
fn complete_draft_builds_payload_with_optional_transport() {
    let payload = filled().to_payload(Some(3), Some("Dentiste")).unwrap();
    assert_eq!(payload.resident_id, 3);
    assert_eq!(payload.reason, "Dentiste");
    assert_eq!(payload.transporteur, "");
}

#[test]
fn resident_and_motif_are_required() {
    assert_eq!(filled().to_payload(None, Some("Dentiste")), Err(RESIDENT_REQUIRED.to_owned()));
    assert_eq!(filled().to_payload(Some(3), None), Err(MOTIF_REQUIRED.to_owned()));
}

#[test]
fn date_and_time_are_required() {
    let mut draft = filled();
    draft.date.clear();
    assert_eq!(draft.to_payload(Some(3), Some("Dentiste")), Err(DATE_REQUIRED.to_owned()));
    let mut draft = filled();
    draft.time = " ".to_owned();
    assert_eq!(draft.to_payload(Some(3), Some("Dentiste")), Err(TIME_REQUIRED.to_owned()));
}

#[test]
fn edit_errors_include_status_and_detail() {
    let err = ApiError::Status { status: 422, detail: Some("Date invalide".to_owned()) };
    assert_eq!(edit_error_message(&err), "Erreur 422: Date invalide");
    let err = ApiError::Status { status: 422, detail: None };
    assert_eq!(edit_error_message(&err), "Erreur 422: Données invalides");
}

#[test]
fn edit_transport_errors_use_generic_text() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(edit_error_message(&err), "Erreur lors de la modification du rendez-vous");
}

#[test]
fn motif_preset_commits_stored_reason() {
    let state = motif_preset("Dentiste");
    assert_eq!(state.query, "Dentiste");
    assert_eq!(state.committed_value(), Some("Dentiste"));
    assert_eq!(motif_preset("  "), TypeaheadState::default());
}
