use super::*;

fn filled() -> PrescriptionDraft {
    PrescriptionDraft {
        medication_id: "12".to_owned(),
        dosage: "500 mg".to_owned(),
        times: vec!["soir".to_owned(), "matin".to_owned()],
        frequency: "quotidien".to_owned(),
        validated: false,
    }
}

#[test]
fn payload_joins_times_in_day_order() {
    let payload = filled().to_payload(Some(3)).unwrap();
    assert_eq!(payload.time_of_day, "matin,soir");
    assert_eq!(payload.medication_id, 12);
    assert_eq!(payload.status, 0);
}

#[test]
fn validated_checkbox_sets_status() {
    let mut draft = filled();
    draft.validated = true;
    assert_eq!(draft.to_payload(Some(3)).unwrap().status, PRESCRIPTION_VALIDATED);
}

#[test]
fn each_required_field_blocks_submission() {
    assert_eq!(filled().to_payload(None), Err(RESIDENT_REQUIRED.to_owned()));

    let mut draft = filled();
    draft.medication_id = "abc".to_owned();
    assert_eq!(draft.to_payload(Some(3)), Err(MEDICATION_INVALID.to_owned()));

    let mut draft = filled();
    draft.dosage.clear();
    assert_eq!(draft.to_payload(Some(3)), Err(DOSAGE_REQUIRED.to_owned()));

    let mut draft = filled();
    draft.times.clear();
    assert_eq!(draft.to_payload(Some(3)), Err(TIMES_REQUIRED.to_owned()));

    let mut draft = filled();
    draft.frequency.clear();
    assert_eq!(draft.to_payload(Some(3)), Err(FREQUENCY_REQUIRED.to_owned()));
}

#[test]
fn set_time_toggles_without_duplicates() {
    let mut draft = PrescriptionDraft::default();
    draft.set_time("midi", true);
    draft.set_time("midi", true);
    assert_eq!(draft.times, vec!["midi".to_owned()]);
    draft.set_time("midi", false);
    assert!(draft.times.is_empty());
}

#[test]
fn stored_times_round_trip_through_the_draft() {
    let detail = Prescription {
        id: 5,
        resident_id: 3,
        medication_id: 12,
        dosage: "1 g".to_owned(),
        time_of_day: "nuit, matin,".to_owned(),
        frequency: "hebdomadaire".to_owned(),
        status: PRESCRIPTION_VALIDATED,
    };
    let draft = PrescriptionDraft::from_prescription(&detail);
    assert_eq!(draft.times, vec!["nuit".to_owned(), "matin".to_owned()]);
    assert!(draft.validated);
    assert_eq!(draft.joined_times(), "matin,nuit");
}

#[test]
fn unknown_times_are_kept_after_known_ones() {
    let mut draft = filled();
    draft.times.push("au coucher".to_owned());
    assert_eq!(draft.joined_times(), "matin,soir,au coucher");
}
