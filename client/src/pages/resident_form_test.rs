use super::*;

fn filled() -> ResidentDraft {
    ResidentDraft {
        nom: " Dupont ".to_owned(),
        prenom: "Marie".to_owned(),
        date_naissance: "1938-04-12".to_owned(),
        niss: String::new(),
        room_number: "104".to_owned(),
    }
}

#[test]
fn complete_draft_builds_payload() {
    let payload = filled().to_payload(Some(4), Some(2)).unwrap();
    assert_eq!(payload.nom, "Dupont");
    assert_eq!(payload.mutuelle_id, 4);
    assert_eq!(payload.medecin_traitant_id, 2);
    assert_eq!(payload.room_number, 104);
    assert_eq!(payload.niss, "");
}

#[test]
fn missing_lookups_block_submission() {
    assert_eq!(filled().to_payload(None, Some(2)), Err(MUTUELLE_REQUIRED.to_owned()));
    assert_eq!(filled().to_payload(Some(4), None), Err(MEDECIN_REQUIRED.to_owned()));
}

#[test]
fn required_text_fields_are_checked_in_form_order() {
    let mut draft = filled();
    draft.nom.clear();
    draft.prenom.clear();
    assert_eq!(draft.to_payload(Some(4), Some(2)), Err(NOM_REQUIRED.to_owned()));

    let mut draft = filled();
    draft.date_naissance = "  ".to_owned();
    assert_eq!(draft.to_payload(Some(4), Some(2)), Err(BIRTH_DATE_REQUIRED.to_owned()));
}

#[test]
fn room_number_must_be_an_integer() {
    let mut draft = filled();
    draft.room_number = "1O4".to_owned();
    assert_eq!(draft.to_payload(Some(4), Some(2)), Err(ROOM_INVALID.to_owned()));
}

#[test]
fn edit_draft_is_prefilled_from_resident() {
    let resident = Resident {
        id: 3,
        nom: "Dupont".to_owned(),
        prenom: "Marie".to_owned(),
        date_naissance: "1938-04-12".to_owned(),
        mutuelle_id: Some(4),
        niss: Some("38041212345".to_owned()),
        medecin_traitant_id: None,
        room_number: Some(104),
    };
    let draft = ResidentDraft::from_resident(&resident);
    assert_eq!(draft.niss, "38041212345");
    assert_eq!(draft.room_number, "104");
}

#[test]
fn outcome_messages_depend_on_mode() {
    assert_eq!(outcome_messages(FormMode::Create).0, "Résident ajouté avec succès !");
    assert_eq!(outcome_messages(FormMode::Edit(3)).1, "Erreur lors de la modification du résident");
}

#[test]
fn lookup_presets_select_resident_insurer_and_physician() {
    let resident = Resident {
        id: 9,
        nom: "Dupont".to_owned(),
        prenom: "Marie".to_owned(),
        date_naissance: "1938-04-12".to_owned(),
        mutuelle_id: Some(2),
        niss: None,
        medecin_traitant_id: None,
        room_number: Some(104),
    };
    let mutuelles = vec![Suggestion::from_id(1, "Solidaris"), Suggestion::from_id(2, "Partenamut")];
    let medecins = vec![Suggestion::from_id(7, "Dr Lambert")];

    let (mutuelle, medecin) = lookup_presets(&resident, &mutuelles, &medecins);
    assert_eq!(mutuelle.query, "Partenamut");
    assert_eq!(mutuelle.committed_id(), Some(2));
    assert_eq!(medecin.committed, None);
    assert_eq!(medecin.query, "");
}
