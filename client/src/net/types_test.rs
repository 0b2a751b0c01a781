use super::*;

// =============================================================
// Residents
// =============================================================

#[test]
fn resident_tolerates_null_optional_columns() {
    let raw = serde_json::json!({
        "id": 3,
        "nom": "Dupont",
        "prenom": "Marie",
        "date_naissance": "1938-04-12",
        "mutuelle_id": null,
        "niss": null,
        "medecin_traitant_id": 2,
        "medicaments": "[]",
        "room_number": 104
    });
    let resident: Resident = serde_json::from_value(raw).unwrap();
    assert_eq!(resident.mutuelle_id, None);
    assert_eq!(resident.niss, None);
    assert_eq!(resident.medecin_traitant_id, Some(2));
    assert_eq!(resident.room_number, Some(104));
}

#[test]
fn resident_list_decodes_null_text_columns_as_empty() {
    let raw = r#"[
        {"id":1,"nom":"Dupont","prenom":null,"date_naissance":null,"mutuelle_id":null,
         "niss":null,"medecin_traitant_id":null,"room_number":null},
        {"id":2,"nom":"Martin","prenom":"Jean","date_naissance":"1941-02-03"}
    ]"#;
    let residents: Vec<Resident> = serde_json::from_str(raw).unwrap();
    assert_eq!(residents.len(), 2);
    assert_eq!(residents[0].prenom, "");
    assert_eq!(residents[0].date_naissance, "");
    assert_eq!(residents[0].full_name(), " Dupont");
    assert_eq!(residents[1].full_name(), "Jean Martin");
}

#[test]
fn lookup_and_listing_rows_tolerate_null_text() {
    let medecin: Medecin = serde_json::from_value(serde_json::json!({"id": 4, "name": null})).unwrap();
    assert_eq!(medecin.name, "");

    let appt: Appointment = serde_json::from_value(serde_json::json!({
        "id": 1,
        "resident_id": 3,
        "date": "2026-10-20",
        "time": "09:30",
        "reason": null,
        "transporteur": null,
        "heure_transport": null,
        "resident_name": null
    }))
    .unwrap();
    assert_eq!(appt.reason, "");
    assert_eq!(appt.transporteur, "");

    let summary: PrescriptionSummary =
        serde_json::from_value(serde_json::json!({"id": 2, "dosage": null, "status": null})).unwrap();
    assert_eq!(summary.dosage, "");
    assert!(!summary.is_validated());
}

#[test]
fn resident_full_name_is_first_then_last() {
    let resident = Resident {
        id: 1,
        nom: "Dupont".to_owned(),
        prenom: "Marie".to_owned(),
        date_naissance: String::new(),
        mutuelle_id: None,
        niss: None,
        medecin_traitant_id: None,
        room_number: None,
    };
    assert_eq!(resident.full_name(), "Marie Dupont");
}

// =============================================================
// Appointments
// =============================================================

#[test]
fn appointment_defaults_missing_transport_fields() {
    let raw = serde_json::json!({
        "id": 8,
        "resident_id": 3,
        "date": "2026-10-20",
        "time": "09:30",
        "reason": "Dentiste",
        "resident_name": "Marie Dupont"
    });
    let appt: Appointment = serde_json::from_value(raw).unwrap();
    assert_eq!(appt.transporteur, "");
    assert_eq!(appt.heure_transport, "");
    assert_eq!(appt.id(), 8);
}

// =============================================================
// Prescriptions
// =============================================================

#[test]
fn prescription_summary_reports_validation_status() {
    let raw = serde_json::json!({
        "id": 5,
        "resident_name": "Marie Dupont",
        "medication_name": "Paracétamol",
        "dosage": "500 mg",
        "time_of_day": "matin,soir",
        "frequency": "quotidien",
        "status": 0
    });
    let mut summary: PrescriptionSummary = serde_json::from_value(raw).unwrap();
    assert!(!summary.is_validated());
    summary.status = PRESCRIPTION_VALIDATED;
    assert!(summary.is_validated());
}

#[test]
fn validated_payload_keeps_fields_and_sets_status() {
    let detail = Prescription {
        id: 5,
        resident_id: 3,
        medication_id: 12,
        dosage: "500 mg".to_owned(),
        time_of_day: "matin".to_owned(),
        frequency: "quotidien".to_owned(),
        status: 0,
    };
    let payload = detail.validated_payload();
    assert_eq!(payload.resident_id, 3);
    assert_eq!(payload.medication_id, 12);
    assert_eq!(payload.dosage, "500 mg");
    assert_eq!(payload.status, PRESCRIPTION_VALIDATED);
}

// =============================================================
// Users + auth
// =============================================================

#[test]
fn user_listing_ignores_unknown_fields() {
    let raw = serde_json::json!({
        "id": 1,
        "username": "bintein_nicolas",
        "password": "$2b$12$hash",
        "email": "nicolas@example.org",
        "role": "Directeur",
        "status": "actif",
        "phone": null,
        "email_verified": true
    });
    let user: User = serde_json::from_value(raw).unwrap();
    assert_eq!(user.role, "Directeur");
    assert_eq!(user.phone, None);
    assert_eq!(user.email_verified, Some(true));
}

#[test]
fn register_request_serializes_expected_keys() {
    let body = RegisterRequest {
        email: "a@b.be".to_owned(),
        username: "jean_claude".to_owned(),
        password: "secret1".to_owned(),
        role: "Infirmier".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        serde_json::json!({
            "email": "a@b.be",
            "username": "jean_claude",
            "password": "secret1",
            "role": "Infirmier"
        })
    );
}
