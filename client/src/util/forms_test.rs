use super::*;
use crate::net::types::User;

fn user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_owned(),
        email: format!("{username}@example.org"),
        role: "Infirmier".to_owned(),
        status: None,
        phone: None,
        email_verified: None,
    }
}

// =============================================================
// FormMode
// =============================================================

#[test]
fn form_mode_follows_route_id() {
    assert_eq!(FormMode::from_route(None), FormMode::Create);
    assert_eq!(FormMode::from_route(Some("12")), FormMode::Edit(12));
    assert_eq!(FormMode::from_route(Some("abc")), FormMode::Create);
    assert!(FormMode::Edit(1).is_edit());
}

// =============================================================
// require
// =============================================================

#[test]
fn require_trims_value() {
    assert_eq!(require("  Dupont ", "Nom requis"), Ok("Dupont".to_owned()));
}

#[test]
fn require_rejects_blank() {
    assert_eq!(require("   ", "Nom requis"), Err("Nom requis".to_owned()));
    assert_eq!(require("", "Nom requis"), Err("Nom requis".to_owned()));
}

#[test]
fn require_int_parses_or_reports() {
    assert_eq!(require_int(" 104 ", "Chambre invalide"), Ok(104));
    assert_eq!(require_int("12b", "Chambre invalide"), Err("Chambre invalide".to_owned()));
    assert_eq!(require_int("", "Chambre invalide"), Err("Chambre invalide".to_owned()));
}

// =============================================================
// remove_by_id
// =============================================================

#[test]
fn remove_by_id_drops_only_matching_record() {
    let mut users = vec![user(1, "a_b"), user(2, "c_d"), user(3, "e_f")];
    remove_by_id(&mut users, 2);
    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn remove_by_id_unknown_id_is_noop() {
    let mut users = vec![user(1, "a_b")];
    remove_by_id(&mut users, 99);
    assert_eq!(users.len(), 1);
}

// =============================================================
// Registration validators
// =============================================================

#[test]
fn email_shape_is_checked() {
    assert!(is_valid_email("nicolas@home.be"));
    assert!(!is_valid_email("nicolas@home"));
    assert!(!is_valid_email("nicolas.home.be"));
    assert!(!is_valid_email("@home.be"));
    assert!(!is_valid_email("nico las@home.be"));
    assert!(!is_valid_email("a@b@c.be"));
    assert!(!is_valid_email("a@.be"));
}

#[test]
fn username_allows_word_characters_only() {
    assert!(is_valid_username("bintein_nicolas"));
    assert!(is_valid_username("abc"));
    assert!(!is_valid_username("ab"));
    assert!(!is_valid_username("jean-claude"));
    assert!(!is_valid_username("élise"));
}

#[test]
fn password_needs_six_characters() {
    assert!(is_valid_password("secret"));
    assert!(!is_valid_password("short"));
}

#[test]
fn confirmation_must_match() {
    assert!(passwords_match("secret1", "secret1"));
    assert!(!passwords_match("secret1", "secret2"));
    assert!(!passwords_match("", ""));
}
