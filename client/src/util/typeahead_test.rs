use super::*;

fn insurers() -> Vec<Suggestion> {
    vec![
        Suggestion::from_id(1, "Mutualité Chrétienne"),
        Suggestion::from_id(2, "Solidaris"),
        Suggestion::from_id(3, "Partenamut"),
        Suggestion::from_id(4, "Mutualité Libérale"),
    ]
}

// =============================================================
// filter_suggestions
// =============================================================

#[test]
fn filter_is_case_insensitive_substring() {
    let hits = filter_suggestions(&insurers(), "MUTUAL");
    let labels: Vec<_> = hits.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Mutualité Chrétienne", "Mutualité Libérale"]);
}

#[test]
fn filter_matches_inside_label() {
    let hits = filter_suggestions(&insurers(), "nam");
    assert_eq!(hits, vec![Suggestion::from_id(3, "Partenamut")]);
}

#[test]
fn filter_with_empty_query_returns_all_in_order() {
    assert_eq!(filter_suggestions(&insurers(), ""), insurers());
}

#[test]
fn filter_without_match_is_empty() {
    assert!(filter_suggestions(&insurers(), "zzz").is_empty());
}

#[test]
fn filter_handles_accented_uppercase_query() {
    let roles = vec![Suggestion::from_label("Diététicien"), Suggestion::from_label("Kiné")];
    assert_eq!(filter_suggestions(&roles, "DIÉTÉ"), vec![Suggestion::from_label("Diététicien")]);
}

// =============================================================
// TypeaheadState
// =============================================================

#[test]
fn closed_state_shows_no_suggestions() {
    let state = TypeaheadState::default();
    assert!(state.visible(&insurers()).is_empty());
}

#[test]
fn focus_opens_full_list() {
    let mut state = TypeaheadState::default();
    state.focus();
    assert_eq!(state.visible(&insurers()).len(), 4);
}

#[test]
fn input_filters_open_list() {
    let mut state = TypeaheadState::default();
    state.input("soli".to_owned());
    assert!(state.active);
    assert_eq!(state.visible(&insurers()), vec![Suggestion::from_id(2, "Solidaris")]);
}

#[test]
fn select_sets_text_and_committed_id_and_collapses() {
    let mut state = TypeaheadState::default();
    state.input("part".to_owned());
    state.select(Suggestion::from_id(3, "Partenamut"));
    assert_eq!(state.query, "Partenamut");
    assert_eq!(state.committed_id(), Some(3));
    assert!(!state.active);
    assert!(state.visible(&insurers()).is_empty());
}

#[test]
fn clear_empties_text_and_committed_value() {
    let mut state = TypeaheadState::preset(Suggestion::from_id(2, "Solidaris"));
    state.clear();
    assert_eq!(state.query, "");
    assert_eq!(state.committed, None);
    assert!(!state.active);
}

#[test]
fn editing_text_drops_stale_commit() {
    let mut state = TypeaheadState::default();
    state.select(Suggestion::from_id(2, "Solidaris"));
    state.input("Solidari".to_owned());
    assert_eq!(state.committed_id(), None);
}

#[test]
fn retyping_exact_label_keeps_commit() {
    let mut state = TypeaheadState::default();
    state.select(Suggestion::from_id(2, "Solidaris"));
    state.input("Solidaris".to_owned());
    assert_eq!(state.committed_id(), Some(2));
}

#[test]
fn label_valued_suggestion_commits_label() {
    let mut state = TypeaheadState::default();
    state.select(Suggestion::from_label("Kiné"));
    assert_eq!(state.committed_value(), Some("Kiné"));
    assert_eq!(state.committed_id(), None);
}

#[test]
fn close_keeps_selection() {
    let mut state = TypeaheadState::preset(Suggestion::from_id(1, "Mutualité Chrétienne"));
    state.focus();
    state.close();
    assert!(!state.active);
    assert_eq!(state.committed_id(), Some(1));
}

#[test]
fn preset_matching_finds_candidate_by_value() {
    let state = TypeaheadState::preset_matching(&insurers(), "3");
    assert_eq!(state.query, "Partenamut");
    assert_eq!(state.committed_id(), Some(3));
    assert!(TypeaheadState::preset_matching(&insurers(), "42").committed.is_none());
}

// =============================================================
// Record conversions
// =============================================================

#[test]
fn records_convert_to_suggestions() {
    let motifs = vec![Motif { id: 1, name: "Dentiste".to_owned() }];
    assert_eq!(suggestions(&motifs), vec![Suggestion::from_label("Dentiste")]);

    let medecins =
        vec![Medecin { id: 7, name: "Dr Lambert".to_owned(), specialty: None, address: None, phone: None, email: None }];
    assert_eq!(suggestions(&medecins), vec![Suggestion::from_id(7, "Dr Lambert")]);

    let resident = Resident {
        id: 2,
        nom: "Dupont".to_owned(),
        prenom: "Marie".to_owned(),
        date_naissance: String::new(),
        mutuelle_id: None,
        niss: None,
        medecin_traitant_id: None,
        room_number: None,
    };
    assert_eq!(Suggestion::from(&resident), Suggestion::from_id(2, "Marie Dupont"));
}
