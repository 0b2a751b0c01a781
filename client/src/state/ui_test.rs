use super::*;

#[test]
fn ui_state_default_sidebar_open() {
    assert!(UiState::default().sidebar_open);
}

#[test]
fn toggle_sidebar_flips_state() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
    state.toggle_sidebar();
    assert!(state.sidebar_open);
}
