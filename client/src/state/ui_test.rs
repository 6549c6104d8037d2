use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_menu_closed_and_wide() {
    let state = UiState::default();
    assert!(!state.mobile_menu_open);
    assert_eq!(state.layout(), Layout::Wide);
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn toggle_mobile_menu_flips() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn close_mobile_menu_is_idempotent() {
    let mut state = UiState::default();
    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
    state.toggle_mobile_menu();
    state.close_mobile_menu();
    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_to_narrow_keeps_menu_state() {
    let mut state = UiState::default();
    state.resize(400);
    state.toggle_mobile_menu();
    state.resize(390);
    assert_eq!(state.layout(), Layout::Narrow);
    assert!(state.mobile_menu_open);
}

#[test]
fn resize_to_wide_closes_menu() {
    let mut state = UiState::default();
    state.resize(400);
    state.toggle_mobile_menu();
    state.resize(1200);
    assert_eq!(state.layout(), Layout::Wide);
    assert!(!state.mobile_menu_open);
}
