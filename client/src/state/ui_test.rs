use canvas::config::Variant;

use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_follows_current_preset() {
    let state = UiState::default();
    assert_eq!(state.active_tool, Tool::Move);
    assert_eq!(state.color, "#f87171");
    assert_eq!(state.command_seq, 0);
    assert_eq!(state.command, None);
}

#[test]
fn ui_state_new_uses_config_defaults() {
    let state = UiState::new(&CanvasConfig::for_variant(Variant::Classic));
    assert_eq!(state.active_tool, Tool::Rectangle);
    assert_eq!(state.color, "#4f46e5");
}

// =============================================================
// issue
// =============================================================

#[test]
fn issue_records_command_and_bumps_seq() {
    let mut state = UiState::default();
    state.issue(CanvasCommand::ZoomIn);
    assert_eq!(state.command, Some(CanvasCommand::ZoomIn));
    assert_eq!(state.command_seq, 1);
}

#[test]
fn issue_same_command_twice_still_bumps_seq() {
    let mut state = UiState::default();
    state.issue(CanvasCommand::Clear);
    state.issue(CanvasCommand::Clear);
    assert_eq!(state.command_seq, 2);
    assert_eq!(state.command, Some(CanvasCommand::Clear));
}

#[test]
fn issue_replaces_previous_command() {
    let mut state = UiState::default();
    state.issue(CanvasCommand::SetZoomPercent(150.0));
    state.issue(CanvasCommand::ResetView);
    assert_eq!(state.command, Some(CanvasCommand::ResetView));
}

#[test]
fn issue_saturates_seq() {
    let mut state = UiState { command_seq: u64::MAX, ..UiState::default() };
    state.issue(CanvasCommand::ExportPng);
    assert_eq!(state.command_seq, u64::MAX);
}
