use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_move() {
    assert_eq!(Tool::default(), Tool::Move);
}

#[test]
fn tool_shape_kind_mapping() {
    assert_eq!(Tool::Move.shape_kind(), None);
    assert_eq!(Tool::Rectangle.shape_kind(), Some(ShapeKind::Rectangle));
    assert_eq!(Tool::Circle.shape_kind(), Some(ShapeKind::Circle));
    assert_eq!(Tool::Triangle.shape_kind(), Some(ShapeKind::Triangle));
    assert_eq!(Tool::Star.shape_kind(), Some(ShapeKind::Star));
}

#[test]
fn only_move_tool_is_not_drawing() {
    assert!(!Tool::Move.is_drawing());
    for tool in [Tool::Rectangle, Tool::Circle, Tool::Triangle, Tool::Star] {
        assert!(tool.is_drawing(), "{tool:?}");
    }
}

#[test]
fn tool_serde_names_are_lowercase() {
    assert_eq!(serde_json::to_string(&Tool::Triangle).unwrap(), "\"triangle\"");
    let back: Tool = serde_json::from_str("\"move\"").unwrap();
    assert_eq!(back, Tool::Move);
}

// =============================================================
// UiState / InputState
// =============================================================

#[test]
fn ui_state_default_has_no_selection() {
    let ui = UiState::default();
    assert_eq!(ui.tool, Tool::Move);
    assert!(ui.selected_id.is_none());
}

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert!(!InputState::default().is_panning());
}

#[test]
fn panning_state_reports_panning() {
    let state = InputState::Panning { last_screen: Point::new(1.0, 2.0) };
    assert!(state.is_panning());
    let drag = InputState::DraggingShape { id: ShapeId(1), last_screen: Point::new(0.0, 0.0), moved: false };
    assert!(!drag.is_panning());
}
