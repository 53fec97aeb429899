#![allow(clippy::float_cmp)]

use canvas::camera::Point;
use canvas::config::{CanvasConfig, Variant};
use canvas::input::{Button, Tool};

use super::*;

#[test]
fn canvas_view_default_is_identity() {
    let view = CanvasViewState::default();
    assert_eq!(view.zoom, 1.0);
    assert_eq!((view.pan_x, view.pan_y), (0.0, 0.0));
    assert_eq!(view.shape_count, 0);
    assert!(!view.has_selection());
}

#[test]
fn from_core_reflects_fresh_engine() {
    let core = EngineCore::new(CanvasConfig::for_variant(Variant::Current));
    let view = CanvasViewState::from_core(&core);
    assert_eq!(view.zoom, 1.0);
    assert_eq!(view.cursor, "grab");
    assert_eq!(view.shape_count, 0);
}

#[test]
fn from_core_tracks_shapes_selection_and_camera() {
    let mut core = EngineCore::new(CanvasConfig::for_variant(Variant::Classic));
    core.on_click(Point::new(10.0, 10.0), 1);
    core.zoom_in();
    core.set_tool(Tool::Move);
    let view = CanvasViewState::from_core(&core);
    assert_eq!(view.shape_count, 1);
    assert!(view.has_selection());
    assert!((view.zoom - 1.2).abs() < 1e-12);
    assert_eq!(view.cursor, "crosshair");
}

#[test]
fn from_core_reports_grabbing_while_panning() {
    let mut core = EngineCore::new(CanvasConfig::for_variant(Variant::Current));
    core.on_pointer_down(Point::new(0.0, 0.0), Button::Primary);
    core.on_pointer_move(Point::new(25.0, 5.0));
    let view = CanvasViewState::from_core(&core);
    assert_eq!(view.cursor, "grabbing");
    assert_eq!((view.pan_x, view.pan_y), (25.0, 5.0));
}

#[test]
fn zoom_percent_rounds() {
    let view = CanvasViewState { zoom: 1.2 * 1.2, ..CanvasViewState::default() };
    assert_eq!(view.zoom_percent(), 144.0);
    let view = CanvasViewState { zoom: 0.833_333, ..CanvasViewState::default() };
    assert_eq!(view.zoom_percent(), 83.0);
}
