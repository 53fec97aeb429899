use super::*;

#[test]
fn object_count_label_pluralizes() {
    assert_eq!(object_count_label(0), "0 objects");
    assert_eq!(object_count_label(1), "1 object");
    assert_eq!(object_count_label(12), "12 objects");
}

#[test]
fn current_hint_names_drawing_tool() {
    assert_eq!(mode_hint(Variant::Current, Tool::Circle), "Drawing mode: circle");
    assert_eq!(mode_hint(Variant::Current, Tool::Rectangle), "Drawing mode: square");
    assert_eq!(mode_hint(Variant::Current, Tool::Star), "Drawing mode: star");
}

#[test]
fn current_hint_for_pan_mode() {
    assert_eq!(mode_hint(Variant::Current, Tool::Move), "Pan mode: Click and drag to move canvas");
}

#[test]
fn classic_hints_distinguish_move_tool() {
    assert_eq!(mode_hint(Variant::Classic, Tool::Move), "Click and drag to move shapes or pan the canvas");
    assert_eq!(
        mode_hint(Variant::Classic, Tool::Triangle),
        "Click to place a shape, or use the move tool to reposition objects"
    );
}

#[test]
fn tool_titles_follow_variant() {
    assert_eq!(tool_title(Variant::Classic, Tool::Rectangle), "Rectangle");
    assert_eq!(tool_title(Variant::Current, Tool::Rectangle), "Square");
    assert_eq!(tool_title(Variant::Classic, Tool::Move), "Move");
    assert_eq!(tool_title(Variant::Current, Tool::Move), "Pan Tool");
}

#[test]
fn every_tool_has_a_glyph() {
    for tool in [Tool::Move, Tool::Rectangle, Tool::Circle, Tool::Triangle, Tool::Star] {
        assert!(!tool_glyph(tool).is_empty());
    }
}

#[test]
fn zoom_label_formats_per_variant() {
    assert_eq!(zoom_label(Variant::Classic, 120.0), "Zoom: 120%");
    assert_eq!(zoom_label(Variant::Current, 20.0), "20%");
}

#[test]
fn clear_label_follows_variant() {
    assert_eq!(clear_label(Variant::Classic), "Clear Canvas");
    assert_eq!(clear_label(Variant::Current), "Clear All");
}
