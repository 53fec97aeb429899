//! Labels and hints shown by the toolbar and status bar.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use canvas::config::Variant;
use canvas::input::Tool;

/// Toolbar tooltip for a tool.
pub fn tool_title(variant: Variant, tool: Tool) -> &'static str {
    match (variant, tool) {
        (Variant::Classic, Tool::Move) => "Move",
        (Variant::Current, Tool::Move) => "Pan Tool",
        (Variant::Classic, Tool::Rectangle) => "Rectangle",
        (Variant::Current, Tool::Rectangle) => "Square",
        (_, Tool::Circle) => "Circle",
        (_, Tool::Triangle) => "Triangle",
        (_, Tool::Star) => "Star",
    }
}

/// Single glyph drawn on a tool button.
pub fn tool_glyph(tool: Tool) -> &'static str {
    match tool {
        Tool::Move => "✥",
        Tool::Rectangle => "■",
        Tool::Circle => "●",
        Tool::Triangle => "▲",
        Tool::Star => "★",
    }
}

/// `"1 object"`, `"3 objects"`.
pub fn object_count_label(count: usize) -> String {
    if count == 1 { "1 object".to_owned() } else { format!("{count} objects") }
}

/// One-line hint describing what the canvas does with the active tool.
pub fn mode_hint(variant: Variant, tool: Tool) -> String {
    match variant {
        Variant::Classic if tool.is_drawing() => {
            "Click to place a shape, or use the move tool to reposition objects".to_owned()
        }
        Variant::Classic => "Click and drag to move shapes or pan the canvas".to_owned(),
        Variant::Current if tool.is_drawing() => {
            format!("Drawing mode: {}", tool_title(variant, tool).to_ascii_lowercase())
        }
        Variant::Current => "Pan mode: Click and drag to move canvas".to_owned(),
    }
}

/// Zoom readout next to the slider.
pub fn zoom_label(variant: Variant, zoom_percent: f64) -> String {
    match variant {
        Variant::Classic => format!("Zoom: {zoom_percent:.0}%"),
        Variant::Current => format!("{zoom_percent:.0}%"),
    }
}

/// Label on the button that removes every shape.
pub fn clear_label(variant: Variant) -> &'static str {
    match variant {
        Variant::Classic => "Clear Canvas",
        Variant::Current => "Clear All",
    }
}
