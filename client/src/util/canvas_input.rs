//! Canvas input mapping and pointer helper utilities.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use canvas::input::Button as CanvasButton;

#[cfg(feature = "csr")]
use canvas::camera::Point as CanvasPoint;

/// Map a DOM `MouseEvent.button` code to an engine button.
pub fn map_button(button: i16) -> CanvasButton {
    match button {
        1 => CanvasButton::Middle,
        2 => CanvasButton::Secondary,
        _ => CanvasButton::Primary,
    }
}

/// Pointer position relative to the canvas element, in CSS pixels.
#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Click position relative to the canvas element, in CSS pixels.
#[cfg(feature = "csr")]
pub fn mouse_point(ev: &leptos::ev::MouseEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}
