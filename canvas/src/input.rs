//! Input model: tools, mouse buttons, and the gesture state machine.
//!
//! `Tool` captures the user's intent at the time of a pointer event.
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up, carrying the previous screen position needed to compute
//! incremental deltas.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::doc::{ShapeId, ShapeKind};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Move / pan tool. No shape is placed on click.
    #[default]
    Move,
    /// Place a rectangle.
    Rectangle,
    /// Place a circle.
    Circle,
    /// Place a triangle.
    Triangle,
    /// Place a five-point star.
    Star,
}

impl Tool {
    /// The shape this tool places, or `None` for the move tool.
    #[must_use]
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Self::Move => None,
            Self::Rectangle => Some(ShapeKind::Rectangle),
            Self::Circle => Some(ShapeKind::Circle),
            Self::Triangle => Some(ShapeKind::Triangle),
            Self::Star => Some(ShapeKind::Star),
        }
    }

    /// Whether this tool places shapes.
    #[must_use]
    pub fn is_drawing(self) -> bool {
        self.shape_kind().is_some()
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// The id of the currently selected shape, if any.
    pub selected_id: Option<ShapeId>,
    /// Fill used for the next shape when colors are user-chosen.
    pub color: String,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the view.
    Panning {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
    /// The user is dragging the selected shape.
    DraggingShape {
        /// Id of the shape being dragged.
        id: ShapeId,
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
        /// Whether the shape has actually moved during this gesture.
        moved: bool,
    },
}

impl InputState {
    /// Whether a pan gesture is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}
