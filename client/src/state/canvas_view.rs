//! Canvas telemetry used by non-canvas UI surfaces.
//!
//! ARCHITECTURE
//! ============
//! `CanvasHost` owns the engine and publishes a snapshot after every batch of
//! engine actions so the toolbar and status bar can render without touching
//! the engine.

#[cfg(test)]
#[path = "canvas_view_test.rs"]
mod canvas_view_test;

use canvas::doc::ShapeId;
use canvas::engine::EngineCore;

/// Live canvas telemetry consumed by chrome (toolbar, status bar).
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasViewState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub shape_count: usize,
    pub selection: Option<ShapeId>,
    /// CSS cursor for the canvas element.
    pub cursor: &'static str,
}

impl Default for CanvasViewState {
    fn default() -> Self {
        Self { zoom: 1.0, pan_x: 0.0, pan_y: 0.0, shape_count: 0, selection: None, cursor: "default" }
    }
}

impl CanvasViewState {
    /// Snapshot the parts of engine state the chrome displays.
    #[must_use]
    pub fn from_core(core: &EngineCore) -> Self {
        let camera = core.camera();
        Self {
            zoom: camera.zoom,
            pan_x: camera.pan_x,
            pan_y: camera.pan_y,
            shape_count: core.shape_count(),
            selection: core.selection(),
            cursor: core.cursor(),
        }
    }

    /// Zoom as a whole percentage for the slider and label.
    #[must_use]
    pub fn zoom_percent(&self) -> f64 {
        (self.zoom * 100.0).round()
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }
}
