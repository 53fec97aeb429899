#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{ZOOM_MAX, ZOOM_MIN, ZOOM_PERCENT_MAX, ZOOM_PERCENT_MIN, ZOOM_STEP};

/// A point in either screen or model space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Camera state for pan/zoom over the drawing.
///
/// `pan_x` / `pan_y` are in CSS pixels.
/// `zoom` is a scale factor (1.0 = no zoom), always within [`ZOOM_MIN`, `ZOOM_MAX`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to model coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a model-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to model-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Shift the view by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// One zoom step in. The origin stays fixed on screen.
    pub fn zoom_in(&mut self) {
        self.zoom = clamp_zoom(self.zoom * ZOOM_STEP);
    }

    /// One zoom step out. The origin stays fixed on screen.
    pub fn zoom_out(&mut self) {
        self.zoom = clamp_zoom(self.zoom / ZOOM_STEP);
    }

    /// Set zoom from a slider percentage (100 = no zoom).
    pub fn set_zoom_percent(&mut self, percent: f64) {
        if percent.is_nan() {
            return;
        }
        self.zoom = percent.clamp(ZOOM_PERCENT_MIN, ZOOM_PERCENT_MAX) / 100.0;
    }

    /// Current zoom as a percentage.
    #[must_use]
    pub fn zoom_percent(&self) -> f64 {
        self.zoom * 100.0
    }

    /// Back to zoom 1 with no offset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Clamp a zoom factor into the supported range.
#[must_use]
pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}
