//! Document model: shapes and the ordered in-memory store.
//!
//! This module defines what is on the canvas (`Shape`, `ShapeKind`), the
//! identifier scheme (`ShapeId`), and the runtime store that owns all live
//! shapes (`DocStore`).
//!
//! The store is an ordered sequence: shapes are appended on creation and the
//! sequence order is the paint order, so the last shape is visually on top.
//! The renderer walks it front to back; the hit tester walks it back to front.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{FRAC_PI_5, STAR_INNER_RATIO, STAR_SPIKES};

/// Unique identifier for a shape: its creation time in milliseconds since the epoch.
///
/// Shapes created within the same millisecond get the next free value, so ids
/// stay unique and increase in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle filling the bounding box.
    Rectangle,
    /// Circle (or ellipse) inscribed in the bounding box.
    Circle,
    /// Isosceles triangle: apex at top-center, base along the bottom edge.
    Triangle,
    /// Five-point star centered in the bounding box.
    Star,
}

impl ShapeKind {
    /// Lowercase display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Star => "star",
        }
    }
}

/// A placed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier for this shape.
    pub id: ShapeId,
    /// Geometry type.
    pub kind: ShapeKind,
    /// Left edge of the bounding box in model coordinates.
    pub x: f64,
    /// Top edge of the bounding box in model coordinates.
    pub y: f64,
    /// Width of the bounding box in model coordinates.
    pub width: f64,
    /// Height of the bounding box in model coordinates.
    pub height: f64,
    /// Fill color as a `#rrggbb` string.
    pub color: String,
}

impl Shape {
    /// Center of the bounding box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Triangle vertices: apex (top-center), bottom-left, bottom-right.
    #[must_use]
    pub fn triangle_vertices(&self) -> [Point; 3] {
        [
            Point::new(self.x + self.width / 2.0, self.y),
            Point::new(self.x, self.y + self.height),
            Point::new(self.x + self.width, self.y + self.height),
        ]
    }

    /// Star outline, alternating outer and inner vertices.
    ///
    /// The outer radius is half the width. The first vertex points along +x.
    #[must_use]
    pub fn star_vertices(&self) -> Vec<Point> {
        let c = self.center();
        let outer = self.width / 2.0;
        let inner = outer * STAR_INNER_RATIO;
        (0..STAR_SPIKES * 2)
            .map(|i| {
                let radius = if i % 2 == 0 { outer } else { inner };
                #[allow(clippy::cast_precision_loss)]
                let angle = FRAC_PI_5 * i as f64;
                Point::new(c.x + angle.cos() * radius, c.y + angle.sin() * radius)
            })
            .collect()
    }
}

/// Ordered in-memory store of shapes.
#[derive(Debug, Default)]
pub struct DocStore {
    shapes: Vec<Shape>,
    last_id: Option<ShapeId>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id for a shape created at `now_ms`.
    ///
    /// Returns `now_ms` unless that would not be strictly greater than the
    /// previously allocated id.
    pub fn next_id(&mut self, now_ms: u64) -> ShapeId {
        let id = match self.last_id {
            Some(ShapeId(last)) if now_ms <= last => ShapeId(last + 1),
            _ => ShapeId(now_ms),
        };
        self.last_id = Some(id);
        id
    }

    /// Append a shape on top of all others.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let idx = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(idx))
    }

    /// Remove every shape.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Whether a shape with this id is present.
    #[must_use]
    pub fn contains(&self, id: ShapeId) -> bool {
        self.get(id).is_some()
    }

    /// Move a shape by a model-space delta. Returns false if the shape doesn't exist.
    pub fn translate(&mut self, id: ShapeId, dx: f64, dy: f64) -> bool {
        let Some(shape) = self.shapes.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        shape.x += dx;
        shape.y += dy;
        true
    }

    /// Shapes in paint order (bottom first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Shapes in hit-test order (topmost first).
    pub fn iter_topmost(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().rev()
    }

    /// Number of shapes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
