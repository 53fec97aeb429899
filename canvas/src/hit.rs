//! Hit-testing: which shape, if any, lies under a model-space point.
//!
//! Each shape kind has its own containment predicate. Stars are tested
//! against their bounding circle rather than the star polygon, so the gaps
//! between the points still count as a hit.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::doc::{DocStore, Shape, ShapeKind};

/// How circles are matched against a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleHit {
    /// Distance from the center is at most `width / 2`.
    #[default]
    Round,
    /// Inside the ellipse with semi-axes `width / 2` and `height / 2`.
    Elliptic,
}

/// Return the topmost shape containing `world_pt`.
#[must_use]
pub fn hit_test<'a>(world_pt: Point, doc: &'a DocStore, circle: CircleHit) -> Option<&'a Shape> {
    doc.iter_topmost().find(|shape| contains(shape, world_pt, circle))
}

/// Whether `pt` lies inside `shape`.
#[must_use]
pub fn contains(shape: &Shape, pt: Point, circle: CircleHit) -> bool {
    match shape.kind {
        ShapeKind::Rectangle => in_rect(shape, pt),
        ShapeKind::Circle => match circle {
            CircleHit::Round => in_circle(shape.center(), shape.width / 2.0, pt),
            CircleHit::Elliptic => in_ellipse(shape, pt),
        },
        ShapeKind::Triangle => in_triangle(shape.triangle_vertices(), pt),
        ShapeKind::Star => in_circle(shape.center(), shape.width / 2.0, pt),
    }
}

fn in_rect(shape: &Shape, pt: Point) -> bool {
    pt.x >= shape.x && pt.x <= shape.x + shape.width && pt.y >= shape.y && pt.y <= shape.y + shape.height
}

fn in_circle(center: Point, radius: f64, pt: Point) -> bool {
    (pt.x - center.x).hypot(pt.y - center.y) <= radius
}

fn in_ellipse(shape: &Shape, pt: Point) -> bool {
    let rx = shape.width / 2.0;
    let ry = shape.height / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let c = shape.center();
    let dx = (pt.x - c.x) / rx;
    let dy = (pt.y - c.y) / ry;
    dx * dx + dy * dy <= 1.0
}

/// Barycentric point-in-triangle test; degenerate triangles never match.
fn in_triangle([a, b, c]: [Point; 3], pt: Point) -> bool {
    let denom = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
    if denom.abs() < f64::EPSILON {
        return false;
    }
    let wa = ((b.y - c.y) * (pt.x - c.x) + (c.x - b.x) * (pt.y - c.y)) / denom;
    let wb = ((c.y - a.y) * (pt.x - c.x) + (a.x - c.x) * (pt.y - c.y)) / denom;
    let wc = 1.0 - wa - wb;
    (0.0..=1.0).contains(&wa) && (0.0..=1.0).contains(&wb) && (0.0..=1.0).contains(&wc)
}
