use super::*;
use crate::doc::ShapeId;

fn shape(id: u64, kind: ShapeKind, x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape { id: ShapeId(id), kind, x, y, width: w, height: h, color: "#f87171".to_owned() }
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn store(shapes: Vec<Shape>) -> DocStore {
    let mut doc = DocStore::new();
    for s in shapes {
        doc.push(s);
    }
    doc
}

// =============================================================
// Rectangle
// =============================================================

#[test]
fn rect_contains_interior_point() {
    let s = shape(1, ShapeKind::Rectangle, 125.0, 125.0, 50.0, 50.0);
    assert!(contains(&s, pt(160.0, 160.0), CircleHit::Round));
}

#[test]
fn rect_edges_are_inclusive() {
    let s = shape(1, ShapeKind::Rectangle, 0.0, 0.0, 10.0, 10.0);
    assert!(contains(&s, pt(0.0, 0.0), CircleHit::Round));
    assert!(contains(&s, pt(10.0, 10.0), CircleHit::Round));
    assert!(contains(&s, pt(10.0, 0.0), CircleHit::Round));
}

#[test]
fn rect_rejects_outside_point() {
    let s = shape(1, ShapeKind::Rectangle, 125.0, 125.0, 50.0, 50.0);
    assert!(!contains(&s, pt(10.0, 10.0), CircleHit::Round));
    assert!(!contains(&s, pt(175.1, 150.0), CircleHit::Round));
}

// =============================================================
// Circle
// =============================================================

#[test]
fn round_circle_uses_width_as_diameter() {
    let s = shape(1, ShapeKind::Circle, 0.0, 0.0, 100.0, 40.0);
    // Inside radius 50 around (50, 20), even though outside the 40-high box.
    assert!(contains(&s, pt(50.0, 65.0), CircleHit::Round));
    assert!(!contains(&s, pt(50.0, 71.0), CircleHit::Round));
}

#[test]
fn round_circle_rejects_bounding_box_corner() {
    let s = shape(1, ShapeKind::Circle, 0.0, 0.0, 100.0, 100.0);
    assert!(!contains(&s, pt(2.0, 2.0), CircleHit::Round));
    assert!(contains(&s, pt(50.0, 0.0), CircleHit::Round));
}

#[test]
fn elliptic_circle_scales_axes_independently() {
    let s = shape(1, ShapeKind::Circle, 0.0, 0.0, 100.0, 40.0);
    assert!(contains(&s, pt(95.0, 20.0), CircleHit::Elliptic));
    assert!(contains(&s, pt(50.0, 38.0), CircleHit::Elliptic));
    assert!(!contains(&s, pt(50.0, 45.0), CircleHit::Elliptic));
    assert!(!contains(&s, pt(95.0, 35.0), CircleHit::Elliptic));
}

#[test]
fn elliptic_circle_with_zero_axis_never_hits() {
    let s = shape(1, ShapeKind::Circle, 0.0, 0.0, 100.0, 0.0);
    assert!(!contains(&s, pt(50.0, 0.0), CircleHit::Elliptic));
}

#[test]
fn circle_hit_default_is_round() {
    assert_eq!(CircleHit::default(), CircleHit::Round);
}

// =============================================================
// Triangle
// =============================================================

#[test]
fn triangle_contains_centroid() {
    let s = shape(1, ShapeKind::Triangle, 0.0, 0.0, 90.0, 90.0);
    // Centroid of (45,0), (0,90), (90,90).
    assert!(contains(&s, pt(45.0, 60.0), CircleHit::Round));
}

#[test]
fn triangle_rejects_top_corners_of_bounding_box() {
    let s = shape(1, ShapeKind::Triangle, 0.0, 0.0, 100.0, 100.0);
    assert!(!contains(&s, pt(5.0, 5.0), CircleHit::Round));
    assert!(!contains(&s, pt(95.0, 5.0), CircleHit::Round));
}

#[test]
fn triangle_contains_points_near_base() {
    let s = shape(1, ShapeKind::Triangle, 0.0, 0.0, 100.0, 100.0);
    assert!(contains(&s, pt(5.0, 99.0), CircleHit::Round));
    assert!(contains(&s, pt(95.0, 99.0), CircleHit::Round));
    assert!(!contains(&s, pt(50.0, 101.0), CircleHit::Round));
}

#[test]
fn degenerate_triangle_never_hits() {
    let flat = shape(1, ShapeKind::Triangle, 0.0, 0.0, 100.0, 0.0);
    assert!(!contains(&flat, pt(50.0, 0.0), CircleHit::Round));
    let thin = shape(2, ShapeKind::Triangle, 0.0, 0.0, 0.0, 100.0);
    assert!(!contains(&thin, pt(0.0, 50.0), CircleHit::Round));
}

// =============================================================
// Star
// =============================================================

#[test]
fn star_uses_bounding_circle() {
    let s = shape(1, ShapeKind::Star, 0.0, 0.0, 100.0, 100.0);
    // Between two points of the star, but inside the bounding circle.
    let angle = std::f64::consts::PI / 5.0;
    let gap = pt(50.0 + angle.cos() * 45.0, 50.0 + angle.sin() * 45.0);
    assert!(contains(&s, gap, CircleHit::Round));
    assert!(!contains(&s, pt(2.0, 2.0), CircleHit::Round));
}

#[test]
fn star_ignores_circle_mode() {
    let s = shape(1, ShapeKind::Star, 0.0, 0.0, 100.0, 40.0);
    assert!(contains(&s, pt(50.0, 65.0), CircleHit::Elliptic));
}

// =============================================================
// hit_test ordering
// =============================================================

#[test]
fn hit_test_empty_store_returns_none() {
    let doc = DocStore::new();
    assert!(hit_test(pt(0.0, 0.0), &doc, CircleHit::Round).is_none());
}

#[test]
fn hit_test_returns_topmost_of_overlapping_shapes() {
    let doc = store(vec![
        shape(1, ShapeKind::Rectangle, 0.0, 0.0, 100.0, 100.0),
        shape(2, ShapeKind::Circle, 25.0, 25.0, 50.0, 50.0),
        shape(3, ShapeKind::Rectangle, 500.0, 500.0, 10.0, 10.0),
    ]);
    let hit = hit_test(pt(50.0, 50.0), &doc, CircleHit::Round).unwrap();
    assert_eq!(hit.id, ShapeId(2));
}

#[test]
fn hit_test_falls_through_to_lower_shape() {
    let doc = store(vec![
        shape(1, ShapeKind::Rectangle, 0.0, 0.0, 100.0, 100.0),
        shape(2, ShapeKind::Circle, 25.0, 25.0, 50.0, 50.0),
    ]);
    // Inside the rectangle's corner but outside the circle on top.
    let hit = hit_test(pt(27.0, 27.0), &doc, CircleHit::Round).unwrap();
    assert_eq!(hit.id, ShapeId(1));
}

#[test]
fn hit_test_miss_returns_none() {
    let doc = store(vec![shape(1, ShapeKind::Rectangle, 125.0, 125.0, 50.0, 50.0)]);
    assert!(hit_test(pt(10.0, 10.0), &doc, CircleHit::Round).is_none());
}
