//! Rendering: draws the full canvas scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads engine state and produces pixels; it does not mutate anything.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Point;
use crate::consts::{SELECTION_STROKE, SELECTION_STROKE_PX};
use crate::doc::{Shape, ShapeKind};
use crate::engine::EngineCore;
use crate::hit::CircleHit;

/// Draw the full scene: shapes in insertion order, then the selection outline.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let camera = core.camera;

    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, core.viewport_width, core.viewport_height);

    ctx.save();
    ctx.translate(camera.pan_x, camera.pan_y)?;
    ctx.scale(camera.zoom, camera.zoom)?;

    for shape in core.shapes() {
        let selected = core.ui.selected_id == Some(shape.id);
        draw_shape(ctx, shape, core.config.circle_hit)?;
        if selected {
            draw_selection(ctx, shape, core.config.circle_hit, camera.zoom)?;
        }
    }

    ctx.restore();
    Ok(())
}

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape, circle: CircleHit) -> Result<(), JsValue> {
    ctx.set_fill_style_str(&shape.color);
    match shape.kind {
        ShapeKind::Rectangle => {
            ctx.fill_rect(shape.x, shape.y, shape.width, shape.height);
        }
        ShapeKind::Circle | ShapeKind::Triangle | ShapeKind::Star => {
            trace_path(ctx, shape, circle)?;
            ctx.fill();
        }
    }
    Ok(())
}

/// Black outline, a constant 2 screen pixels wide at any zoom.
fn draw_selection(ctx: &CanvasRenderingContext2d, shape: &Shape, circle: CircleHit, zoom: f64) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(SELECTION_STROKE);
    ctx.set_line_width(SELECTION_STROKE_PX / zoom);
    match shape.kind {
        ShapeKind::Rectangle => ctx.stroke_rect(shape.x, shape.y, shape.width, shape.height),
        ShapeKind::Circle | ShapeKind::Triangle | ShapeKind::Star => {
            trace_path(ctx, shape, circle)?;
            ctx.stroke();
        }
    }
    Ok(())
}

fn trace_path(ctx: &CanvasRenderingContext2d, shape: &Shape, circle: CircleHit) -> Result<(), JsValue> {
    ctx.begin_path();
    match shape.kind {
        ShapeKind::Rectangle => ctx.rect(shape.x, shape.y, shape.width, shape.height),
        ShapeKind::Circle => {
            let c = shape.center();
            let rx = (shape.width / 2.0).max(0.0);
            match circle {
                CircleHit::Round => ctx.arc(c.x, c.y, rx, 0.0, TAU)?,
                CircleHit::Elliptic => {
                    let ry = (shape.height / 2.0).max(0.0);
                    ctx.ellipse(c.x, c.y, rx, ry, 0.0, 0.0, TAU)?;
                }
            }
        }
        ShapeKind::Triangle => polygon(ctx, &shape.triangle_vertices()),
        ShapeKind::Star => polygon(ctx, &shape.star_vertices()),
    }
    ctx.close_path();
    Ok(())
}

fn polygon(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
}
