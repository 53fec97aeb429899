use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::color::normalize_hex_color;
use crate::config::{CanvasConfig, ColorMode, ConfigError, DragPolicy, Placement, Variant};
use crate::doc::{DocStore, Shape, ShapeId};
use crate::export::{self, ExportError};
use crate::hit;
use crate::input::{Button, InputState, Tool, UiState};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Seed used by [`EngineCore::new`]; browsers seed from `Math.random` instead.
const DEFAULT_SEED: u64 = 0x5eed_cafe;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ShapeCreated(Shape),
    ShapeMoved { id: ShapeId, x: f64, y: f64 },
    ShapeDeleted { id: ShapeId },
    Cleared,
    SelectionChanged(Option<ShapeId>),
    CameraChanged(Camera),
    SetCursor(String),
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub doc: DocStore,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub config: CanvasConfig,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    rng: SmallRng,
    /// Set when a shape drag ends so the trailing click does not place a shape.
    suppress_click: bool,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: CanvasConfig) -> Self {
        Self::with_seed(config, DEFAULT_SEED)
    }

    /// Build a core whose random color picks are reproducible.
    #[must_use]
    pub fn with_seed(config: CanvasConfig, seed: u64) -> Self {
        let ui = UiState { tool: config.default_tool, selected_id: None, color: config.default_color.clone() };
        Self {
            doc: DocStore::new(),
            camera: Camera::default(),
            ui,
            input: InputState::default(),
            config,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            rng: SmallRng::seed_from_u64(seed),
            suppress_click: false,
        }
    }

    // --- Tool / color ---

    /// Set the active tool. Tools the configuration does not offer are ignored.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        if !self.config.offers(tool) {
            log::warn!("tool {tool:?} is not offered; keeping {:?}", self.ui.tool);
            return Vec::new();
        }
        self.ui.tool = tool;
        self.input = InputState::Idle;
        vec![Action::SetCursor(self.cursor().to_owned())]
    }

    /// Set the fill used for subsequently placed shapes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] unless `hex` is `#rgb` or `#rrggbb`.
    pub fn set_color(&mut self, hex: &str) -> Result<(), ConfigError> {
        let Some(color) = normalize_hex_color(hex) else {
            return Err(ConfigError::InvalidColor(hex.to_owned()));
        };
        self.ui.color = color;
        Ok(())
    }

    // --- Placement / selection ---

    /// Place a shape of the active tool's kind at a screen point.
    ///
    /// Returns the created shape, or `None` when the move tool is active.
    pub fn place(&mut self, screen_pt: Point, now_ms: u64) -> Option<Shape> {
        let kind = self.ui.tool.shape_kind()?;
        let world = self.camera.screen_to_world(screen_pt);
        let size = self.config.shape_size;
        let (x, y) = match self.config.placement {
            Placement::Anchored => (world.x, world.y),
            Placement::Centered => (world.x - size / 2.0, world.y - size / 2.0),
        };
        let color = self.next_color();
        let id = self.doc.next_id(now_ms);
        let shape = Shape { id, kind, x, y, width: size, height: size, color };
        self.doc.push(shape.clone());
        if self.config.select_on_place {
            self.ui.selected_id = Some(id);
        }
        log::debug!("placed {} {id} at ({x:.1}, {y:.1})", kind.name());
        Some(shape)
    }

    /// Select the topmost shape under a screen point, or clear the selection.
    pub fn select_at(&mut self, screen_pt: Point) -> Option<ShapeId> {
        let world = self.camera.screen_to_world(screen_pt);
        self.ui.selected_id = hit::hit_test(world, &self.doc, self.config.circle_hit).map(|s| s.id);
        self.ui.selected_id
    }

    fn next_color(&mut self) -> String {
        match self.config.color_mode {
            ColorMode::Chosen => self.ui.color.clone(),
            ColorMode::RandomPalette => self
                .config
                .palette
                .choose(&mut self.rng)
                .map_or_else(|| self.config.default_color.clone(), |(_, hex)| hex.clone()),
        }
    }

    // --- Input events ---

    /// Start a gesture. Only the primary button does anything.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.suppress_click = false;
        let before = self.ui.selected_id;
        let drawing = self.ui.tool.is_drawing();

        self.input = match (self.config.drag_policy, drawing) {
            (DragPolicy::DrawingToolMovesSelection, true) => match self.select_at(screen_pt) {
                Some(id) => InputState::DraggingShape { id, last_screen: screen_pt, moved: false },
                None => InputState::Idle,
            },
            (DragPolicy::MoveToolMovesSelection, false) => match self.select_at(screen_pt) {
                Some(id) => InputState::DraggingShape { id, last_screen: screen_pt, moved: false },
                None => InputState::Panning { last_screen: screen_pt },
            },
            (DragPolicy::DrawingToolMovesSelection, false) | (DragPolicy::MoveToolMovesSelection, true) => {
                InputState::Panning { last_screen: screen_pt }
            }
        };

        let mut actions = Vec::new();
        if self.ui.selected_id != before {
            actions.push(Action::SelectionChanged(self.ui.selected_id));
            actions.push(Action::RenderNeeded);
        }
        if self.input.is_panning() {
            actions.push(Action::SetCursor(self.cursor().to_owned()));
        }
        actions
    }

    /// Continue a gesture: pan the camera or drag the selected shape.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { last_screen } => {
                if screen_pt == last_screen {
                    return Vec::new();
                }
                self.camera.pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::CameraChanged(self.camera), Action::RenderNeeded]
            }
            InputState::DraggingShape { id, last_screen, .. } => {
                if screen_pt == last_screen {
                    return Vec::new();
                }
                let dx = self.camera.screen_dist_to_world(screen_pt.x - last_screen.x);
                let dy = self.camera.screen_dist_to_world(screen_pt.y - last_screen.y);
                if !self.doc.translate(id, dx, dy) {
                    self.input = InputState::Idle;
                    return Vec::new();
                }
                self.input = InputState::DraggingShape { id, last_screen: screen_pt, moved: true };
                match self.doc.get(id) {
                    Some(shape) => vec![Action::ShapeMoved { id, x: shape.x, y: shape.y }, Action::RenderNeeded],
                    None => vec![Action::RenderNeeded],
                }
            }
        }
    }

    /// End the current gesture.
    pub fn on_pointer_up(&mut self, _screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.suppress_click = matches!(self.input, InputState::DraggingShape { moved: true, .. });
        self.end_gesture()
    }

    /// Pointer left the canvas; treated like a release without a trailing click.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.suppress_click = false;
        self.end_gesture()
    }

    fn end_gesture(&mut self) -> Vec<Action> {
        let was_panning = self.input.is_panning();
        self.input = InputState::Idle;
        if was_panning { vec![Action::SetCursor(self.cursor().to_owned())] } else { Vec::new() }
    }

    /// A completed click: places a shape when a drawing tool is active.
    pub fn on_click(&mut self, screen_pt: Point, now_ms: u64) -> Vec<Action> {
        if std::mem::take(&mut self.suppress_click) {
            return Vec::new();
        }
        let before = self.ui.selected_id;
        let Some(shape) = self.place(screen_pt, now_ms) else {
            return Vec::new();
        };
        let mut actions = vec![Action::ShapeCreated(shape)];
        if self.ui.selected_id != before {
            actions.push(Action::SelectionChanged(self.ui.selected_id));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- View ---

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.camera.zoom_in();
        self.camera_actions()
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.camera.zoom_out();
        self.camera_actions()
    }

    /// Apply a zoom-slider value (percent).
    pub fn set_zoom_percent(&mut self, percent: f64) -> Vec<Action> {
        self.camera.set_zoom_percent(percent);
        self.camera_actions()
    }

    /// Restore zoom 1 and pan (0, 0). Shapes are untouched.
    pub fn reset_view(&mut self) -> Vec<Action> {
        self.camera.reset();
        self.camera_actions()
    }

    fn camera_actions(&self) -> Vec<Action> {
        vec![Action::CameraChanged(self.camera), Action::RenderNeeded]
    }

    // --- Deletion ---

    /// Remove one shape, clearing the selection if it pointed at it.
    pub fn delete(&mut self, id: ShapeId) -> Vec<Action> {
        if self.doc.remove(id).is_none() {
            return Vec::new();
        }
        log::debug!("deleted shape {id}");
        let mut actions = vec![Action::ShapeDeleted { id }];
        if self.ui.selected_id == Some(id) {
            self.ui.selected_id = None;
            actions.push(Action::SelectionChanged(None));
        }
        if matches!(self.input, InputState::DraggingShape { id: dragged, .. } if dragged == id) {
            self.input = InputState::Idle;
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Remove the selected shape, if any.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        match self.ui.selected_id {
            Some(id) => self.delete(id),
            None => Vec::new(),
        }
    }

    /// Remove every shape and clear the selection. The camera is untouched.
    pub fn clear(&mut self) -> Vec<Action> {
        let removed = self.doc.len();
        self.doc.clear();
        self.input = InputState::Idle;
        log::debug!("cleared {removed} shapes");
        let mut actions = vec![Action::Cleared];
        if self.ui.selected_id.take().is_some() {
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Viewport ---

    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    }

    // --- Queries ---

    /// CSS cursor for the current tool and gesture.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        match self.config.variant {
            Variant::Classic => "crosshair",
            Variant::Current if self.input.is_panning() => "grabbing",
            Variant::Current if self.ui.tool.is_drawing() => "crosshair",
            Variant::Current => "grab",
        }
    }

    /// The currently selected shape, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.ui.selected_id
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    /// Look up a shape by ID.
    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.doc.get(id)
    }

    /// Shapes in paint order, bottom first.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.doc.iter()
    }

    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.doc.len()
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: CanvasConfig) -> Self {
        let seed = js_sys::Math::random().to_bits();
        Self { canvas, core: EngineCore::with_seed(config, seed) }
    }

    // --- Delegated state changes ---

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.core.set_tool(tool)
    }

    /// # Errors
    ///
    /// See [`EngineCore::set_color`].
    pub fn set_color(&mut self, hex: &str) -> Result<(), ConfigError> {
        self.core.set_color(hex)
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.core.zoom_in()
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.core.zoom_out()
    }

    pub fn set_zoom_percent(&mut self, percent: f64) -> Vec<Action> {
        self.core.set_zoom_percent(percent)
    }

    pub fn reset_view(&mut self) -> Vec<Action> {
        self.core.reset_view()
    }

    pub fn delete_selected(&mut self) -> Vec<Action> {
        self.core.delete_selected()
    }

    pub fn clear(&mut self) -> Vec<Action> {
        self.core.clear()
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio, resizing the backing store.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((self.core.viewport_width * self.core.dpr).round() as u32);
        self.canvas.set_height((self.core.viewport_height * self.core.dpr).round() as u32);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_click(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_click(screen_pt, now_ms())
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self.context()?;
        render::draw(&ctx, &self.core)
    }

    /// Encode the rendered canvas as a PNG flattened onto white.
    ///
    /// # Errors
    ///
    /// Fails if the pixels cannot be read back or the encoder rejects them.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        let ctx = self.context().map_err(|_| ExportError::MissingContext)?;
        let (width, height) = (self.canvas.width(), self.canvas.height());
        if width == 0 || height == 0 {
            return Err(ExportError::EmptyCanvas { width, height });
        }
        let image = ctx
            .get_image_data(0.0, 0.0, f64::from(width), f64::from(height))
            .map_err(|e| ExportError::Browser(format!("{e:?}")))?;
        export::encode_png(width, height, image.data().0)
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        self.canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}
