//! Canvas configuration: the two application flavours and their defaults.
//!
//! A [`Variant`] names a preset. [`CanvasConfig::for_variant`] expands it into
//! every knob the engine and the host chrome consult. Hosts may overlay a JSON
//! object on top of a preset with [`CanvasConfig::from_json`]; absent keys keep
//! the preset's value.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::color::normalize_hex_color;
use crate::hit::CircleHit;
use crate::input::Tool;

/// Fill palette offered by the classic color selector, as `(label, hex)`.
pub const CLASSIC_PALETTE: &[(&str, &str)] = &[
    ("Indigo", "#4f46e5"),
    ("Red", "#ef4444"),
    ("Green", "#22c55e"),
    ("Blue", "#3b82f6"),
    ("Yellow", "#f59e0b"),
    ("Purple", "#8b5cf6"),
    ("Black", "#000000"),
];

/// Fill palette the current flavour picks from at random.
pub const CURRENT_PALETTE: &[(&str, &str)] = &[
    ("Red", "#f87171"),
    ("Orange", "#fb923c"),
    ("Yellow", "#facc15"),
    ("Green", "#4ade80"),
    ("Blue", "#60a5fa"),
    ("Purple", "#a78bfa"),
    ("Pink", "#f472b6"),
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown variant '{0}' (expected 'classic' or 'current')")]
    UnknownVariant(String),
    #[error("invalid config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid color '{0}' (expected #rgb or #rrggbb)")]
    InvalidColor(String),
}

/// Which flavour of the drawing app to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Older snapshot: rectangle/circle/triangle, chosen colors, PNG download.
    Classic,
    /// Current version: adds the star, random colors, reset and delete.
    #[default]
    Current,
}

impl Variant {
    /// Parse a variant name as used in query strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownVariant`] for anything but `classic` or `current`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "current" => Ok(Self::Current),
            other => Err(ConfigError::UnknownVariant(other.to_owned())),
        }
    }
}

/// Where a new shape sits relative to the click point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// The click point becomes the shape's top-left corner.
    Anchored,
    /// The shape is centered on the click point.
    Centered,
}

/// How a new shape's fill is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// The user's current color selection.
    Chosen,
    /// A uniformly random entry of the palette.
    RandomPalette,
}

/// Which gestures drag a selected shape instead of panning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPolicy {
    /// Drawing tools drag the selection; the move tool pans.
    DrawingToolMovesSelection,
    /// The move tool drags the selection if there is one; everything else pans.
    MoveToolMovesSelection,
}

/// Canvas sizing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportMode {
    /// Track the container's size on every window resize.
    Fill,
    /// Fixed backing size in CSS pixels.
    Fixed { width: u32, height: u32 },
}

/// Host chrome switches.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chrome {
    pub reset_button: bool,
    pub delete_button: bool,
    pub download_button: bool,
    pub color_picker: bool,
}

/// Fully resolved canvas configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub variant: Variant,
    /// Tools shown in the toolbar, in display order.
    pub tools: Vec<Tool>,
    pub default_tool: Tool,
    pub placement: Placement,
    /// Edge length of a newly placed shape, in model units.
    pub shape_size: f64,
    pub color_mode: ColorMode,
    /// Initial fill for [`ColorMode::Chosen`].
    pub default_color: String,
    pub palette: Vec<(String, String)>,
    /// Select a shape right after placing it.
    pub select_on_place: bool,
    pub circle_hit: CircleHit,
    pub drag_policy: DragPolicy,
    pub viewport: ViewportMode,
    pub chrome: Chrome,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

impl CanvasConfig {
    /// Preset configuration for a variant.
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self {
                variant,
                tools: vec![Tool::Rectangle, Tool::Circle, Tool::Triangle, Tool::Move],
                default_tool: Tool::Rectangle,
                placement: Placement::Anchored,
                shape_size: 100.0,
                color_mode: ColorMode::Chosen,
                default_color: "#4f46e5".to_owned(),
                palette: owned_palette(CLASSIC_PALETTE),
                select_on_place: true,
                circle_hit: CircleHit::Elliptic,
                drag_policy: DragPolicy::MoveToolMovesSelection,
                viewport: ViewportMode::Fixed { width: 800, height: 600 },
                chrome: Chrome { reset_button: false, delete_button: false, download_button: true, color_picker: true },
            },
            Variant::Current => Self {
                variant,
                tools: vec![Tool::Circle, Tool::Rectangle, Tool::Triangle, Tool::Star, Tool::Move],
                default_tool: Tool::Move,
                placement: Placement::Centered,
                shape_size: 50.0,
                color_mode: ColorMode::RandomPalette,
                default_color: "#f87171".to_owned(),
                palette: owned_palette(CURRENT_PALETTE),
                select_on_place: false,
                circle_hit: CircleHit::Round,
                drag_policy: DragPolicy::DrawingToolMovesSelection,
                viewport: ViewportMode::Fill,
                chrome: Chrome { reset_button: true, delete_button: true, download_button: false, color_picker: false },
            },
        }
    }

    /// Overlay a JSON object on the preset named by its `variant` key.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, an unknown variant, a non-hex color, or a
    /// non-positive shape size.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let overlay: serde_json::Value = serde_json::from_str(raw)?;
        let variant = match overlay.get("variant").and_then(serde_json::Value::as_str) {
            Some(name) => Variant::parse(name)?,
            None => Variant::default(),
        };
        let mut merged = serde_json::to_value(Self::for_variant(variant))?;
        if let (Some(base), Some(incoming)) = (merged.as_object_mut(), overlay.as_object()) {
            for (k, v) in incoming {
                base.insert(k.clone(), v.clone());
            }
            base.insert("variant".to_owned(), serde_json::to_value(variant)?);
        }
        let config: Self = serde_json::from_value(merged)?;
        config.validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        let Some(default_color) = normalize_hex_color(&self.default_color) else {
            return Err(ConfigError::InvalidColor(self.default_color));
        };
        self.default_color = default_color;
        for (_, hex) in &mut self.palette {
            let Some(normalized) = normalize_hex_color(hex) else {
                return Err(ConfigError::InvalidColor(hex.clone()));
            };
            *hex = normalized;
        }
        if !(self.shape_size.is_finite() && self.shape_size > 0.0) {
            self.shape_size = Self::for_variant(self.variant).shape_size;
            log::warn!("ignoring non-positive shape_size; using {}", self.shape_size);
        }
        if !self.tools.contains(&self.default_tool) {
            self.default_tool = self.tools.first().copied().unwrap_or_default();
        }
        Ok(self)
    }

    /// Whether the toolbar offers this tool.
    #[must_use]
    pub fn offers(&self, tool: Tool) -> bool {
        self.tools.contains(&tool)
    }
}

fn owned_palette(palette: &[(&str, &str)]) -> Vec<(String, String)> {
    palette
        .iter()
        .map(|(label, hex)| ((*label).to_owned(), (*hex).to_owned()))
        .collect()
}
