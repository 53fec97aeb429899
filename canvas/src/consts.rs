//! Shared numeric constants for the canvas crate.

// ── Math ────────────────────────────────────────────────────────

/// π / 5 (36°) — angular step for a 10-vertex star polygon.
pub const FRAC_PI_5: f64 = std::f64::consts::PI / 5.0;

// ── Camera ──────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const ZOOM_MIN: f64 = 0.2;

/// Largest allowed zoom factor.
pub const ZOOM_MAX: f64 = 5.0;

/// Multiplier applied by one zoom-in step (divisor for zoom-out).
pub const ZOOM_STEP: f64 = 1.2;

/// Slider bounds, in percent.
pub const ZOOM_PERCENT_MIN: f64 = 20.0;
pub const ZOOM_PERCENT_MAX: f64 = 500.0;

/// Slider granularity, in percent.
pub const ZOOM_PERCENT_STEP: f64 = 10.0;

// ── Shapes ──────────────────────────────────────────────────────

/// Number of outer points on a star.
pub const STAR_SPIKES: usize = 5;

/// Inner-to-outer radius ratio for the star polygon.
pub const STAR_INNER_RATIO: f64 = 0.5;

// ── Selection ───────────────────────────────────────────────────

/// Selection outline width in screen pixels.
pub const SELECTION_STROKE_PX: f64 = 2.0;

/// Selection outline color.
pub const SELECTION_STROKE: &str = "#000000";

// ── Export ──────────────────────────────────────────────────────

/// Suggested file name for PNG downloads.
pub const EXPORT_FILE_NAME: &str = "canvas-drawing.png";

/// MIME type of exported images.
pub const EXPORT_MIME: &str = "image/png";
