//! Local UI chrome state (active tool, fill color, pending canvas commands).
//!
//! DESIGN
//! ======
//! Toolbar buttons never touch the engine directly. They record a
//! [`CanvasCommand`] and bump `command_seq`; `CanvasHost` watches the sequence
//! number and applies each command exactly once.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use canvas::config::CanvasConfig;
use canvas::input::Tool;

/// One-shot request from the chrome to the canvas engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasCommand {
    ZoomIn,
    ZoomOut,
    /// Slider value in percent.
    SetZoomPercent(f64),
    ResetView,
    DeleteSelected,
    Clear,
    ExportPng,
}

#[derive(Clone, Debug)]
pub struct UiState {
    pub active_tool: Tool,
    /// Fill for the next shape when the color picker is shown.
    pub color: String,
    pub command_seq: u64,
    pub command: Option<CanvasCommand>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

impl UiState {
    #[must_use]
    pub fn new(config: &CanvasConfig) -> Self {
        Self { active_tool: config.default_tool, color: config.default_color.clone(), command_seq: 0, command: None }
    }

    /// Queue a command for the canvas host.
    pub fn issue(&mut self, command: CanvasCommand) {
        self.command = Some(command);
        self.command_seq = self.command_seq.saturating_add(1);
    }
}
