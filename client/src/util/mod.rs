//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the pure parts stay testable off the browser.

pub mod canvas_input;
pub mod config_source;
pub mod download;
pub mod status;
