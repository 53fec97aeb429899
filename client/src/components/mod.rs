//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the sketchpad chrome and the canvas surface while
//! reading/writing shared state from Leptos context providers.

pub mod canvas_host;
pub mod status_bar;
pub mod toolbar;
