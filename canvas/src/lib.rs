//! Canvas engine for the shape sketchpad.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the drawing surface: translating raw DOM input events
//! into shape mutations, maintaining camera state for pan/zoom, hit-testing
//! shapes, rendering the scene, and exporting it as PNG. The host layer only
//! wires DOM events to the engine and reacts to the returned
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | In-memory shape store and shape geometry |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Tools, buttons, and the gesture state machine |
//! | [`hit`] | Hit-testing against shapes |
//! | [`render`] | Scene rendering to a 2D context |
//! | [`export`] | PNG encoding of the rendered canvas |
//! | [`config`] | Variant presets and host overrides |
//! | [`color`] | Hex color parsing |
//! | [`consts`] | Shared numeric constants (zoom limits, star geometry, etc.) |

pub mod camera;
pub mod color;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod export;
pub mod hit;
pub mod input;
pub mod render;
