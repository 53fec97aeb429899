//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns geometry, gestures and drawing. This host mounts the
//! engine, forwards DOM pointer events, applies toolbar commands, and
//! publishes a `CanvasViewState` snapshot after every batch of engine actions.

use leptos::prelude::*;

use canvas::config::{CanvasConfig, ViewportMode};

use crate::state::canvas_view::CanvasViewState;
#[cfg(feature = "csr")]
use crate::state::ui::{CanvasCommand, UiState};
#[cfg(feature = "csr")]
use crate::util::canvas_input::{map_button, mouse_point, pointer_point};
#[cfg(feature = "csr")]
use crate::util::download::download_bytes;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use canvas::consts::{EXPORT_FILE_NAME, EXPORT_MIME};
#[cfg(feature = "csr")]
use canvas::engine::{Action, Engine};

#[cfg(feature = "csr")]
fn render_engine(engine: &Engine) {
    if let Err(e) = engine.render() {
        log::warn!("render failed: {e:?}");
    }
}

/// Push the canvas size and device pixel ratio to the engine.
///
/// Fixed viewports keep their configured size; fill viewports track the
/// element's CSS box, which follows its container.
#[cfg(feature = "csr")]
fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>, viewport: ViewportMode) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let dpr = window.device_pixel_ratio().max(1.0);
    match viewport {
        ViewportMode::Fixed { width, height } => engine.set_viewport(f64::from(width), f64::from(height), dpr),
        ViewportMode::Fill => {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let width = f64::from(canvas.client_width()).max(1.0);
            let height = f64::from(canvas.client_height()).max(1.0);
            engine.set_viewport(width, height, dpr);
        }
    }
}

#[cfg(feature = "csr")]
fn process_actions(actions: Vec<Action>, engine: &Engine, canvas_view: RwSignal<CanvasViewState>) {
    let mut should_render = false;
    for action in actions {
        match action {
            Action::RenderNeeded => should_render = true,
            Action::ShapeCreated(shape) => {
                log::debug!("created {} {} with fill {}", shape.kind.name(), shape.id, shape.color);
            }
            Action::ShapeDeleted { id } => log::debug!("removed shape {id}"),
            Action::ShapeMoved { .. }
            | Action::Cleared
            | Action::SelectionChanged(_)
            | Action::CameraChanged(_)
            | Action::SetCursor(_) => {}
        }
    }

    let next = CanvasViewState::from_core(&engine.core);
    if canvas_view.get_untracked() != next {
        canvas_view.set(next);
    }
    if should_render {
        render_engine(engine);
    }
}

#[cfg(feature = "csr")]
fn export_canvas(engine: &Engine) {
    render_engine(engine);
    match engine.export_png() {
        Ok(bytes) => {
            if let Err(e) = download_bytes(&bytes, EXPORT_MIME, EXPORT_FILE_NAME) {
                log::warn!("download failed: {e:?}");
            }
        }
        Err(e) => log::warn!("export failed: {e}"),
    }
}

#[cfg(feature = "csr")]
fn apply_command(engine: &mut Engine, command: CanvasCommand) -> Vec<Action> {
    match command {
        CanvasCommand::ZoomIn => engine.zoom_in(),
        CanvasCommand::ZoomOut => engine.zoom_out(),
        CanvasCommand::SetZoomPercent(percent) => engine.set_zoom_percent(percent),
        CanvasCommand::ResetView => engine.reset_view(),
        CanvasCommand::DeleteSelected => engine.delete_selected(),
        CanvasCommand::Clear => engine.clear(),
        CanvasCommand::ExportPng => {
            export_canvas(engine);
            Vec::new()
        }
    }
}

/// Canvas host component.
///
/// On mount, this creates `canvas::engine::Engine` for the canvas element and
/// keeps it in sync with the toolbar state.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let config = expect_context::<CanvasConfig>();
    #[cfg(feature = "csr")]
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let viewport = config.viewport;

    #[cfg(feature = "csr")]
    let engine = Rc::new(RefCell::new(None::<Engine>));

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let config = config.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = Engine::new(canvas, config.clone());
            sync_viewport(&mut instance, &canvas_ref, viewport);
            let ui_state = ui.get_untracked();
            instance.set_tool(ui_state.active_tool);
            if let Err(e) = instance.set_color(&ui_state.color) {
                log::warn!("ignoring initial color: {e}");
            }
            canvas_view.set(CanvasViewState::from_core(&instance.core));
            render_engine(&instance);
            log::info!("canvas engine mounted ({:?})", config.variant);
            *engine.borrow_mut() = Some(instance);
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let tool = Memo::new(move |_| ui.with(|u| u.active_tool));
        Effect::new(move || {
            let tool = tool.get();
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let actions = engine.set_tool(tool);
                process_actions(actions, engine, canvas_view);
            }
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let color = Memo::new(move |_| ui.with(|u| u.color.clone()));
        Effect::new(move || {
            let color = color.get();
            if let Some(engine) = engine.borrow_mut().as_mut() {
                if let Err(e) = engine.set_color(&color) {
                    log::warn!("ignoring color: {e}");
                }
            }
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let last_command_seq = RwSignal::new(0_u64);
        Effect::new(move || {
            let (seq, command) = ui.with(|u| (u.command_seq, u.command));
            if seq == last_command_seq.get_untracked() {
                return;
            }
            last_command_seq.set(seq);
            let Some(command) = command else {
                return;
            };
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let actions = apply_command(engine, command);
                process_actions(actions, engine, canvas_view);
            }
        });
    }

    #[cfg(feature = "csr")]
    {
        if viewport == ViewportMode::Fill {
            let engine = Rc::clone(&engine);
            let handle = window_event_listener(leptos::ev::resize, move |_| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    sync_viewport(engine, &canvas_ref, viewport);
                    render_engine(engine);
                }
            });
            on_cleanup(move || handle.remove());
        }
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_down(pointer_point(&ev), map_button(ev.button()));
                    process_actions(actions, engine, canvas_view);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_move(pointer_point(&ev));
                    process_actions(actions, engine, canvas_view);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_up(pointer_point(&ev), map_button(ev.button()));
                    process_actions(actions, engine, canvas_view);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_pointer_leave();
                    process_actions(actions, engine, canvas_view);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_click = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::MouseEvent| {
                if map_button(ev.button()) != canvas::input::Button::Primary {
                    return;
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let actions = engine.on_click(mouse_point(&ev));
                    process_actions(actions, engine, canvas_view);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let size_style = match viewport {
        ViewportMode::Fixed { width, height } => format!("width: {width}px; height: {height}px;"),
        ViewportMode::Fill => "width: 100%; height: 100%;".to_owned(),
    };
    let canvas_style = move || format!("{size_style} cursor: {};", canvas_view.get().cursor);

    view! {
        <div class="canvas-frame" class:canvas-frame--fill=viewport == ViewportMode::Fill>
            <canvas
                class="canvas-host"
                node_ref=canvas_ref
                style=canvas_style
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
                on:click=on_click
            >
                "Your browser does not support canvas."
            </canvas>
        </div>
    }
}
