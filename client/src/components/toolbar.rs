//! Top bar with tool buttons, zoom controls, and canvas-wide actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every control here writes to `UiState`: tool buttons set the active tool,
//! everything else issues a `CanvasCommand` that `CanvasHost` applies.

use leptos::prelude::*;

use canvas::config::CanvasConfig;
use canvas::consts::{ZOOM_PERCENT_MAX, ZOOM_PERCENT_MIN, ZOOM_PERCENT_STEP};

use crate::state::canvas_view::CanvasViewState;
use crate::state::ui::{CanvasCommand, UiState};
use crate::util::status::{clear_label, tool_glyph, tool_title, zoom_label};

/// Toolbar above the canvas.
#[component]
pub fn Toolbar() -> impl IntoView {
    let config = expect_context::<CanvasConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();
    let variant = config.variant;
    let chrome = config.chrome;

    let issue = move |command: CanvasCommand| ui.update(|u| u.issue(command));

    let tool_buttons = config
        .tools
        .iter()
        .copied()
        .map(|tool| {
            let is_active = move || ui.get().active_tool == tool;
            view! {
                <button
                    class="btn toolbar__tool"
                    class:toolbar__tool--active=is_active
                    title=tool_title(variant, tool)
                    on:click=move |_| ui.update(|u| u.active_tool = tool)
                >
                    {tool_glyph(tool)}
                </button>
            }
        })
        .collect_view();

    let color_options = config
        .palette
        .iter()
        .map(|(label, hex)| {
            let label = label.clone();
            let hex = hex.clone();
            view! { <option value=hex>{label}</option> }
        })
        .collect_view();

    let zoom_percent = move || canvas_view.get().zoom_percent();
    let on_slider = move |ev: leptos::ev::Event| {
        if let Ok(percent) = event_target_value(&ev).parse::<f64>() {
            issue(CanvasCommand::SetZoomPercent(percent));
        }
    };

    view! {
        <div class="toolbar">
            <div class="toolbar__group">{tool_buttons}</div>

            <div class="toolbar__group">
                <input
                    class="toolbar__zoom-slider"
                    type="range"
                    min=ZOOM_PERCENT_MIN.to_string()
                    max=ZOOM_PERCENT_MAX.to_string()
                    step=ZOOM_PERCENT_STEP.to_string()
                    prop:value=move || zoom_percent().to_string()
                    on:input=on_slider
                />
                <span class="toolbar__zoom-label">{move || zoom_label(variant, zoom_percent())}</span>
                <button class="btn" title="Zoom In" on:click=move |_| issue(CanvasCommand::ZoomIn)>"+"</button>
                <button class="btn" title="Zoom Out" on:click=move |_| issue(CanvasCommand::ZoomOut)>"−"</button>
                {chrome.reset_button.then(move || view! {
                    <button class="btn" title="Reset View" on:click=move |_| issue(CanvasCommand::ResetView)>"⟲"</button>
                })}
            </div>

            {chrome.color_picker.then(move || view! {
                <label class="toolbar__color">
                    "Color:"
                    <select
                        prop:value=move || ui.get().color
                        on:change=move |ev| {
                            let color = event_target_value(&ev);
                            ui.update(|u| u.color = color);
                        }
                    >
                        {color_options}
                    </select>
                </label>
            })}

            <span class="toolbar__spacer"></span>

            <div class="toolbar__group">
                {chrome.delete_button.then(move || view! {
                    <button
                        class="btn"
                        title="Delete Selected"
                        prop:disabled=move || !canvas_view.get().has_selection()
                        on:click=move |_| issue(CanvasCommand::DeleteSelected)
                    >
                        "Delete"
                    </button>
                })}
                <button class="btn btn--danger" on:click=move |_| issue(CanvasCommand::Clear)>
                    {clear_label(variant)}
                </button>
                {chrome.download_button.then(move || view! {
                    <button class="btn" title="Download" on:click=move |_| issue(CanvasCommand::ExportPng)>
                        "Download"
                    </button>
                })}
            </div>
        </div>
    }
}
