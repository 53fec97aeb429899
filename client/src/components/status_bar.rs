//! Bottom status bar showing the shape count and the active mode hint.

use leptos::prelude::*;

use canvas::config::{CanvasConfig, Variant};

use crate::state::canvas_view::CanvasViewState;
use crate::state::ui::UiState;
use crate::util::status::{mode_hint, object_count_label};

/// Status bar below the canvas.
#[component]
pub fn StatusBar() -> impl IntoView {
    let config = expect_context::<CanvasConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();
    let variant = config.variant;

    let object_count = move || object_count_label(canvas_view.get().shape_count);
    let hint = move || mode_hint(variant, ui.get().active_tool);

    view! {
        <div class="status-bar">
            {(variant == Variant::Current).then(move || view! {
                <span class="status-bar__item">{object_count}</span>
            })}
            <span class="status-bar__item status-bar__hint">{hint}</span>
        </div>
    }
}
