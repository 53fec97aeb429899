//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_query_map;

use canvas::config::{CanvasConfig, Variant};

use crate::components::{canvas_host::CanvasHost, status_bar::StatusBar, toolbar::Toolbar};
use crate::state::{canvas_view::CanvasViewState, ui::UiState};
use crate::util::config_source::resolve_config;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Canvas Drawing App"/>
        <Router>
            <Sketchpad/>
        </Router>
    }
}

/// Resolve configuration and provide all shared state contexts.
#[component]
fn Sketchpad() -> impl IntoView {
    let query = use_query_map();
    let query_variant = query.with_untracked(|q| q.get("variant"));
    let config = load_config(query_variant.as_deref());

    provide_context(RwSignal::new(UiState::new(&config)));
    provide_context(RwSignal::new(CanvasViewState::default()));
    provide_context(config.clone());

    let subtitle = (config.variant == Variant::Current).then_some("Place objects, zoom, and pan around the canvas.");

    view! {
        <main class="app">
            <div class="app__content">
                <h1 class="app__title">"Canvas Drawing App"</h1>
                {subtitle.map(|text| view! { <p class="app__subtitle">{text}</p> })}
                <div class="workspace" class:workspace--current=config.variant == Variant::Current>
                    <Toolbar/>
                    <CanvasHost/>
                    <StatusBar/>
                </div>
            </div>
        </main>
    }
}

fn load_config(query_variant: Option<&str>) -> CanvasConfig {
    #[cfg(feature = "csr")]
    let data_config = crate::util::config_source::read_data_config();
    #[cfg(not(feature = "csr"))]
    let data_config = None::<String>;

    resolve_config(query_variant, data_config.as_deref()).unwrap_or_else(|e| {
        log::warn!("invalid canvas configuration, using defaults: {e}");
        CanvasConfig::default()
    })
}
