//! Resolve the canvas configuration from what the page provides.
//!
//! Two inputs are consulted: a JSON overlay in the mount element's
//! `data-config` attribute and the `?variant=` query parameter. The query
//! parameter wins over a `variant` key in the overlay.

#[cfg(test)]
#[path = "config_source_test.rs"]
mod config_source_test;

use canvas::config::{CanvasConfig, ConfigError, Variant};

/// Element whose `data-config` attribute carries the JSON overlay.
pub const CONFIG_HOST_ID: &str = "sketchpad-config";

/// Build the configuration from an optional query variant and JSON overlay.
///
/// # Errors
///
/// Fails on an unknown variant, malformed overlay JSON, or an invalid value
/// inside the overlay.
pub fn resolve_config(query_variant: Option<&str>, data_config: Option<&str>) -> Result<CanvasConfig, ConfigError> {
    let overlay = data_config.map(str::trim).filter(|raw| !raw.is_empty()).unwrap_or("{}");
    let mut value: serde_json::Value = serde_json::from_str(overlay)?;

    if let Some(name) = query_variant.map(str::trim).filter(|name| !name.is_empty()) {
        let variant = Variant::parse(name)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("variant".to_owned(), serde_json::to_value(variant)?);
        }
    }

    CanvasConfig::from_json(&value.to_string())
}

/// Read `data-config` from the page, if present.
#[cfg(feature = "csr")]
pub fn read_data_config() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_HOST_ID))
        .and_then(|el| el.get_attribute("data-config"))
}
