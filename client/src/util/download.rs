//! Save bytes to the user's disk through a temporary object URL.

#![cfg(feature = "csr")]

use wasm_bindgen::{JsCast, JsValue};

/// Trigger a browser download of `bytes` named `file_name`.
///
/// # Errors
///
/// Returns the underlying `JsValue` if any DOM call fails.
pub fn download_bytes(bytes: &[u8], mime: &str, file_name: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)?;

    log::info!("downloaded {file_name} ({} bytes)", bytes.len());
    Ok(())
}
