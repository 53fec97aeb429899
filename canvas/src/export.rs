//! PNG export of the canvas pixel buffer.
//!
//! The canvas is transparent where nothing was drawn. Exported images are
//! flattened onto opaque white first so they look the same in any viewer.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use image::ImageEncoder;
use image::codecs::png::PngEncoder;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("canvas has no pixels ({width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("pixel buffer is {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    #[error("png encode failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("canvas 2d context unavailable")]
    MissingContext,
    #[error("browser call failed: {0}")]
    Browser(String),
}

/// Blend non-premultiplied RGBA pixels onto opaque white, in place.
pub fn composite_over_white(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let alpha = u16::from(px[3]);
        for channel in &mut px[..3] {
            let blended = (u16::from(*channel) * alpha + 255 * (255 - alpha) + 127) / 255;
            *channel = u8::try_from(blended).unwrap_or(u8::MAX);
        }
        px[3] = u8::MAX;
    }
}

/// Flatten `rgba` onto white and encode it as a PNG.
///
/// # Errors
///
/// Fails if the canvas is empty, the buffer does not hold `width * height`
/// RGBA pixels, or the encoder rejects the image.
pub fn encode_png(width: u32, height: u32, mut rgba: Vec<u8>) -> Result<Vec<u8>, ExportError> {
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyCanvas { width, height });
    }
    let expected = (width as usize) * (height as usize) * 4;
    if rgba.len() != expected {
        return Err(ExportError::BufferSize { expected, actual: rgba.len() });
    }

    composite_over_white(&mut rgba);

    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(&rgba, width, height, image::ExtendedColorType::Rgba8)?;
    log::info!("encoded {width}x{height} png ({} bytes)", out.len());
    Ok(out)
}
