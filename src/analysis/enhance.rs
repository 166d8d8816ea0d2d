//! Grayscale conversion and contrast enhancement ahead of binarization

use crate::io::configuration::{CONTRAST_PIVOT, DESCRIPTION_CONTRAST_FACTOR, DESCRIPTION_LOG_CHARS};
use image::{DynamicImage, GrayImage, Luma};
use tracing::{debug, info};

/// Reduce any image to single-channel luminance
pub fn to_grayscale(image: &DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        other => other.to_luma8(),
    }
}

/// Scale each pixel's deviation from mid-gray by `factor`, clamped to `[0, 255]`
pub fn stretch_contrast(gray: &GrayImage, factor: f32) -> GrayImage {
    debug!(
        width = gray.width(),
        height = gray.height(),
        factor,
        "Stretching contrast"
    );
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let value = f32::from(gray.get_pixel(x, y).0[0]);
        let stretched = (value - CONTRAST_PIVOT).mul_add(factor, CONTRAST_PIVOT);
        Luma([stretched.round().clamp(0.0, 255.0) as u8])
    })
}

/// Contrast boost implied by a free-text content description
///
/// Only the presence of a non-empty description matters. The text itself is
/// echoed to the log (truncated) and never inspected.
pub fn description_boost(description: Option<&str>) -> Option<f32> {
    let text = description.map(str::trim).filter(|text| !text.is_empty())?;
    info!(
        description = %truncate_chars(text, DESCRIPTION_LOG_CHARS),
        "Content description supplied"
    );
    Some(DESCRIPTION_CONTRAST_FACTOR)
}

/// Truncate to at most `max_chars` characters, appending an ellipsis when cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", text.get(..byte_index).unwrap_or(text)),
        None => text.to_string(),
    }
}
