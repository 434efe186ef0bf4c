//! Turning uploaded bytes into a bounded RGB raster.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::imageops::FilterType;
use image::RgbImage;
use tracing::debug;

use crate::config::Limits;
use crate::error::{Error, Result};

/// Decode an encoded image and shrink it so neither side exceeds `limits.max_dimension`.
pub fn decode_image(bytes: &[u8], limits: &Limits) -> Result<RgbImage> {
    if bytes.is_empty() {
        return Err(Error::InvalidInput("No image data provided".into()));
    }
    if bytes.len() > limits.max_upload_bytes {
        return Err(Error::InvalidInput(format!(
            "Image must be under {} MB",
            limits.max_upload_bytes / (1024 * 1024)
        )));
    }

    let image = image::load_from_memory(bytes)?.to_rgb8();
    Ok(downscale(image, limits.max_dimension))
}

/// Resize so the longer side is at most `max_dimension`, keeping the aspect ratio.
pub fn downscale(image: RgbImage, max_dimension: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    let longest = width.max(height);
    if longest <= max_dimension {
        return image;
    }

    let scale = max_dimension as f64 / longest as f64;
    let new_width = ((width as f64 * scale) as u32).max(1);
    let new_height = ((height as f64 * scale) as u32).max(1);
    debug!(width, height, new_width, new_height, "downscaling input image");

    image::imageops::resize(&image, new_width, new_height, FilterType::Triangle)
}

/// Decode base64 image data, with or without a `data:...;base64,` prefix.
pub fn decode_data_uri(data: &str) -> Result<Vec<u8>> {
    let payload = match data.split_once(',') {
        Some((_, payload)) => payload,
        None => data,
    };
    let payload = payload.trim();
    if payload.is_empty() {
        return Err(Error::InvalidInput("No image data provided".into()));
    }
    STANDARD
        .decode(payload)
        .map_err(|_| Error::InvalidInput("Invalid base64 image data".into()))
}
