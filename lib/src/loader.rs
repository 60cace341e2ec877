//! Image decoding and scaling
//!
//! The converter only sees decoded buffers; this module turns a file into
//! one, at the size the user asked for.

use crate::config::{ConversionConfig, Interpolation};
use crate::error::Result;
use image::{RgbaImage, imageops};
use std::path::Path;

/// File extensions offered when picking a source image
pub const IMAGE_EXTENSIONS: [&str; 8] = ["bmp", "gif", "jpg", "jpeg", "png", "tiff", "tif", "webp"];

/// Target dimensions after scaling
///
/// Each side is rounded to the nearest pixel. A non-empty side never
/// collapses to zero as long as its factor is positive.
pub fn scaled_dimensions(width: u32, height: u32, scale_x: f32, scale_y: f32) -> (u32, u32) {
    let scale = |size: u32, factor: f32| -> u32 {
        if size == 0 || factor <= 0.0 || !factor.is_finite() {
            return 0;
        }
        ((f64::from(size) * f64::from(factor)).round() as u32).max(1)
    };
    (scale(width, scale_x), scale(height, scale_y))
}

/// Scales an image by independent horizontal and vertical factors
///
/// # Arguments
/// * `input` - The image to scale
/// * `scale_x` - Horizontal factor
/// * `scale_y` - Vertical factor
/// * `interpolation` - Resampling filter
///
/// # Returns
/// The scaled image. An unchanged size returns a copy of the input; a
/// degenerate size returns an empty image.
pub fn scale_image(
    input: &RgbaImage,
    scale_x: f32,
    scale_y: f32,
    interpolation: Interpolation,
) -> RgbaImage {
    let (width, height) = input.dimensions();
    let (target_width, target_height) = scaled_dimensions(width, height, scale_x, scale_y);

    if target_width == width && target_height == height {
        return input.clone();
    }
    if target_width == 0 || target_height == 0 {
        log::warn!(
            "Scaling {}x{} by ({}, {}) leaves no pixels",
            width,
            height,
            scale_x,
            scale_y
        );
        return RgbaImage::new(0, 0);
    }

    log::debug!(
        "Scaling {}x{} to {}x{} ({})",
        width,
        height,
        target_width,
        target_height,
        interpolation
    );
    imageops::resize(
        input,
        target_width,
        target_height,
        interpolation.filter_type(),
    )
}

/// Decodes an image file and scales it per the configuration
///
/// # Errors
/// [`crate::AsciiError::Image`] if the file cannot be read or decoded.
pub fn load_image(path: &Path, config: &ConversionConfig) -> Result<RgbaImage> {
    let rgba = image::open(path)?.to_rgba8();
    log::info!(
        "Loaded {} ({}x{})",
        path.display(),
        rgba.width(),
        rgba.height()
    );
    Ok(scale_image(
        &rgba,
        config.scale_x,
        config.scale_y,
        config.interpolation,
    ))
}
