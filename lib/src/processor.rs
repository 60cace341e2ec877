use crate::config::ConversionConfig;
use crate::converter::{AsciiImage, convert};
use crate::error::{AsciiError, Result};
use crate::loader::{load_image, scale_image};
use crate::output::{output_path, write_lines};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Scales an image and converts it to ASCII art
///
/// This is the in-memory pipeline:
/// 1. Validate the configuration
/// 2. Scale the image with the configured factors and interpolation
/// 3. Convert every pixel to a ramp character
///
/// # Arguments
/// * `input` - The decoded RGBA image
/// * `config` - Conversion parameters
///
/// # Returns
/// `Ok(None)` if the scaled image has no pixels
pub fn process_image(input: &RgbaImage, config: &ConversionConfig) -> Result<Option<AsciiImage>> {
    config.validate().map_err(AsciiError::InvalidConfig)?;

    let scaled = scale_image(input, config.scale_x, config.scale_y, config.interpolation);
    convert(Some(&scaled), &config.ramp, config.rounding)
}

/// Converts an image file to a text file next to it
///
/// The text file gets the image's name with a `.txt` extension, numbered if
/// such a file already exists.
///
/// # Returns
/// The path of the written text file
///
/// # Errors
/// [`AsciiError::NothingToConvert`] if the scaled image is empty, otherwise
/// whatever loading, conversion or writing reports.
pub fn process_file(input: &Path, config: &ConversionConfig) -> Result<PathBuf> {
    config.validate().map_err(AsciiError::InvalidConfig)?;

    let image = load_image(input, config)?;
    let ascii = convert(Some(&image), &config.ramp, config.rounding)?
        .ok_or(AsciiError::NothingToConvert)?;

    let output = output_path(input);
    write_lines(ascii.lines(), &output)?;
    Ok(output)
}
