use std::io;

/// Errors produced while converting, loading or writing ASCII images.
///
/// The first four variants are contract violations between the conversion
/// stages. Degenerate input (an empty image) is not an error; it is reported
/// as `Ok(None)` by the converter.
#[derive(thiserror::Error, Debug)]
pub enum AsciiError {
    /// A character ramp must contain at least one character.
    #[error("Character ramp is empty")]
    EmptyRamp,

    /// The quantizer was asked to map from an empty input range.
    #[error("Quantizer input range must be greater than zero")]
    ZeroInputRange,

    /// The quantizer was asked to map onto an empty output range.
    #[error("Quantizer output range must be greater than zero")]
    ZeroOutputRange,

    /// A ramp lookup outside of `[0, len)`.
    #[error("Ramp index {index} is out of range for a ramp of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The conversion configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The (scaled) image has no pixels.
    #[error("Image has no pixels to convert")]
    NothingToConvert,

    /// Decoding or encoding through the `image` crate failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AsciiError>;
