//! ASCII Image Generator - image to ASCII art converter
//!
//! Each pixel is reduced to its gamma-correct gray intensity, quantized onto
//! a character ramp and replaced by that character. Width and height are
//! preserved: the result has one line per pixel row and one character per
//! pixel.
//!
//! # Example
//! ```no_run
//! use ascii_aig::{CharacterRamp, Rounding, convert};
//! use image;
//!
//! let input = image::open("photo.jpg").unwrap().to_rgba8();
//! let ascii = convert(Some(&input), &CharacterRamp::DEPTH_70, Rounding::Round)
//!     .unwrap()
//!     .expect("image has pixels");
//! println!("{}", ascii);
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod grayscale;
pub mod loader;
pub mod output;
pub mod processor;
pub mod quantize;
pub mod ramp;

// Re-export main types for convenience
pub use config::{ConversionConfig, Interpolation};
pub use converter::{AsciiImage, convert, convert_with_defaults};
pub use error::{AsciiError, Result};
pub use grayscale::to_grayscale;
pub use processor::{process_file, process_image};
pub use quantize::{Rounding, quantize};
pub use ramp::CharacterRamp;
