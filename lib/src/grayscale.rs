//! Gamma-correct grayscale conversion
//!
//! Colors are decoded from sRGB to linear light, weighted with the BT.709
//! luminance coefficients and encoded back to sRGB.

/// Bits per color channel in a packed sample
const BITS_COMPONENT: u32 = 8;

const MASK_R: u32 = 0x00ff_0000;
const MASK_G: u32 = 0x0000_ff00;
const MASK_B: u32 = 0x0000_00ff;

/// Mask extracting the intensity of a packed gray color
pub const MASK_GRAY_VALUE: u32 = MASK_B;

/// Maximum value of a color channel
pub const MAX_COMPONENT: u32 = MASK_B;

/// Packs RGB components into a fully opaque `0xAARRGGBB` sample
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    0xff00_0000
        | (u32::from(r) << (2 * BITS_COMPONENT))
        | (u32::from(g) << BITS_COMPONENT)
        | u32::from(b)
}

/// Splits a packed sample into its components normalized to [0.0, 1.0]
fn normalized_components(sample: u32) -> [f64; 3] {
    let max = f64::from(MAX_COMPONENT);
    [
        f64::from((sample & MASK_R) >> (2 * BITS_COMPONENT)) / max,
        f64::from((sample & MASK_G) >> BITS_COMPONENT) / max,
        f64::from(sample & MASK_B) / max,
    ]
}

/// Removes the sRGB gamma compression from a normalized component
///
/// # Arguments
/// * `c_srgb` - Gamma compressed component in [0.0, 1.0]
///
/// # Returns
/// The component in linear light
pub fn gamma_expansion(c_srgb: f64) -> f64 {
    if c_srgb <= 0.04045 {
        c_srgb / 12.92
    } else {
        ((c_srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies the sRGB gamma compression to a linear value
///
/// Inverse of [`gamma_expansion`].
pub fn gamma_compression(y_linear: f64) -> f64 {
    if y_linear <= 0.0031308 {
        12.92 * y_linear
    } else {
        1.055 * y_linear.powf(1.0 / 2.4) - 0.055
    }
}

/// BT.709 luminance of linear RGB components
pub fn linear_luminance(r_linear: f64, g_linear: f64, b_linear: f64) -> f64 {
    0.2126 * r_linear + 0.7152 * g_linear + 0.0722 * b_linear
}

/// Converts a packed color sample to its gray intensity
///
/// The pipeline is:
/// 1. normalize the R, G, B components
/// 2. gamma expansion to linear light
/// 3. BT.709 weighted luminance
/// 4. gamma compression back to sRGB
/// 5. scale to 0-255 and round
///
/// Alpha (bits 24-31) is ignored.
pub fn to_grayscale(sample: u32) -> u8 {
    let [r, g, b] = normalized_components(sample).map(gamma_expansion);
    let y_srgb = gamma_compression(linear_luminance(r, g, b));
    ((y_srgb * f64::from(MAX_COMPONENT)).round() as u32 & MASK_GRAY_VALUE) as u8
}

/// Converts a packed color sample to a fully opaque packed gray color
pub fn to_gray_color(sample: u32) -> u32 {
    let gray = to_grayscale(sample);
    pack_rgb(gray, gray, gray)
}
