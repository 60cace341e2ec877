use crate::error::Result;
use crate::grayscale::{MAX_COMPONENT, pack_rgb, to_grayscale};
use crate::quantize::{Rounding, quantize};
use crate::ramp::CharacterRamp;
use image::{GenericImageView, Pixel};
use rayon::prelude::*;
use std::fmt;

/// Text rendition of an image: one line per pixel row, one character per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiImage {
    width: u32,
    lines: Vec<String>,
}

impl AsciiImage {
    /// Number of characters per line
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of lines
    pub fn height(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Lines in row order, without line terminators
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the image, returning its rows
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Joins the lines with `\n`, without a trailing newline
impl fmt::Display for AsciiImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Converts a single pixel to its ramp character
///
/// # Arguments
/// * `sample` - Packed `0xAARRGGBB` color, alpha is ignored
/// * `ramp` - Character ramp, densest first
/// * `rounding` - Rounding policy of the quantizer
pub fn pixel_to_char(sample: u32, ramp: &CharacterRamp, rounding: Rounding) -> Result<char> {
    let gray = to_grayscale(sample);
    let index = quantize(u32::from(gray), MAX_COMPONENT, ramp.len(), rounding)?;
    ramp.char_at(index)
}

/// Converts an image to ASCII art
///
/// Every pixel is mapped through the gamma-correct gray intensity, quantized
/// onto the ramp and replaced by the ramp character. Line `y` holds the
/// characters of pixel row `y` from left to right. Rows are converted in
/// parallel.
///
/// # Arguments
/// * `image` - Decoded and already scaled image, `None` if there is none
/// * `ramp` - Character ramp, densest first
/// * `rounding` - Rounding policy of the quantizer
///
/// # Returns
/// `Ok(None)` if there is no image or it has no pixels, otherwise exactly
/// `height` lines of exactly `width` characters.
///
/// # Errors
/// Fails as a whole if any stage reports a contract violation; partial
/// results are never returned.
pub fn convert<I>(
    image: Option<&I>,
    ramp: &CharacterRamp,
    rounding: Rounding,
) -> Result<Option<AsciiImage>>
where
    I: GenericImageView + Sync,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let Some(image) = image else {
        return Ok(None);
    };
    let (width, height) = image.dimensions();
    if width < 1 || height < 1 {
        return Ok(None);
    }

    log::debug!(
        "Converting {}x{} image with a {} character ramp ({} rounding)",
        width,
        height,
        ramp.len(),
        rounding
    );

    let lines = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| {
                    let rgb = image.get_pixel(x, y).to_rgb();
                    pixel_to_char(pack_rgb(rgb[0], rgb[1], rgb[2]), ramp, rounding)
                })
                .collect::<Result<String>>()
        })
        .collect::<Result<Vec<String>>>()?;

    Ok(Some(AsciiImage { width, lines }))
}

/// [`convert`] with the ten character ramp and round-to-nearest
pub fn convert_with_defaults<I>(image: Option<&I>) -> Result<Option<AsciiImage>>
where
    I: GenericImageView + Sync,
    I::Pixel: Pixel<Subpixel = u8>,
{
    convert(image, &CharacterRamp::default(), Rounding::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            let v = ((x * 31 + y * 17) % 256) as u8;
            Rgba([v, v.wrapping_mul(3), 255 - v, 255])
        })
    }

    #[test]
    fn test_absent_image() {
        let result = convert_with_defaults::<RgbaImage>(None).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_empty_images() {
        for (w, h) in [(0, 0), (0, 5), (5, 0)] {
            let img = RgbaImage::new(w, h);
            assert!(convert_with_defaults(Some(&img)).unwrap().is_none());
        }
    }

    #[test]
    fn test_single_pixel() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        let ascii = convert_with_defaults(Some(&img)).unwrap().unwrap();
        assert_eq!(ascii.lines(), &["@".to_string()]);
    }

    #[test]
    fn test_white_then_black() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 255]));

        let ascii = convert_with_defaults(Some(&img)).unwrap().unwrap();
        assert_eq!(ascii.lines(), &[" @".to_string()]);
    }

    #[test]
    fn test_black_then_white() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));

        let ascii = convert_with_defaults(Some(&img)).unwrap().unwrap();
        assert_eq!(ascii.to_string(), "@ ");
    }

    #[test]
    fn test_custom_ramp() {
        let ramp = CharacterRamp::new("AB").unwrap();
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));

        let ascii = convert(Some(&img), &ramp, Rounding::Round).unwrap().unwrap();
        assert_eq!(ascii.lines(), &["AB".to_string()]);
    }

    #[test]
    fn test_shape_is_preserved() {
        for (w, h) in [(1, 7), (7, 1), (13, 9), (64, 3)] {
            let img = gradient(w, h);
            for ramp in [CharacterRamp::DEPTH_10, CharacterRamp::DEPTH_70] {
                let ascii = convert(Some(&img), &ramp, Rounding::Floor).unwrap().unwrap();
                assert_eq!(ascii.width(), w);
                assert_eq!(ascii.height(), h);
                assert_eq!(ascii.lines().len(), h as usize);
                for line in ascii.lines() {
                    assert_eq!(line.chars().count(), w as usize);
                }
            }
        }
    }

    #[test]
    fn test_row_major_order() {
        // Black left column, white everything else
        let img = RgbaImage::from_fn(3, 4, |x, y| {
            if x == 0 || y == 3 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });

        let ascii = convert_with_defaults(Some(&img)).unwrap().unwrap();
        assert_eq!(ascii.lines(), &["@  ", "@  ", "@  ", "@@@"]);
    }

    #[test]
    fn test_matches_per_pixel_conversion() {
        let img = gradient(17, 11);
        let ramp = CharacterRamp::DEPTH_70;
        let ascii = convert(Some(&img), &ramp, Rounding::Ceil).unwrap().unwrap();

        for (y, line) in ascii.lines().iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let p = img.get_pixel(x as u32, y as u32);
                let expected =
                    pixel_to_char(pack_rgb(p[0], p[1], p[2]), &ramp, Rounding::Ceil).unwrap();
                assert_eq!(ch, expected);
            }
        }
    }

    #[test]
    fn test_alpha_ignored() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        let ascii = convert_with_defaults(Some(&img)).unwrap().unwrap();
        assert_eq!(ascii.to_string(), "@@\n@@");
    }

    #[test]
    fn test_dynamic_image_input() {
        let img = DynamicImage::ImageRgba8(gradient(5, 4));
        let ascii = convert_with_defaults(Some(&img)).unwrap().unwrap();
        assert_eq!((ascii.width(), ascii.height()), (5, 4));
    }

    #[test]
    fn test_single_char_ramp() {
        let ramp = CharacterRamp::new("#").unwrap();
        let ascii = convert(Some(&gradient(4, 2)), &ramp, Rounding::Ceil)
            .unwrap()
            .unwrap();
        assert_eq!(ascii.into_lines(), vec!["####", "####"]);
    }
}
