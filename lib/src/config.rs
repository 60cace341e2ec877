use crate::quantize::Rounding;
use crate::ramp::CharacterRamp;
use image::imageops::FilterType;
use std::fmt;

/// Smallest accepted scaling factor (5%)
pub const MIN_SCALE: f32 = 0.05;

/// Largest accepted scaling factor (500%)
pub const MAX_SCALE: f32 = 5.0;

/// Checks a single scaling factor against `[MIN_SCALE, MAX_SCALE]`
pub fn check_scale(value: f32) -> Result<f32, String> {
    if value.is_finite() && (MIN_SCALE..=MAX_SCALE).contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "scaling factor must be between {} and {}, got {}",
            MIN_SCALE, MAX_SCALE, value
        ))
    }
}

/// Interpolation used when scaling the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    Bicubic,
    #[default]
    Bilinear,
    NearestNeighbor,
}

impl Interpolation {
    pub const ALL: [Interpolation; 3] = [
        Interpolation::Bicubic,
        Interpolation::Bilinear,
        Interpolation::NearestNeighbor,
    ];

    /// The matching resampling filter of the `image` crate
    pub fn filter_type(self) -> FilterType {
        match self {
            Interpolation::Bicubic => FilterType::CatmullRom,
            Interpolation::Bilinear => FilterType::Triangle,
            Interpolation::NearestNeighbor => FilterType::Nearest,
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Interpolation::Bicubic => "Bicubic",
            Interpolation::Bilinear => "Bilinear",
            Interpolation::NearestNeighbor => "Nearest neighbor",
        };
        f.write_str(name)
    }
}

/// Configuration for image to ASCII conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Scaling
    pub scale_x: f32,                   // 0.05-5.0, default 1.0
    pub scale_y: f32,                   // 0.05-5.0, default 1.0
    pub interpolation: Interpolation,   // default Bilinear

    /// Character mapping
    pub rounding: Rounding,             // default Round
    pub ramp: CharacterRamp,            // default DEPTH_10
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            // Scaling
            scale_x: 1.0,
            scale_y: 1.0,
            interpolation: Interpolation::default(),

            // Character mapping
            rounding: Rounding::default(),
            ramp: CharacterRamp::default(),
        }
    }
}

impl ConversionConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [("scale_x", self.scale_x), ("scale_y", self.scale_y)] {
            check_scale(value).map_err(|e| format!("{}: {}", name, e))?;
        }
        Ok(())
    }

    /// Sets the horizontal factor back to 100%
    pub fn reset_scale_x(&mut self) {
        self.scale_x = 1.0;
    }

    /// Sets the vertical factor back to 100%
    pub fn reset_scale_y(&mut self) {
        self.scale_y = 1.0;
    }

    /// Sets the vertical factor to half the horizontal one, in whole percent
    ///
    /// Characters are roughly twice as tall as wide, so this keeps the
    /// aspect ratio of the source image in the text.
    pub fn half_height(&mut self) {
        let width_percent = (self.scale_x * 100.0).round();
        let height_percent = (width_percent / 2.0).round();
        self.scale_y = (height_percent / 100.0).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Sets the vertical factor equal to the horizontal one
    pub fn proportional(&mut self) {
        self.scale_y = self.scale_x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ConversionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.interpolation, Interpolation::Bilinear);
        assert_eq!(config.rounding, Rounding::Round);
        assert_eq!(config.ramp, CharacterRamp::DEPTH_10);
    }

    #[test]
    fn test_invalid_scale_x() {
        let mut config = ConversionConfig::default();
        config.scale_x = 0.0;
        assert!(config.validate().is_err());

        config.scale_x = -0.5;
        assert!(config.validate().is_err());

        config.scale_x = 5.01;
        assert!(config.validate().is_err());

        config.scale_x = 0.04;
        assert!(config.validate().is_err());

        config.scale_x = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_scale_y() {
        let mut config = ConversionConfig::default();
        config.scale_y = f32::INFINITY;
        let err = config.validate().unwrap_err();
        assert!(err.contains("scale_y"));
    }

    #[test]
    fn test_scale_bounds_inclusive() {
        let config = ConversionConfig {
            scale_x: MAX_SCALE,
            scale_y: MIN_SCALE,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_check_scale() {
        assert_eq!(check_scale(0.05), Ok(0.05));
        assert_eq!(check_scale(5.0), Ok(5.0));
        assert!(check_scale(0.0).is_err());
        assert!(check_scale(6.0).is_err());
        assert!(check_scale(f32::NAN).is_err());
    }

    #[test]
    fn test_reset_scales() {
        let mut config = ConversionConfig {
            scale_x: 2.5,
            scale_y: 0.3,
            ..Default::default()
        };
        config.reset_scale_x();
        assert_eq!(config.scale_x, 1.0);
        assert_eq!(config.scale_y, 0.3);

        config.reset_scale_y();
        assert_eq!(config.scale_y, 1.0);
    }

    #[test]
    fn test_half_height() {
        let mut config = ConversionConfig::default();
        config.half_height();
        assert_eq!(config.scale_y, 0.5);

        // 75% -> 37.5% rounds up to 38%
        config.scale_x = 0.75;
        config.half_height();
        assert!((config.scale_y - 0.38).abs() < 1e-6);

        // 5% -> 3% is below the minimum
        config.scale_x = MIN_SCALE;
        config.half_height();
        assert_eq!(config.scale_y, MIN_SCALE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_proportional() {
        let mut config = ConversionConfig {
            scale_x: 1.7,
            ..Default::default()
        };
        config.proportional();
        assert_eq!(config.scale_y, 1.7);
    }

    #[test]
    fn test_filter_types() {
        assert_eq!(Interpolation::Bicubic.filter_type(), FilterType::CatmullRom);
        assert_eq!(Interpolation::Bilinear.filter_type(), FilterType::Triangle);
        assert_eq!(Interpolation::NearestNeighbor.filter_type(), FilterType::Nearest);
    }
}
