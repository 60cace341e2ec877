/// Convert an image file to a text file next to it
///
/// Usage: cargo run --example convert_file -- photo.png --scale-y 0.5 --ramp 70
use ascii_aig::config::check_scale;
use ascii_aig::{CharacterRamp, ConversionConfig, Interpolation, Rounding, process_file};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Built-in character ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Ramp {
    #[default]
    #[value(name = "10")]
    Depth10,
    #[value(name = "70")]
    Depth70,
}

impl From<Ramp> for CharacterRamp {
    fn from(r: Ramp) -> Self {
        match r {
            Ramp::Depth10 => CharacterRamp::DEPTH_10,
            Ramp::Depth70 => CharacterRamp::DEPTH_70,
        }
    }
}

/// Quantizer rounding policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum RoundingArg {
    Ceil,
    #[default]
    Round,
    Floor,
}

impl From<RoundingArg> for Rounding {
    fn from(r: RoundingArg) -> Self {
        match r {
            RoundingArg::Ceil => Rounding::Ceil,
            RoundingArg::Round => Rounding::Round,
            RoundingArg::Floor => Rounding::Floor,
        }
    }
}

/// Resampling filter used for scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum InterpolationArg {
    Bicubic,
    #[default]
    Bilinear,
    Nearest,
}

impl From<InterpolationArg> for Interpolation {
    fn from(i: InterpolationArg) -> Self {
        match i {
            InterpolationArg::Bicubic => Interpolation::Bicubic,
            InterpolationArg::Bilinear => Interpolation::Bilinear,
            InterpolationArg::Nearest => Interpolation::NearestNeighbor,
        }
    }
}

fn parse_scale(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("{}: {}", s, e))?;
    check_scale(value)
}

/// Convert an image to ASCII art, one character per pixel.
#[derive(Debug, Parser)]
#[command(name = "convert_file")]
struct Args {
    /// Image file to convert
    input: PathBuf,

    /// Horizontal scaling factor (0.05 - 5.0)
    #[arg(long, default_value = "1.0", value_parser = parse_scale)]
    scale_x: f32,

    /// Vertical scaling factor (0.05 - 5.0)
    #[arg(long, default_value = "1.0", value_parser = parse_scale)]
    scale_y: f32,

    /// Built-in character ramp
    #[arg(long, default_value = "10")]
    ramp: Ramp,

    /// Custom character ramp, densest character first (overrides --ramp)
    #[arg(long)]
    custom_ramp: Option<String>,

    /// Quantizer rounding policy
    #[arg(long, default_value = "round")]
    rounding: RoundingArg,

    /// Resampling filter used for scaling
    #[arg(long, default_value = "bilinear")]
    interpolation: InterpolationArg,
}

impl Args {
    fn config(&self) -> ascii_aig::Result<ConversionConfig> {
        let ramp = match &self.custom_ramp {
            Some(chars) => CharacterRamp::new(chars)?,
            None => self.ramp.into(),
        };
        Ok(ConversionConfig {
            scale_x: self.scale_x,
            scale_y: self.scale_y,
            interpolation: self.interpolation.into(),
            rounding: self.rounding.into(),
            ramp,
        })
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let result = args
        .config()
        .and_then(|config| process_file(&args.input, &config));

    match result {
        Ok(output) => println!("✓ Saved ASCII art to: {}", output.display()),
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}
