/// Basic example: Convert a simple test image to ASCII art
///
/// This creates a test image with a shaded circle and prints it with both
/// built-in character ramps
use ascii_aig::{CharacterRamp, Rounding, convert};
use image::{Rgba, RgbaImage};

fn main() {
    println!("ASCII Image Generator - Basic Example");
    println!("=====================================\n");

    // Create a 64x32 test image; characters are about twice as tall as wide
    let width = 64;
    let height = 32;
    let mut img = RgbaImage::new(width, height);

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 14.0;

    for y in 0..height {
        for x in 0..width {
            let dx = (x as f32 - center_x) / 2.0;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                // Bright in the middle, darker towards the rim
                let v = (255.0 * (1.0 - dist / radius)) as u8;
                img.put_pixel(x, y, Rgba([v, v, v, 255]));
            } else {
                // Red background
                img.put_pixel(x, y, Rgba([180, 30, 30, 255]));
            }
        }
    }

    println!("Created test image: {}x{}\n", width, height);

    for (name, ramp) in [
        ("10 characters", CharacterRamp::DEPTH_10),
        ("70 characters", CharacterRamp::DEPTH_70),
    ] {
        println!("Ramp: {}", name);
        match convert(Some(&img), &ramp, Rounding::Round) {
            Ok(Some(ascii)) => println!("{}\n", ascii),
            Ok(None) => println!("Nothing to convert\n"),
            Err(e) => eprintln!("Conversion failed: {}\n", e),
        }
    }
}
