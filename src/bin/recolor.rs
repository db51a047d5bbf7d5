//! Recolor an image with `k` colors learned by k-means
//!
//! Usage: `recolor [image] [k] [seed]` (defaults: Bedroom.png, k = 8, seed = 0)
//!
//! The result is written to `Result-{k}.png`.

use genkmeans_rs::{KMeansConfig, Recolor};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 4 {
        eprintln!("Usage: {} [image] [k] [seed]", args[0]);
        std::process::exit(1);
    }

    let image_path = args.get(1).map(String::as_str).unwrap_or("Bedroom.png");
    let k: usize = args.get(2).map(|s| s.parse::<usize>()).transpose()?.unwrap_or(8);
    let seed: u64 = args.get(3).map(|s| s.parse::<u64>()).transpose()?.unwrap_or(0);

    let input = image::open(image_path)?.to_rgb8();
    let (width, height) = input.dimensions();
    eprintln!("Loaded {}: {}x{} pixels", image_path, width, height);

    let config = KMeansConfig::new(k).with_seed(seed).with_verbose(true);
    let filter = Recolor::from_raw(width, height, input.as_raw(), 3, config)?;

    let palette: Vec<String> = filter.palette().iter().map(|c| c.to_string()).collect();
    eprintln!("Palette: {}", palette.join(" "));

    let rendered = filter.render();
    let mut output = image::RgbImage::new(width, height);
    for (px, color) in output.pixels_mut().zip(rendered.iter()) {
        *px = image::Rgb([color.red, color.green, color.blue]);
    }

    let output_path = format!("Result-{}.png", k);
    output.save(&output_path)?;
    eprintln!("Saved recolored image to {}", output_path);

    Ok(())
}
