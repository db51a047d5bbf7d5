//! Color quantization on top of [`Clustering`].
//!
//! Distinct pixel colors are clustered in RGB space and every pixel is then
//! repainted with the label of its cluster.

use crate::config::KMeansConfig;
use crate::error::KMeansError;
use crate::kmeans::Clustering;
use crate::strategy::Strategy;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fmt;

/// Round to the nearest integer (ties to even) and clamp into `0..=255`
pub fn clamp(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

/// An immutable RGB color
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Color from unbounded channel values, each clamped into `0..=255`
    pub fn clamped(red: f64, green: f64, blue: f64) -> Self {
        Self::new(clamp(red), clamp(green), clamp(blue))
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Euclidean distance in RGB space with a rounded, clamped channel mean
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ColorMetric;

impl Strategy<Rgb> for ColorMetric {
    fn distance(&self, a: &Rgb, b: &Rgb) -> f64 {
        let dr = a.red as f64 - b.red as f64;
        let dg = a.green as f64 - b.green as f64;
        let db = a.blue as f64 - b.blue as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    fn mean(&self, colors: &[Rgb]) -> Rgb {
        let (r, g, b) = colors.iter().fold((0u64, 0u64, 0u64), |(r, g, b), c| {
            (r + c.red as u64, g + c.green as u64, b + c.blue as u64)
        });
        let n = colors.len() as f64;
        Rgb::clamped(r as f64 / n, g as f64 / n, b as f64 / n)
    }
}

/// Recolors an image using `k` representative colors.
///
/// Pixels are stored row-major. The palette is learned from the set of
/// distinct colors, so a color covering most of the image weighs the same as
/// one appearing in a single pixel.
pub struct Recolor {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
    clustering: Clustering<Rgb, ColorMetric>,
}

impl Recolor {
    /// Build a recoloring filter for a `width` x `height` image.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if `pixels` does not hold exactly
    /// `width * height` colors, and `InvalidArgument` if the image has fewer
    /// than `config.k` distinct colors.
    pub fn new(
        width: u32,
        height: u32,
        pixels: Vec<Rgb>,
        config: KMeansConfig,
    ) -> Result<Self, KMeansError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} pixels for a {}x{} image, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }

        // BTreeSet keeps the color order stable, so a seed reproduces the palette
        let colors: Vec<Rgb> = pixels
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        log::info!(
            "recoloring {}x{} image: {} distinct colors into {}",
            width,
            height,
            colors.len(),
            config.k
        );

        let clustering = Clustering::new(colors, ColorMetric, config)?;

        Ok(Self {
            width,
            height,
            pixels,
            clustering,
        })
    }

    /// Build a filter from interleaved channel bytes.
    ///
    /// Only the first three channels of each pixel are used, so RGBA buffers
    /// work as well as RGB ones.
    pub fn from_raw(
        width: u32,
        height: u32,
        raw: &[u8],
        channels: usize,
        config: KMeansConfig,
    ) -> Result<Self, KMeansError> {
        if channels < 3 {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected at least 3 channels per pixel, got {}",
                channels
            )));
        }

        if raw.len() % channels != 0 {
            return Err(KMeansError::InvalidDimensions(format!(
                "Buffer of {} bytes is not a whole number of {}-channel pixels",
                raw.len(),
                channels
            )));
        }

        let pixels = raw
            .chunks_exact(channels)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();

        Self::new(width, height, pixels, config)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Original color at `(x, y)`, or white outside the image
    pub fn before(&self, x: u32, y: u32) -> Rgb {
        if x < self.width && y < self.height {
            self.pixels[y as usize * self.width as usize + x as usize]
        } else {
            Rgb::WHITE
        }
    }

    /// Recolored pixel at `(x, y)`
    pub fn after(&self, x: u32, y: u32) -> Rgb {
        *self.clustering.classify(&self.before(x, y))
    }

    /// The whole recolored image, row-major
    pub fn render(&self) -> Vec<Rgb> {
        self.pixels
            .par_iter()
            .map(|px| *self.clustering.classify(px))
            .collect()
    }

    /// Colors the image is repainted with
    pub fn palette(&self) -> &[Rgb] {
        self.clustering.labels()
    }

    pub fn clustering(&self) -> &Clustering<Rgb, ColorMetric> {
        &self.clustering
    }
}
