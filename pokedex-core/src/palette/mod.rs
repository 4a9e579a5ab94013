//! Dominant color extraction
//!
//! Derives a theming color from a sprite: the image is downscaled, quantized
//! into at most [`MAX_COLORS`] swatches, and the most populous swatch wins.
//! Every entry point is infallible and returns the caller's fallback when no
//! color can be derived (undecodable bytes, empty or fully transparent
//! images, or only near-black/near-white pixels).

mod quantizer;

use image::{imageops, DynamicImage, RgbaImage};
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::types::Color;

pub use quantizer::{is_filtered, MIN_ALPHA};

/// Images larger than this many pixels are downscaled before quantizing.
pub const MAX_AREA: u32 = 112 * 112;

/// Upper bound on swatches per palette.
pub const MAX_COLORS: usize = 16;

/// A representative color and how many sampled pixels it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub color: Color,
    pub population: u32,
}

/// Swatches extracted from one image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Palette {
    swatches: Vec<Swatch>,
}

impl Palette {
    pub fn from_image(image: &RgbaImage) -> Self {
        let (width, height) = scaled_size(image.width(), image.height());
        let swatches = if (width, height) == image.dimensions() {
            quantizer::quantize(image.pixels().copied(), MAX_COLORS)
        } else {
            let scaled = imageops::thumbnail(image, width, height);
            quantizer::quantize(scaled.pixels().copied(), MAX_COLORS)
        };
        Self { swatches }
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// The swatch with the largest population.
    pub fn dominant_swatch(&self) -> Option<&Swatch> {
        self.swatches.iter().max_by_key(|s| s.population)
    }
}

/// Dimensions after downscaling to at most [`MAX_AREA`], aspect ratio kept.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn scaled_size(width: u32, height: u32) -> (u32, u32) {
    let area = u64::from(width) * u64::from(height);
    if area <= u64::from(MAX_AREA) {
        return (width, height);
    }
    let scale = (f64::from(MAX_AREA) / area as f64).sqrt();
    let shrink = |side: u32| ((f64::from(side) * scale).ceil() as u32).max(1);
    (shrink(width), shrink(height))
}

pub fn dominant_color(image: &DynamicImage, fallback: Color) -> Color {
    dominant_color_rgba(&image.to_rgba8(), fallback)
}

pub fn dominant_color_rgba(image: &RgbaImage, fallback: Color) -> Color {
    Palette::from_image(image)
        .dominant_swatch()
        .map_or(fallback, |s| s.color)
}

/// Decode `bytes` (PNG, JPEG, GIF or WebP) and extract the dominant color.
pub fn dominant_color_from_bytes(bytes: &[u8], fallback: Color) -> Color {
    match image::load_from_memory(bytes) {
        Ok(image) => dominant_color(&image, fallback),
        Err(e) => {
            log::debug!("Could not decode image ({} bytes): {e}", bytes.len());
            fallback
        }
    }
}

/// [`dominant_color_from_bytes`] on the blocking thread pool.
pub async fn dominant_color_async(bytes: Vec<u8>, fallback: Color) -> Color {
    match tokio::task::spawn_blocking(move || dominant_color_from_bytes(&bytes, fallback)).await {
        Ok(color) => color,
        Err(e) => {
            log::warn!("Dominant color task failed: {e}");
            fallback
        }
    }
}

/// Extract in the background and hand the color to `on_ready`.
pub fn dominant_color_with_callback<F>(bytes: Vec<u8>, fallback: Color, on_ready: F) -> JoinHandle<()>
where
    F: FnOnce(Color) + Send + 'static,
{
    tokio::spawn(async move {
        on_ready(dominant_color_async(bytes, fallback).await);
    })
}
