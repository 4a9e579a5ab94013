//! Median-cut color quantizer
//!
//! Pixels are reduced to 5 bits per channel and counted in a histogram.
//! If few enough distinct colors remain they become swatches directly;
//! otherwise the color space is split into boxes (largest volume first,
//! along the longest side, at the population median) and each box
//! contributes its population-weighted average.

use image::Rgba;

use super::Swatch;
use crate::types::Color;

/// Pixels with less alpha than this are ignored.
pub const MIN_ALPHA: u8 = 125;

const WORD_WIDTH: u16 = 5;
const WORD_MASK: u16 = (1 << WORD_WIDTH) - 1;
const MAX_QUANTIZED: u16 = (1 << (3 * WORD_WIDTH)) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    Red,
    Green,
    Blue,
}

fn quantize_rgb(r: u8, g: u8, b: u8) -> u16 {
    let reduce = |v: u8| u16::from(v >> (8 - WORD_WIDTH));
    (reduce(r) << (2 * WORD_WIDTH)) | (reduce(g) << WORD_WIDTH) | reduce(b)
}

#[allow(clippy::cast_possible_truncation)]
fn component(color: u16, which: Component) -> u8 {
    let shifted = match which {
        Component::Red => color >> (2 * WORD_WIDTH),
        Component::Green => color >> WORD_WIDTH,
        Component::Blue => color,
    };
    (shifted & WORD_MASK) as u8
}

/// Widen a 5-bit channel to 8 bits so that 31 maps to 255.
fn expand(value: u8) -> u8 {
    (value << 3) | (value >> 2)
}

fn approximate(color: u16) -> Color {
    Color::rgb(
        expand(component(color, Component::Red)),
        expand(component(color, Component::Green)),
        expand(component(color, Component::Blue)),
    )
}

/// Near-black, near-white, or on the red "I-line" of skin tones.
pub fn is_filtered(color: Color) -> bool {
    let (hue, saturation, lightness) = color.to_hsl();
    lightness <= 0.05 || lightness >= 0.95 || ((10.0..=37.0).contains(&hue) && saturation <= 0.82)
}

/// Sort key placing `which` in the most significant bits.
fn sort_key(color: u16, which: Component) -> u16 {
    let (r, g, b) = (
        u16::from(component(color, Component::Red)),
        u16::from(component(color, Component::Green)),
        u16::from(component(color, Component::Blue)),
    );
    let (first, second, third) = match which {
        Component::Red => (r, g, b),
        Component::Green => (g, r, b),
        Component::Blue => (b, g, r),
    };
    (first << (2 * WORD_WIDTH)) | (second << WORD_WIDTH) | third
}

/// Reduce `pixels` to at most `max_colors` swatches.
pub fn quantize<I>(pixels: I, max_colors: usize) -> Vec<Swatch>
where
    I: IntoIterator<Item = Rgba<u8>>,
{
    let mut histogram = vec![0u32; usize::from(MAX_QUANTIZED) + 1];
    for Rgba([r, g, b, a]) in pixels {
        if a >= MIN_ALPHA {
            histogram[usize::from(quantize_rgb(r, g, b))] += 1;
        }
    }

    let mut colors: Vec<u16> = (0..=MAX_QUANTIZED)
        .filter(|&c| histogram[usize::from(c)] > 0 && !is_filtered(approximate(c)))
        .collect();

    if colors.len() <= max_colors {
        return colors
            .into_iter()
            .map(|c| Swatch {
                color: approximate(c),
                population: histogram[usize::from(c)],
            })
            .collect();
    }

    let mut boxes = vec![ColorBox::fit(0, colors.len() - 1, &colors, &histogram)];
    while boxes.len() < max_colors {
        let largest = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.can_split())
            .max_by_key(|(_, b)| b.volume())
            .map(|(i, _)| i);
        let Some(index) = largest else {
            break;
        };
        let split = boxes[index].split(&mut colors, &histogram);
        boxes.push(split);
    }

    boxes
        .iter()
        .map(|b| b.average(&colors, &histogram))
        .filter(|s| !is_filtered(s.color))
        .collect()
}

/// A range `lower..=upper` of the color list and its bounding box.
#[derive(Debug)]
struct ColorBox {
    lower: usize,
    upper: usize,
    population: u32,
    min: [u8; 3],
    max: [u8; 3],
}

impl ColorBox {
    fn fit(lower: usize, upper: usize, colors: &[u16], histogram: &[u32]) -> Self {
        let mut min = [u8::MAX; 3];
        let mut max = [0u8; 3];
        let mut population = 0;
        for &color in &colors[lower..=upper] {
            population += histogram[usize::from(color)];
            for (i, which) in [Component::Red, Component::Green, Component::Blue]
                .into_iter()
                .enumerate()
            {
                let v = component(color, which);
                min[i] = min[i].min(v);
                max[i] = max[i].max(v);
            }
        }
        Self {
            lower,
            upper,
            population,
            min,
            max,
        }
    }

    fn side(&self, i: usize) -> u32 {
        u32::from(self.max[i] - self.min[i]) + 1
    }

    fn volume(&self) -> u32 {
        self.side(0) * self.side(1) * self.side(2)
    }

    fn can_split(&self) -> bool {
        self.upper > self.lower
    }

    fn longest_side(&self) -> Component {
        let (r, g, b) = (self.side(0), self.side(1), self.side(2));
        if r >= g && r >= b {
            Component::Red
        } else if g >= r && g >= b {
            Component::Green
        } else {
            Component::Blue
        }
    }

    /// Split at the population median along the longest side. `self` keeps
    /// the lower half; the upper half is returned.
    fn split(&mut self, colors: &mut [u16], histogram: &[u32]) -> Self {
        let which = self.longest_side();
        colors[self.lower..=self.upper].sort_by_key(|&c| sort_key(c, which));

        let midpoint = self.population / 2;
        let mut count = 0;
        let mut split_at = self.upper - 1;
        for (i, &color) in colors
            .iter()
            .enumerate()
            .take(self.upper + 1)
            .skip(self.lower)
        {
            count += histogram[usize::from(color)];
            if count >= midpoint {
                split_at = i.min(self.upper - 1);
                break;
            }
        }

        let upper_half = Self::fit(split_at + 1, self.upper, colors, histogram);
        *self = Self::fit(self.lower, split_at, colors, histogram);
        upper_half
    }

    fn average(&self, colors: &[u16], histogram: &[u32]) -> Swatch {
        let mut sums = [0u64; 3];
        let mut population = 0u64;
        for &color in &colors[self.lower..=self.upper] {
            let n = u64::from(histogram[usize::from(color)]);
            population += n;
            sums[0] += n * u64::from(component(color, Component::Red));
            sums[1] += n * u64::from(component(color, Component::Green));
            sums[2] += n * u64::from(component(color, Component::Blue));
        }

        let mean = |sum: u64| {
            let rounded = (sum + population / 2) / population.max(1);
            expand(u8::try_from(rounded).unwrap_or(31))
        };
        Swatch {
            color: Color::rgb(mean(sums[0]), mean(sums[1]), mean(sums[2])),
            population: self.population,
        }
    }
}
