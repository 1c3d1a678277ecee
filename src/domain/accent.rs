//! Dominant accent color extraction.
//!
//! Thumbnails in the harvested listing are typically subject matter framed by
//! a solid-colored margin. Sampling a fixed band around the edges of a small
//! canonical rendition biases the heuristic toward that background/accent hue
//! instead of arbitrary foreground noise. The chosen color is always one that
//! actually occurs in the border sample, never an average.

use std::collections::HashMap;

use image::RgbImage;
use image::imageops::FilterType;

use crate::domain::color::{Hsv, Rgb};
use crate::domain::errors::ExtractionError;

/// Side length every thumbnail is resized to before sampling. Bounds the
/// sampling cost and keeps the thresholds meaningful across source sizes.
pub const CANONICAL_SIZE: u32 = 50;

/// Width in pixels of the sampled band around each edge.
pub const BORDER_WIDTH: u32 = 5;

/// Number of most-frequent distinct colors considered as candidates.
pub const TOP_CANDIDATES: usize = 20;

/// Candidates with HSV value below this are treated as near-black.
pub const NEAR_BLACK_VALUE: f32 = 0.15;

/// Candidates brighter than this *and* less saturated than
/// [`WASHOUT_SATURATION`] are treated as near-white.
pub const WASHOUT_VALUE: f32 = 0.9;

/// Saturation bound paired with [`WASHOUT_VALUE`].
pub const WASHOUT_SATURATION: f32 = 0.1;

/// Derive the accent color for a thumbnail from its raw encoded bytes.
///
/// Decodes (JPEG/PNG/WebP), drops any alpha channel, resizes to the
/// canonical resolution and applies the border-sampling heuristic. Pure
/// besides the decode; fetching the bytes is the caller's concern.
pub fn extract_accent(image_bytes: &[u8]) -> Result<Rgb, ExtractionError> {
    if image_bytes.is_empty() {
        return Err(ExtractionError::EmptyInput);
    }
    let decoded = image::load_from_memory(image_bytes)?;
    let canonical = decoded
        .resize_exact(CANONICAL_SIZE, CANONICAL_SIZE, FilterType::Triangle)
        .to_rgb8();
    Ok(accent_of(&canonical))
}

/// Apply the heuristic to an already-canonical RGB image.
///
/// Selection policy: rank the border sample's distinct colors by frequency,
/// keep the top [`TOP_CANDIDATES`], drop near-black and near-white entries,
/// and take the first survivor. If nothing survives, fall back to the most
/// frequent raw color; an empty sample yields black.
pub fn accent_of(img: &RgbImage) -> Rgb {
    let samples = border_samples(img);
    let ranked = rank_by_frequency(&samples);

    ranked
        .iter()
        .map(|&(color, _)| color)
        .find(|&color| {
            let hsv = Hsv::from(color);
            !is_near_black(hsv) && !is_washed_out(hsv)
        })
        .or_else(|| ranked.first().map(|&(color, _)| color))
        .unwrap_or(Rgb::BLACK)
}

/// Collect the border band in scan order: top rows, bottom rows (all
/// columns), then left and right columns for the remaining rows. Corners are
/// visited exactly once.
fn border_samples(img: &RgbImage) -> Vec<Rgb> {
    let (width, height) = img.dimensions();
    let pixel = |x, y| {
        let p = img.get_pixel(x, y);
        Rgb::new(p[0], p[1], p[2])
    };

    // Degenerate case: no interior to exclude, sample everything once.
    if width <= 2 * BORDER_WIDTH || height <= 2 * BORDER_WIDTH {
        return img
            .pixels()
            .map(|p| Rgb::new(p[0], p[1], p[2]))
            .collect();
    }

    let mut samples = Vec::with_capacity((2 * BORDER_WIDTH * (width + height)) as usize);
    for x in 0..width {
        for y in 0..BORDER_WIDTH {
            samples.push(pixel(x, y));
        }
        for y in height - BORDER_WIDTH..height {
            samples.push(pixel(x, y));
        }
    }
    for y in BORDER_WIDTH..height - BORDER_WIDTH {
        for x in 0..BORDER_WIDTH {
            samples.push(pixel(x, y));
        }
        for x in width - BORDER_WIDTH..width {
            samples.push(pixel(x, y));
        }
    }
    samples
}

/// Top [`TOP_CANDIDATES`] distinct colors by descending frequency.
///
/// Equal frequencies tie-break on first occurrence in the scan, which keeps
/// the ranking deterministic across runs and platforms instead of leaking
/// hash-map iteration order.
fn rank_by_frequency(samples: &[Rgb]) -> Vec<(Rgb, usize)> {
    let mut counts: HashMap<Rgb, (usize, usize)> = HashMap::new();
    for (index, &color) in samples.iter().enumerate() {
        counts.entry(color).or_insert((0, index)).0 += 1;
    }

    let mut ranked: Vec<(Rgb, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });
    ranked
        .into_iter()
        .take(TOP_CANDIDATES)
        .map(|(color, (count, _))| (color, count))
        .collect()
}

fn is_near_black(hsv: Hsv) -> bool {
    hsv.value < NEAR_BLACK_VALUE
}

fn is_washed_out(hsv: Hsv) -> bool {
    hsv.value > WASHOUT_VALUE && hsv.saturation < WASHOUT_SATURATION
}
