//! Region color sampling.
//!
//! Each region is intersected with the face mask, its pixels are filtered
//! for brightness outliers (specular highlights, shadows, stray hair) and
//! averaged. The filtered pixels of all regions are then pooled, filtered
//! again and averaged into the overall skin color.

use std::collections::BTreeMap;

use image::RgbImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{Color, Hsv8, Lab8};
use crate::error::{Error, Result};
use crate::mask::RegionMask;
use crate::regions::Region;

/// A region contributes only when more than this many pixels survive masking.
pub const MIN_REGION_PIXELS: usize = 10;

/// Pixels with |z| at or above this brightness z-score are discarded.
pub const OUTLIER_Z_THRESHOLD: f64 = 1.5;

/// Samples smaller than this are too small to estimate a spread from.
const MIN_FILTER_SAMPLE: usize = 10;

/// Filtering is abandoned if it would leave this many pixels or fewer.
const MIN_FILTERED_PIXELS: usize = 5;

/// Brightness spread below which a sample is treated as uniform.
const STDDEV_FLOOR: f64 = 1e-6;

/// Average color of one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionColor {
    pub rgb: Color,
    pub hex: String,
    pub pixel_count: usize,
}

/// Average skin color of the whole face in several colorspaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateColor {
    pub rgb: Color,
    pub lab: Lab8,
    pub hex: String,
    pub hsv: Hsv8,
}

impl AggregateColor {
    pub fn from_rgb(rgb: Color) -> Self {
        Self {
            rgb,
            lab: rgb.to_lab(),
            hex: rgb.hex(),
            hsv: rgb.to_hsv(),
        }
    }
}

/// Result of sampling every region of one face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorExtraction {
    pub overall: AggregateColor,
    pub regions: BTreeMap<Region, RegionColor>,
}

/// Sample skin color from `regions`, restricted to `face_mask`.
///
/// Regions with too few pixels are left out of the result. Fails with
/// [`Error::NoSkinColorExtracted`] when no region is usable.
pub fn extract(
    image: &RgbImage,
    regions: &BTreeMap<Region, RegionMask>,
    face_mask: &RegionMask,
) -> Result<ColorExtraction> {
    let mut region_colors = BTreeMap::new();
    let mut pooled: Vec<Color> = Vec::new();

    for (&region, mask) in regions {
        let combined = mask.intersect(face_mask);
        let pixels = sample_pixels(image, &combined);

        if pixels.len() <= MIN_REGION_PIXELS {
            debug!(%region, pixels = pixels.len(), "skipping region with too few pixels");
            continue;
        }

        let filtered = remove_outliers(&pixels);
        let average = mean_color(&filtered);
        debug!(
            %region,
            sampled = pixels.len(),
            kept = filtered.len(),
            color = %average.hex(),
            "region sampled"
        );

        region_colors.insert(
            region,
            RegionColor {
                rgb: average,
                hex: average.hex(),
                pixel_count: filtered.len(),
            },
        );
        pooled.extend(filtered);
    }

    if pooled.is_empty() {
        return Err(Error::NoSkinColorExtracted);
    }

    let filtered = remove_outliers(&pooled);
    let overall = AggregateColor::from_rgb(mean_color(&filtered));

    Ok(ColorExtraction {
        overall,
        regions: region_colors,
    })
}

/// Colors of every set pixel of `mask`, in row-major order.
pub fn sample_pixels(image: &RgbImage, mask: &RegionMask) -> Vec<Color> {
    mask.iter_set()
        .filter(|&(x, y)| x < image.width() && y < image.height())
        .map(|(x, y)| Color::from(*image.get_pixel(x, y)))
        .collect()
}

/// Drop brightness outliers by z-score.
///
/// Small and uniform samples are returned unchanged, and so is any sample
/// the filter would shrink to five pixels or fewer.
pub fn remove_outliers(pixels: &[Color]) -> Vec<Color> {
    if pixels.len() < MIN_FILTER_SAMPLE {
        return pixels.to_vec();
    }

    let luma: Vec<f64> = pixels.iter().map(Color::luma).collect();
    let n = luma.len() as f64;
    let mean = luma.iter().sum::<f64>() / n;
    let variance = luma.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / n;
    let stddev = variance.sqrt();

    if stddev < STDDEV_FLOOR {
        return pixels.to_vec();
    }

    let filtered: Vec<Color> = pixels
        .iter()
        .zip(&luma)
        .filter(|(_, &l)| ((l - mean) / stddev).abs() < OUTLIER_Z_THRESHOLD)
        .map(|(&c, _)| c)
        .collect();

    filtered_or_original(filtered, pixels)
}

/// The filtered sample, unless filtering left five pixels or fewer.
fn filtered_or_original(filtered: Vec<Color>, original: &[Color]) -> Vec<Color> {
    if filtered.len() > MIN_FILTERED_PIXELS {
        filtered
    } else {
        original.to_vec()
    }
}

/// Componentwise mean, truncated toward zero. Black for an empty slice.
pub fn mean_color(pixels: &[Color]) -> Color {
    if pixels.is_empty() {
        return Color::new(0, 0, 0);
    }
    let n = pixels.len() as u64;
    let (r, g, b) = pixels.iter().fold((0u64, 0u64, 0u64), |(r, g, b), c| {
        (r + c.r as u64, g + c.g as u64, b + c.b as u64)
    });
    Color::new((r / n) as u8, (g / n) as u8, (b / n) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_image(width: u32, height: u32, color: Color) -> RgbImage {
        RgbImage::from_pixel(width, height, image::Rgb([color.r, color.g, color.b]))
    }

    fn rect_mask(width: u32, height: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> RegionMask {
        RegionMask::from_fn(width, height, |x, y| x >= x0 && x < x1 && y >= y0 && y < y1)
    }

    #[test]
    fn uniform_sample_is_kept_whole() {
        let pixels = vec![Color::new(180, 140, 120); 40];
        assert_eq!(remove_outliers(&pixels), pixels);
    }

    #[test]
    fn bright_outliers_are_dropped() {
        let mut pixels = vec![Color::new(100, 100, 100); 30];
        pixels.extend(vec![Color::new(102, 102, 102); 30]);
        pixels.push(Color::new(255, 255, 255));

        let filtered = remove_outliers(&pixels);
        assert_eq!(filtered.len(), 60);
        assert!(!filtered.contains(&Color::new(255, 255, 255)));
    }

    #[test]
    fn small_samples_are_not_filtered() {
        let mut pixels = vec![Color::new(0, 0, 0); 8];
        pixels.push(Color::new(255, 255, 255));

        let filtered = remove_outliers(&pixels);
        assert_eq!(filtered, pixels);
    }

    #[test]
    fn filtering_ten_or_more_pixels_keeps_more_than_five() {
        // At most n / 2.25 pixels can sit 1.5 deviations out, so the
        // five-pixel floor never fires once the sample is filtered at all.
        let mut pixels: Vec<Color> = (0..12).map(|i| Color::new(i * 20, i * 20, i * 20)).collect();
        pixels.push(Color::new(120, 120, 120));
        let filtered = remove_outliers(&pixels);
        assert_eq!(filtered.len(), 11);
    }

    #[test]
    fn depleted_filter_result_falls_back_to_the_original() {
        let original: Vec<Color> = (0..12).map(|i| Color::new(i * 20, 100, 100)).collect();

        let five = original[..5].to_vec();
        assert_eq!(filtered_or_original(five, &original), original);
        assert_eq!(filtered_or_original(Vec::new(), &original), original);

        let six = original[..6].to_vec();
        assert_eq!(filtered_or_original(six.clone(), &original), six);
    }

    #[test]
    fn empty_sample_stays_empty() {
        assert!(remove_outliers(&[]).is_empty());
    }

    #[test]
    fn mean_truncates() {
        let pixels = [Color::new(10, 0, 255), Color::new(11, 1, 254)];
        assert_eq!(mean_color(&pixels), Color::new(10, 0, 254));
    }

    #[test]
    fn sparse_region_is_omitted_without_failing() {
        let image = solid_image(20, 20, Color::new(200, 160, 130));
        let face = RegionMask::from_fn(20, 20, |_, _| true);

        let mut regions = BTreeMap::new();
        regions.insert(Region::Forehead, rect_mask(20, 20, 0, 0, 10, 10));
        // exactly 10 pixels: not enough
        regions.insert(Region::Neck, rect_mask(20, 20, 0, 19, 10, 20));

        let result = extract(&image, &regions, &face).unwrap();
        assert!(result.regions.contains_key(&Region::Forehead));
        assert!(!result.regions.contains_key(&Region::Neck));
        assert_eq!(result.regions[&Region::Forehead].pixel_count, 100);
        assert_eq!(result.overall.rgb, Color::new(200, 160, 130));
    }

    #[test]
    fn face_mask_clips_regions() {
        let mut image = solid_image(20, 20, Color::new(30, 60, 200));
        for y in 0..20 {
            for x in 0..10 {
                image.put_pixel(x, y, image::Rgb([210, 170, 140]));
            }
        }
        // Region spans the whole image; the face only the left half.
        let face = rect_mask(20, 20, 0, 0, 10, 20);
        let mut regions = BTreeMap::new();
        regions.insert(Region::LeftCheek, rect_mask(20, 20, 0, 0, 20, 20));

        let result = extract(&image, &regions, &face).unwrap();
        let cheek = &result.regions[&Region::LeftCheek];
        assert_eq!(cheek.rgb, Color::new(210, 170, 140));
        assert_eq!(cheek.hex, "#d2aa8c");
        assert_eq!(cheek.pixel_count, 200);
    }

    #[test]
    fn no_usable_region_fails() {
        let image = solid_image(10, 10, Color::new(200, 160, 130));
        let face = RegionMask::new(10, 10);
        let mut regions = BTreeMap::new();
        regions.insert(Region::Forehead, rect_mask(10, 10, 0, 0, 10, 10));

        assert!(matches!(
            extract(&image, &regions, &face),
            Err(Error::NoSkinColorExtracted)
        ));
    }

    #[test]
    fn overall_color_pools_filtered_pixels() {
        let mut image = solid_image(20, 20, Color::new(200, 150, 120));
        for y in 10..20 {
            for x in 0..20 {
                image.put_pixel(x, y, image::Rgb([100, 70, 50]));
            }
        }
        let face = RegionMask::from_fn(20, 20, |_, _| true);
        let mut regions = BTreeMap::new();
        regions.insert(Region::Forehead, rect_mask(20, 20, 0, 0, 20, 10));
        regions.insert(Region::Jawline, rect_mask(20, 20, 0, 10, 20, 20));

        let result = extract(&image, &regions, &face).unwrap();
        // Two equally sized clusters sit at |z| = 1, so nothing is filtered.
        assert_eq!(result.overall.rgb, Color::new(150, 110, 85));
        assert_eq!(result.overall.hex, "#966e55");
        assert_eq!(result.overall.lab, Color::new(150, 110, 85).to_lab());
        assert_eq!(result.overall.hsv, Color::new(150, 110, 85).to_hsv());
    }
}
