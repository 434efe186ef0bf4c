//! Annotated preview of the sampled regions.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};

use crate::color::Color;
use crate::error::Result;
use crate::mask::RegionMask;
use crate::regions::{FaceLandmarks, Region};

pub const JPEG_QUALITY: u8 = 85;

/// Weight of the overlay color in each blend.
const OVERLAY_ALPHA: f32 = 0.3;

/// Tint used to mark a region on the preview.
pub fn overlay_color(region: Region) -> Color {
    match region {
        Region::Forehead => Color::new(255, 182, 193),
        Region::LeftCheek | Region::RightCheek => Color::new(173, 216, 230),
        Region::Jawline => Color::new(144, 238, 144),
        Region::Neck => Color::new(255, 218, 185),
    }
}

/// Tint every region of `face` onto a copy of `image`.
///
/// Regions are blended one after another in canonical order, so pixels
/// shared by two regions carry both tints.
pub fn annotate(image: &RgbImage, face: &FaceLandmarks) -> RgbImage {
    let mut annotated = image.clone();
    for (&region, mask) in &face.regions {
        blend_mask(&mut annotated, mask, overlay_color(region), OVERLAY_ALPHA);
    }
    annotated
}

fn blend_mask(image: &mut RgbImage, mask: &RegionMask, color: Color, alpha: f32) {
    let tint = [color.r, color.g, color.b];
    for (x, y) in mask.iter_set() {
        if x >= image.width() || y >= image.height() {
            continue;
        }
        let Rgb(pixel) = image.get_pixel_mut(x, y);
        for (channel, &t) in pixel.iter_mut().zip(&tint) {
            let blended = alpha * t as f32 + (1.0 - alpha) * *channel as f32;
            *channel = blended.round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Encode as JPEG and wrap in a `data:` URI.
pub fn encode_data_uri(image: &RgbImage) -> Result<String> {
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY).encode_image(image)?;
    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(&jpeg)))
}

/// Annotated preview of `image` as a base64 JPEG data URI.
pub fn render_preview(image: &RgbImage, face: &FaceLandmarks) -> Result<String> {
    encode_data_uri(&annotate(image, face))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::mean_face_shape;
    use crate::types::BoundingBox;

    fn face_on(width: u32, height: u32) -> FaceLandmarks {
        let rect = BoundingBox::new(20.0, 10.0, 60.0, 60.0);
        FaceLandmarks::from_shape(mean_face_shape(&rect), width, height).unwrap()
    }

    #[test]
    fn blend_weights_overlay_at_thirty_percent() {
        let mut image = RgbImage::from_pixel(4, 4, Rgb([100, 100, 100]));
        let mask = RegionMask::from_fn(4, 4, |x, _| x < 2);
        blend_mask(&mut image, &mask, Color::new(200, 0, 100), OVERLAY_ALPHA);

        assert_eq!(image.get_pixel(0, 0).0, [130, 70, 100]);
        assert_eq!(image.get_pixel(3, 3).0, [100, 100, 100]);
    }

    #[test]
    fn annotation_only_touches_region_pixels() {
        let image = RgbImage::from_pixel(100, 100, Rgb([50, 50, 50]));
        let face = face_on(100, 100);
        let annotated = annotate(&image, &face);

        assert_eq!(annotated.get_pixel(0, 0).0, [50, 50, 50]);
        let forehead = &face.regions[&Region::Forehead];
        let (x, y) = forehead.iter_set().next().unwrap();
        assert_ne!(annotated.get_pixel(x, y).0, [50, 50, 50]);
    }

    #[test]
    fn preview_is_a_jpeg_data_uri() {
        let image = RgbImage::from_pixel(100, 100, Rgb([180, 140, 120]));
        let uri = render_preview(&image, &face_on(100, 100)).unwrap();

        let payload = uri.strip_prefix("data:image/jpeg;base64,").unwrap();
        let jpeg = STANDARD.decode(payload).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (100, 100));
    }
}
