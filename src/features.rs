//! Pixel features read by the landmark regression cascade.
//!
//! Every cascade stage samples a fixed set of pixels placed relative to the
//! current landmark estimate. Offsets are stored in the mean shape's frame,
//! so they are rotated and scaled along with the estimate before sampling.

use image::GrayImage;

use crate::types::{BoundingBox, Point, Shape};

/// Grayscale intensity lookup.
pub trait ImageAccess {
    /// Intensity at (x, y), or 0 outside the image.
    fn intensity(&self, x: i32, y: i32) -> u8;
}

impl ImageAccess for GrayImage {
    fn intensity(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return 0;
        }
        self.get_pixel(x as u32, y as u32).0[0]
    }
}

/// Rotation plus uniform scale, `[a -b; b a]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityTransform {
    pub a: f32,
    pub b: f32,
}

impl SimilarityTransform {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0 };

    pub fn apply(&self, p: Point) -> Point {
        Point::new(self.a * p.x - self.b * p.y, self.b * p.x + self.a * p.y)
    }
}

fn centroid(points: &[Point]) -> Point {
    let n = points.len().max(1) as f32;
    let sum = points
        .iter()
        .fold(Point::new(0.0, 0.0), |acc, &p| acc + p);
    sum * (1.0 / n)
}

/// Least-squares rotation and scale taking `from` onto `to`.
///
/// Translation is ignored; only the linear part is needed to carry feature
/// offsets. Degenerate input yields the identity.
pub fn find_similarity_transform(from: &Shape, to: &Shape) -> SimilarityTransform {
    let from_center = centroid(&from.points);
    let to_center = centroid(&to.points);

    let (mut dot, mut cross, mut norm) = (0.0f32, 0.0f32, 0.0f32);
    for (&f, &t) in from.points.iter().zip(&to.points) {
        let f = f - from_center;
        let t = t - to_center;
        dot += f.x * t.x + f.y * t.y;
        cross += f.x * t.y - f.y * t.x;
        norm += f.x * f.x + f.y * f.y;
    }

    if norm <= f32::EPSILON {
        return SimilarityTransform::IDENTITY;
    }
    SimilarityTransform {
        a: dot / norm,
        b: cross / norm,
    }
}

/// Read the intensities a cascade stage splits on.
///
/// `shape` is the current estimate in coordinates normalized to `face_rect`.
/// Each feature sits at `shape[anchor] + tform(offset)` and is read from the
/// nearest pixel.
pub fn sample_features<I: ImageAccess>(
    image: &I,
    face_rect: &BoundingBox,
    shape: &Shape,
    tform: SimilarityTransform,
    anchors: &[usize],
    offsets: &[Point],
) -> Vec<f32> {
    anchors
        .iter()
        .zip(offsets)
        .map(|(&anchor, &offset)| {
            let p = face_rect.denormalize_point(shape[anchor] + tform.apply(offset));
            image.intensity(p.x.round() as i32, p.y.round() as i32) as f32
        })
        .collect()
}
