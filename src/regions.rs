//! Skin sampling regions derived from 68-point facial landmarks.
//!
//! Landmark indices follow the iBUG 68-point annotation scheme:
//! jaw 0-16, eyebrows 17-26, nose 27-35, eyes 36-47, lips 48-67.
//! "Left" and "right" refer to the image, not the subject.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mask::RegionMask;
use crate::types::{BoundingBox, Point, Shape};

/// Anatomical areas sampled for skin color, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Forehead,
    LeftCheek,
    RightCheek,
    Jawline,
    Neck,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Forehead,
        Region::LeftCheek,
        Region::RightCheek,
        Region::Jawline,
        Region::Neck,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Forehead => "forehead",
            Region::LeftCheek => "left_cheek",
            Region::RightCheek => "right_cheek",
            Region::Jawline => "jawline",
            Region::Neck => "neck",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Height of the forehead above the brow line, as a fraction of brow-to-chin height.
const FOREHEAD_HEIGHT: f32 = 0.35;
/// Forehead sampling band, as fractions of brow-to-chin height above the brows.
const FOREHEAD_BAND: (f32, f32) = (0.05, 0.30);
/// How far the inner edge of the jaw band is pulled toward the nose base.
const JAW_BAND_DEPTH: f32 = 0.3;
const NECK_HEIGHT: f32 = 0.4;
const NECK_INSET: f32 = 0.15;

/// Landmark count of the iBUG scheme the regions are laid out on.
pub const LANDMARK_COUNT: usize = 68;

const JAW: std::ops::RangeInclusive<usize> = 0..=16;
const BROWS: std::ops::RangeInclusive<usize> = 17..=26;
const LEFT_CHEEK: [usize; 8] = [41, 40, 31, 48, 4, 3, 2, 1];
const RIGHT_CHEEK: [usize; 8] = [46, 47, 35, 54, 12, 13, 14, 15];
const LOWER_JAW: std::ops::RangeInclusive<usize> = 4..=12;
const CHIN: std::ops::RangeInclusive<usize> = 6..=10;
const NOSE_BASE: usize = 33;
const CHIN_CENTER: usize = 8;

/// Average frontal face layout in coordinates normalized to the face box.
const MEAN_FACE_68: [(f32, f32); 68] = [
    // jaw
    (0.10, 0.35), (0.11, 0.45), (0.12, 0.55), (0.14, 0.65), (0.18, 0.73),
    (0.24, 0.80), (0.32, 0.85), (0.41, 0.88), (0.50, 0.89), (0.59, 0.88),
    (0.68, 0.85), (0.76, 0.80), (0.82, 0.73), (0.86, 0.65), (0.88, 0.55),
    (0.89, 0.45), (0.90, 0.35),
    // eyebrows
    (0.20, 0.26), (0.25, 0.22), (0.32, 0.21), (0.38, 0.23), (0.43, 0.27),
    (0.57, 0.27), (0.62, 0.23), (0.68, 0.21), (0.75, 0.22), (0.80, 0.26),
    // nose bridge and base
    (0.50, 0.32), (0.50, 0.40), (0.50, 0.48), (0.50, 0.55),
    (0.40, 0.58), (0.45, 0.60), (0.50, 0.62), (0.55, 0.60), (0.60, 0.58),
    // eyes
    (0.24, 0.32), (0.28, 0.29), (0.34, 0.29), (0.38, 0.33), (0.34, 0.35), (0.28, 0.35),
    (0.62, 0.33), (0.66, 0.29), (0.72, 0.29), (0.76, 0.32), (0.72, 0.35), (0.66, 0.35),
    // outer lip
    (0.32, 0.72), (0.38, 0.68), (0.44, 0.66), (0.50, 0.67), (0.56, 0.66), (0.62, 0.68),
    (0.68, 0.72), (0.62, 0.78), (0.56, 0.80), (0.50, 0.81), (0.44, 0.80), (0.38, 0.78),
    // inner lip
    (0.36, 0.72), (0.44, 0.70), (0.50, 0.70), (0.56, 0.70),
    (0.64, 0.72), (0.56, 0.74), (0.50, 0.75), (0.44, 0.74),
];

/// Lay the mean 68-point face into `face_rect`.
///
/// A stand-in for predicted landmarks when the face box is already known,
/// as in synthetic providers and tests.
pub fn mean_face_shape(face_rect: &BoundingBox) -> Shape {
    Shape::new(
        MEAN_FACE_68
            .iter()
            .map(|&(x, y)| face_rect.denormalize_point(Point::new(x, y)))
            .collect(),
    )
}

/// Landmarks and derived masks for one detected face.
#[derive(Debug, Clone)]
pub struct FaceLandmarks {
    pub landmarks: Shape,
    pub regions: BTreeMap<Region, RegionMask>,
    pub face_mask: RegionMask,
    pub bbox: BoundingBox,
}

impl FaceLandmarks {
    /// Derive region masks over a `width` x `height` image from a 68-point shape.
    ///
    /// Returns `None` if the shape has fewer than 68 points.
    pub fn from_shape(landmarks: Shape, width: u32, height: u32) -> Option<Self> {
        if landmarks.num_landmarks() < LANDMARK_COUNT {
            return None;
        }

        let bbox = BoundingBox::enclosing(&landmarks.points)?;
        let face_mask = RegionMask::from_polygon(width, height, &face_outline(&landmarks));

        let regions = Region::ALL
            .iter()
            .map(|&region| (region, region_mask(region, &landmarks, width, height)))
            .collect();

        Some(Self {
            landmarks,
            regions,
            face_mask,
            bbox,
        })
    }
}

fn brow_to_chin(points: &[Point]) -> f32 {
    let brow_top = points[BROWS].iter().map(|p| p.y).fold(f32::MAX, f32::min);
    (points[CHIN_CENTER].y - brow_top).max(0.0)
}

fn lift(p: Point, dy: f32) -> Point {
    Point::new(p.x, p.y - dy)
}

/// Jawline closed by the eyebrow arc raised to the estimated hairline.
fn face_outline(shape: &Shape) -> Vec<Point> {
    let points = &shape.points;
    let forehead = brow_to_chin(points) * FOREHEAD_HEIGHT;

    let mut outline: Vec<Point> = points[JAW].to_vec();
    outline.extend(points[BROWS].iter().rev().map(|&p| lift(p, forehead)));
    outline
}

fn region_mask(region: Region, shape: &Shape, width: u32, height: u32) -> RegionMask {
    let points = &shape.points;
    match region {
        Region::Forehead => {
            let face_height = brow_to_chin(points);
            let (near, far) = FOREHEAD_BAND;
            let mut band: Vec<Point> = points[BROWS]
                .iter()
                .map(|&p| lift(p, face_height * near))
                .collect();
            band.extend(points[BROWS].iter().rev().map(|&p| lift(p, face_height * far)));
            RegionMask::from_polygon(width, height, &band)
        }
        Region::LeftCheek => RegionMask::from_convex_hull(width, height, &shape.select(&LEFT_CHEEK)),
        Region::RightCheek => {
            RegionMask::from_convex_hull(width, height, &shape.select(&RIGHT_CHEEK))
        }
        Region::Jawline => {
            let anchor = points[NOSE_BASE];
            let mut band: Vec<Point> = points[LOWER_JAW].to_vec();
            band.extend(
                points[LOWER_JAW]
                    .iter()
                    .rev()
                    .map(|&p| p.lerp(anchor, JAW_BAND_DEPTH)),
            );
            RegionMask::from_polygon(width, height, &band)
        }
        Region::Neck => {
            let chin = &points[CHIN];
            let chin_y = chin.iter().map(|p| p.y).fold(f32::MIN, f32::max);
            let x_min = chin.iter().map(|p| p.x).fold(f32::MAX, f32::min);
            let x_max = chin.iter().map(|p| p.x).fold(f32::MIN, f32::max);

            let chin_width = x_max - x_min;
            let top = chin_y;
            let bottom = (chin_y + chin_width * NECK_HEIGHT).min(height as f32);
            let left = x_min + chin_width * NECK_INSET;
            let right = x_max - chin_width * NECK_INSET;

            let rect = [
                Point::new(left, top),
                Point::new(right, top),
                Point::new(right, bottom),
                Point::new(left, bottom),
            ];
            RegionMask::from_polygon(width, height, &rect)
        }
    }
}
