//! Face detection and landmark placement.
//!
//! The pipeline only depends on the [`LandmarkProvider`] trait. The bundled
//! implementation, [`SeetaProvider`], finds the face box with the SeetaFace
//! cascade from `rustface` and predicts 68 landmarks inside it with a dlib
//! shape predictor.

use image::{GrayImage, RgbImage};
use rustface::{Detector, FaceInfo, ImageData};
use tracing::debug;

use crate::config::DetectorConfig;
use crate::dlib::load_dlib_model;
use crate::error::{Error, Result};
use crate::model::ShapePredictor;
use crate::regions::{FaceLandmarks, LANDMARK_COUNT};
use crate::types::BoundingBox;

/// Source of facial landmarks and region masks.
///
/// Implementations must return masks over the same pixel grid as `image`.
pub trait LandmarkProvider {
    /// Locate a face, or `None` if there is no usable face in the image.
    fn detect(&mut self, image: &RgbImage) -> Option<FaceLandmarks>;
}

impl<P: LandmarkProvider + ?Sized> LandmarkProvider for Box<P> {
    fn detect(&mut self, image: &RgbImage) -> Option<FaceLandmarks> {
        (**self).detect(image)
    }
}

/// SeetaFace face boxes refined by a 68-point shape predictor.
///
/// Loading the models is expensive; create one per process and reuse it.
pub struct SeetaProvider {
    detector: Box<dyn Detector>,
    landmarks: ShapePredictor,
}

impl SeetaProvider {
    pub fn new(config: &DetectorConfig) -> Result<Self> {
        let model_path = config
            .model_path
            .to_str()
            .ok_or_else(|| Error::DetectorLoad("Invalid detector path".into()))?;
        let mut detector = rustface::create_detector(model_path)
            .map_err(|e| Error::DetectorLoad(format!("{}: {}", model_path, e)))?;

        detector.set_min_face_size(config.min_face_size);
        detector.set_score_thresh(config.score_thresh);
        detector.set_pyramid_scale_factor(config.pyramid_scale_factor);
        let (step_x, step_y) = config.slide_window_step;
        detector.set_slide_window_step(step_x, step_y);

        let landmark_path = &config.landmark_model_path;
        let landmarks = load_dlib_model(landmark_path)
            .map_err(|e| Error::DetectorLoad(format!("{}: {}", landmark_path.display(), e)))?;
        if landmarks.num_landmarks() != LANDMARK_COUNT {
            return Err(Error::DetectorLoad(format!(
                "{}: expected a {}-point landmark model, got {} points",
                landmark_path.display(),
                LANDMARK_COUNT,
                landmarks.num_landmarks()
            )));
        }

        Ok(Self {
            detector,
            landmarks,
        })
    }

    fn detect_faces(&mut self, gray: &GrayImage) -> Vec<FaceInfo> {
        let (width, height) = gray.dimensions();
        let image_data = ImageData::new(gray.as_raw(), width, height);
        self.detector.detect(&image_data)
    }
}

impl LandmarkProvider for SeetaProvider {
    fn detect(&mut self, image: &RgbImage) -> Option<FaceLandmarks> {
        let (width, height) = image.dimensions();
        let gray = image::imageops::grayscale(image);

        let faces = self.detect_faces(&gray);
        debug!(faces = faces.len(), "face detection finished");

        let best = faces
            .iter()
            .max_by(|a, b| a.score().total_cmp(&b.score()))?;

        let bbox = best.bbox();
        let face_rect = BoundingBox::new(
            bbox.x() as f32,
            bbox.y() as f32,
            bbox.width() as f32,
            bbox.height() as f32,
        );
        debug!(?face_rect, score = best.score(), "using highest-scoring face");

        let shape = self.landmarks.predict(&gray, &face_rect);
        FaceLandmarks::from_shape(shape, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_model_is_a_load_error() {
        let config = DetectorConfig {
            model_path: PathBuf::from("/nonexistent/seeta_fd_frontal_v1.0.bin"),
            ..DetectorConfig::default()
        };
        match SeetaProvider::new(&config) {
            Err(Error::DetectorLoad(msg)) => assert!(msg.contains("nonexistent")),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("loading a missing model should fail"),
        }
    }
}
