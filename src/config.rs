//! Runtime settings shared by the CLI and the HTTP server.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings for the models behind [`crate::SeetaProvider`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Path to the SeetaFace frontal model (`seeta_fd_frontal_v1.0.bin`).
    pub model_path: PathBuf,
    /// Path to dlib's 68-point shape predictor (`.dat` or `.dat.bz2`).
    pub landmark_model_path: PathBuf,
    /// Minimum face size in pixels.
    pub min_face_size: u32,
    pub score_thresh: f64,
    pub pyramid_scale_factor: f32,
    pub slide_window_step: (u32, u32),
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("seeta_fd_frontal_v1.0.bin"),
            landmark_model_path: PathBuf::from("shape_predictor_68_face_landmarks.dat"),
            min_face_size: 20,
            score_thresh: 2.0,
            pyramid_scale_factor: 0.8,
            slide_window_step: (4, 4),
        }
    }
}

/// Input limits applied before an image enters the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Largest accepted encoded image, in bytes.
    pub max_upload_bytes: usize,
    /// Longer image side after downscaling.
    pub max_dimension: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_upload_bytes: 10 * 1024 * 1024,
            max_dimension: 1280,
        }
    }
}
