//! Shape predictor runs against dlib's published models.
//!
//! Needs the dlib-models checkout at the crate root:
//! ```bash
//! git clone --depth 1 https://github.com/davisking/dlib-models.git
//! ```

use std::path::PathBuf;

use image::{GrayImage, Luma};
use tonesense::dlib::load_dlib_model;
use tonesense::{BoundingBox, FaceLandmarks, Region};

fn dlib_model(name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("dlib-models")
        .join(name);
    if path.exists() {
        Some(path)
    } else {
        eprintln!("Skipping test: {} not found", path.display());
        None
    }
}

/// pixel[x, y] = (x + y) % 256
fn gradient_image(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| Luma([((x + y) % 256) as u8]))
}

/// dlib's own output for the 5-point model on a 100x100 gradient with the
/// face box (25, 25, 75, 75).
const DLIB_REFERENCE_5POINT: [(f32, f32); 5] = [
    (68.0, 46.0),
    (60.0, 45.0),
    (40.0, 40.0),
    (48.0, 42.0),
    (51.0, 60.0),
];

#[test]
fn five_point_prediction_matches_dlib() {
    let Some(model_path) = dlib_model("shape_predictor_5_face_landmarks.dat.bz2") else {
        return;
    };

    let model = load_dlib_model(&model_path).expect("Failed to load model");
    assert_eq!(model.num_landmarks(), 5);

    let landmarks = model.predict(&gradient_image(100, 100), &BoundingBox::new(25.0, 25.0, 50.0, 50.0));

    let mut max_error = 0.0f32;
    for (point, &(x, y)) in landmarks.points.iter().zip(&DLIB_REFERENCE_5POINT) {
        let error = ((point.x - x).powi(2) + (point.y - y).powi(2)).sqrt();
        max_error = max_error.max(error);
    }
    assert!(max_error < 1.5, "max error {:.2}px", max_error);
}

#[test]
fn sixty_eight_point_landmarks_stay_near_the_box() {
    let Some(model_path) = dlib_model("shape_predictor_68_face_landmarks.dat.bz2") else {
        return;
    };

    let model = load_dlib_model(&model_path).expect("Failed to load model");
    assert_eq!(model.num_landmarks(), 68);

    let bbox = BoundingBox::new(50.0, 50.0, 100.0, 100.0);
    let landmarks = model.predict(&gradient_image(200, 200), &bbox);
    assert_eq!(landmarks.num_landmarks(), 68);

    let margin = 50.0;
    for (i, p) in landmarks.points.iter().enumerate() {
        assert!(
            p.x >= bbox.x - margin && p.x <= bbox.x + bbox.width + margin,
            "landmark {} x={} out of range",
            i,
            p.x
        );
        assert!(
            p.y >= bbox.y - margin && p.y <= bbox.y + bbox.height + margin,
            "landmark {} y={} out of range",
            i,
            p.y
        );
    }

    let face = FaceLandmarks::from_shape(landmarks, 200, 200).expect("68 points give regions");
    assert!(face.face_mask.count() > 0);
    assert_eq!(face.regions.len(), Region::ALL.len());
}
