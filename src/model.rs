//! Landmark shape predictor (ensemble of regression trees).
//!
//! The predictor starts from a mean shape laid into the face box and runs a
//! cascade of stages. Each stage samples pixel intensities around the
//! current estimate and adds the update voted by its trees.
//!
//! # Usage
//!
//! ```ignore
//! let model = load_dlib_model("shape_predictor_68_face_landmarks.dat")?;
//! let face_rect = BoundingBox::new(100.0, 100.0, 200.0, 200.0);
//! let landmarks = model.predict(&gray, &face_rect);
//! ```

use crate::features::{find_similarity_transform, sample_features, ImageAccess};
use crate::tree::CascadeStage;
use crate::types::{BoundingBox, Shape};

#[derive(Debug, Clone)]
pub struct ShapePredictor {
    /// Mean shape in coordinates normalized to the face box.
    mean_shape: Shape,
    cascade: Vec<CascadeStage>,
}

impl ShapePredictor {
    pub fn new(mean_shape: Shape, cascade: Vec<CascadeStage>) -> Self {
        Self {
            mean_shape,
            cascade,
        }
    }

    pub fn num_landmarks(&self) -> usize {
        self.mean_shape.num_landmarks()
    }

    pub fn num_cascade_stages(&self) -> usize {
        self.cascade.len()
    }

    /// Predict landmarks for the face in `face_rect`, in image coordinates.
    pub fn predict<I: ImageAccess>(&self, image: &I, face_rect: &BoundingBox) -> Shape {
        let mut current = self.mean_shape.clone();

        for stage in &self.cascade {
            let tform = find_similarity_transform(&self.mean_shape, &current);
            let features = sample_features(
                image,
                face_rect,
                &current,
                tform,
                stage.anchors(),
                stage.offsets(),
            );
            stage.refine(&features, &mut current);
        }

        Shape::new(
            current
                .points
                .iter()
                .map(|&p| face_rect.denormalize_point(p))
                .collect(),
        )
    }
}
