//! # tonesense
//!
//! Pure Rust skin tone analysis and seasonal color palette classification.
//!
//! This crate provides:
//! - **Region Detection**: face location, 68-point landmark prediction and skin sampling regions
//! - **Color Sampling**: outlier-filtered average skin color per region and overall
//! - **Tone Classification**: undertone, depth and contrast from Lab/HSV cues
//! - **Season Selection**: scoring of the twelve seasonal palettes with recommendations
//!
//! ## Pipeline Overview
//!
//! 1. Detect the face, predict its landmarks and derive masks for forehead, cheeks, jawline and neck
//! 2. Sample each region inside the face boundary and reject brightness outliers
//! 3. Pool the filtered pixels into one skin color and convert it to Lab and HSV
//! 4. Classify undertone (warm/cool/neutral), depth and contrast
//! 5. Score all twelve seasons and attach the winner's palette
//!
//! ## Quick Start
//!
//! ```rust
//! use tonesense::{
//!     mean_face_shape, Analyzer, BoundingBox, FaceLandmarks, LandmarkProvider, RgbImage,
//! };
//!
//! // Any landmark source can drive the pipeline. This one skips prediction
//! // and places the average face in a fixed box.
//! struct FixedFace;
//!
//! impl LandmarkProvider for FixedFace {
//!     fn detect(&mut self, image: &RgbImage) -> Option<FaceLandmarks> {
//!         let face_rect = BoundingBox::new(40.0, 30.0, 120.0, 120.0);
//!         FaceLandmarks::from_shape(mean_face_shape(&face_rect), image.width(), image.height())
//!     }
//! }
//!
//! let image = RgbImage::from_pixel(200, 240, image::Rgb([200, 160, 130]));
//! let mut analyzer = Analyzer::new(FixedFace);
//! let analysis = analyzer.analyze(&image).unwrap();
//! println!("{} ({})", analysis.season.season, analysis.colors.overall.hex);
//! ```
//!
//! With the SeetaFace detector and dlib's 68-point shape predictor on disk,
//! use [`SeetaProvider`] instead:
//!
//! ```rust,no_run
//! use tonesense::{Analyzer, DetectorConfig, SeetaProvider};
//!
//! let config = DetectorConfig {
//!     landmark_model_path: "shape_predictor_68_face_landmarks.dat.bz2".into(),
//!     ..DetectorConfig::default()
//! };
//! let provider = SeetaProvider::new(&config).unwrap();
//! let mut analyzer = Analyzer::new(provider);
//! let image = image::open("face.jpg").unwrap().to_rgb8();
//! let analysis = analyzer.analyze(&image).unwrap();
//! ```

pub mod color;
pub mod config;
pub mod detector;
pub mod dlib;
mod error;
pub mod features;
pub mod input;
pub mod mask;
pub mod model;
pub mod palette;
pub mod pipeline;
pub mod preview;
pub mod regions;
pub mod sampler;
pub mod season;
pub mod tone;
pub mod tree;
mod types;

#[cfg(feature = "http-server")]
pub mod http;

pub use color::{Color, Hsv8, Lab8};
pub use config::{DetectorConfig, Limits};
pub use detector::{LandmarkProvider, SeetaProvider};
pub use error::{Error, Result};
pub use image::RgbImage;
pub use mask::RegionMask;
pub use model::ShapePredictor;
pub use pipeline::{Analysis, AnalysisReport, AnalysisResponse, Analyzer};
pub use regions::{mean_face_shape, FaceLandmarks, Region};
pub use sampler::{AggregateColor, ColorExtraction, RegionColor};
pub use season::{Season, SeasonMatch};
pub use tone::{Contrast, Depth, ToneProfile, Undertone};
pub use types::{BoundingBox, Point, Shape};
