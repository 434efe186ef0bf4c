use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(image::ImageError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to load face detector: {0}")]
    DetectorLoad(String),

    #[error("Invalid landmark model: {0}")]
    InvalidModel(String),

    #[error("No face detected. Please upload a clear, well-lit photo with your face visible.")]
    NoFaceDetected,

    #[error("Could not extract skin color from any region")]
    NoSkinColorExtracted,

    #[error("Analysis worker is not running")]
    WorkerUnavailable,
}

/// Decoding failures are the caller's fault; everything else is ours.
impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Decoding(e) => Error::InvalidInput(format!("Could not decode image: {}", e)),
            image::ImageError::Unsupported(e) => Error::InvalidInput(format!("Unsupported image: {}", e)),
            other => Error::Image(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
