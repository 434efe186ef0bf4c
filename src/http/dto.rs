//! Request and response bodies that only exist at the HTTP boundary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Body of `POST /api/analyze-base64`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Base64ImageRequest {
    /// Base64 image, optionally prefixed with `data:image/...;base64,`
    #[serde(default)]
    pub image: String,
}
