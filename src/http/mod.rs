//! HTTP server exposing the analysis pipeline as a REST API.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  axum handlers                               │
//! │  - multipart / base64 parsing                │
//! │  - JSON responses, CORS, error mapping       │
//! └──────────────────────┬───────────────────────┘
//!                        │ channel + oneshot reply
//! ┌──────────────────────▼───────────────────────┐
//! │  AnalysisWorker thread                       │
//! │  - owns the landmark provider                │
//! │  - decode, analyze, render preview           │
//! └──────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod worker;

pub use router::create_router;
pub use state::AppState;
pub use worker::{AnalysisWorker, WorkerHandle};
