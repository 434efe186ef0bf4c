//! tonesense HTTP Server Binary
//!
//! Serves the analysis pipeline as a REST API and, optionally, the built
//! frontend from a static directory.
//!
//! # Usage
//!
//! ```bash
//! tonesense-server --detector seeta_fd_frontal_v1.0.bin \
//!     --landmarks shape_predictor_68_face_landmarks.dat --static-dir frontend/dist
//! ```
//!
//! # Environment Variables
//!
//! - `TONESENSE_HOST`: Server host (default: 0.0.0.0)
//! - `TONESENSE_PORT`: Server port (default: 8000)
//! - `TONESENSE_DETECTOR`: SeetaFace model path
//! - `TONESENSE_LANDMARKS`: dlib 68-point landmark model path
//! - `TONESENSE_STATIC_DIR`: Frontend directory to serve
//! - `TONESENSE_MIN_FACE_SIZE`: Minimum face size for detection
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tonesense::http::{create_router, AnalysisWorker, AppState};
use tonesense::{DetectorConfig, Limits, SeetaProvider};

#[derive(Parser, Debug)]
#[command(name = "tonesense-server")]
#[command(author, version, about = "Skin tone analysis REST API", long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, env = "TONESENSE_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "TONESENSE_PORT", default_value = "8000")]
    port: u16,

    /// Face detector model path
    #[arg(long, env = "TONESENSE_DETECTOR", default_value = "seeta_fd_frontal_v1.0.bin")]
    detector: PathBuf,

    /// dlib 68-point landmark model (.dat or .dat.bz2)
    #[arg(
        long,
        env = "TONESENSE_LANDMARKS",
        default_value = "shape_predictor_68_face_landmarks.dat"
    )]
    landmarks: PathBuf,

    /// Directory with the built frontend (index.html and assets)
    #[arg(long, env = "TONESENSE_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Minimum face size for detection
    #[arg(long, env = "TONESENSE_MIN_FACE_SIZE", default_value = "20")]
    min_face_size: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting tonesense HTTP Server");

    let config = DetectorConfig {
        model_path: args.detector.clone(),
        landmark_model_path: args.landmarks.clone(),
        min_face_size: args.min_face_size,
        ..DetectorConfig::default()
    };
    let limits = Limits::default();
    let worker = AnalysisWorker::spawn(move || SeetaProvider::new(&config), limits)?;
    info!(detector = ?args.detector, landmarks = ?args.landmarks, "Face models loaded");

    let static_dir = match args.static_dir {
        Some(dir) if dir.join("index.html").is_file() => Some(dir),
        Some(dir) => {
            warn!(?dir, "static directory has no index.html, frontend disabled");
            None
        }
        None => None,
    };

    let app = create_router(AppState::new(worker.handle()), &limits, static_dir.as_deref());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/api/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Stopping analysis worker");
    tokio::task::spawn_blocking(move || worker.shutdown()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
