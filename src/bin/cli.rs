//! CLI application for skin tone and seasonal palette analysis.
//!
//! Usage:
//!   tonesense <image>                      # Human-readable output
//!   tonesense <image> --json               # JSON output
//!   tonesense <image> -o analysis.json     # Save to file
//!   tonesense <image> --preview marked.jpg # Save the annotated regions

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tonesense::{
    input::downscale, preview::annotate, AnalysisReport, Analyzer, DetectorConfig, Limits,
    SeetaProvider,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tonesense")]
#[command(author, version, about = "Skin tone and seasonal color palette analysis", long_about = None)]
struct Args {
    /// Input image file
    #[arg(required = true)]
    image: PathBuf,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the image with sampled regions highlighted
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Face detector model path
    #[arg(long, default_value = "seeta_fd_frontal_v1.0.bin")]
    detector: PathBuf,

    /// dlib 68-point landmark model (.dat or .dat.bz2)
    #[arg(long, default_value = "shape_predictor_68_face_landmarks.dat")]
    landmarks: PathBuf,

    /// Minimum face size for detection
    #[arg(long, default_value = "20")]
    min_face_size: u32,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output structure for JSON serialization
#[derive(Serialize)]
struct Output {
    image: String,
    width: u32,
    height: u32,
    analysis: AnalysisReport,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "tonesense=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    info!(detector = ?args.detector, landmarks = ?args.landmarks, "loading models");
    let config = DetectorConfig {
        model_path: args.detector.clone(),
        landmark_model_path: args.landmarks.clone(),
        min_face_size: args.min_face_size,
        ..DetectorConfig::default()
    };
    let mut analyzer = Analyzer::new(SeetaProvider::new(&config)?);

    info!(path = ?args.image, "loading image");
    let limits = Limits::default();
    let image = downscale(image::open(&args.image)?.to_rgb8(), limits.max_dimension);
    let (width, height) = image.dimensions();

    let analysis = analyzer.analyze(&image)?;

    if let Some(ref path) = args.preview {
        annotate(&image, &analysis.face).save(path)?;
        debug!(?path, "preview written");
    }

    let output = Output {
        image: args.image.display().to_string(),
        width,
        height,
        analysis: analysis.report(),
    };

    let output_str = if args.json {
        serde_json::to_string_pretty(&output)?
    } else {
        format_human_readable(&output)
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output_str)?;
        info!(?path, "output written");
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

fn format_human_readable(output: &Output) -> String {
    let report = &output.analysis;
    let mut s = String::new();

    s.push_str(&format!("Image: {} ({}x{})\n", output.image, output.width, output.height));
    s.push_str(&format!(
        "Skin color: {} (rgb {}, {}, {})\n",
        report.skin_color.hex, report.skin_color.rgb.r, report.skin_color.rgb.g, report.skin_color.rgb.b
    ));

    s.push_str("\nRegions:\n");
    for (region, color) in &report.regions {
        s.push_str(&format!("  {:<12} {} ({} px)\n", region.name(), color.hex, color.pixel_count));
    }

    s.push_str("\nTone:\n");
    s.push_str(&format!(
        "  Undertone: {:?} (warm {:.2}, cool {:.2})\n",
        report.undertone.classification, report.undertone.warm_score, report.undertone.cool_score
    ));
    s.push_str(&format!(
        "  Depth:     {:?} (L {:.1})\n",
        report.depth.level, report.depth.l_value
    ));
    s.push_str(&format!(
        "  Contrast:  {:?} (chroma {})\n",
        report.contrast.level, report.contrast.chroma
    ));

    s.push_str(&format!("\nSeason: {}\n", report.season));
    s.push_str(&format!("  {}\n", report.season_description));
    s.push_str(&format!("\nBest colors:  {}\n", report.best_colors.join(" ")));
    s.push_str(&format!("Avoid:        {}\n", report.worst_colors.join(" ")));
    s.push_str(&format!("Jewelry:      {}\n", report.jewelry_tone));
    s.push_str(&format!("Hair colors:  {}\n", report.hair_color_suggestions.join(", ")));

    s.push_str("\nClothing:\n");
    for item in report.clothing_suggestions {
        s.push_str(&format!("  - {}\n", item));
    }

    let makeup = report.makeup_palette;
    s.push_str("\nMakeup:\n");
    s.push_str(&format!("  Foundation: {}\n", makeup.foundation));
    s.push_str(&format!("  Blush:      {}\n", makeup.blush));
    s.push_str(&format!("  Lips:       {}\n", makeup.lips));
    s.push_str(&format!("  Eyes:       {}\n", makeup.eyes));
    s.push_str(&format!("  Avoid:      {}\n", makeup.avoid));

    s
}
