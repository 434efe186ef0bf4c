//! The four analysis stages wired together.
//!
//! ```text
//! image -> landmarks/regions -> skin color -> tone levels -> season
//! ```

use std::collections::BTreeMap;

use image::RgbImage;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Limits;
use crate::detector::LandmarkProvider;
use crate::error::{Error, Result};
use crate::input::decode_image;
use crate::palette::MakeupPalette;
use crate::preview::render_preview;
use crate::regions::{FaceLandmarks, Region};
use crate::sampler::{self, AggregateColor, ColorExtraction, RegionColor};
use crate::season::{self, Season, SeasonMatch};
use crate::tone::{self, ContrastResult, DepthResult, ToneProfile, UndertoneResult};

/// Runs the full pipeline with an injected landmark provider.
pub struct Analyzer<P> {
    provider: P,
}

impl<P: LandmarkProvider> Analyzer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Analyze a decoded RGB image.
    pub fn analyze(&mut self, image: &RgbImage) -> Result<Analysis> {
        let (width, height) = image.dimensions();
        debug!(width, height, "detecting face");

        let face = self.provider.detect(image).ok_or(Error::NoFaceDetected)?;
        let colors = sampler::extract(image, &face.regions, &face.face_mask)?;
        debug!(
            regions = colors.regions.len(),
            skin = %colors.overall.hex,
            "skin color extracted"
        );

        let tone = tone::classify(&colors.overall);
        let season = season::classify(&tone, &colors.overall);
        info!(
            season = %season.season,
            undertone = ?tone.undertone.classification,
            depth = ?tone.depth.level,
            contrast = ?tone.contrast.level,
            "analysis complete"
        );

        Ok(Analysis {
            face,
            colors,
            tone,
            season,
        })
    }

    /// Decode, bound, analyze and render the preview for an encoded upload.
    pub fn analyze_encoded(&mut self, bytes: &[u8], limits: &Limits) -> Result<AnalysisResponse> {
        let image = decode_image(bytes, limits)?;
        let analysis = self.analyze(&image)?;
        let preview = render_preview(&image, &analysis.face)?;
        Ok(AnalysisResponse {
            success: true,
            analysis: analysis.report(),
            preview,
        })
    }
}

/// Everything derived from one image.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub face: FaceLandmarks,
    pub colors: ColorExtraction,
    pub tone: ToneProfile,
    pub season: SeasonMatch,
}

impl Analysis {
    /// Flatten into the report layout used by the JSON outputs.
    pub fn report(&self) -> AnalysisReport {
        let profile = self.season.profile;
        AnalysisReport {
            skin_color: self.colors.overall.clone(),
            regions: self.colors.regions.clone(),
            undertone: self.tone.undertone.clone(),
            depth: self.tone.depth.clone(),
            contrast: self.tone.contrast.clone(),
            season: self.season.season,
            season_description: profile.description,
            best_colors: &profile.best_colors,
            worst_colors: &profile.worst_colors,
            clothing_suggestions: &profile.clothing,
            jewelry_tone: profile.jewelry,
            hair_color_suggestions: &profile.hair_colors,
            makeup_palette: &profile.makeup,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub skin_color: AggregateColor,
    pub regions: BTreeMap<Region, RegionColor>,
    pub undertone: UndertoneResult,
    pub depth: DepthResult,
    pub contrast: ContrastResult,
    pub season: Season,
    pub season_description: &'static str,
    pub best_colors: &'static [&'static str],
    pub worst_colors: &'static [&'static str],
    pub clothing_suggestions: &'static [&'static str],
    pub jewelry_tone: &'static str,
    pub hair_color_suggestions: &'static [&'static str],
    pub makeup_palette: &'static MakeupPalette,
}

/// Successful response body of the analyze endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub analysis: AnalysisReport,
    pub preview: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::mean_face_shape;
    use crate::types::BoundingBox;

    struct FixedFace(Option<BoundingBox>);

    impl LandmarkProvider for FixedFace {
        fn detect(&mut self, image: &RgbImage) -> Option<FaceLandmarks> {
            let (width, height) = image.dimensions();
            let rect = self.0?;
            FaceLandmarks::from_shape(mean_face_shape(&rect), width, height)
        }
    }

    fn skin_image(rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(200, 240, image::Rgb(rgb))
    }

    fn analyzer() -> Analyzer<FixedFace> {
        Analyzer::new(FixedFace(Some(BoundingBox::new(40.0, 30.0, 120.0, 120.0))))
    }

    #[test]
    fn missing_face_is_reported() {
        let mut analyzer = Analyzer::new(FixedFace(None));
        assert!(matches!(
            analyzer.analyze(&skin_image([200, 160, 130])),
            Err(Error::NoFaceDetected)
        ));
    }

    #[test]
    fn uniform_skin_flows_through_every_stage() {
        let analysis = analyzer().analyze(&skin_image([200, 160, 130])).unwrap();

        assert_eq!(analysis.colors.overall.hex, "#c8a082");
        for region in [Region::Forehead, Region::LeftCheek, Region::RightCheek, Region::Jawline] {
            assert_eq!(analysis.colors.regions[&region].hex, "#c8a082", "{}", region);
        }
        assert_eq!(analysis.tone, tone::classify(&analysis.colors.overall));
        assert_eq!(
            analysis.season.season,
            season::determine_season(
                analysis.tone.undertone.classification,
                analysis.tone.depth.level,
                analysis.tone.contrast.level,
            )
        );
    }

    #[test]
    fn report_carries_the_season_profile() {
        let analysis = analyzer().analyze(&skin_image([200, 160, 130])).unwrap();
        let report = analysis.report();
        let profile = analysis.season.season.profile();

        assert_eq!(report.season_description, profile.description);
        assert_eq!(report.best_colors.len(), 12);
        assert_eq!(report.worst_colors.len(), 6);
        assert_eq!(report.clothing_suggestions.len(), 6);
        assert_eq!(report.hair_color_suggestions.len(), 5);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["skin_color"]["hex"], "#c8a082");
        assert_eq!(json["skin_color"]["rgb"], serde_json::json!([200, 160, 130]));
        assert!(json["regions"]["forehead"]["pixel_count"].as_u64().unwrap() > 10);
        assert!(json["makeup_palette"]["foundation"].is_string());
    }

    #[test]
    fn encoded_upload_produces_preview() {
        let mut png = Vec::new();
        skin_image([200, 160, 130])
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let response = analyzer().analyze_encoded(&png, &Limits::default()).unwrap();
        assert!(response.success);
        assert!(response.preview.starts_with("data:image/jpeg;base64,"));
        assert_eq!(response.analysis.skin_color.hex, "#c8a082");
    }
}
