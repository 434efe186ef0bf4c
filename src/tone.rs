//! Undertone, depth and contrast classification of an average skin color.

use serde::{Deserialize, Serialize};

use crate::sampler::AggregateColor;

/// Warm fraction above which the undertone is warm.
const WARM_ABOVE: f64 = 0.60;
/// Warm fraction below which the undertone is cool.
const COOL_BELOW: f64 = 0.40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

impl Undertone {
    /// Classify a warm fraction in [0, 1]. Both boundaries are neutral.
    pub fn from_warm_fraction(fraction: f64) -> Self {
        if fraction > WARM_ABOVE {
            Undertone::Warm
        } else if fraction < COOL_BELOW {
            Undertone::Cool
        } else {
            Undertone::Neutral
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Undertone::Warm => {
                "Your skin has warm undertones with golden, peachy, or yellow hues. \
                 Veins on your wrist likely appear green or olive. \
                 You tend to look best in earthy, warm colors like coral, cream, and olive."
            }
            Undertone::Cool => {
                "Your skin has cool undertones with pink, red, or bluish hues. \
                 Veins on your wrist likely appear blue or purple. \
                 You tend to look best in jewel tones, blues, and true pinks."
            }
            Undertone::Neutral => {
                "Your skin has a balanced mix of warm and cool undertones. \
                 Your veins may appear blue-green. \
                 You have the versatility to wear both warm and cool colors beautifully."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Light,
    Medium,
    Deep,
}

impl Depth {
    /// Classify L* on its 0-100 scale.
    pub fn from_lightness(lightness: f64) -> Self {
        if lightness >= 70.0 {
            Depth::Light
        } else if lightness >= 45.0 {
            Depth::Medium
        } else {
            Depth::Deep
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Depth::Light => {
                "Light skin depth — your skin has a high reflectance and appears fair or light."
            }
            Depth::Medium => {
                "Medium skin depth — your skin has a balanced lightness, neither very fair nor very deep."
            }
            Depth::Deep => {
                "Deep skin depth — your skin has rich, deep pigmentation with lower lightness values."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contrast {
    Low,
    Medium,
    High,
}

impl Contrast {
    /// Base level from L* (0-100), refined by channel chroma.
    pub fn from_lightness_and_chroma(lightness: f64, chroma: u8) -> Self {
        let base = if lightness > 75.0 || lightness < 35.0 {
            Contrast::High
        } else if (50.0..=70.0).contains(&lightness) {
            Contrast::Medium
        } else {
            Contrast::Low
        };

        match base {
            Contrast::Low if chroma > 60 => Contrast::Medium,
            Contrast::High if chroma < 25 => Contrast::Medium,
            level => level,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Contrast::Low => {
                "Low contrast — your overall coloring is soft and muted. Gentle, blended colors suit you best."
            }
            Contrast::Medium => {
                "Medium contrast — you have a balanced level of contrast. Both soft and moderately vivid colors work well."
            }
            Contrast::High => {
                "High contrast — your features have high contrast. Bold, vivid, and rich colors complement you."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndertoneResult {
    pub classification: Undertone,
    /// Warm fraction, rounded to 2 decimals.
    pub warm_score: f64,
    /// `1 - warm fraction`, rounded to 2 decimals.
    pub cool_score: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthResult {
    pub level: Depth,
    /// L* on 0-100, rounded to 1 decimal.
    pub l_value: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    pub level: Contrast,
    pub chroma: u8,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneProfile {
    pub undertone: UndertoneResult,
    pub depth: DepthResult,
    pub contrast: ContrastResult,
}

/// Classify undertone, depth and contrast of an average skin color.
pub fn classify(color: &AggregateColor) -> ToneProfile {
    ToneProfile {
        undertone: classify_undertone(color),
        depth: classify_depth(color),
        contrast: classify_contrast(color),
    }
}

/// Warm fraction from four additive cues.
pub fn warm_fraction(color: &AggregateColor) -> f64 {
    let mut warm = 0.0;
    let mut cool = 0.0;

    // yellow/blue axis
    let b = color.lab.b_centered();
    if b > 5 {
        warm += 2.0;
    } else if b < -5 {
        cool += 2.0;
    } else {
        warm += 0.5;
        cool += 0.5;
    }

    // red/green axis: strong red reads pink (cool), mild red reads peach (warm)
    let a = color.lab.a_centered();
    if a > 10 {
        cool += 1.5;
    } else if a > 3 {
        warm += 0.5;
    } else {
        cool += 0.5;
    }

    let hue = color.hsv.h;
    if (10..=30).contains(&hue) {
        warm += 1.0;
    } else if hue < 10 || hue > 160 {
        cool += 1.0;
    }

    let (r, bl) = (color.rgb.r as i32, color.rgb.b as i32);
    if r > bl + 15 {
        warm += 1.0;
    } else if bl > r + 15 {
        cool += 1.0;
    }

    let total = warm + cool;
    if total > 0.0 {
        warm / total
    } else {
        0.5
    }
}

fn classify_undertone(color: &AggregateColor) -> UndertoneResult {
    let fraction = warm_fraction(color);
    let classification = Undertone::from_warm_fraction(fraction);
    UndertoneResult {
        classification,
        warm_score: round_to(fraction, 2),
        cool_score: round_to(1.0 - fraction, 2),
        explanation: classification.explanation().to_string(),
    }
}

fn classify_depth(color: &AggregateColor) -> DepthResult {
    let lightness = color.lab.lightness();
    let level = Depth::from_lightness(lightness);
    DepthResult {
        level,
        l_value: round_to(lightness, 1),
        description: level.description().to_string(),
    }
}

fn classify_contrast(color: &AggregateColor) -> ContrastResult {
    let chroma = color.rgb.chroma();
    let level = Contrast::from_lightness_and_chroma(color.lab.lightness(), chroma);
    ContrastResult {
        level,
        chroma,
        description: level.description().to_string(),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, Hsv8, Lab8};

    fn color_with(rgb: Color, lab: [u8; 3], hsv: [u8; 3]) -> AggregateColor {
        AggregateColor {
            rgb,
            lab: Lab8::from(lab),
            hex: rgb.hex(),
            hsv: Hsv8::from(hsv),
        }
    }

    #[test]
    fn undertone_boundaries_are_neutral() {
        assert_eq!(Undertone::from_warm_fraction(0.60), Undertone::Neutral);
        assert_eq!(Undertone::from_warm_fraction(0.40), Undertone::Neutral);
        assert_eq!(Undertone::from_warm_fraction(0.61), Undertone::Warm);
        assert_eq!(Undertone::from_warm_fraction(0.39), Undertone::Cool);
        assert_eq!(Undertone::from_warm_fraction(1.0), Undertone::Warm);
        assert_eq!(Undertone::from_warm_fraction(0.0), Undertone::Cool);
    }

    #[test]
    fn depth_boundaries() {
        assert_eq!(Depth::from_lightness(70.0), Depth::Light);
        assert_eq!(Depth::from_lightness(69.99), Depth::Medium);
        assert_eq!(Depth::from_lightness(45.0), Depth::Medium);
        assert_eq!(Depth::from_lightness(44.99), Depth::Deep);
    }

    #[test]
    fn contrast_base_levels() {
        assert_eq!(Contrast::from_lightness_and_chroma(80.0, 40), Contrast::High);
        assert_eq!(Contrast::from_lightness_and_chroma(30.0, 40), Contrast::High);
        assert_eq!(Contrast::from_lightness_and_chroma(50.0, 40), Contrast::Medium);
        assert_eq!(Contrast::from_lightness_and_chroma(70.0, 40), Contrast::Medium);
        assert_eq!(Contrast::from_lightness_and_chroma(72.0, 40), Contrast::Low);
        assert_eq!(Contrast::from_lightness_and_chroma(40.0, 40), Contrast::Low);
    }

    #[test]
    fn contrast_chroma_refinement() {
        assert_eq!(Contrast::from_lightness_and_chroma(40.0, 61), Contrast::Medium);
        assert_eq!(Contrast::from_lightness_and_chroma(40.0, 60), Contrast::Low);
        assert_eq!(Contrast::from_lightness_and_chroma(80.0, 24), Contrast::Medium);
        assert_eq!(Contrast::from_lightness_and_chroma(80.0, 25), Contrast::High);
        // medium is never refined
        assert_eq!(Contrast::from_lightness_and_chroma(60.0, 200), Contrast::Medium);
        assert_eq!(Contrast::from_lightness_and_chroma(60.0, 0), Contrast::Medium);
    }

    #[test]
    fn all_warm_cues() {
        // b* +20, a* +8, hue 15, red well above blue
        let color = color_with(Color::new(200, 150, 110), [180, 136, 148], [15, 115, 200]);
        assert_eq!(warm_fraction(&color), 1.0);

        let profile = classify(&color);
        assert_eq!(profile.undertone.classification, Undertone::Warm);
        assert_eq!(profile.undertone.warm_score, 1.0);
        assert_eq!(profile.undertone.cool_score, 0.0);
        assert_eq!(profile.undertone.explanation, Undertone::Warm.explanation());
    }

    #[test]
    fn all_cool_cues() {
        // b* -10, a* +15, hue 170, blue well above red
        let color = color_with(Color::new(120, 110, 160), [130, 143, 118], [170, 80, 160]);
        assert_eq!(warm_fraction(&color), 0.0);
        assert_eq!(classify(&color).undertone.classification, Undertone::Cool);
    }

    #[test]
    fn mixed_cues_are_additive() {
        // b* neutral (+0.5/+0.5), a* +5 (warm +0.5), hue 40 (nothing), r - b = 10 (nothing)
        let color = color_with(Color::new(150, 140, 140), [160, 133, 130], [40, 17, 150]);
        // warm 1.0, cool 0.5
        let fraction = warm_fraction(&color);
        assert!((fraction - 2.0 / 3.0).abs() < 1e-12);

        let undertone = classify(&color).undertone;
        assert_eq!(undertone.classification, Undertone::Warm);
        assert_eq!(undertone.warm_score, 0.67);
        assert_eq!(undertone.cool_score, 0.33);
    }

    #[test]
    fn warm_fraction_stays_in_unit_interval() {
        for r in (0..=255u16).step_by(51) {
            for g in (0..=255u16).step_by(51) {
                for b in (0..=255u16).step_by(51) {
                    let color = AggregateColor::from_rgb(Color::new(r as u8, g as u8, b as u8));
                    let f = warm_fraction(&color);
                    assert!((0.0..=1.0).contains(&f), "{:?} -> {}", color.rgb, f);
                }
            }
        }
    }

    #[test]
    fn depth_and_contrast_from_color() {
        // L 204/255 = 80.0
        let color = color_with(Color::new(230, 200, 180), [204, 133, 140], [12, 56, 230]);
        let profile = classify(&color);
        assert_eq!(profile.depth.level, Depth::Light);
        assert_eq!(profile.depth.l_value, 80.0);
        assert_eq!(profile.contrast.chroma, 50);
        assert_eq!(profile.contrast.level, Contrast::High);
        assert_eq!(profile.contrast.description, Contrast::High.description());
    }

    #[test]
    fn serializes_levels_lowercase() {
        let color = AggregateColor::from_rgb(Color::new(198, 134, 66));
        let json = serde_json::to_value(classify(&color)).unwrap();
        assert!(json["undertone"]["classification"].is_string());
        assert_eq!(json["depth"]["level"], "medium");
    }
}
