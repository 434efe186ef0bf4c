//! Seasonal palette selection.
//!
//! Every season is scored from the undertone, depth and contrast levels and
//! the highest score wins. Ties go to the season listed first in
//! [`Season::ALL`] (springs, summers, autumns, winters).

use serde::{Deserialize, Serialize};

use crate::palette::{self, SeasonProfile};
use crate::sampler::AggregateColor;
use crate::tone::{Contrast, Depth, ToneProfile, Undertone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    #[serde(rename = "Light Spring")]
    LightSpring,
    #[serde(rename = "True Spring")]
    TrueSpring,
    #[serde(rename = "Deep Spring")]
    DeepSpring,
    #[serde(rename = "Light Summer")]
    LightSummer,
    #[serde(rename = "True Summer")]
    TrueSummer,
    #[serde(rename = "Soft Summer")]
    SoftSummer,
    #[serde(rename = "Soft Autumn")]
    SoftAutumn,
    #[serde(rename = "True Autumn")]
    TrueAutumn,
    #[serde(rename = "Deep Autumn")]
    DeepAutumn,
    #[serde(rename = "Light Winter")]
    LightWinter,
    #[serde(rename = "True Winter")]
    TrueWinter,
    #[serde(rename = "Deep Winter")]
    DeepWinter,
}

impl Season {
    /// Canonical order; also the tie-break priority.
    pub const ALL: [Season; 12] = [
        Season::LightSpring,
        Season::TrueSpring,
        Season::DeepSpring,
        Season::LightSummer,
        Season::TrueSummer,
        Season::SoftSummer,
        Season::SoftAutumn,
        Season::TrueAutumn,
        Season::DeepAutumn,
        Season::LightWinter,
        Season::TrueWinter,
        Season::DeepWinter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Season::LightSpring => "Light Spring",
            Season::TrueSpring => "True Spring",
            Season::DeepSpring => "Deep Spring",
            Season::LightSummer => "Light Summer",
            Season::TrueSummer => "True Summer",
            Season::SoftSummer => "Soft Summer",
            Season::SoftAutumn => "Soft Autumn",
            Season::TrueAutumn => "True Autumn",
            Season::DeepAutumn => "Deep Autumn",
            Season::LightWinter => "Light Winter",
            Season::TrueWinter => "True Winter",
            Season::DeepWinter => "Deep Winter",
        }
    }

    pub fn profile(&self) -> &'static SeasonProfile {
        match self {
            Season::LightSpring => &palette::LIGHT_SPRING,
            Season::TrueSpring => &palette::TRUE_SPRING,
            Season::DeepSpring => &palette::DEEP_SPRING,
            Season::LightSummer => &palette::LIGHT_SUMMER,
            Season::TrueSummer => &palette::TRUE_SUMMER,
            Season::SoftSummer => &palette::SOFT_SUMMER,
            Season::SoftAutumn => &palette::SOFT_AUTUMN,
            Season::TrueAutumn => &palette::TRUE_AUTUMN,
            Season::DeepAutumn => &palette::DEEP_AUTUMN,
            Season::LightWinter => &palette::LIGHT_WINTER,
            Season::TrueWinter => &palette::TRUE_WINTER,
            Season::DeepWinter => &palette::DEEP_WINTER,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Score per season, indexed by position in [`Season::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeasonScores([u32; 12]);

impl SeasonScores {
    pub fn get(&self, season: Season) -> u32 {
        self.0[season as usize]
    }

    fn add(&mut self, season: Season, points: u32) {
        self.0[season as usize] += points;
    }

    /// Highest-scoring season; the earliest in canonical order wins ties.
    pub fn best(&self) -> Season {
        let mut best = Season::ALL[0];
        for season in Season::ALL {
            if self.get(season) > self.get(best) {
                best = season;
            }
        }
        best
    }
}

/// Score all twelve seasons for the given levels.
pub fn score(undertone: Undertone, depth: Depth, contrast: Contrast) -> SeasonScores {
    use Season::*;

    let mut scores = SeasonScores::default();
    let bonus = |target: Depth, hit: u32, miss: u32| if depth == target { hit } else { miss };

    match undertone {
        Undertone::Warm => {
            scores.add(LightSpring, bonus(Depth::Light, 3, 0));
            scores.add(TrueSpring, bonus(Depth::Medium, 3, 1));
            scores.add(DeepSpring, bonus(Depth::Deep, 3, 1));
            scores.add(SoftAutumn, 1);
            scores.add(TrueAutumn, bonus(Depth::Medium, 3, 1));
            scores.add(DeepAutumn, bonus(Depth::Deep, 3, 1));
        }
        Undertone::Cool => {
            scores.add(LightSummer, bonus(Depth::Light, 3, 0));
            scores.add(TrueSummer, bonus(Depth::Medium, 3, 1));
            scores.add(SoftSummer, 1);
            scores.add(LightWinter, bonus(Depth::Light, 3, 0));
            scores.add(TrueWinter, bonus(Depth::Medium, 3, 1));
            scores.add(DeepWinter, bonus(Depth::Deep, 3, 1));
        }
        Undertone::Neutral => {
            scores.add(SoftSummer, 2);
            scores.add(SoftAutumn, 2);
            scores.add(LightSpring, bonus(Depth::Light, 1, 0));
            scores.add(LightSummer, bonus(Depth::Light, 1, 0));
            scores.add(TrueSummer, bonus(Depth::Medium, 1, 0));
            scores.add(TrueAutumn, bonus(Depth::Medium, 1, 0));
        }
    }

    match contrast {
        Contrast::High => {
            scores.add(TrueWinter, 2);
            scores.add(DeepWinter, 2);
            scores.add(DeepSpring, 1);
            scores.add(DeepAutumn, 1);
            scores.add(TrueSpring, 1);
        }
        Contrast::Low => {
            scores.add(SoftSummer, 2);
            scores.add(SoftAutumn, 2);
            scores.add(LightSummer, 1);
            scores.add(LightSpring, 1);
        }
        Contrast::Medium => {
            scores.add(TrueSummer, 1);
            scores.add(TrueAutumn, 1);
            scores.add(TrueSpring, 1);
            scores.add(LightWinter, 1);
        }
    }

    match depth {
        Depth::Light => {
            scores.add(LightSpring, 1);
            scores.add(LightSummer, 1);
            scores.add(LightWinter, 1);
        }
        Depth::Deep => {
            scores.add(DeepSpring, 1);
            scores.add(DeepAutumn, 1);
            scores.add(DeepWinter, 1);
        }
        Depth::Medium => {}
    }

    scores
}

/// Pick the season for a set of levels.
pub fn determine_season(undertone: Undertone, depth: Depth, contrast: Contrast) -> Season {
    score(undertone, depth, contrast).best()
}

/// The selected season together with its recommendations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonMatch {
    pub season: Season,
    pub profile: &'static SeasonProfile,
}

/// Select the season for a tone profile.
///
/// Only the classified levels are scored; the color itself is not consulted.
pub fn classify(tone: &ToneProfile, _color: &AggregateColor) -> SeasonMatch {
    let season = determine_season(
        tone.undertone.classification,
        tone.depth.level,
        tone.contrast.level,
    );
    SeasonMatch {
        season,
        profile: season.profile(),
    }
}
