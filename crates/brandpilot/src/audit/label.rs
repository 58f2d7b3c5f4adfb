use serde::Serialize;

/// Qualitative band of an audit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Priority,
    NeedsWork,
    Good,
    Excellent,
}

impl ScoreBand {
    /// Out-of-range scores land in the nearest band.
    pub const fn from_score(score: i32) -> Self {
        if score >= 85 {
            Self::Excellent
        } else if score >= 70 {
            Self::Good
        } else if score >= 40 {
            Self::NeedsWork
        } else {
            Self::Priority
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Priority => "Prioritaire",
            Self::NeedsWork => "À améliorer",
            Self::Good => "Bien",
            Self::Excellent => "Excellent",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Priority => "🔴",
            Self::NeedsWork => "🟠",
            Self::Good => "🟢",
            Self::Excellent => "🌟",
        }
    }

    pub const fn color_tag(self) -> &'static str {
        match self {
            Self::Priority => "red",
            Self::NeedsWork => "orange",
            Self::Good => "green",
            Self::Excellent => "emerald",
        }
    }
}

/// Display descriptor for a score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreLabel {
    pub band: ScoreBand,
    pub label: &'static str,
    pub emoji: &'static str,
    pub color_tag: &'static str,
}

impl From<ScoreBand> for ScoreLabel {
    fn from(band: ScoreBand) -> Self {
        Self {
            band,
            label: band.label(),
            emoji: band.emoji(),
            color_tag: band.color_tag(),
        }
    }
}

pub fn score_label(score: i32) -> ScoreLabel {
    ScoreBand::from_score(score).into()
}
