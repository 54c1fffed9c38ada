//! Relevance score banding and formatting.
//!
//! Scores come from vector similarity and are expected in `[0, 1]`, but the
//! retriever does not always produce one. A missing or non-finite score is
//! treated as `0` for banding and shown as `"N/A"`.

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the high band.
pub const HIGH_THRESHOLD: f64 = 0.8;

/// Lower bound (inclusive) of the medium band.
pub const MEDIUM_THRESHOLD: f64 = 0.6;

/// Text shown in place of a missing score.
pub const MISSING_SCORE: &str = "N/A";

/// Coarse relevance category used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelevanceBand {
    /// Score >= 0.8
    High,
    /// 0.6 <= score < 0.8
    Medium,
    /// Everything else, including missing scores
    Low,
}

impl RelevanceBand {
    /// Badge color scheme hint for the band.
    pub fn color_scheme(&self) -> &'static str {
        match self {
            Self::High => "green",
            Self::Medium => "yellow",
            Self::Low => "orange",
        }
    }
}

impl std::fmt::Display for RelevanceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

fn usable(score: Option<f64>) -> Option<f64> {
    score.filter(|s| s.is_finite())
}

/// Classify a score into a display band.
pub fn classify(score: Option<f64>) -> RelevanceBand {
    let score = usable(score).unwrap_or(0.0);
    if score >= HIGH_THRESHOLD {
        RelevanceBand::High
    } else if score >= MEDIUM_THRESHOLD {
        RelevanceBand::Medium
    } else {
        RelevanceBand::Low
    }
}

/// Format a score as a whole percentage, or `"N/A"` when unusable.
///
/// Halves round up (`0.125` becomes `"13%"`).
pub fn format_score(score: Option<f64>) -> String {
    match usable(score) {
        Some(score) => format!("{}%", (score * 100.0 + 0.5).floor()),
        None => MISSING_SCORE.to_string(),
    }
}

/// Badge text shown next to a citation, e.g. `"92% match"`.
pub fn relevance_badge(score: Option<f64>) -> String {
    format!("{} match", format_score(score))
}
