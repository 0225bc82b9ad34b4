//! Shared pieces of the heuristic rubrics.

use serde::{Deserialize, Serialize};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// A heuristic scorer over the résumé text. Implement this to swap a rubric
/// without touching the aggregator.
pub trait Scorer: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Raw, unclamped rubric total.
    fn raw_score(&self, resume_text: &str) -> f64;

    /// Rubric total clamped to 0–100 and rounded.
    fn score(&self, resume_text: &str) -> u32 {
        finalize(self.raw_score(resume_text))
    }
}

/// Clamps to 0–100 and rounds half away from zero.
pub fn finalize(raw: f64) -> u32 {
    raw.clamp(MIN_SCORE, MAX_SCORE).round() as u32
}

/// Fraction of `terms` that occur as substrings of `haystack_lower`.
pub(crate) fn coverage(haystack_lower: &str, terms: &[&str]) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }
    let found = terms.iter().filter(|t| haystack_lower.contains(*t)).count();
    found as f64 / terms.len() as f64
}

/// Display band for a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn of(score: u32) -> Self {
        match score {
            s if s >= 80 => ScoreBand::Excellent,
            s if s >= 60 => ScoreBand::Good,
            _ => ScoreBand::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsImprovement => "Needs Improvement",
        }
    }
}
