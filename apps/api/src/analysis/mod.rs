//! Résumé analysis engine.
//!
//! Turns a résumé and an optional job description (both already extracted to
//! plain text) into an `AnalysisResult`: three rubric sub-scores, their mean,
//! matched and missing keywords, and improvement suggestions.
//!
//! Everything here is pure and synchronous. The only shared value is the
//! compiled keyword table, built once and read-only afterwards.

pub mod content;
pub mod error;
pub mod formatting;
pub mod frequency;
pub mod matching;
pub mod patterns;
pub mod rubric;
pub mod structure;
pub mod suggestions;
pub mod taxonomy;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use crate::analysis::error::AnalysisError;
use crate::analysis::frequency::FrequencyMap;
use crate::analysis::matching::KeywordProfile;
use crate::analysis::patterns::KeywordRules;
pub use crate::analysis::rubric::{ScoreBand, Scorer};

/// Full assessment of one résumé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: u32,
    pub overall_band: ScoreBand,
    /// Ranked; at most 20 entries.
    pub keyword_matches: Vec<String>,
    /// Ranked; at most 10 entries, empty without a job description.
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub structure_score: u32,
    pub content_score: u32,
    pub formatting_score: u32,
}

/// Runs the keyword analysis and the three rubrics.
pub struct ResumeAnalyzer {
    rules: &'static KeywordRules,
    structure: Box<dyn Scorer>,
    content: Box<dyn Scorer>,
    formatting: Box<dyn Scorer>,
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self {
            rules: KeywordRules::builtin(),
            structure: Box::new(structure::StructureScorer),
            content: Box::new(content::ContentScorer),
            formatting: Box::new(formatting::FormattingScorer),
        }
    }
}

impl ResumeAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rubric scorers, keeping the keyword table.
    pub fn with_scorers(
        structure: Box<dyn Scorer>,
        content: Box<dyn Scorer>,
        formatting: Box<dyn Scorer>,
    ) -> Self {
        Self {
            rules: KeywordRules::builtin(),
            structure,
            content,
            formatting,
        }
    }

    /// Frequency maps for the résumé and, when non-blank, the job description.
    pub fn keyword_profile(&self, resume_text: &str, job_description: &str) -> KeywordProfile {
        let job = job_description.trim();
        KeywordProfile {
            resume: FrequencyMap::count(self.rules, resume_text),
            job: (!job.is_empty()).then(|| FrequencyMap::count(self.rules, job)),
        }
    }

    /// Scores `resume_text`, comparing it against `job_description` when that
    /// is non-blank.
    ///
    /// Fails with `AnalysisError::InvalidInput` when the résumé is blank.
    pub fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        if resume_text.trim().is_empty() {
            return Err(AnalysisError::InvalidInput);
        }

        let profile = self.keyword_profile(resume_text, job_description);
        let keyword_matches = profile.matches();
        let missing_keywords = profile.missing();

        let structure_score = run_scorer(self.structure.as_ref(), resume_text);
        let content_score = run_scorer(self.content.as_ref(), resume_text);
        let formatting_score = run_scorer(self.formatting.as_ref(), resume_text);

        let suggestions = suggestions::generate(
            structure_score,
            content_score,
            formatting_score,
            missing_keywords.len(),
        );

        let overall_score = overall(structure_score, content_score, formatting_score);
        let overall_band = ScoreBand::of(overall_score);

        debug!(
            overall_score,
            band = overall_band.label(),
            structure = structure_score,
            content = content_score,
            formatting = formatting_score,
            matched = keyword_matches.len(),
            missing = missing_keywords.len(),
            has_job_description = profile.job.is_some(),
            "Resume analyzed"
        );

        Ok(AnalysisResult {
            overall_score,
            overall_band,
            keyword_matches,
            missing_keywords,
            suggestions,
            structure_score,
            content_score,
            formatting_score,
        })
    }
}

fn run_scorer(scorer: &dyn Scorer, resume_text: &str) -> u32 {
    let score = scorer.score(resume_text);
    trace!(scorer = scorer.name(), score, "Rubric scored");
    score
}

/// Mean of the three sub-scores, rounded half away from zero.
pub fn overall(structure: u32, content: u32, formatting: u32) -> u32 {
    (f64::from(structure + content + formatting) / 3.0).round() as u32
}

/// Analyzes with the built-in taxonomy and rubrics.
pub fn analyze(resume_text: &str, job_description: &str) -> Result<AnalysisResult, AnalysisError> {
    ResumeAnalyzer::default().analyze(resume_text, job_description)
}
