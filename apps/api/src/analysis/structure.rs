//! Structure rubric: section headings, contact details, bullets, dates.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::rubric::{coverage, Scorer};

pub const SECTION_TERMS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "achievements",
    "certifications",
    "summary",
    "objective",
];

pub const SECTION_WEIGHT: f64 = 40.0;
pub const EMAIL_POINTS: f64 = 15.0;
pub const PHONE_POINTS: f64 = 15.0;
pub const BULLET_POINTS: f64 = 15.0;
pub const DATE_POINTS: f64 = 15.0;

pub const BULLET_CHARS: [char; 3] = ['•', '-', '*'];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\+[0-9]{1,3}[- ]?)?[0-9]{10}").expect("valid phone regex"));
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)[0-9]{2}\b").expect("valid year regex"));

pub fn has_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

pub fn has_phone(text: &str) -> bool {
    PHONE_RE.is_match(text)
}

pub fn has_bullet(text: &str) -> bool {
    text.contains(BULLET_CHARS)
}

pub fn has_year(text: &str) -> bool {
    YEAR_RE.is_match(text)
}

pub struct StructureScorer;

impl Scorer for StructureScorer {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn raw_score(&self, resume_text: &str) -> f64 {
        let lower = resume_text.to_lowercase();
        let mut score = coverage(&lower, SECTION_TERMS) * SECTION_WEIGHT;

        if has_email(resume_text) {
            score += EMAIL_POINTS;
        }
        if has_phone(resume_text) {
            score += PHONE_POINTS;
        }
        if has_bullet(resume_text) {
            score += BULLET_POINTS;
        }
        if has_year(resume_text) {
            score += DATE_POINTS;
        }
        score
    }
}
