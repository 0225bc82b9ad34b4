//! Content rubric: length, action verbs, quantified results, professional tone.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::rubric::{coverage, Scorer};

pub const ACTION_VERBS: &[&str] = &[
    "developed",
    "implemented",
    "designed",
    "created",
    "managed",
    "led",
    "improved",
    "optimized",
    "achieved",
    "collaborated",
    "delivered",
    "built",
    "established",
    "executed",
    "maintained",
    "analyzed",
];

pub const PROFESSIONAL_TERMS: &[&str] = &[
    "professional",
    "experience",
    "responsible",
    "collaborate",
    "contribute",
    "achieve",
    "deliver",
    "support",
];

pub const IDEAL_WORDS_MIN: usize = 200;
pub const IDEAL_WORDS_MAX: usize = 800;
pub const ACCEPTABLE_WORDS_MIN: usize = 100;
pub const IDEAL_LENGTH_POINTS: f64 = 25.0;
pub const ACCEPTABLE_LENGTH_POINTS: f64 = 15.0;

pub const ACTION_VERB_WEIGHT: f64 = 50.0;
pub const ACTION_VERB_CAP: f64 = 25.0;
pub const QUANTIFIED_POINTS: f64 = 20.0;
pub const PROFESSIONAL_WEIGHT: f64 = 30.0;
pub const PROFESSIONAL_CAP: f64 = 30.0;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]+[%+]?\b").expect("valid number regex"));

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn length_points(words: usize) -> f64 {
    if (IDEAL_WORDS_MIN..=IDEAL_WORDS_MAX).contains(&words) {
        IDEAL_LENGTH_POINTS
    } else if words >= ACCEPTABLE_WORDS_MIN {
        ACCEPTABLE_LENGTH_POINTS
    } else {
        0.0
    }
}

pub fn has_quantified_result(text: &str) -> bool {
    NUMBER_RE.is_match(text)
}

pub struct ContentScorer;

impl Scorer for ContentScorer {
    fn name(&self) -> &'static str {
        "content"
    }

    fn raw_score(&self, resume_text: &str) -> f64 {
        let lower = resume_text.to_lowercase();

        let mut score = length_points(word_count(resume_text));
        score += (coverage(&lower, ACTION_VERBS) * ACTION_VERB_WEIGHT).min(ACTION_VERB_CAP);
        if has_quantified_result(resume_text) {
            score += QUANTIFIED_POINTS;
        }
        score += (coverage(&lower, PROFESSIONAL_TERMS) * PROFESSIONAL_WEIGHT).min(PROFESSIONAL_CAP);
        score
    }
}
