//! Formatting rubric. Starts from a base for plain text and adjusts for
//! section spacing, capitalization, list structure and line length.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::rubric::Scorer;

pub const BASE_POINTS: f64 = 60.0;
pub const SECTION_SPACING_POINTS: f64 = 10.0;
pub const CAPITALIZATION_POINTS: f64 = 10.0;
pub const LIST_STRUCTURE_POINTS: f64 = 10.0;
pub const EXCESS_CAPITALS_PENALTY: f64 = 15.0;
pub const LINE_LENGTH_POINTS: f64 = 10.0;

/// Share of uppercase characters above which the text reads as shouting.
pub const MAX_UPPERCASE_RATIO: f64 = 0.15;
pub const MIN_MEAN_LINE_LENGTH: f64 = 20.0;
pub const MAX_MEAN_LINE_LENGTH: f64 = 100.0;

// Bullet, then the rest of its line, then the line break. The line body
// stops at `\r` and the Unicode line separators, so a `\r\n` line end never counts.
static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[•\-*][^\r\n\u{2028}\u{2029}]*\n").expect("valid list item regex")
});

pub fn has_blank_line(text: &str) -> bool {
    text.contains("\n\n")
}

pub fn has_uppercase(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_list_structure(text: &str) -> bool {
    LIST_ITEM_RE.is_match(text)
}

pub fn uppercase_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let upper = text.chars().filter(|c| c.is_ascii_uppercase()).count();
    upper as f64 / total as f64
}

/// Mean characters per line; empty lines count toward the denominator.
pub fn mean_line_length(text: &str) -> f64 {
    let (lines, chars) = text
        .split('\n')
        .fold((0usize, 0usize), |(n, c), line| (n + 1, c + line.chars().count()));
    chars as f64 / lines as f64
}

pub struct FormattingScorer;

impl Scorer for FormattingScorer {
    fn name(&self) -> &'static str {
        "formatting"
    }

    fn raw_score(&self, resume_text: &str) -> f64 {
        let mut score = BASE_POINTS;

        if has_blank_line(resume_text) {
            score += SECTION_SPACING_POINTS;
        }
        if has_uppercase(resume_text) {
            score += CAPITALIZATION_POINTS;
        }
        if has_list_structure(resume_text) {
            score += LIST_STRUCTURE_POINTS;
        }
        if uppercase_ratio(resume_text) > MAX_UPPERCASE_RATIO {
            score -= EXCESS_CAPITALS_PENALTY;
        }

        let mean = mean_line_length(resume_text);
        if mean > MIN_MEAN_LINE_LENGTH && mean < MAX_MEAN_LINE_LENGTH {
            score += LINE_LENGTH_POINTS;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sentence() {
        let text = "Developed and implemented scalable APIs using Node.js and React. \
                    5 years of experience.";
        // base 60 + capitals 10 + line length 10
        assert_eq!(FormattingScorer.score(text), 80);
    }

    #[test]
    fn test_well_formatted_resume_hits_ceiling() {
        let text = "Jane Doe, Senior Backend Engineer\n\n\
                    Experience at Acme Corporation\n\
                    - Led migration of billing services to Rust\n\
                    - Reduced p99 latency across the payments API\n";
        // 60 + 10 + 10 + 10 + 10 = 100
        assert_eq!(FormattingScorer.score(text), 100);
    }

    #[test]
    fn test_all_caps_with_bullets_gets_both_signals() {
        let text = "- SENIOR ENGINEER WITH TEN YEARS\n- BUILT PLATFORMS FOR LARGE TEAMS\n";
        // 60 + capitals 10 + list 10 - shouting 15 + line length 10 = 75
        assert!(uppercase_ratio(text) > MAX_UPPERCASE_RATIO);
        assert!(has_list_structure(text));
        assert_eq!(FormattingScorer.score(text), 75);
    }

    #[test]
    fn test_lowercase_one_word_text_gets_base_only() {
        assert_eq!(FormattingScorer.score("resume"), 60);
    }

    #[test]
    fn test_mean_line_length_counts_empty_lines() {
        assert!((mean_line_length("abcd\n\nabcd") - 8.0 / 3.0).abs() < 1e-9);
        assert_eq!(mean_line_length(""), 0.0);
    }

    #[test]
    fn test_list_structure_needs_a_line_break_after_bullet() {
        assert!(!has_list_structure("- trailing item without newline"));
        assert!(has_list_structure("• item\nnext"));
    }

    #[test]
    fn test_list_structure_ignores_crlf_line_endings() {
        assert!(!has_list_structure("- item\r\nnext"));
        assert!(!has_list_structure("• first\u{2028}second\n"));
        assert!(has_list_structure("intro\r\n- item\nnext"));
    }

    #[test]
    fn test_single_capital_letter_is_penalized() {
        // 60 + capitals 10 - shouting 15; one-char line misses length points.
        assert_eq!(FormattingScorer.score("A"), 55);
    }
}
