//! Rule-based improvement suggestions driven by the sub-scores and keyword gaps.

/// Sub-scores below this trigger their rule's advice.
pub const ADVICE_THRESHOLD: u32 = 70;
/// More missing job-description keywords than this trigger keyword advice.
pub const MISSING_KEYWORD_THRESHOLD: usize = 5;

pub const STRUCTURE_ADVICE: &[&str] = &[
    "Consider adding clear sections for Experience, Education, and Skills to improve resume structure.",
    "Include contact information (email and phone number) for easy communication.",
];

pub const CONTENT_ADVICE: &[&str] = &[
    "Use more action verbs (developed, implemented, managed) to make your achievements more impactful.",
    "Include quantifiable achievements with specific numbers and percentages.",
    "Ensure your resume has sufficient content (200-800 words) to adequately showcase your experience.",
];

pub const FORMATTING_ADVICE: &[&str] = &[
    "Improve formatting consistency with proper bullet points and section headers.",
    "Use consistent capitalization and avoid excessive use of capital letters.",
];

pub const KEYWORD_ADVICE: &str =
    "Consider incorporating more relevant keywords from the job description to improve ATS compatibility.";

pub const FALLBACK_ADVICE: &[&str] = &[
    "Your resume looks good! Consider tailoring it further for specific job applications.",
    "Regularly update your resume with new achievements and skills.",
];

/// Builds the ordered suggestion list. Rules are additive; the fallback pair
/// is only used when no other rule fired. `missing_count` is always 0 when no
/// job description was given.
pub fn generate(
    structure_score: u32,
    content_score: u32,
    formatting_score: u32,
    missing_count: usize,
) -> Vec<String> {
    let mut suggestions: Vec<&str> = Vec::new();

    if structure_score < ADVICE_THRESHOLD {
        suggestions.extend_from_slice(STRUCTURE_ADVICE);
    }
    if content_score < ADVICE_THRESHOLD {
        suggestions.extend_from_slice(CONTENT_ADVICE);
    }
    if formatting_score < ADVICE_THRESHOLD {
        suggestions.extend_from_slice(FORMATTING_ADVICE);
    }
    if missing_count > MISSING_KEYWORD_THRESHOLD {
        suggestions.push(KEYWORD_ADVICE);
    }

    if suggestions.is_empty() {
        suggestions.extend_from_slice(FALLBACK_ADVICE);
    }

    suggestions.into_iter().map(String::from).collect()
}
