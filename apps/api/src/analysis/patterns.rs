//! Pattern compiler: turns the taxonomy into one case-insensitive matching
//! rule per canonical keyword.
//!
//! Most keywords fall into a generic kind (single word, multi-word phrase,
//! hyphenated compound). The handful of ambiguous entries are resolved through
//! the `OVERRIDES` table instead of inline branching, so every rule stays
//! data-driven and testable on its own.

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::error::AnalysisError;
use crate::analysis::taxonomy::{catalog, CatalogEntry};

/// A hand-written rule for a keyword whose generic pattern would miscount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternOverride {
    pub keyword: &'static str,
    pub pattern: &'static str,
    /// Matches are discarded when the text right after them matches this.
    pub not_followed_by: Option<&'static str>,
}

pub const OVERRIDES: &[PatternOverride] = &[
    PatternOverride {
        keyword: "node.js",
        pattern: r"\bnode\.?js\b",
        not_followed_by: None,
    },
    PatternOverride {
        keyword: "ci/cd",
        pattern: r"\bci\s*/?\s*cd\b",
        not_followed_by: None,
    },
    PatternOverride {
        keyword: "full-stack",
        pattern: r"\bfull[-\s]?stack\b",
        not_followed_by: None,
    },
    PatternOverride {
        keyword: "machine learning",
        pattern: r"\bmachine\s+learning\b",
        not_followed_by: None,
    },
    PatternOverride {
        keyword: "data science",
        pattern: r"\bdata\s+science\b",
        not_followed_by: None,
    },
    PatternOverride {
        keyword: "api",
        pattern: r"\bapis?\b",
        not_followed_by: None,
    },
    PatternOverride {
        keyword: "rest",
        pattern: r"\brest(ful)?\b",
        not_followed_by: None,
    },
    PatternOverride {
        keyword: "java",
        pattern: r"\bjava\b",
        not_followed_by: Some(r"^\s*script"),
    },
];

/// How a keyword's matcher is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    /// Single word, matched whole-word.
    Literal,
    /// Words joined by one or more whitespace characters.
    Phrase,
    /// Hyphen is optional and interchangeable with a single space.
    Hyphenated,
    Override(&'static PatternOverride),
}

impl KeywordKind {
    pub fn classify(keyword: &str) -> Self {
        if let Some(o) = OVERRIDES.iter().find(|o| o.keyword == keyword) {
            return KeywordKind::Override(o);
        }
        if keyword.contains(' ') {
            KeywordKind::Phrase
        } else if keyword.contains('-') {
            KeywordKind::Hyphenated
        } else {
            KeywordKind::Literal
        }
    }

    /// Regex source (without the case-insensitivity flag) for `keyword`.
    fn pattern_source(&self, keyword: &str) -> String {
        match self {
            KeywordKind::Override(o) => o.pattern.to_string(),
            KeywordKind::Phrase => {
                let words: Vec<String> = keyword.split_whitespace().map(regex::escape).collect();
                format!(r"\b{}\b", words.join(r"\s+"))
            }
            KeywordKind::Hyphenated => {
                let parts: Vec<String> = keyword.split('-').map(regex::escape).collect();
                format!(r"\b{}\b", parts.join(r"[-\s]?"))
            }
            KeywordKind::Literal => format!(r"\b{}\b", regex::escape(keyword)),
        }
    }
}

const ASCII_WORD_BOUNDARY: &str = r"(?-u:\b)";

/// A canonical keyword paired with its compiled matcher.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub keyword: &'static str,
    pub position: usize,
    matcher: Regex,
    guard: Option<Regex>,
}

impl PatternRule {
    pub fn compile(entry: &CatalogEntry) -> Result<Self, AnalysisError> {
        let kind = KeywordKind::classify(entry.keyword);
        let matcher = case_insensitive(entry.keyword, &kind.pattern_source(entry.keyword))?;
        let guard = match kind {
            KeywordKind::Override(PatternOverride {
                not_followed_by: Some(guard),
                ..
            }) => Some(case_insensitive(entry.keyword, guard)?),
            _ => None,
        };

        Ok(PatternRule {
            keyword: entry.keyword,
            position: entry.position,
            matcher,
            guard,
        })
    }

    /// Number of non-overlapping matches of this rule in `text`.
    pub fn count_in(&self, text: &str) -> u32 {
        self.matcher
            .find_iter(text)
            .filter(|m| match &self.guard {
                Some(guard) => !guard.is_match(&text[m.end()..]),
                None => true,
            })
            .count() as u32
    }
}

/// Compiles `source` case-insensitively. Word boundaries are ASCII-only, so an
/// accented letter next to a keyword does not join it into a longer word.
fn case_insensitive(keyword: &str, source: &str) -> Result<Regex, AnalysisError> {
    let source = source.replace(r"\b", ASCII_WORD_BOUNDARY);
    Regex::new(&format!("(?i){source}")).map_err(|source| AnalysisError::Pattern {
        keyword: keyword.to_string(),
        source,
    })
}

/// The full compiled rule set, in catalog order.
#[derive(Debug, Clone)]
pub struct KeywordRules {
    rules: Vec<PatternRule>,
}

static BUILTIN_RULES: LazyLock<KeywordRules> = LazyLock::new(|| {
    KeywordRules::compile(&catalog()).expect("built-in keyword patterns are valid")
});

impl KeywordRules {
    /// Rules for the built-in taxonomy, compiled once per process.
    pub fn builtin() -> &'static KeywordRules {
        &BUILTIN_RULES
    }

    pub fn compile(entries: &[CatalogEntry]) -> Result<Self, AnalysisError> {
        let rules = entries
            .iter()
            .map(PatternRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(KeywordRules { rules })
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn get(&self, keyword: &str) -> Option<&PatternRule> {
        self.rules.iter().find(|r| r.keyword == keyword)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
