//! Keyword taxonomy: the fixed catalog of canonical terms the analyzer counts.

/// Which list a canonical keyword was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordCategory {
    Technical,
    Interpersonal,
    Experience,
}

pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "sql",
    "nosql",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "ci/cd",
    "git",
    "agile",
    "scrum",
    "devops",
    "microservices",
    "api",
    "rest",
    "graphql",
    "testing",
    "junit",
    "jest",
    "cypress",
    "selenium",
    "machine learning",
    "ai",
    "data science",
];

pub const INTERPERSONAL_KEYWORDS: &[&str] = &[
    "leadership",
    "communication",
    "problem solving",
    "team player",
    "collaborative",
    "mentoring",
    "project management",
    "analytical",
    "detail oriented",
    "time management",
    "adaptable",
    "innovative",
];

pub const EXPERIENCE_KEYWORDS: &[&str] = &[
    "years of experience",
    "senior",
    "lead",
    "architect",
    "full-stack",
    "frontend",
    "backend",
    "development",
    "engineering",
    "design",
    "implementation",
    "optimization",
    "performance",
    "scalability",
];

/// One catalog entry. `position` is the declaration index and serves as the
/// final tie-break wherever keywords are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub keyword: &'static str,
    pub category: KeywordCategory,
    pub position: usize,
}

/// Assembles the deduplicated catalog: technical, then interpersonal, then
/// experience terms. The first declaration of a duplicate wins.
pub fn catalog() -> Vec<CatalogEntry> {
    let lists = [
        (KeywordCategory::Technical, TECHNICAL_KEYWORDS),
        (KeywordCategory::Interpersonal, INTERPERSONAL_KEYWORDS),
        (KeywordCategory::Experience, EXPERIENCE_KEYWORDS),
    ];

    let mut entries: Vec<CatalogEntry> = Vec::new();
    for (category, keywords) in lists {
        for &keyword in keywords {
            if entries.iter().any(|e| e.keyword == keyword) {
                continue;
            }
            let position = entries.len();
            entries.push(CatalogEntry {
                keyword,
                category,
                position,
            });
        }
    }
    entries
}
