use thiserror::Error;

/// Errors raised by the analysis core.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The résumé text was empty or whitespace-only.
    #[error("no resume text to analyze")]
    InvalidInput,

    /// A keyword rule failed to compile. Only reachable for custom catalogs.
    #[error("invalid pattern for keyword '{keyword}': {source}")]
    Pattern {
        keyword: String,
        #[source]
        source: regex::Error,
    },
}
