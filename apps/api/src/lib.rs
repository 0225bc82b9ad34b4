//! Résumé analyzer: scores résumé text against an optional job description.
//!
//! `analysis` is the pure scoring engine. `extraction`, `routes` and the rest
//! wrap it in an HTTP service that also accepts PDF, DOCX and TXT uploads.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod routes;
pub mod state;

pub use analysis::{analyze, AnalysisError, AnalysisResult, ResumeAnalyzer};
