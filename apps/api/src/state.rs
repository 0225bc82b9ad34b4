use std::sync::Arc;

use crate::analysis::ResumeAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only analyzer; its keyword table is compiled once per process.
    pub analyzer: Arc<ResumeAnalyzer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            analyzer: Arc::new(ResumeAnalyzer::default()),
        }
    }
}
