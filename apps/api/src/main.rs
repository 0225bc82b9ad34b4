use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_analyzer::analysis::patterns::KeywordRules;
use resume_analyzer::analysis::taxonomy::{catalog, KeywordCategory};
use resume_analyzer::config::Config;
use resume_analyzer::routes::build_router;
use resume_analyzer::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Compile the keyword table up front rather than on the first request
    let rules = KeywordRules::builtin();
    let entries = catalog();
    let in_category = |category: KeywordCategory| {
        entries.iter().filter(|e| e.category == category).count()
    };
    info!(
        technical = in_category(KeywordCategory::Technical),
        interpersonal = in_category(KeywordCategory::Interpersonal),
        experience = in_category(KeywordCategory::Experience),
        "Keyword table compiled ({} rules)",
        rules.len()
    );

    let state = AppState::new(config.clone());

    let mut app = build_router(state).layer(TraceLayer::new_for_http());
    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!(
        "Listening on {addr} (max upload {} bytes)",
        config.max_upload_bytes
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
