//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::AnalysisResult;
use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentKind};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Absent is treated like blank and rejected by the analyzer.
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct UploadAnalysisResponse {
    pub file_name: Option<String>,
    pub document_kind: DocumentKind,
    pub extracted_chars: usize,
    pub analysis: AnalysisResult,
}

struct UploadedFile {
    name: Option<String>,
    kind: DocumentKind,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores already-extracted résumé text, optionally against a job description.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let analyzer = state.analyzer.clone();
    let result = tokio::task::spawn_blocking(move || {
        analyzer.analyze(&request.resume_text, &request.job_description)
    })
    .await
    .map_err(anyhow::Error::from)??;

    info!(
        overall_score = result.overall_score,
        "Analyzed resume text"
    );
    Ok(Json(result))
}

/// POST /api/v1/analyze/upload
///
/// Multipart form: `file` (PDF, DOCX or TXT) and optional `job_description`.
/// Extracts the résumé text, then runs the same analysis as `/analyze`.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadAnalysisResponse>, AppError> {
    let mut upload: Option<UploadedFile> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let kind = DocumentKind::detect(file_name.as_deref(), field.content_type());
                let bytes = field.bytes().await?;
                upload = Some(UploadedFile {
                    name: file_name,
                    kind,
                    bytes,
                });
            }
            Some("job_description") => job_description = field.text().await?,
            other => debug!("Ignoring multipart field {other:?}"),
        }
    }

    let upload =
        upload.ok_or_else(|| AppError::Validation("multipart field 'file' is required".into()))?;

    info!(
        file_name = upload.name.as_deref().unwrap_or("<unnamed>"),
        kind = ?upload.kind,
        size = upload.bytes.len(),
        "Received resume upload"
    );

    let analyzer = state.analyzer.clone();
    let kind = upload.kind;
    let (extracted_chars, analysis) = tokio::task::spawn_blocking(move || {
        let text = extract_text(kind, &upload.bytes)?;
        let analysis = analyzer.analyze(&text, &job_description)?;
        Ok::<_, AppError>((text.chars().count(), analysis))
    })
    .await
    .map_err(anyhow::Error::from)??;

    Ok(Json(UploadAnalysisResponse {
        file_name: upload.name,
        document_kind: kind,
        extracted_chars,
        analysis,
    }))
}
