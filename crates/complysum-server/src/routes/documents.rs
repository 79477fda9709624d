//! Document routes — upload/analyze, retrieve, list, delete, health.

use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::state::{AppState, StoredAnalysis};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_documents))
        .route("/upload", post(upload_document))
        .route("/{id}/summary", get(get_summary))
        .route("/{id}", delete(delete_document))
        .route("/test/health", get(health))
}

/// POST /api/documents/upload — analyze an uploaded document (multipart
/// field `document`).
async fn upload_document(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("document") {
            continue;
        }
        let filename = field
            .file_name()
            .unwrap_or("document.pdf")
            .to_string();
        match field.bytes().await {
            Ok(bytes) => {
                upload = Some((filename, bytes.to_vec()));
                break;
            }
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    &format!("Lecture du fichier impossible: {}", e),
                );
            }
        }
    }

    let Some((filename, bytes)) = upload else {
        return error_response(StatusCode::BAD_REQUEST, "Aucun fichier fourni");
    };

    info!("Received document {} ({} bytes)", filename, bytes.len());

    // Spool to the upload directory for extraction, then clean up — the
    // file never outlives the request.
    let spool_path = state
        .config
        .upload_dir
        .join(format!("{}.upload", uuid::Uuid::new_v4()));
    if let Err(e) = std::fs::write(&spool_path, &bytes) {
        error!("Failed to spool upload: {}", e);
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Erreur lors de l'analyse du document",
        );
    }

    let extracted = complysum_ingest::extract_document(&spool_path);
    let _ = std::fs::remove_file(&spool_path);

    let extracted = match extracted {
        Ok(doc) => doc,
        Err(e) => {
            error!("Extraction failed for {}: {}", filename, e);
            return error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Impossible d'extraire le texte du document",
            );
        }
    };
    info!("Extracted {} pages from {}", extracted.pages, filename);

    let report = match state.analyzer.analyze(&extracted.text, &filename).await {
        Ok(report) => report,
        Err(e) => {
            error!("Analysis failed for {}: {}", filename, e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erreur lors de l'analyse du document",
            );
        }
    };

    let stored = StoredAnalysis {
        id: uuid::Uuid::new_v4().to_string(),
        report,
        page_count: extracted.pages,
        file_size: format!("{} KB", bytes.len() / 1024),
        uploaded_at: chrono::Utc::now().to_rfc3339(),
    };
    state
        .analyses
        .write()
        .insert(stored.id.clone(), stored.clone());

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "data": stored,
            "message": "Document analysé avec succès",
        })),
    )
}

/// GET /api/documents/{id}/summary — full stored analysis.
async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.analyses.read().get(&id) {
        Some(analysis) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "data": analysis,
                "message": "Analyse récupérée avec succès",
            })),
        ),
        None => error_response(StatusCode::NOT_FOUND, "Document non trouvé"),
    }
}

/// GET /api/documents — list analyzed documents.
async fn list_documents(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let analyses = state.analyses.read();
    let mut entries: Vec<&StoredAnalysis> = analyses.values().collect();

    // Newest first. `uploaded_at` is RFC3339, so string order is
    // chronological; the display timestamp in the report is day-first and
    // must not be used for ordering.
    entries.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));

    let documents: Vec<serde_json::Value> = entries
        .iter()
        .map(|a| {
            serde_json::json!({
                "id": a.id,
                "documentName": a.report.document_name,
                "processedAt": a.report.processed_at,
                "uploadedAt": a.uploaded_at,
                "pageCount": a.page_count,
                "fileSize": a.file_size,
            })
        })
        .collect();

    Json(serde_json::json!({
        "success": true,
        "data": documents,
        "message": "Documents récupérés avec succès",
    }))
}

/// DELETE /api/documents/{id} — drop a stored analysis.
async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if state.analyses.write().remove(&id).is_some() {
        (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Document supprimé avec succès",
            })),
        )
    } else {
        error_response(StatusCode::NOT_FOUND, "Document non trouvé")
    }
}

/// GET /api/documents/test/health — service liveness probe.
async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "message": "Service de documents opérationnel",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "documentsCount": state.analyses.read().len(),
    }))
}

fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        status,
        Json(serde_json::json!({
            "success": false,
            "message": message,
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use complysum_core::Config;
    use complysum_runtime::Analyzer;
    use complysum_summarize::NoopSummarizer;

    async fn state_with_uploads(uploads: &[(&str, &str)]) -> (Arc<AppState>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_env(dir.path()).unwrap();
        let analyzer = Analyzer::new(Arc::new(NoopSummarizer));
        let state = Arc::new(AppState::new(config, analyzer));

        for (id, uploaded_at) in uploads {
            let report = state
                .analyzer
                .analyze("Procédure de contrôle interne.", "doc.pdf")
                .await
                .unwrap();
            let stored = StoredAnalysis {
                id: (*id).to_string(),
                report,
                page_count: 1,
                file_size: "1 KB".into(),
                uploaded_at: (*uploaded_at).to_string(),
            };
            state.analyses.write().insert(stored.id.clone(), stored);
        }

        (state, dir)
    }

    #[tokio::test]
    async fn test_listing_is_newest_first_across_month_boundary() {
        // Day-first display dates would rank 30/09 above 01/10; the RFC3339
        // upload timestamp must not.
        let (state, _dir) = state_with_uploads(&[
            ("doc-september", "2026-09-30T10:00:00+00:00"),
            ("doc-october", "2026-10-01T09:00:00+00:00"),
        ])
        .await;

        let Json(body) = list_documents(State(state)).await;
        let documents = body["data"].as_array().unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0]["id"], "doc-october");
        assert_eq!(documents[1]["id"], "doc-september");
    }

    #[tokio::test]
    async fn test_listing_is_newest_first_across_year_boundary() {
        let (state, _dir) = state_with_uploads(&[
            ("doc-new-year", "2027-01-02T08:00:00+00:00"),
            ("doc-old-year", "2026-12-31T23:00:00+00:00"),
        ])
        .await;

        let Json(body) = list_documents(State(state)).await;
        let documents = body["data"].as_array().unwrap();
        assert_eq!(documents[0]["id"], "doc-new-year");
        assert_eq!(documents[1]["id"], "doc-old-year");
    }
}
