use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{ArtifactStoreError, TranscriptionEngine, TranslationEngine};
use crate::domain::ArtifactId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn artifact_handler<S, T>(
    State(state): State<AppState<S, T>>,
    Path(id): Path<String>,
) -> impl IntoResponse
where
    S: TranscriptionEngine + 'static,
    T: TranslationEngine + 'static,
{
    let Some(artifact_id) = ArtifactId::parse(&id) else {
        tracing::warn!(id = %id, "Malformed artifact id");
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Audio file not found".to_string(),
            }),
        )
            .into_response();
    };

    match state.artifact_store.fetch(&artifact_id).await {
        Ok(bytes) => {
            tracing::debug!(artifact_id = %artifact_id, bytes = bytes.len(), "Serving artifact");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, artifact_id.content_type())],
                bytes,
            )
                .into_response()
        }
        Err(ArtifactStoreError::NotFound(_)) => {
            tracing::warn!(artifact_id = %artifact_id, "Artifact not found");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Audio file not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(artifact_id = %artifact_id, error = %e, "Artifact fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch artifact: {}", e),
                }),
            )
                .into_response()
        }
    }
}
