use axum::Json;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranscriptionEngine, TranslationEngine};
use crate::application::services::PipelineError;
use crate::domain::{AudioUpload, ProcessOptions, VoiceProviderKind};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ProcessParams {
    pub target_language: String,
    #[serde(default)]
    pub voice_provider: VoiceProviderKind,
    #[serde(default)]
    pub voice_id: Option<String>,
    #[serde(default)]
    pub guideline: Option<String>,
}

#[derive(Serialize)]
pub struct ProcessResponse {
    pub transcribed_text: String,
    pub translated_text: String,
    pub audio_url: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, params, multipart), fields(target_language = %params.target_language, voice_provider = %params.voice_provider))]
pub async fn process_audio_handler<S, T>(
    State(state): State<AppState<S, T>>,
    Query(params): Query<ProcessParams>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    S: TranscriptionEngine + 'static,
    T: TranslationEngine + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Audio request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().map(String::from);
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(
        filename = filename.as_deref(),
        content_type = %content_type,
        bytes = data.len(),
        "Processing audio upload"
    );

    let upload = AudioUpload::new(data, content_type, filename);
    let options = ProcessOptions {
        target_language: params.target_language,
        voice_provider: params.voice_provider,
        voice_id: params.voice_id,
        guideline: params.guideline,
    };

    match state.pipeline.process(upload, options).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ProcessResponse {
                transcribed_text: outcome.transcribed_text,
                translated_text: outcome.translated_text,
                audio_url: outcome.audio_url,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Audio processing failed");
            (
                error_status(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn error_status(error: &PipelineError) -> StatusCode {
    match error {
        PipelineError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        PipelineError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        PipelineError::Transcription(_)
        | PipelineError::Translation(_)
        | PipelineError::Synthesis(_) => StatusCode::BAD_GATEWAY,
        PipelineError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
