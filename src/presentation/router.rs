use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{TranscriptionEngine, TranslationEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{artifact_handler, health_handler, process_audio_handler};
use crate::presentation::state::AppState;

pub fn create_router<S, T>(state: AppState<S, T>) -> Router
where
    S: TranscriptionEngine + 'static,
    T: TranslationEngine + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Body limit sits above the configured ceiling so oversized uploads reach
    // intake validation and get a 400 instead of a bare 413.
    let body_limit = (state.max_upload_bytes as usize).saturating_mul(2);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/audio/process", post(process_audio_handler::<S, T>))
        .route("/artifact/{id}", get(artifact_handler::<S, T>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
