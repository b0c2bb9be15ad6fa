use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use echolingo::application::ports::{TranscriptionEngine, TranscriptionError};
use echolingo::infrastructure::audio::OpenAiWhisperEngine;

async fn start_mock_whisper_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/audio/transcriptions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

#[tokio::test]
async fn given_valid_audio_when_transcribing_then_returns_text_and_language() {
    let response_body = r#"{"text": "Hello from Whisper", "language": "english"}"#;
    let (base_url, shutdown_tx) = start_mock_whisper_server(200, response_body).await;

    let engine = OpenAiWhisperEngine::new("test-key".to_string(), Some(base_url), None);
    let result = engine.transcribe(b"fake audio bytes").await.unwrap();

    assert_eq!(result.text, "Hello from Whisper");
    assert_eq!(result.language.as_deref(), Some("english"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_transcribing_then_returns_engine_rejected() {
    let response_body = r#"{"error": {"message": "bad audio"}}"#;
    let (base_url, shutdown_tx) = start_mock_whisper_server(400, response_body).await;

    let engine = OpenAiWhisperEngine::new("test-key".to_string(), Some(base_url), None);
    let result = engine.transcribe(b"bad audio").await;

    assert!(matches!(
        result,
        Err(TranscriptionError::EngineRejected { status: 400, .. })
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_transcript_when_transcribing_then_returns_empty_transcript_error() {
    let response_body = r#"{"text": "  ", "language": "english"}"#;
    let (base_url, shutdown_tx) = start_mock_whisper_server(200, response_body).await;

    let engine = OpenAiWhisperEngine::new("test-key".to_string(), Some(base_url), None);
    let result = engine.transcribe(b"silent audio").await;

    assert!(matches!(result, Err(TranscriptionError::EmptyTranscript)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_engine_when_transcribing_then_returns_unreachable() {
    let engine = OpenAiWhisperEngine::new(
        "test-key".to_string(),
        Some("http://127.0.0.1:1".to_string()),
        None,
    );
    let result = engine.transcribe(b"audio").await;

    assert!(matches!(
        result,
        Err(TranscriptionError::EngineUnreachable(_))
    ));
}
