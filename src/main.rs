use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use echolingo::application::ports::{ArtifactStore, VoiceProviderRegistry};
use echolingo::application::services::TranslationPipeline;
use echolingo::domain::VoiceProviderKind;
use echolingo::infrastructure::audio::{LocalAudioIntake, OpenAiWhisperEngine};
use echolingo::infrastructure::observability::{TracingConfig, init_tracing};
use echolingo::infrastructure::storage::LocalArtifactStore;
use echolingo::infrastructure::translation::OpenAiTranslator;
use echolingo::infrastructure::voice::{ElevenLabsProvider, HumeProvider};
use echolingo::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            ..TracingConfig::default()
        },
        settings.server.port,
    );

    let temp_dir = PathBuf::from(&settings.storage.temp_dir);

    let intake = Arc::new(LocalAudioIntake::new(
        temp_dir.join("input"),
        settings.max_upload_bytes(),
        Duration::from_secs_f32(settings.audio.min_duration_secs),
    ));

    let transcriber = Arc::new(OpenAiWhisperEngine::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        Some(settings.openai.whisper_model.clone()),
    ));

    let translator = Arc::new(OpenAiTranslator::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        Some(settings.openai.translation_model.clone()),
    ));

    let voices = VoiceProviderRegistry::new()
        .register(
            VoiceProviderKind::ElevenLabs,
            Arc::new(ElevenLabsProvider::new(
                settings.elevenlabs.api_key.clone(),
                settings.elevenlabs.base_url.clone(),
                settings.elevenlabs.default_voice_id.clone(),
                settings.elevenlabs.model_id.clone(),
            )),
        )
        .register(
            VoiceProviderKind::Hume,
            Arc::new(HumeProvider::new(
                settings.hume.api_key.clone(),
                settings.hume.base_url.clone(),
                settings.hume.default_voice_id.clone(),
            )),
        );

    let artifact_store: Arc<dyn ArtifactStore> =
        Arc::new(LocalArtifactStore::new(temp_dir.join("output"))?);

    let pipeline = Arc::new(TranslationPipeline::new(
        intake,
        transcriber,
        translator,
        voices,
        Arc::clone(&artifact_store),
        Duration::from_secs(settings.pipeline.stage_timeout_secs),
    ));

    let state = AppState {
        pipeline,
        artifact_store,
        max_upload_bytes: settings.max_upload_bytes(),
    };

    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
