use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::application::ports::{
    ArtifactStore, ArtifactStoreError, AudioIntake, IntakeError, SynthesisError,
    TranscriptionEngine, TranscriptionError, TranslationEngine, TranslationError,
    VoiceProviderRegistry,
};
use crate::domain::{AudioUpload, PipelineOutcome, PipelineStage, ProcessOptions};

/// Orchestrates one request through intake, transcription, translation,
/// synthesis, and storage. Terminal on the first failing stage; no partial
/// result is ever returned. Each external stage runs under the configured
/// timeout, and dropping a timed-out stage cancels its outbound call.
pub struct TranslationPipeline<S, T>
where
    S: TranscriptionEngine,
    T: TranslationEngine,
{
    intake: Arc<dyn AudioIntake>,
    transcriber: Arc<S>,
    translator: Arc<T>,
    voices: VoiceProviderRegistry,
    artifacts: Arc<dyn ArtifactStore>,
    stage_timeout: Duration,
}

impl<S, T> TranslationPipeline<S, T>
where
    S: TranscriptionEngine,
    T: TranslationEngine,
{
    pub fn new(
        intake: Arc<dyn AudioIntake>,
        transcriber: Arc<S>,
        translator: Arc<T>,
        voices: VoiceProviderRegistry,
        artifacts: Arc<dyn ArtifactStore>,
        stage_timeout: Duration,
    ) -> Self {
        Self {
            intake,
            transcriber,
            translator,
            voices,
            artifacts,
            stage_timeout,
        }
    }

    #[tracing::instrument(skip(self, upload, options), fields(
        target_language = %options.target_language,
        voice_provider = %options.voice_provider,
        upload_bytes = upload.bytes.len(),
    ))]
    pub async fn process(
        &self,
        upload: AudioUpload,
        options: ProcessOptions,
    ) -> Result<PipelineOutcome, PipelineError> {
        let started = Instant::now();

        let staged = self.intake.stage(upload).await?;
        tracing::debug!(
            duration_secs = staged.duration().map(|d| d.as_secs_f32()),
            path = %staged.path().display(),
            "Upload staged"
        );

        let transcript = self
            .timed(PipelineStage::Transcribing, async {
                self.transcriber.transcribe(staged.bytes()).await
            })
            .await?;
        tracing::info!(
            chars = transcript.text.len(),
            language = transcript.language.as_deref(),
            "Transcription completed"
        );

        let translation = self
            .timed(PipelineStage::Translating, async {
                self.translator
                    .translate(
                        &transcript.text,
                        &options.target_language,
                        options.guideline.as_deref(),
                    )
                    .await
            })
            .await?;
        tracing::info!(chars = translation.text.len(), "Translation completed");

        let provider = self.voices.get(options.voice_provider)?;
        let audio = self
            .timed(PipelineStage::Synthesizing, async {
                provider
                    .synthesize(
                        &translation.text,
                        &translation.target_language,
                        options.voice_id.as_deref(),
                    )
                    .await
            })
            .await?;
        tracing::info!(
            provider = provider.name(),
            bytes = audio.bytes.len(),
            "Speech synthesis completed"
        );

        let artifact = self
            .timed(PipelineStage::Storing, async {
                self.artifacts.store(audio.bytes, audio.codec).await
            })
            .await?;

        tracing::info!(
            artifact_id = %artifact.id,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Pipeline completed"
        );

        Ok(PipelineOutcome {
            transcribed_text: transcript.text,
            translated_text: translation.text,
            audio_url: artifact.url,
        })
        // `staged` drops here; its temp file is removed on this and every
        // earlier return path.
    }

    async fn timed<F, O, E>(&self, stage: PipelineStage, fut: F) -> Result<O, PipelineError>
    where
        F: Future<Output = Result<O, E>>,
        PipelineError: From<E>,
    {
        match tokio::time::timeout(self.stage_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(e.into()),
            Err(_) => {
                tracing::warn!(stage = %stage, timeout_secs = self.stage_timeout.as_secs(), "Stage timed out");
                Err(PipelineError::Timeout(stage))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] IntakeError),
    #[error("transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("translation failed: {0}")]
    Translation(#[from] TranslationError),
    #[error("speech synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("artifact storage failed: {0}")]
    Storage(#[from] ArtifactStoreError),
    #[error("{0} stage timed out")]
    Timeout(PipelineStage),
}
