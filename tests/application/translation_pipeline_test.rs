use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use bytes::Bytes;

use echolingo::application::ports::{
    ArtifactStore, SynthesisError, TranscriptionEngine, TranscriptionError, TranslationEngine,
    TranslationError, VoiceProvider, VoiceProviderRegistry,
};
use echolingo::application::services::{PipelineError, TranslationPipeline};
use echolingo::domain::{
    AudioCodec, AudioUpload, PipelineStage, ProcessOptions, SynthesizedAudio, Transcript,
    Translation, VoiceProviderKind,
};
use echolingo::infrastructure::audio::LocalAudioIntake;
use echolingo::infrastructure::storage::LocalArtifactStore;

use crate::helpers::make_wav;

const TEST_TIMEOUT: Duration = Duration::from_secs(5);

struct CountingTranscriber {
    calls: Arc<AtomicUsize>,
    hang: bool,
}

#[async_trait::async_trait]
impl TranscriptionEngine for CountingTranscriber {
    async fn transcribe(&self, _audio_data: &[u8]) -> Result<Transcript, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.hang {
            tokio::time::sleep(Duration::from_secs(600)).await;
        }
        Ok(Transcript::new(
            "counted transcript".to_string(),
            Some("english".to_string()),
            None,
        ))
    }
}

struct CountingTranslator {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

#[async_trait::async_trait]
impl TranslationEngine for CountingTranslator {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        _guideline: Option<&str>,
    ) -> Result<Translation, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(TranslationError::EmptyTranslation);
        }
        Ok(Translation::new(
            format!("translated: {}", text),
            target_language.to_string(),
        ))
    }
}

struct CountingVoice {
    calls: Arc<AtomicUsize>,
    audio: Bytes,
}

#[async_trait::async_trait]
impl VoiceProvider for CountingVoice {
    async fn synthesize(
        &self,
        _text: &str,
        _target_language: &str,
        _voice_id: Option<&str>,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SynthesizedAudio::new(
            self.audio.clone(),
            AudioCodec::Mp3,
            None,
        ))
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

struct TestFixture {
    pipeline: TranslationPipeline<CountingTranscriber, CountingTranslator>,
    transcriber_calls: Arc<AtomicUsize>,
    translator_calls: Arc<AtomicUsize>,
    voice_calls: Arc<AtomicUsize>,
    dir: tempfile::TempDir,
}

fn fixture(hang_transcriber: bool, fail_translator: bool, timeout: Duration) -> TestFixture {
    let dir = tempfile::TempDir::new().unwrap();
    let transcriber_calls = Arc::new(AtomicUsize::new(0));
    let translator_calls = Arc::new(AtomicUsize::new(0));
    let voice_calls = Arc::new(AtomicUsize::new(0));

    let intake = Arc::new(LocalAudioIntake::new(
        dir.path().join("input"),
        10 * 1024 * 1024,
        Duration::from_millis(500),
    ));

    let voices = VoiceProviderRegistry::new()
        .register(
            VoiceProviderKind::ElevenLabs,
            Arc::new(CountingVoice {
                calls: Arc::clone(&voice_calls),
                audio: Bytes::from_static(b"elevenlabs audio"),
            }),
        )
        .register(
            VoiceProviderKind::Hume,
            Arc::new(CountingVoice {
                calls: Arc::clone(&voice_calls),
                audio: Bytes::from_static(b"hume audio"),
            }),
        );

    let artifact_store: Arc<dyn ArtifactStore> =
        Arc::new(LocalArtifactStore::new(dir.path().join("output")).unwrap());

    let pipeline = TranslationPipeline::new(
        intake,
        Arc::new(CountingTranscriber {
            calls: Arc::clone(&transcriber_calls),
            hang: hang_transcriber,
        }),
        Arc::new(CountingTranslator {
            calls: Arc::clone(&translator_calls),
            fail: fail_translator,
        }),
        voices,
        artifact_store,
        timeout,
    );

    TestFixture {
        pipeline,
        transcriber_calls,
        translator_calls,
        voice_calls,
        dir,
    }
}

fn wav_upload(duration_secs: f32) -> AudioUpload {
    AudioUpload::new(
        Bytes::from(make_wav(duration_secs)),
        "audio/wav".to_string(),
        Some("clip.wav".to_string()),
    )
}

fn stored_artifacts(dir: &tempfile::TempDir) -> Vec<std::fs::DirEntry> {
    std::fs::read_dir(dir.path().join("output"))
        .map(|entries| entries.filter_map(Result::ok).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn given_valid_audio_when_processing_then_produces_exactly_one_artifact() {
    let f = fixture(false, false, TEST_TIMEOUT);

    let outcome = f
        .pipeline
        .process(wav_upload(3.0), ProcessOptions::new("ja".to_string()))
        .await
        .unwrap();

    assert!(!outcome.transcribed_text.is_empty());
    assert!(!outcome.translated_text.is_empty());
    assert!(outcome.audio_url.starts_with("/artifact/"));

    assert_eq!(f.transcriber_calls.load(Ordering::SeqCst), 1);
    assert_eq!(f.translator_calls.load(Ordering::SeqCst), 1);
    assert_eq!(f.voice_calls.load(Ordering::SeqCst), 1);
    assert_eq!(stored_artifacts(&f.dir).len(), 1);
}

#[tokio::test]
async fn given_audio_below_minimum_when_processing_then_fails_before_any_external_call() {
    let f = fixture(false, false, TEST_TIMEOUT);

    let result = f
        .pipeline
        .process(wav_upload(0.2), ProcessOptions::new("ja".to_string()))
        .await;

    assert!(matches!(result, Err(PipelineError::InvalidInput(_))));
    assert_eq!(f.transcriber_calls.load(Ordering::SeqCst), 0);
    assert_eq!(f.translator_calls.load(Ordering::SeqCst), 0);
    assert_eq!(f.voice_calls.load(Ordering::SeqCst), 0);
    assert!(stored_artifacts(&f.dir).is_empty());
}

#[tokio::test]
async fn given_translation_failure_when_processing_then_no_artifact_and_no_synthesis() {
    let f = fixture(false, true, TEST_TIMEOUT);

    let result = f
        .pipeline
        .process(wav_upload(1.0), ProcessOptions::new("ja".to_string()))
        .await;

    assert!(matches!(result, Err(PipelineError::Translation(_))));
    assert_eq!(f.transcriber_calls.load(Ordering::SeqCst), 1);
    assert_eq!(f.voice_calls.load(Ordering::SeqCst), 0);
    assert!(stored_artifacts(&f.dir).is_empty());
}

#[tokio::test]
async fn given_hanging_transcriber_when_processing_then_times_out_in_transcribing_stage() {
    let f = fixture(true, false, Duration::from_millis(50));

    let result = f
        .pipeline
        .process(wav_upload(1.0), ProcessOptions::new("ja".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(PipelineError::Timeout(PipelineStage::Transcribing))
    ));
    assert!(stored_artifacts(&f.dir).is_empty());
}

#[tokio::test]
async fn given_either_provider_when_processing_then_pipeline_path_is_identical() {
    let f = fixture(false, false, TEST_TIMEOUT);

    let mut elevenlabs = ProcessOptions::new("ja".to_string());
    elevenlabs.voice_provider = VoiceProviderKind::ElevenLabs;
    let mut hume = ProcessOptions::new("ja".to_string());
    hume.voice_provider = VoiceProviderKind::Hume;

    let first = f.pipeline.process(wav_upload(1.0), elevenlabs).await.unwrap();
    let second = f.pipeline.process(wav_upload(1.0), hume).await.unwrap();

    assert_eq!(first.transcribed_text, second.transcribed_text);
    assert_eq!(first.translated_text, second.translated_text);
    assert_ne!(first.audio_url, second.audio_url);
    assert_eq!(f.voice_calls.load(Ordering::SeqCst), 2);
    assert_eq!(stored_artifacts(&f.dir).len(), 2);
}

#[tokio::test]
async fn given_any_outcome_when_processing_then_staged_temp_file_is_removed() {
    let f = fixture(false, true, TEST_TIMEOUT);

    let _ = f
        .pipeline
        .process(wav_upload(1.0), ProcessOptions::new("ja".to_string()))
        .await;

    let staged: Vec<_> = std::fs::read_dir(f.dir.path().join("input"))
        .map(|entries| entries.filter_map(Result::ok).collect())
        .unwrap_or_default();
    assert!(staged.is_empty());
}
