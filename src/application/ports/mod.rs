mod artifact_store;
mod audio_intake;
mod transcription_engine;
mod translation_engine;
mod voice_provider;

pub use artifact_store::{ArtifactStore, ArtifactStoreError};
pub use audio_intake::{AudioIntake, IntakeError, StagedAudio, TempAudioFile};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translation_engine::{TranslationEngine, TranslationError};
pub use voice_provider::{SynthesisError, VoiceProvider, VoiceProviderRegistry};
