mod artifact;
mod audio_upload;
mod pipeline;
mod synthesis;
mod transcript;
mod translation;
mod voice_provider_kind;

pub use artifact::{Artifact, ArtifactId, AudioCodec};
pub use audio_upload::AudioUpload;
pub use pipeline::{PipelineOutcome, PipelineStage, ProcessOptions};
pub use synthesis::SynthesizedAudio;
pub use transcript::Transcript;
pub use translation::Translation;
pub use voice_provider_kind::VoiceProviderKind;
