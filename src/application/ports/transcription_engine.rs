use async_trait::async_trait;

use crate::domain::Transcript;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription engine unreachable: {0}")]
    EngineUnreachable(String),
    #[error("transcription engine rejected input: status {status}: {message}")]
    EngineRejected { status: u16, message: String },
    #[error("transcript was empty")]
    EmptyTranscript,
    #[error("invalid engine response: {0}")]
    InvalidResponse(String),
}
