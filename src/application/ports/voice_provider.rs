use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{SynthesizedAudio, VoiceProviderKind};

/// Capability interface over interchangeable TTS backends. Implementations
/// resolve their own default voice when `voice_id` is absent and map
/// provider-specific failures onto `SynthesisError`; callers never branch on
/// the concrete provider beyond the initial registry lookup.
#[async_trait]
pub trait VoiceProvider: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        target_language: &str,
        voice_id: Option<&str>,
    ) -> Result<SynthesizedAudio, SynthesisError>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("synthesis quota exceeded")]
    QuotaExceeded,
    #[error("synthesis credentials rejected")]
    AuthRejected,
    #[error("invalid voice id: {0}")]
    InvalidVoice(String),
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("voice provider not registered: {0}")]
    ProviderUnavailable(VoiceProviderKind),
    #[error("synthesis engine unreachable: {0}")]
    EngineUnreachable(String),
    #[error("synthesis engine rejected input: status {status}: {message}")]
    EngineRejected { status: u16, message: String },
    #[error("synthesized audio was empty")]
    EmptyAudio,
}

/// The single registration point for voice providers. Adding a backend means
/// one more `register` call at startup; dispatch is by kind at request time.
#[derive(Clone, Default)]
pub struct VoiceProviderRegistry {
    providers: HashMap<VoiceProviderKind, Arc<dyn VoiceProvider>>,
}

impl VoiceProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    pub fn register(mut self, kind: VoiceProviderKind, provider: Arc<dyn VoiceProvider>) -> Self {
        self.providers.insert(kind, provider);
        self
    }

    pub fn get(&self, kind: VoiceProviderKind) -> Result<Arc<dyn VoiceProvider>, SynthesisError> {
        self.providers
            .get(&kind)
            .cloned()
            .ok_or(SynthesisError::ProviderUnavailable(kind))
    }
}
