use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{SynthesisError, VoiceProvider};
use crate::domain::{AudioCodec, SynthesizedAudio};

/// Returns a fixed audio payload for tests and scaffold wiring.
pub struct MockVoiceProvider {
    audio: Bytes,
}

impl MockVoiceProvider {
    pub fn new(audio: Bytes) -> Self {
        Self { audio }
    }
}

impl Default for MockVoiceProvider {
    fn default() -> Self {
        Self {
            audio: Bytes::from_static(b"mock mp3 payload"),
        }
    }
}

#[async_trait]
impl VoiceProvider for MockVoiceProvider {
    async fn synthesize(
        &self,
        _text: &str,
        _target_language: &str,
        _voice_id: Option<&str>,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        Ok(SynthesizedAudio::new(
            self.audio.clone(),
            AudioCodec::Mp3,
            None,
        ))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
