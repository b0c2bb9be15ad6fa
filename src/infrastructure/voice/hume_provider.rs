use async_trait::async_trait;
use serde_json::json;

use crate::application::ports::{SynthesisError, VoiceProvider};
use crate::domain::{AudioCodec, SynthesizedAudio};

/// Emotionally expressive synthesis via the Hume TTS API.
pub struct HumeProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    default_voice_id: String,
}

impl HumeProvider {
    pub fn new(api_key: String, base_url: Option<String>, default_voice_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.hume.ai".to_string()),
            default_voice_id,
        }
    }

    fn map_error_status(status: u16, message: String, voice_id: &str, language: &str) -> SynthesisError {
        match status {
            401 | 403 => SynthesisError::AuthRejected,
            429 => SynthesisError::QuotaExceeded,
            400 | 404 => SynthesisError::InvalidVoice(voice_id.to_string()),
            422 => SynthesisError::UnsupportedLanguage(language.to_string()),
            _ => SynthesisError::EngineRejected { status, message },
        }
    }
}

#[async_trait]
impl VoiceProvider for HumeProvider {
    async fn synthesize(
        &self,
        text: &str,
        target_language: &str,
        voice_id: Option<&str>,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        let voice_id = voice_id.unwrap_or(&self.default_voice_id);
        let url = format!("{}/v0/tts/file", self.base_url);

        let body = json!({
            "utterances": [{"text": text, "voice": {"id": voice_id}}],
            "format": {"type": "mp3"},
            "num_generations": 1,
        });

        tracing::debug!(voice_id = voice_id, chars = text.len(), "Sending text to Hume TTS");

        let response = self
            .client
            .post(&url)
            .header("X-Hume-Api-Key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesisError::EngineUnreachable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(Self::map_error_status(
                status,
                message,
                voice_id,
                target_language,
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::EngineUnreachable(e.to_string()))?;

        if bytes.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        tracing::info!(bytes = bytes.len(), "Hume speech generation completed");

        Ok(SynthesizedAudio::new(bytes, AudioCodec::Mp3, None))
    }

    fn name(&self) -> &'static str {
        "hume"
    }
}
