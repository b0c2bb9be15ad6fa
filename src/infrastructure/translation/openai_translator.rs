use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::{TranslationEngine, TranslationError};
use crate::domain::Translation;

pub struct OpenAiTranslator {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiTranslator {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "gpt-4o-mini".to_string()),
        }
    }

    fn system_prompt(target_language: &str, guideline: Option<&str>) -> String {
        let guideline_text = guideline.map(|g| format!(" {}", g)).unwrap_or_default();
        format!(
            "You are a translation assistant. Translate the following text into {}.{} \
             Provide only the translated text without any explanations or additional content.",
            target_language, guideline_text
        )
    }
}

#[async_trait]
impl TranslationEngine for OpenAiTranslator {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        guideline: Option<&str>,
    ) -> Result<Translation, TranslationError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": Self::system_prompt(target_language, guideline)},
                {"role": "user", "content": text},
            ],
            "temperature": 0.3,
        });

        tracing::debug!(
            model = %self.model,
            target_language = target_language,
            guideline = guideline.is_some(),
            chars = text.len(),
            "Sending text to OpenAI translation"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::EngineUnreachable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranslationError::EngineRejected { status, message });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        let translated = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(|c| c.trim().to_string())
            .ok_or_else(|| TranslationError::InvalidResponse("no choices returned".to_string()))?;

        if translated.is_empty() {
            return Err(TranslationError::EmptyTranslation);
        }

        tracing::info!(chars = translated.len(), "OpenAI translation completed");

        Ok(Translation::new(translated, target_language.to_string()))
    }
}
