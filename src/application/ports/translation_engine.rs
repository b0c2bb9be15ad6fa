use async_trait::async_trait;

use crate::domain::Translation;

#[async_trait]
pub trait TranslationEngine: Send + Sync {
    /// Translate `text` into `target_language`. The optional guideline is a
    /// free-text steering instruction passed through verbatim to the engine.
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        guideline: Option<&str>,
    ) -> Result<Translation, TranslationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("translation engine unreachable: {0}")]
    EngineUnreachable(String),
    #[error("translation engine rejected input: status {status}: {message}")]
    EngineRejected { status: u16, message: String },
    #[error("translated text was empty")]
    EmptyTranslation,
    #[error("invalid engine response: {0}")]
    InvalidResponse(String),
}
