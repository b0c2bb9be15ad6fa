use std::sync::Arc;

use crate::application::ports::{ArtifactStore, TranscriptionEngine, TranslationEngine};
use crate::application::services::TranslationPipeline;

pub struct AppState<S, T>
where
    S: TranscriptionEngine,
    T: TranslationEngine,
{
    pub pipeline: Arc<TranslationPipeline<S, T>>,
    pub artifact_store: Arc<dyn ArtifactStore>,
    pub max_upload_bytes: u64,
}

impl<S, T> Clone for AppState<S, T>
where
    S: TranscriptionEngine,
    T: TranslationEngine,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            artifact_store: Arc::clone(&self.artifact_store),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
