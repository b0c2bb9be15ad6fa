use std::io;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{Artifact, ArtifactId, AudioCodec};

#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Persist synthesized audio under a freshly generated id. Concurrent
    /// stores never collide because ids are unique per request.
    async fn store(&self, bytes: Bytes, codec: AudioCodec) -> Result<Artifact, ArtifactStoreError>;

    async fn fetch(&self, id: &ArtifactId) -> Result<Vec<u8>, ArtifactStoreError>;

    async fn delete(&self, id: &ArtifactId) -> Result<(), ArtifactStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("store failed: {0}")]
    StoreFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
