use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::domain::{Artifact, ArtifactId, AudioCodec};

pub struct LocalArtifactStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalArtifactStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ArtifactStoreError> {
        std::fs::create_dir_all(&base_path).map_err(ArtifactStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| ArtifactStoreError::StoreFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn store(&self, bytes: Bytes, codec: AudioCodec) -> Result<Artifact, ArtifactStoreError> {
        let id = ArtifactId::generate(codec.extension());
        let store_path = StorePath::from(id.as_str());

        self.inner
            .put(&store_path, PutPayload::from(bytes))
            .await
            .map_err(|e| ArtifactStoreError::StoreFailed(e.to_string()))?;

        tracing::debug!(artifact_id = %id, "Artifact stored");

        Ok(Artifact::new(id))
    }

    async fn fetch(&self, id: &ArtifactId) -> Result<Vec<u8>, ArtifactStoreError> {
        let store_path = StorePath::from(id.as_str());
        let result = self
            .inner
            .get(&store_path)
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { .. } => {
                    ArtifactStoreError::NotFound(id.to_string())
                }
                other => ArtifactStoreError::StoreFailed(other.to_string()),
            })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| ArtifactStoreError::StoreFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn delete(&self, id: &ArtifactId) -> Result<(), ArtifactStoreError> {
        let store_path = StorePath::from(id.as_str());
        self.inner
            .delete(&store_path)
            .await
            .map_err(|e| ArtifactStoreError::DeleteFailed(e.to_string()))
    }
}
