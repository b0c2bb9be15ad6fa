use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::AudioUpload;

#[async_trait]
pub trait AudioIntake: Send + Sync {
    /// Validate an upload and write it to the temporary working area. Fails
    /// before any external call on empty, oversized, unsupported, or
    /// too-short input.
    async fn stage(&self, upload: AudioUpload) -> Result<StagedAudio, IntakeError>;
}

/// A validated upload staged on disk. Holds the payload in memory for the
/// downstream engines; the backing temp file is removed when this is dropped,
/// on every exit path.
pub struct StagedAudio {
    bytes: Bytes,
    duration: Option<Duration>,
    file: TempAudioFile,
}

impl StagedAudio {
    pub fn new(bytes: Bytes, duration: Option<Duration>, file: TempAudioFile) -> Self {
        Self {
            bytes,
            duration,
            file,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Scoped ownership of one file in the temp working area.
#[derive(Debug)]
pub struct TempAudioFile {
    path: PathBuf,
}

impl TempAudioFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempAudioFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove staged audio file");
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("empty audio upload")]
    EmptyUpload,
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("upload of {size_bytes} bytes exceeds limit of {limit_bytes} bytes")]
    TooLarge { size_bytes: u64, limit_bytes: u64 },
    #[error("audio of {actual_secs:.2}s is below minimum of {minimum_secs:.2}s")]
    TooShort { actual_secs: f32, minimum_secs: f32 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
