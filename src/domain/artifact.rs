use std::fmt;

use chrono::Utc;
use uuid::Uuid;

/// A persisted synthesized-audio file, addressable by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub id: ArtifactId,
    pub url: String,
}

impl Artifact {
    pub fn new(id: ArtifactId) -> Self {
        let url = format!("/artifact/{}", id);
        Self { id, url }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactId(String);

impl ArtifactId {
    /// Generate a fresh id: timestamp prefix plus a random suffix.
    pub fn generate(extension: &str) -> Self {
        let timestamp = Utc::now().format("%Y%m%d_%H%M");
        let suffix = &Uuid::new_v4().simple().to_string()[..8];
        Self(format!("{}_{}.{}", timestamp, suffix, extension))
    }

    /// Parse a client-supplied id. Ids are generated, never client-chosen, so
    /// anything that could escape the artifact namespace is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || raw.len() > 128 {
            return None;
        }
        if raw.contains('/') || raw.contains('\\') || raw.contains("..") {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn content_type(&self) -> &'static str {
        match self.0.rsplit('.').next() {
            Some("mp3") => "audio/mpeg",
            Some("wav") => "audio/wav",
            _ => "application/octet-stream",
        }
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCodec {
    Mp3,
    Wav,
}

impl AudioCodec {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
        }
    }
}
