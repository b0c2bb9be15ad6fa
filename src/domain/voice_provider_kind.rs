use std::fmt;

use serde::Deserialize;

/// Request-time selector for the speech-synthesis backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceProviderKind {
    ElevenLabs,
    Hume,
}

impl VoiceProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ElevenLabs => "elevenlabs",
            Self::Hume => "hume",
        }
    }
}

impl Default for VoiceProviderKind {
    fn default() -> Self {
        Self::ElevenLabs
    }
}

impl fmt::Display for VoiceProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
