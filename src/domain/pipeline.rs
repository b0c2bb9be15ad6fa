use std::fmt;

use super::voice_provider_kind::VoiceProviderKind;

/// Caller-chosen knobs for one pipeline run.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub target_language: String,
    pub voice_provider: VoiceProviderKind,
    pub voice_id: Option<String>,
    pub guideline: Option<String>,
}

impl ProcessOptions {
    pub fn new(target_language: String) -> Self {
        Self {
            target_language,
            voice_provider: VoiceProviderKind::default(),
            voice_id: None,
            guideline: None,
        }
    }
}

/// Stages of the processing state machine, in execution order. A run is
/// terminal on the first stage that fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Validating,
    Transcribing,
    Translating,
    Synthesizing,
    Storing,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::Transcribing => "transcribing",
            Self::Translating => "translating",
            Self::Synthesizing => "synthesizing",
            Self::Storing => "storing",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The externally visible result of one successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub transcribed_text: String,
    pub translated_text: String,
    pub audio_url: String,
}
