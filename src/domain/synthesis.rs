use std::time::Duration;

use bytes::Bytes;

use super::artifact::AudioCodec;

/// Raw synthesized speech as returned by a voice provider.
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub bytes: Bytes,
    pub codec: AudioCodec,
    pub duration: Option<Duration>,
}

impl SynthesizedAudio {
    pub fn new(bytes: Bytes, codec: AudioCodec, duration: Option<Duration>) -> Self {
        Self {
            bytes,
            codec,
            duration,
        }
    }
}
