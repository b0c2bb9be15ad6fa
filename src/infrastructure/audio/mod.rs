mod audio_probe;
mod local_audio_intake;
mod openai_whisper_engine;

pub use audio_probe::probe_duration;
pub use local_audio_intake::LocalAudioIntake;
pub use openai_whisper_engine::OpenAiWhisperEngine;
