mod elevenlabs_provider;
mod hume_provider;
mod mock_voice_provider;

pub use elevenlabs_provider::ElevenLabsProvider;
pub use hume_provider::HumeProvider;
pub use mock_voice_provider::MockVoiceProvider;
