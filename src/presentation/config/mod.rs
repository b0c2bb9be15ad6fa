mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AudioSettings, ElevenLabsSettings, HumeSettings, OpenAiSettings, PipelineSettings,
    ServerSettings, Settings, StorageSettings,
};
