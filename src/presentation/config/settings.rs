use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub audio: AudioSettings,
    pub pipeline: PipelineSettings,
    pub storage: StorageSettings,
    pub openai: OpenAiSettings,
    pub elevenlabs: ElevenLabsSettings,
    pub hume: HumeSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub max_upload_mb: u64,
    pub min_duration_secs: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    pub stage_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub temp_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub whisper_model: String,
    pub translation_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElevenLabsSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub default_voice_id: String,
    pub model_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HumeSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub default_voice_id: String,
}

impl Settings {
    /// Build settings from environment variables, with defaults suitable for
    /// local runs. Provider API keys have no defaults.
    pub fn from_env() -> Self {
        Self {
            environment: Environment::try_from(env_or("APP_ENV", "local"))
                .unwrap_or(Environment::Local),
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse_or("SERVER_PORT", 3000),
            },
            audio: AudioSettings {
                max_upload_mb: env_parse_or("MAX_UPLOAD_MB", 25),
                min_duration_secs: env_parse_or("MIN_AUDIO_DURATION_SECS", 0.5),
            },
            pipeline: PipelineSettings {
                stage_timeout_secs: env_parse_or("STAGE_TIMEOUT_SECS", 30),
            },
            storage: StorageSettings {
                temp_dir: env_or("TEMP_DIR", "temp"),
            },
            openai: OpenAiSettings {
                api_key: env_or("OPENAI_API_KEY", ""),
                base_url: std::env::var("OPENAI_BASE_URL").ok(),
                whisper_model: env_or("WHISPER_MODEL", "whisper-1"),
                translation_model: env_or("TRANSLATION_MODEL", "gpt-4o-mini"),
            },
            elevenlabs: ElevenLabsSettings {
                api_key: env_or("ELEVENLABS_API_KEY", ""),
                base_url: std::env::var("ELEVENLABS_BASE_URL").ok(),
                default_voice_id: env_or("ELEVENLABS_VOICE_ID", "o47F6fLSHEFdPzySrC5z"),
                model_id: env_or("ELEVENLABS_TTS_MODEL", "eleven_multilingual_v2"),
            },
            hume: HumeSettings {
                api_key: env_or("HUME_API_KEY", ""),
                base_url: std::env::var("HUME_BASE_URL").ok(),
                default_voice_id: env_or("HUME_VOICE_ID", "30edfa2e-7d75-45fb-8ccf-e280941393ee"),
            },
        }
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.audio.max_upload_mb * 1024 * 1024
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
