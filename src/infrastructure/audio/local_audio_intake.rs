use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::application::ports::{AudioIntake, IntakeError, StagedAudio, TempAudioFile};
use crate::domain::AudioUpload;

use super::audio_probe::probe_duration;

const ACCEPTED_CONTENT_TYPES: &[&str] = &[
    "audio/wav",
    "audio/x-wav",
    "audio/wave",
    "audio/mpeg",
    "audio/mp3",
    "audio/mp4",
    "audio/m4a",
    "audio/x-m4a",
    "audio/webm",
    "audio/ogg",
];

const KNOWN_EXTENSIONS: &[&str] = &[".mp3", ".wav", ".m4a", ".mp4", ".webm", ".ogg"];

pub struct LocalAudioIntake {
    input_dir: PathBuf,
    max_upload_bytes: u64,
    min_duration: Duration,
}

impl LocalAudioIntake {
    pub fn new(input_dir: PathBuf, max_upload_bytes: u64, min_duration: Duration) -> Self {
        Self {
            input_dir,
            max_upload_bytes,
            min_duration,
        }
    }

    fn staged_filename(&self, upload: &AudioUpload) -> String {
        let timestamp = Utc::now().format("%Y%m%d_%H%M");
        let unique = &Uuid::new_v4().simple().to_string()[..8];

        let mut filename = upload
            .filename
            .as_deref()
            .unwrap_or("audio.wav")
            .replace(['/', '\\'], "_");
        if !KNOWN_EXTENSIONS.iter().any(|ext| filename.ends_with(ext)) {
            filename = format!("{}.wav", filename);
        }

        format!("{}_{}_{}", timestamp, unique, filename)
    }
}

#[async_trait]
impl AudioIntake for LocalAudioIntake {
    async fn stage(&self, upload: AudioUpload) -> Result<StagedAudio, IntakeError> {
        if upload.bytes.is_empty() {
            return Err(IntakeError::EmptyUpload);
        }

        if !ACCEPTED_CONTENT_TYPES.contains(&upload.content_type.as_str()) {
            return Err(IntakeError::UnsupportedContentType(
                upload.content_type.clone(),
            ));
        }

        if upload.size_bytes() > self.max_upload_bytes {
            return Err(IntakeError::TooLarge {
                size_bytes: upload.size_bytes(),
                limit_bytes: self.max_upload_bytes,
            });
        }

        tokio::fs::create_dir_all(&self.input_dir).await?;
        let path = self.input_dir.join(self.staged_filename(&upload));
        tokio::fs::write(&path, &upload.bytes).await?;
        let file = TempAudioFile::new(path.clone());

        tracing::debug!(path = %path.display(), bytes = upload.bytes.len(), "Upload written to working area");

        let duration = probe_duration(&upload.bytes);
        match duration {
            Some(d) if d < self.min_duration => {
                return Err(IntakeError::TooShort {
                    actual_secs: d.as_secs_f32(),
                    minimum_secs: self.min_duration.as_secs_f32(),
                });
            }
            Some(_) => {}
            None => {
                tracing::warn!("Could not determine audio duration, skipping length check");
            }
        }

        Ok(StagedAudio::new(upload.bytes, duration, file))
    }
}
