//! Configuration type definitions.

use crate::constants::{encoding, tools};
use serde::Deserialize;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External tool locations.
    pub tools: ToolsConfig,

    /// Encoding settings.
    pub encoding: EncodingConfig,
}

/// Names or paths of the external binaries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Downloader.
    pub ytdlp: String,
    /// Trimmer.
    pub ffmpeg: String,
    /// Duration probe.
    pub ffprobe: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ytdlp: tools::YTDLP.to_string(),
            ffmpeg: tools::FFMPEG.to_string(),
            ffprobe: tools::FFPROBE.to_string(),
        }
    }
}

/// Codec and quality settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    /// Video codec used when re-encoding clips.
    pub video_codec: String,
    /// Audio codec used when re-encoding clips.
    pub audio_codec: String,
    /// MP3 quality for audio-only downloads (e.g. `192K`).
    pub audio_quality: String,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            video_codec: encoding::VIDEO_CODEC.to_string(),
            audio_codec: encoding::AUDIO_CODEC.to_string(),
            audio_quality: encoding::AUDIO_QUALITY.to_string(),
        }
    }
}
