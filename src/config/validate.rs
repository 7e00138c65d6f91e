//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    let fields = [
        ("tools.ytdlp", &config.tools.ytdlp),
        ("tools.ffmpeg", &config.tools.ffmpeg),
        ("tools.ffprobe", &config.tools.ffprobe),
        ("encoding.video_codec", &config.encoding.video_codec),
        ("encoding.audio_codec", &config.encoding.audio_codec),
        ("encoding.audio_quality", &config.encoding.audio_quality),
    ];

    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: format!("{name} must not be empty"),
            });
        }
    }

    Ok(())
}
