//! Download mode selection.

use std::fmt;

use crate::Error;
use crate::constants::{extensions, formats};

/// What to download.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaMode {
    /// Best video and audio merged into MP4.
    #[default]
    Full,
    /// Best audio converted to MP3.
    AudioOnly,
    /// Best MP4 video stream without audio.
    VideoOnly,
}

impl MediaMode {
    /// Build the mode from the `-a` and `-v` flags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConflictingModes`] if both flags are set.
    pub fn from_flags(audio_only: bool, video_only: bool) -> Result<Self, Error> {
        match (audio_only, video_only) {
            (true, true) => Err(Error::ConflictingModes),
            (true, false) => Ok(Self::AudioOnly),
            (false, true) => Ok(Self::VideoOnly),
            (false, false) => Ok(Self::Full),
        }
    }

    /// Extension of the file the downloader produces.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::AudioOnly => extensions::AUDIO,
            Self::Full | Self::VideoOnly => extensions::VIDEO,
        }
    }

    /// `yt-dlp` format selector.
    pub const fn format_selector(self) -> &'static str {
        match self {
            Self::Full => formats::FULL,
            Self::AudioOnly => formats::AUDIO_ONLY,
            Self::VideoOnly => formats::VIDEO_ONLY,
        }
    }

    /// Whether only audio is downloaded.
    pub const fn is_audio_only(self) -> bool {
        matches!(self, Self::AudioOnly)
    }
}

impl fmt::Display for MediaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "video+audio"),
            Self::AudioOnly => write!(f, "audio only"),
            Self::VideoOnly => write!(f, "video only"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(MediaMode::from_flags(false, false).ok(), Some(MediaMode::Full));
        assert_eq!(
            MediaMode::from_flags(true, false).ok(),
            Some(MediaMode::AudioOnly)
        );
        assert_eq!(
            MediaMode::from_flags(false, true).ok(),
            Some(MediaMode::VideoOnly)
        );
        assert!(matches!(
            MediaMode::from_flags(true, true),
            Err(Error::ConflictingModes)
        ));
    }

    #[test]
    fn test_extension_per_mode() {
        assert_eq!(MediaMode::AudioOnly.extension(), "mp3");
        assert_eq!(MediaMode::VideoOnly.extension(), "mp4");
        assert_eq!(MediaMode::Full.extension(), "mp4");
    }

    #[test]
    fn test_format_selector_per_mode() {
        assert_eq!(MediaMode::Full.format_selector(), "bestvideo+bestaudio/best");
        assert_eq!(MediaMode::AudioOnly.format_selector(), "bestaudio");
        assert_eq!(MediaMode::VideoOnly.format_selector(), "bestvideo[ext=mp4]");
    }
}
