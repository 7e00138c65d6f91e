//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "ytclip";

/// Default output file path.
pub const DEFAULT_OUTPUT: &str = "out.mp4";

/// Base name of the temporary download, before its extension.
pub const TEMP_DOWNLOAD_STEM: &str = "temp_download";

/// Exit code used when interrupted by Ctrl+C (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Media file extensions produced by the downloader.
pub mod extensions {
    /// Audio-only downloads are converted to MP3.
    pub const AUDIO: &str = "mp3";
    /// Full and video-only downloads are MP4.
    pub const VIDEO: &str = "mp4";
}

/// Default external tool binaries.
pub mod tools {
    /// Downloader binary.
    pub const YTDLP: &str = "yt-dlp";
    /// Trimming binary.
    pub const FFMPEG: &str = "ffmpeg";
    /// Duration probe binary.
    pub const FFPROBE: &str = "ffprobe";
}

/// `yt-dlp` format selectors per download mode.
pub mod formats {
    /// Best audio stream.
    pub const AUDIO_ONLY: &str = "bestaudio";
    /// Best MP4 video-only stream.
    pub const VIDEO_ONLY: &str = "bestvideo[ext=mp4]";
    /// Best video plus best audio, falling back to best combined.
    pub const FULL: &str = "bestvideo+bestaudio/best";
}

/// Encoding defaults.
pub mod encoding {
    /// Video codec for re-encoded clips.
    pub const VIDEO_CODEC: &str = "libx264";
    /// Audio codec for re-encoded clips.
    pub const AUDIO_CODEC: &str = "aac";
    /// Audio quality for MP3 extraction.
    pub const AUDIO_QUALITY: &str = "192K";
}
