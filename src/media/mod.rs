//! External media tools.
//!
//! Downloading, duration probing and clip extraction are delegated to
//! `yt-dlp`, `ffprobe` and `ffmpeg`. Each capability sits behind a trait so
//! the pipeline can be driven with fakes.

mod extractor;
mod fetcher;
mod mode;
mod probe;
mod tool;

pub use extractor::{ClipExtractor, FfmpegExtractor};
pub use fetcher::{MediaFetcher, YtDlpFetcher, temp_download_path};
pub use mode::MediaMode;
pub use probe::{DurationProbe, FfprobeProbe};
