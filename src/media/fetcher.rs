//! Media download through `yt-dlp`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::constants::{TEMP_DOWNLOAD_STEM, encoding, extensions, tools};
use crate::error::{Error, Result};

use super::MediaMode;
use super::tool::{run_captured, stderr_text};

/// Retrieves remote media into a local file.
pub trait MediaFetcher {
    /// Local file a download in `mode` is written to.
    ///
    /// Known before the download starts so it can be cleaned up if the
    /// download is interrupted.
    fn destination(&self, mode: MediaMode) -> PathBuf;

    /// Download `url` into [`MediaFetcher::destination`].
    fn fetch(&self, url: &str, mode: MediaMode) -> Result<()>;
}

/// Path of the temporary download for a mode: `temp_download.<ext>`.
pub fn temp_download_path(work_dir: &Path, mode: MediaMode) -> PathBuf {
    work_dir.join(format!("{TEMP_DOWNLOAD_STEM}.{}", mode.extension()))
}

/// [`MediaFetcher`] backed by the `yt-dlp` binary.
#[derive(Debug, Clone)]
pub struct YtDlpFetcher {
    binary: String,
    work_dir: PathBuf,
    audio_quality: String,
    quiet: bool,
}

impl YtDlpFetcher {
    /// Create a fetcher that writes into `work_dir`.
    pub fn new(binary: impl Into<String>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            work_dir: work_dir.into(),
            audio_quality: encoding::AUDIO_QUALITY.to_string(),
            quiet: false,
        }
    }

    /// Set the MP3 quality used for audio-only downloads.
    #[must_use]
    pub fn with_audio_quality(mut self, quality: impl Into<String>) -> Self {
        self.audio_quality = quality.into();
        self
    }

    /// Silence the downloader's own progress output.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Build the `yt-dlp` argument list for a download.
    pub fn build_args(&self, url: &str, mode: MediaMode) -> Vec<String> {
        let template = self
            .work_dir
            .join(format!("{TEMP_DOWNLOAD_STEM}.%(ext)s"))
            .to_string_lossy()
            .into_owned();

        let mut args = vec![
            "-f".to_string(),
            mode.format_selector().to_string(),
            "-o".to_string(),
            template,
        ];

        match mode {
            MediaMode::AudioOnly => args.extend([
                "-x".to_string(),
                "--audio-format".to_string(),
                extensions::AUDIO.to_string(),
                "--audio-quality".to_string(),
                self.audio_quality.clone(),
            ]),
            MediaMode::Full => args.extend([
                "--merge-output-format".to_string(),
                extensions::VIDEO.to_string(),
            ]),
            MediaMode::VideoOnly => {}
        }

        if self.quiet {
            args.extend(["--quiet".to_string(), "--no-warnings".to_string()]);
        }

        args.push("--".to_string());
        args.push(url.to_string());
        args
    }
}

impl Default for YtDlpFetcher {
    fn default() -> Self {
        Self::new(tools::YTDLP, PathBuf::new())
    }
}

impl MediaFetcher for YtDlpFetcher {
    fn destination(&self, mode: MediaMode) -> PathBuf {
        temp_download_path(&self.work_dir, mode)
    }

    fn fetch(&self, url: &str, mode: MediaMode) -> Result<()> {
        info!("Downloading {url} ({mode})...");

        let mut command = Command::new(&self.binary);
        command
            .args(self.build_args(url, mode))
            .stdin(Stdio::null())
            .stdout(if self.quiet {
                Stdio::null()
            } else {
                Stdio::inherit()
            })
            .stderr(Stdio::piped());

        let output = run_captured(&mut command, &self.binary)?;
        if !output.status.success() {
            return Err(Error::DownloadFailed {
                url: url.to_string(),
                status: output.status.to_string(),
                stderr: stderr_text(&output),
            });
        }

        let path = self.destination(mode);
        if !path.exists() {
            return Err(Error::DownloadedFileMissing { path });
        }

        debug!("Downloaded to {}", path.display());
        Ok(())
    }
}
