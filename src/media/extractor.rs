//! Clip extraction through `ffmpeg`.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::info;

use crate::constants::{encoding, tools};
use crate::error::{Error, Result};
use crate::range::ResolvedRange;

use super::tool::{run_captured, stderr_text};

/// Cuts a range out of a local media file.
pub trait ClipExtractor {
    /// Write the part of `input` covered by `range` to `output`.
    ///
    /// Audio-only input is stream-copied; anything else is re-encoded.
    fn extract(
        &self,
        input: &Path,
        output: &Path,
        range: &ResolvedRange,
        audio_only: bool,
    ) -> Result<()>;
}

/// [`ClipExtractor`] backed by the `ffmpeg` binary.
#[derive(Debug, Clone)]
pub struct FfmpegExtractor {
    binary: String,
    video_codec: String,
    audio_codec: String,
}

impl FfmpegExtractor {
    /// Create an extractor using the given binary and default codecs.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            video_codec: encoding::VIDEO_CODEC.to_string(),
            audio_codec: encoding::AUDIO_CODEC.to_string(),
        }
    }

    /// Override the codecs used when re-encoding.
    #[must_use]
    pub fn with_codecs(mut self, video: impl Into<String>, audio: impl Into<String>) -> Self {
        self.video_codec = video.into();
        self.audio_codec = audio.into();
        self
    }

    /// Build the `ffmpeg` argument list for a cut.
    pub fn build_args(
        &self,
        input: &Path,
        output: &Path,
        range: &ResolvedRange,
        audio_only: bool,
    ) -> Vec<String> {
        let mut args = vec![
            "-y".to_string(),
            "-ss".to_string(),
            range.start().to_string(),
            "-i".to_string(),
            input.display().to_string(),
            "-t".to_string(),
            range.duration().to_string(),
        ];

        if audio_only {
            args.extend(["-c".to_string(), "copy".to_string()]);
        } else {
            args.extend([
                "-c:v".to_string(),
                self.video_codec.clone(),
                "-c:a".to_string(),
                self.audio_codec.clone(),
            ]);
        }

        args.push(output.display().to_string());
        args
    }
}

impl Default for FfmpegExtractor {
    fn default() -> Self {
        Self::new(tools::FFMPEG)
    }
}

impl ClipExtractor for FfmpegExtractor {
    fn extract(
        &self,
        input: &Path,
        output: &Path,
        range: &ResolvedRange,
        audio_only: bool,
    ) -> Result<()> {
        let args = self.build_args(input, output, range, audio_only);
        info!("Running ffmpeg command: {} {}", self.binary, args.join(" "));

        let mut command = Command::new(&self.binary);
        command
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let result = run_captured(&mut command, &self.binary)?;
        if !result.status.success() {
            return Err(Error::ProcessingFailed {
                tool: self.binary.clone(),
                status: result.status.to_string(),
                stderr: stderr_text(&result),
            });
        }

        Ok(())
    }
}
