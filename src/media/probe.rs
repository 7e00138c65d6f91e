//! Media duration lookup through `ffprobe`.

use std::path::Path;
use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::debug;

use crate::constants::tools;
use crate::error::{Error, Result};

use super::tool::{run_captured, stderr_text};

/// Reports the duration of a local media file.
pub trait DurationProbe {
    /// Duration of the media at `path` in seconds.
    fn duration(&self, path: &Path) -> Result<f64>;
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    format: Option<ProbeFormat>,
}

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    duration: Option<String>,
}

/// [`DurationProbe`] backed by the `ffprobe` binary.
#[derive(Debug, Clone)]
pub struct FfprobeProbe {
    binary: String,
}

impl FfprobeProbe {
    /// Create a probe using the given binary.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for FfprobeProbe {
    fn default() -> Self {
        Self::new(tools::FFPROBE)
    }
}

impl DurationProbe for FfprobeProbe {
    fn duration(&self, path: &Path) -> Result<f64> {
        let mut command = Command::new(&self.binary);
        command
            .args(["-v", "error", "-show_entries", "format=duration", "-of", "json"])
            .arg(path)
            .stdin(Stdio::null());

        let output = run_captured(&mut command, &self.binary)?;
        if !output.status.success() {
            return Err(Error::DurationProbe {
                path: path.to_path_buf(),
                reason: format!("{} ({}): {}", self.binary, output.status, stderr_text(&output)),
            });
        }

        let duration = parse_duration_json(&output.stdout).map_err(|reason| Error::DurationProbe {
            path: path.to_path_buf(),
            reason,
        })?;

        debug!("{} is {duration:.2}s long", path.display());
        Ok(duration)
    }
}

/// Extract `format.duration` from `ffprobe -of json` output.
fn parse_duration_json(bytes: &[u8]) -> std::result::Result<f64, String> {
    let parsed: ProbeOutput =
        serde_json::from_slice(bytes).map_err(|e| format!("unreadable ffprobe output: {e}"))?;

    let raw = parsed
        .format
        .and_then(|f| f.duration)
        .ok_or_else(|| "no duration reported".to_string())?;

    let duration: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a valid duration"))?;

    if !duration.is_finite() || duration < 0.0 {
        return Err(format!("'{raw}' is not a valid duration"));
    }

    Ok(duration)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        let json = br#"{"format": {"duration": "213.433000"}}"#;
        assert_eq!(parse_duration_json(json).unwrap(), 213.433);
    }

    #[test]
    fn test_parse_duration_missing() {
        assert!(parse_duration_json(br#"{"format": {}}"#).is_err());
        assert!(parse_duration_json(br"{}").is_err());
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration_json(br#"{"format": {"duration": "N/A"}}"#).is_err());
        assert!(parse_duration_json(br#"{"format": {"duration": "-1"}}"#).is_err());
        assert!(parse_duration_json(b"not json").is_err());
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let probe = FfprobeProbe::new("ytclip-no-such-probe");
        let err = probe.duration(Path::new("missing.mp4")).unwrap_err();
        assert!(matches!(err, Error::ToolSpawn { .. }));
    }
}
