//! Configuration file loading.

use crate::config::Config;
use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Load configuration from a TOML file.
///
/// Returns default config if the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    debug!("Loading configuration from {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load configuration from an explicit path or the platform default.
///
/// An explicit path must exist; a missing default file yields defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) if !path.exists() => Err(Error::ConfigRead {
            path: path.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }),
        Some(path) => load_config_file(path),
        None => super::config_file_path()
            .map_or_else(|_| Ok(Config::default()), |path| load_config_file(&path)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_nonexistent_file_returns_default() {
        let config = load_config_file(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.tools.ytdlp, "yt-dlp");
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[tools]
ytdlp = "/opt/bin/yt-dlp"
ffmpeg = "/opt/bin/ffmpeg"

[encoding]
audio_quality = "320K"
"#
        )
        .unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.tools.ytdlp, "/opt/bin/yt-dlp");
        assert_eq!(config.tools.ffmpeg, "/opt/bin/ffmpeg");
        assert_eq!(config.tools.ffprobe, "ffprobe");
        assert_eq!(config.encoding.audio_quality, "320K");
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let result = load_config_file(file.path());
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let result = load_config(Some(Path::new("/nonexistent/ytclip.toml")));
        assert!(matches!(result, Err(Error::ConfigRead { .. })));
    }
}
