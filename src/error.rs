//! Error types for ytclip.

use std::path::PathBuf;

/// Result type alias for ytclip operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed time token.
    Format,
    /// Contradictory or out-of-range cut parameters, or conflicting flags.
    Validation,
    /// Download, extraction or duration probe failure.
    Fetch,
    /// The trimming tool failed.
    Processing,
    /// Rename or remove failure.
    Filesystem,
    /// Configuration could not be loaded or is invalid.
    Config,
}

/// Top-level error type for ytclip.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Time token did not match `mm.ss`.
    #[error(
        "invalid time '{token}': time must be in mm.ss format (e.g. 01.30 for 1 minute 30 seconds)"
    )]
    InvalidTimeFormat {
        /// The rejected token.
        token: String,
    },

    /// Both `-a` and `-v` were given.
    #[error("-a (audio only) and -v (video only) cannot be used together")]
    ConflictingModes,

    /// Length was combined with both start and end.
    #[error(
        "length cannot be combined with both start and end; use either start+length or end-length"
    )]
    LengthWithStartAndEnd,

    /// Length was given without start or end.
    #[error("length requires start or end to be provided")]
    LengthWithoutAnchor,

    /// Resolved cut times fall outside the media or are empty.
    #[error("invalid cut times: start {start}s, end {end}s, media duration {duration:.2}s")]
    InvalidCutTimes {
        /// Resolved start in seconds.
        start: f64,
        /// Resolved end in seconds.
        end: f64,
        /// Actual media duration in seconds.
        duration: f64,
    },

    /// An external tool could not be started.
    #[error("failed to run '{tool}': {source}")]
    ToolSpawn {
        /// Binary that failed to start.
        tool: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The downloader exited unsuccessfully.
    #[error("error downloading '{url}' ({status}): {stderr}")]
    DownloadFailed {
        /// Requested URL.
        url: String,
        /// Exit status description.
        status: String,
        /// Captured diagnostic output.
        stderr: String,
    },

    /// The downloader succeeded but the expected file is missing.
    #[error("expected downloaded file '{path}' not found")]
    DownloadedFileMissing {
        /// Path that should have been produced.
        path: PathBuf,
    },

    /// The media duration could not be determined.
    #[error("error getting duration of '{path}': {reason}")]
    DurationProbe {
        /// File that was probed.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
    },

    /// The trimming tool exited unsuccessfully.
    #[error("{tool} failed ({status}): {stderr}")]
    ProcessingFailed {
        /// Tool that failed.
        tool: String,
        /// Exit status description.
        status: String,
        /// Captured diagnostic output.
        stderr: String,
    },

    /// Renaming the downloaded file failed.
    #[error("error renaming '{from}' to '{to}': {source}")]
    Rename {
        /// Source path.
        from: PathBuf,
        /// Destination path.
        to: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Removing a temporary file failed.
    #[error("could not remove temporary file '{path}': {source}")]
    Remove {
        /// Path of the temporary file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {source}")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTimeFormat { .. } => ErrorKind::Format,
            Self::ConflictingModes
            | Self::LengthWithStartAndEnd
            | Self::LengthWithoutAnchor
            | Self::InvalidCutTimes { .. } => ErrorKind::Validation,
            Self::ToolSpawn { .. }
            | Self::DownloadFailed { .. }
            | Self::DownloadedFileMissing { .. }
            | Self::DurationProbe { .. } => ErrorKind::Fetch,
            Self::ProcessingFailed { .. } => ErrorKind::Processing,
            Self::Rename { .. } | Self::Remove { .. } => ErrorKind::Filesystem,
            Self::ConfigDirNotFound
            | Self::ConfigRead { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigValidation { .. } => ErrorKind::Config,
        }
    }
}
