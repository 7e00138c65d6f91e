//! CLI argument definitions.

use crate::constants::DEFAULT_OUTPUT;
use crate::error::Result;
use crate::range::{RangeRequest, TimeValue, parse_time};
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Download a video with yt-dlp and optionally cut it with ffmpeg.
#[derive(Debug, Parser)]
#[command(name = "ytclip")]
#[command(author, version, about, long_about = None, disable_help_flag = true)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Video URL.
    pub url: String,

    /// Download audio only (MP3).
    #[arg(short = 'a')]
    pub audio_only: bool,

    /// Download video only (no audio).
    #[arg(short = 'v')]
    pub video_only: bool,

    /// Start time in mm.ss.
    #[arg(short = 's', value_name = "MM.SS")]
    pub start: Option<String>,

    /// End time in mm.ss.
    #[arg(short = 'e', value_name = "MM.SS")]
    pub end: Option<String>,

    /// Length of the clip in mm.ss (use with -s or -e; cannot be used with both -s and -e).
    #[arg(short = 'l', value_name = "MM.SS")]
    pub length: Option<String>,

    /// Output file name.
    #[arg(short = 'n', value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Configuration file (default: platform config directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (--verbose: debug, --verbose --verbose: trace).
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not show progress spinners.
    #[arg(long)]
    pub no_progress: bool,

    /// Print help.
    #[arg(short = 'h', long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Cli {
    /// Parse the time options into a range request.
    ///
    /// # Errors
    ///
    /// Returns a format error for the first malformed time token.
    pub fn range_request(&self) -> Result<RangeRequest> {
        let parse = |token: Option<&String>| -> Result<Option<TimeValue>> {
            token.map(|t| parse_time(t)).transpose()
        };

        Ok(RangeRequest::new(
            parse(self.start.as_ref())?,
            parse(self.end.as_ref())?,
            parse(self.length.as_ref())?,
        ))
    }
}

/// Rewrite the single-dash help spellings `-help` and `-?` to `--help`.
pub fn normalize_help_aliases<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-help" || arg == "-?" {
                OsString::from("--help")
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;
    use clap::error::ErrorKind as ClapErrorKind;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(normalize_help_aliases(args.iter().map(OsString::from)))
    }

    #[test]
    fn test_cli_parse_url_only() {
        let cli = parse(&["ytclip", "https://example.com/v"]).unwrap();
        assert_eq!(cli.url, "https://example.com/v");
        assert!(!cli.audio_only);
        assert!(!cli.video_only);
        assert_eq!(cli.output, PathBuf::from("out.mp4"));
        assert_eq!(cli.range_request().unwrap(), RangeRequest::default());
    }

    #[test]
    fn test_cli_parse_all_options() {
        let cli = parse(&[
            "ytclip",
            "https://example.com/v",
            "-a",
            "-s",
            "01.30",
            "-l",
            "00.20",
            "-n",
            "clip.mp3",
        ])
        .unwrap();
        assert!(cli.audio_only);
        assert_eq!(cli.output, PathBuf::from("clip.mp3"));

        let request = cli.range_request().unwrap();
        assert_eq!(request.start, Some(TimeValue::from_secs(90)));
        assert_eq!(request.end, None);
        assert_eq!(request.length, Some(TimeValue::from_secs(20)));
    }

    #[test]
    fn test_cli_requires_url() {
        let err = parse(&["ytclip", "-a"]).unwrap_err();
        assert_eq!(err.kind(), ClapErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_help_spellings() {
        for flag in ["-h", "-help", "-?", "--help"] {
            let err = parse(&["ytclip", flag]).unwrap_err();
            assert_eq!(err.kind(), ClapErrorKind::DisplayHelp, "flag {flag}");
        }
    }

    #[test]
    fn test_both_modes_parse_and_are_rejected_later() {
        let cli = parse(&["ytclip", "https://example.com/v", "-a", "-v"]).unwrap();
        assert!(cli.audio_only && cli.video_only);
    }

    #[test]
    fn test_bad_time_token_is_format_error() {
        let cli = parse(&["ytclip", "https://example.com/v", "-e", "1.5"]).unwrap();
        assert!(matches!(
            cli.range_request(),
            Err(Error::InvalidTimeFormat { .. })
        ));
    }

    #[test]
    fn test_verbose_counts() {
        let cli = parse(&["ytclip", "u", "--verbose", "--verbose", "-q"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    #[test]
    fn test_normalize_leaves_other_args() {
        let args = normalize_help_aliases(["ytclip", "-n", "x.mp4"].map(OsString::from));
        assert_eq!(args, ["ytclip", "-n", "x.mp4"].map(OsString::from));
    }
}
