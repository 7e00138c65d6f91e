//! ytclip - download a video and optionally cut it to a time range.
//!
//! Downloading is delegated to `yt-dlp` and cutting to `ffmpeg`; this crate
//! resolves the requested range and drives the two tools.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod media;
pub mod output;
pub mod pipeline;
pub mod range;

use clap::Parser;
use cli::Cli;
use config::{load_config, validate_config};
use constants::INTERRUPTED_EXIT_CODE;
use media::{FfmpegExtractor, FfprobeProbe, MediaMode, YtDlpFetcher};
use pipeline::{Job, Outcome, Toolchain};
use std::path::PathBuf;
use tracing::{info, warn};

pub use error::{Error, ErrorKind, Result};

/// Main entry point for the ytclip CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse_from(cli::normalize_help_aliases(std::env::args_os()));

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    // Remove a half-finished temporary download on Ctrl+C
    if let Err(e) = ctrlc::set_handler(|| {
        pipeline::cleanup_temp_downloads();
        std::process::exit(INTERRUPTED_EXIT_CODE);
    }) {
        warn!("Failed to install Ctrl+C handler: {e}");
    }

    let mode = MediaMode::from_flags(cli.audio_only, cli.video_only)?;
    let range = cli.range_request()?;
    range.reconcile()?;

    let config = load_config(cli.config.as_deref())?;
    validate_config(&config)?;

    let fetcher = YtDlpFetcher::new(&config.tools.ytdlp, PathBuf::new())
        .with_audio_quality(&config.encoding.audio_quality)
        .with_quiet(cli.quiet);
    let probe = FfprobeProbe::new(&config.tools.ffprobe);
    let extractor = FfmpegExtractor::new(&config.tools.ffmpeg)
        .with_codecs(&config.encoding.video_codec, &config.encoding.audio_codec);

    let job = Job {
        url: cli.url,
        mode,
        range,
        output: cli.output,
    };
    let tools = Toolchain {
        fetcher: &fetcher,
        probe: &probe,
        extractor: &extractor,
    };

    let show_progress = !cli.quiet && !cli.no_progress;
    match pipeline::execute(&job, &tools, show_progress)? {
        Outcome::Saved { output } => info!("Saved {}", output.display()),
        Outcome::Trimmed { output, range } => info!(
            "Saved {:.1}s-{:.1}s clip to {}",
            range.start(),
            range.end(),
            output.display()
        ),
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}
