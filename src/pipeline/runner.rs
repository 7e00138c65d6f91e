//! Sequential download, probe, cut and cleanup.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::Result;
use crate::media::{ClipExtractor, DurationProbe, MediaFetcher, MediaMode};
use crate::output::progress;
use crate::range::{RangeRequest, ResolvedRange};

use super::TempDownload;

/// One invocation's worth of work.
#[derive(Debug, Clone)]
pub struct Job {
    /// Media URL.
    pub url: String,
    /// What to download.
    pub mode: MediaMode,
    /// Requested cut.
    pub range: RangeRequest,
    /// Final output path.
    pub output: PathBuf,
}

/// The external capabilities the pipeline drives.
pub struct Toolchain<'a> {
    /// Downloader.
    pub fetcher: &'a dyn MediaFetcher,
    /// Duration lookup.
    pub probe: &'a dyn DurationProbe,
    /// Cutter.
    pub extractor: &'a dyn ClipExtractor,
}

/// What the pipeline produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The download was moved to the output path unmodified.
    Saved {
        /// Output path.
        output: PathBuf,
    },
    /// The download was cut to a range and written to the output path.
    Trimmed {
        /// Output path.
        output: PathBuf,
        /// Range that was extracted.
        range: ResolvedRange,
    },
}

/// Run a job to completion.
///
/// Cut options are reconciled before anything is downloaded so invalid
/// combinations fail fast. Failing to remove the temporary download after a
/// successful cut is only a warning.
pub fn execute(job: &Job, tools: &Toolchain<'_>, show_progress: bool) -> Result<Outcome> {
    let reconciled = job.range.reconcile()?;

    let temp = TempDownload::track(tools.fetcher.destination(job.mode));
    tools.fetcher.fetch(&job.url, job.mode)?;

    if !reconciled.requests_trim() {
        info!(
            "No cutting parameters provided. Renaming downloaded file to {}",
            job.output.display()
        );
        return save_unmodified(temp, job);
    }

    info!("Processing clip from {} ...", temp.path().display());

    let spinner = progress::create_spinner("Reading media duration", show_progress);
    let duration = tools.probe.duration(temp.path());
    progress::clear_progress(spinner);

    let range = reconciled.clip(duration?)?;

    let spinner = progress::create_spinner(
        &format!("Cutting {:.1}s-{:.1}s", range.start(), range.end()),
        show_progress,
    );
    let extracted = tools.extractor.extract(
        temp.path(),
        &job.output,
        &range,
        job.mode.is_audio_only(),
    );
    progress::clear_progress(spinner);
    extracted?;

    if let Err(e) = temp.remove() {
        warn!("{e}");
    }

    Ok(Outcome::Trimmed {
        output: job.output.clone(),
        range,
    })
}

fn save_unmodified(temp: TempDownload, job: &Job) -> Result<Outcome> {
    temp.persist(&job.output)?;
    Ok(Outcome::Saved {
        output: job.output.clone(),
    })
}
