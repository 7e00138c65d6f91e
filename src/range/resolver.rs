//! Start/end/length reconciliation and bounds validation.

use crate::Error;

use super::TimeValue;

/// Cut options as given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeRequest {
    /// Requested start.
    pub start: Option<TimeValue>,
    /// Requested end.
    pub end: Option<TimeValue>,
    /// Requested clip length.
    pub length: Option<TimeValue>,
}

/// A range request with the length folded into start or end.
///
/// Start may be negative when it was derived as `end - length`; bounds are
/// only checked in [`Reconciled::bound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciled {
    start: Option<i64>,
    end: Option<i64>,
}

/// A validated cut range in seconds, `0 <= start < end <= duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRange {
    start: f64,
    end: f64,
}

/// Outcome of range resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// No cut options were given; use the download unmodified.
    NoTrimRequested,
    /// Cut the download to this range.
    Trim(ResolvedRange),
}

impl RangeRequest {
    /// Build a request from optional start, end and length.
    pub const fn new(
        start: Option<TimeValue>,
        end: Option<TimeValue>,
        length: Option<TimeValue>,
    ) -> Self {
        Self { start, end, length }
    }

    /// Fold the length into start or end.
    ///
    /// Needs no media duration, so it can run before anything is downloaded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthWithStartAndEnd`] if length is combined with both
    /// start and end, and [`Error::LengthWithoutAnchor`] if length is given
    /// alone.
    pub fn reconcile(&self) -> Result<Reconciled, Error> {
        let mut start = self.start.map(|t| i64::from(t.as_secs()));
        let mut end = self.end.map(|t| i64::from(t.as_secs()));

        if let Some(length) = self.length.map(|t| i64::from(t.as_secs())) {
            match (start, end) {
                (Some(_), Some(_)) => return Err(Error::LengthWithStartAndEnd),
                (Some(s), None) => end = Some(s + length),
                (None, Some(e)) => start = Some(e - length),
                (None, None) => return Err(Error::LengthWithoutAnchor),
            }
        }

        Ok(Reconciled { start, end })
    }
}

impl Reconciled {
    /// Whether any cut was requested.
    pub const fn requests_trim(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Default missing bounds and validate against the media duration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCutTimes`] unless `0 <= start < end <= duration`.
    pub fn bound(&self, media_duration: f64) -> Result<Resolution, Error> {
        if !self.requests_trim() {
            return Ok(Resolution::NoTrimRequested);
        }
        self.clip(media_duration).map(Resolution::Trim)
    }

    /// The cut range within the media, with missing bounds defaulted to `0`
    /// and `media_duration`.
    ///
    /// Unlike [`Reconciled::bound`] this always yields a range; with no cut
    /// options it spans the whole media.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCutTimes`] unless `0 <= start < end <= duration`.
    #[allow(clippy::cast_precision_loss)] // token values are at most 99*60+99
    pub fn clip(&self, media_duration: f64) -> Result<ResolvedRange, Error> {
        let start = self.start.map_or(0.0, |s| s as f64);
        let end = self.end.map_or(media_duration, |e| e as f64);

        if start < 0.0 || end > media_duration || start >= end {
            return Err(Error::InvalidCutTimes {
                start,
                end,
                duration: media_duration,
            });
        }

        Ok(ResolvedRange { start, end })
    }
}

impl ResolvedRange {
    /// Start offset in seconds.
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// End offset in seconds.
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// Length of the range in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Resolve a range request against the real media duration.
///
/// Length is reconciled first, then absent bounds default to `0` and
/// `media_duration`, then the result is validated.
///
/// # Errors
///
/// Returns a validation error for contradictory or out-of-range input.
pub fn resolve(request: &RangeRequest, media_duration: f64) -> Result<Resolution, Error> {
    request.reconcile()?.bound(media_duration)
}
