//! Time token parsing.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::Error;

/// One or two minute digits, a dot, exactly two second digits.
#[allow(clippy::expect_used)]
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2})\.([0-9]{2})$").expect("valid time pattern"));

/// A whole number of seconds parsed from a `mm.ss` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeValue(u32);

impl TimeValue {
    /// Create a time value from seconds.
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    /// Number of seconds.
    pub const fn as_secs(self) -> u32 {
        self.0
    }
}

impl FromStr for TimeValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

/// Parse a time token in `mm.ss` format to seconds.
///
/// `"01.30"` is 90 seconds. The seconds part is only checked lexically,
/// so `"1.75"` is accepted as 135 seconds.
///
/// # Errors
///
/// Returns [`Error::InvalidTimeFormat`] if the token does not match `mm.ss`.
pub fn parse_time(token: &str) -> Result<TimeValue, Error> {
    let invalid = || Error::InvalidTimeFormat {
        token: token.to_string(),
    };

    let caps = TIME_PATTERN.captures(token).ok_or_else(invalid)?;
    let minutes: u32 = caps[1].parse().map_err(|_| invalid())?;
    let seconds: u32 = caps[2].parse().map_err(|_| invalid())?;

    Ok(TimeValue(minutes * 60 + seconds))
}
