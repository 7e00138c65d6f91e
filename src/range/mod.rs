//! Cut range handling.
//!
//! Parses `mm.ss` time tokens from the command line and reconciles the
//! start, end and length options into the range handed to the clip
//! extractor.

mod parser;
mod resolver;

pub use parser::{TimeValue, parse_time};
pub use resolver::{RangeRequest, Reconciled, Resolution, ResolvedRange, resolve};
