//! Download-then-trim pipeline.

mod runner;
mod temp_file;

pub use runner::{Job, Outcome, Toolchain, execute};
pub use temp_file::{TempDownload, cleanup_temp_downloads};
