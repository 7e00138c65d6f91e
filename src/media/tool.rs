//! Subprocess helpers shared by the tool wrappers.

use std::process::{Command, Output};

use tracing::debug;

use crate::error::{Error, Result};

/// Run a command to completion, capturing whatever streams were left piped.
pub(super) fn run_captured(command: &mut Command, tool: &str) -> Result<Output> {
    debug!("Spawning {tool}: {command:?}");
    command.output().map_err(|e| Error::ToolSpawn {
        tool: tool.to_string(),
        source: e,
    })
}

/// Captured stderr as trimmed text.
pub(super) fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}
