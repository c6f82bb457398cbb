use std::process::Command;
use tracing::debug;

use crate::error::{ChannelBumpError, Result};
use crate::updater::{CommandRunner, Invocation};

/// Runs invocations as child processes
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    /// Run an invocation and wait for it to finish
    ///
    /// Output is captured so that stdout of the calling tool carries only
    /// the version. Child stdout is logged at debug level; stderr is
    /// included in the error on failure.
    ///
    /// # Returns
    /// * `Ok(())` if the command exits with code 0
    /// * `Err` if the command cannot be started or returns non-zero exit code
    fn run(&self, invocation: &Invocation) -> Result<()> {
        if !invocation.cwd.is_dir() {
            return Err(ChannelBumpError::update(format!(
                "Working directory not found for {}",
                invocation
            )));
        }

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .output()
            .map_err(|e| {
                ChannelBumpError::update(format!("Failed to execute {}: {}", invocation, e))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!(program = %invocation.program, "stdout: {}", stdout.trim_end());
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ChannelBumpError::update(format!(
                "{} failed with exit code {}\nStderr: {}",
                invocation,
                output
                    .status
                    .code()
                    .map_or_else(|| "none".to_string(), |code| code.to_string()),
                stderr.trim_end()
            )));
        }

        Ok(())
    }
}
