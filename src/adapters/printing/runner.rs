//! External command execution

use crate::domain::{LecternError, Result};
use std::path::Path;
use std::process::Command;

/// Captured result of one command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// stdout followed by stderr
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Runs print-queue tools
///
/// The system implementation spawns processes; tests substitute canned
/// output.
pub trait CommandRunner {
    /// Runs `program` with `args` and waits for it
    ///
    /// # Errors
    ///
    /// Returns an error only if the program could not be started. A
    /// non-zero exit is reported through [`CommandOutput::success`].
    fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutput>;
}

/// Runs commands with [`std::process::Command`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutput> {
        tracing::debug!(program = %program.display(), args = ?args, "Running command");

        let output = Command::new(program).args(args).output().map_err(|e| {
            LecternError::Print(format!("Failed to run {}: {e}", program.display()))
        })?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
