//! Helpers for driving external command-line tools.
//!
//! Backends that shell out (the VCS getters) run their commands through
//! [`run`], which captures both output streams in full and turns a failed
//! exit into an error carrying everything needed to diagnose it without
//! re-running the command.

use std::process::Command;

use thiserror::Error;

/// Failure of an external tool invocation.
///
/// Captured output is never discarded; it is the primary debugging aid for
/// the caller.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool ran to completion with a non-zero exit status.
    #[error("{program} exited with {code}: {output}")]
    ExitCode {
        program: String,
        code: i32,
        /// Combined stdout and stderr
        output: String,
    },

    /// The tool was terminated without an exit status (e.g. by a signal).
    #[error("error running {program}: {output}")]
    Terminated {
        program: String,
        /// Combined stdout and stderr
        output: String,
    },

    /// The tool could not be started at all.
    #[error("error running {program}: {cause}")]
    Spawn {
        program: String,
        #[source]
        cause: std::io::Error,
    },
}

/// Run a prepared command, capturing stdout and stderr in full.
///
/// Both streams end up in one combined buffer; ordering between the two is
/// not guaranteed. On clean exit the buffer is returned, otherwise a
/// [`ToolError`] carrying the program name, the exit status when there is
/// one, and the buffer.
pub fn run(cmd: &mut Command) -> Result<String, ToolError> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    tracing::debug!(program = %program, args = ?cmd.get_args(), "running external command");

    let output = cmd.output().map_err(|cause| ToolError::Spawn {
        program: program.clone(),
        cause,
    })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if output.status.success() {
        return Ok(combined);
    }

    match output.status.code() {
        Some(code) => Err(ToolError::ExitCode {
            program,
            code,
            output: combined,
        }),
        None => Err(ToolError::Terminated {
            program,
            output: combined,
        }),
    }
}
