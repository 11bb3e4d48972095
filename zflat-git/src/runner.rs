//! Process-execution capability.
//!
//! [`CommandRunner`] is the single doorway for external process calls: one
//! synchronous `run` returning trimmed stdout, failing with a typed
//! [`ProcessError`]. The publisher's state machine is written against the
//! trait so tests can script failures (expected-possible fetch/checkout
//! misses versus fatal commit/push errors) without invoking real git.

use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

/// Errors from running an external process.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The process could not be started at all.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited non-zero.
    #[error("command '{command}' exited non-zero: {stderr}")]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl ProcessError {
    /// Exit status code, when the process ran and exited non-zero.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ProcessError::Failed { code, .. } => *code,
            ProcessError::Spawn { .. } => None,
        }
    }
}

/// Run an external program and return its trimmed stdout.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, ProcessError>;
}

/// Full command line for error messages and call recording.
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// SystemRunner
// ---------------------------------------------------------------------------

/// [`CommandRunner`] backed by the system, with an explicit working
/// directory rather than ambient process state.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    workdir: PathBuf,
}

impl SystemRunner {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        SystemRunner {
            workdir: workdir.into(),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, ProcessError> {
        let output = Command::new(program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| ProcessError::Spawn {
                program: program.to_string(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(ProcessError::Failed {
                command: command_line(program, args),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_joins_program_and_args() {
        assert_eq!(
            command_line("git", &["diff", "--cached", "--quiet"]),
            "git diff --cached --quiet"
        );
    }

    #[cfg(unix)]
    #[test]
    fn stdout_is_trimmed() {
        let runner = SystemRunner::new(".");
        let out = runner.run("echo", &["hello"]).expect("echo");
        assert_eq!(out, "hello");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_maps_to_failed_with_code() {
        let runner = SystemRunner::new(".");
        let err = runner.run("false", &[]).expect_err("false should fail");
        assert_eq!(err.exit_code(), Some(1));
    }

    #[test]
    fn missing_program_maps_to_spawn_error() {
        let runner = SystemRunner::new(".");
        let err = runner
            .run("zflat-no-such-program", &[])
            .expect_err("should not spawn");
        assert!(matches!(err, ProcessError::Spawn { .. }));
        assert_eq!(err.exit_code(), None);
    }
}
