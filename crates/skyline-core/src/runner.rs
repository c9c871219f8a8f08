//! External command execution
//!
//! The listing CLIs (`gcloud`, `gh`) are run directly without a shell.
//! Every run is bounded by a timeout and the child is killed if it is
//! still alive when the timeout fires.

use crate::error::{Result, RunError};
use async_trait::async_trait;
use std::fmt;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Upper bound for a single command run
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs a command and returns its trimmed stdout
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, spec: &CommandSpec) -> Result<String>;
}

/// Runs commands as child processes of the current process
#[derive(Debug, Clone)]
pub struct SystemRunner {
    timeout: Duration,
}

impl SystemRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<String> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        tracing::debug!("Running: {}", spec);

        let output = match tokio::time::timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RunError::NotFound(spec.program.clone()));
            }
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => {
                return Err(RunError::Timeout {
                    command: spec.to_string(),
                    timeout: self.timeout,
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RunError::NonZeroExit {
                command: spec.to_string(),
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_spec_display() {
        let spec = CommandSpec::new("gcloud", ["run", "services", "list", "--format=json"]);
        assert_eq!(spec.to_string(), "gcloud run services list --format=json");
    }

    #[tokio::test]
    async fn test_missing_program() {
        let runner = SystemRunner::default();
        let spec = CommandSpec::new("skyline-definitely-missing-binary", ["--help"]);
        let err = runner.run(&spec).await.unwrap_err();
        assert!(matches!(err, RunError::NotFound(ref p) if p == "skyline-definitely-missing-binary"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stdout_is_trimmed() {
        let runner = SystemRunner::default();
        let spec = CommandSpec::new("sh", ["-c", "printf '  [1, 2]\\n\\n'"]);
        assert_eq!(runner.run(&spec).await.unwrap(), "[1, 2]");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit() {
        let runner = SystemRunner::default();
        let spec = CommandSpec::new("sh", ["-c", "echo partial; echo boom >&2; exit 3"]);
        match runner.run(&spec).await.unwrap_err() {
            RunError::NonZeroExit { code, stderr, .. } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout() {
        let runner = SystemRunner::new(Duration::from_millis(100));
        let spec = CommandSpec::new("sleep", ["5"]);
        let err = runner.run(&spec).await.unwrap_err();
        assert!(matches!(err, RunError::Timeout { .. }));
    }
}
