// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! External kubectl process execution

use crate::config::Config;
use crate::error::{RegisterError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Captured result of a kubectl query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs kubectl subcommands.
///
/// Every external call made while registering a cluster goes through this
/// trait, which lets tests script kubectl responses.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a query, capturing stdout and stderr
    async fn output(&self, args: &[&str]) -> Result<CommandOutput>;

    /// Run a command with inherited stdio and return its exit code
    async fn status(&self, args: &[&str]) -> Result<Option<i32>>;
}

/// The real kubectl binary
#[derive(Debug, Clone)]
pub struct Kubectl {
    program: String,
    context: Option<String>,
}

impl Kubectl {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            context: None,
        }
    }

    /// Pin every invocation to a kubeconfig context
    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.kubectl.clone()).with_context(config.kube_context.clone())
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut kubectl = Command::new(&self.program);
        if let Some(context) = &self.context {
            kubectl.arg("--context").arg(context);
        }
        kubectl.args(args).stdin(Stdio::null());
        kubectl
    }

    fn spawn_error(&self, source: std::io::Error) -> RegisterError {
        RegisterError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

#[async_trait]
impl CommandRunner for Kubectl {
    #[instrument(skip(self), fields(program = %self.program))]
    async fn output(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = self
            .command(args)
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        let output = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(code = ?output.code, "kubectl query finished");
        if !output.stderr.trim().is_empty() {
            debug!("kubectl stderr: {}", output.stderr.trim());
        }

        Ok(output)
    }

    // Arguments may carry the registration token, keep them out of the span
    #[instrument(skip_all, fields(program = %self.program))]
    async fn status(&self, args: &[&str]) -> Result<Option<i32>> {
        let status = self
            .command(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| self.spawn_error(e))?;

        debug!(code = ?status.code(), "kubectl command finished");
        Ok(status.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn args_of(kubectl: &Kubectl, args: &[&str]) -> Vec<String> {
        kubectl
            .command(args)
            .as_std()
            .get_args()
            .map(OsStr::to_string_lossy)
            .map(|a| a.into_owned())
            .collect()
    }

    #[test]
    fn test_command_without_context() {
        let kubectl = Kubectl::new("kubectl");

        assert_eq!(args_of(&kubectl, &["cluster-info"]), vec!["cluster-info"]);
    }

    #[test]
    fn test_command_prepends_context() {
        let kubectl = Kubectl::new("kubectl").with_context(Some("prod".to_string()));

        assert_eq!(
            args_of(&kubectl, &["config", "view", "-o", "json"]),
            vec!["--context", "prod", "config", "view", "-o", "json"]
        );
    }

    #[tokio::test]
    async fn test_output_captures_stdout_and_code() {
        let sh = Kubectl::new("sh");

        let output = sh.output(&["-c", "echo hello; echo oops >&2; exit 4"]).await.unwrap();

        assert_eq!(output.code, Some(4));
        assert_eq!(output.stdout, "hello\n");
        assert_eq!(output.stderr, "oops\n");
        assert!(!output.success());
    }

    #[tokio::test]
    async fn test_status_returns_exit_code() {
        let sh = Kubectl::new("sh");

        assert_eq!(sh.status(&["-c", "exit 0"]).await.unwrap(), Some(0));
        assert_eq!(sh.status(&["-c", "exit 2"]).await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let kubectl = Kubectl::new("/nonexistent/kubectl");

        let err = kubectl.output(&["cluster-info"]).await.unwrap_err();

        assert!(matches!(err, RegisterError::Spawn { ref program, .. } if program == "/nonexistent/kubectl"));
    }
}
