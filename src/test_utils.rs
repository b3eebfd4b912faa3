// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for scripting kubectl responses.

use crate::config::Config;
use crate::error::{RegisterError, Result};
use crate::kubernetes::{CommandOutput, CommandRunner};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// A mock kubectl that returns predefined results based on the argument line.
/// Unmatched invocations fail as if the binary were missing.
#[derive(Clone, Default)]
pub struct MockKubectl {
    outputs: Arc<Mutex<HashMap<String, CommandOutput>>>,
    statuses: Arc<Mutex<Vec<(String, i32)>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockKubectl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer a captured query whose arguments match exactly
    pub fn on_output(self, args: &str, code: i32, stdout: &str) -> Self {
        self.outputs.lock().unwrap().insert(
            args.to_string(),
            CommandOutput {
                code: Some(code),
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        );
        self
    }

    /// Answer a command whose arguments start with `args_prefix`.
    /// Overlapping prefixes are tried in registration order.
    pub fn on_status(self, args_prefix: &str, code: i32) -> Self {
        self.statuses
            .lock()
            .unwrap()
            .push((args_prefix.to_string(), code));
        self
    }

    /// Every argument line received so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, args: &[&str]) -> String {
        let line = args.join(" ");
        self.calls.lock().unwrap().push(line.clone());
        line
    }

    fn not_found(line: &str) -> RegisterError {
        RegisterError::Spawn {
            program: "kubectl".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, format!("no mock for `{}`", line)),
        }
    }
}

#[async_trait]
impl CommandRunner for MockKubectl {
    async fn output(&self, args: &[&str]) -> Result<CommandOutput> {
        let line = self.record(args);
        self.outputs
            .lock()
            .unwrap()
            .get(&line)
            .cloned()
            .ok_or_else(|| Self::not_found(&line))
    }

    async fn status(&self, args: &[&str]) -> Result<Option<i32>> {
        let line = self.record(args);
        let statuses = self.statuses.lock().unwrap();

        // Exact match first, then prefix match for lines carrying a URL
        statuses
            .iter()
            .find(|(exact, _)| *exact == line)
            .or_else(|| {
                statuses
                    .iter()
                    .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            })
            .map(|(_, code)| Some(*code))
            .ok_or_else(|| Self::not_found(&line))
    }
}

/// Configuration with every default
pub fn make_config() -> Config {
    Config::from_lookup(|_| None).unwrap()
}

/// `kubectl config view -o json` output for a single cluster
pub fn kubeconfig_json(server: &str) -> String {
    serde_json::json!({
        "kind": "Config",
        "apiVersion": "v1",
        "preferences": {},
        "clusters": [
            {
                "name": "test-cluster",
                "cluster": { "server": server }
            }
        ],
        "users": [],
        "contexts": [],
        "current-context": "test-cluster"
    })
    .to_string()
}

/// `kubectl config view -o yaml` output for a single cluster
pub fn kubeconfig_yaml(server: &str) -> String {
    format!(
        "apiVersion: v1\nkind: Config\nclusters:\n- cluster:\n    server: {}\n  name: test-cluster\ncontexts: []\nusers: []\n",
        server
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_status_exact_match_beats_prefix() {
        let kubectl = MockKubectl::new()
            .on_status("apply", 1)
            .on_status("apply -f manifest.yaml", 0);

        assert_eq!(kubectl.status(&["apply", "-f", "manifest.yaml"]).await.unwrap(), Some(0));
    }

    #[tokio::test]
    async fn test_status_overlapping_prefixes_use_registration_order() {
        let kubectl = MockKubectl::new()
            .on_status("apply -f", 2)
            .on_status("apply", 3);

        for _ in 0..16 {
            assert_eq!(kubectl.status(&["apply", "-f", "https://x"]).await.unwrap(), Some(2));
        }
        assert_eq!(kubectl.status(&["apply", "-k", "dir"]).await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn test_unmatched_call_is_recorded_and_fails() {
        let kubectl = MockKubectl::new();

        assert!(kubectl.status(&["delete", "ns", "x"]).await.is_err());
        assert_eq!(kubectl.calls(), vec!["delete ns x"]);
    }
}
