// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API server discovery from local kubectl configuration.
//!
//! Three kubectl sources are tried in order and the first non-empty address
//! wins. When enabled, kube's own config inference is tried last. Sources are
//! not checked against each other.

pub mod cluster_info;

use crate::config::Config;
use crate::error::{RegisterError, Result};
use crate::kubernetes::{infer_api_server, server_from_json, server_from_yaml, CommandRunner};
use cluster_info::parse_cluster_info;
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// A single endpoint discovery source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `kubectl cluster-info`
    ClusterInfo,
    /// `kubectl config view -o json`
    ConfigViewJson,
    /// `kubectl config view -o yaml`
    ConfigViewYaml,
}

impl Strategy {
    /// Fallback order
    pub const ALL: [Strategy; 3] = [
        Strategy::ClusterInfo,
        Strategy::ConfigViewJson,
        Strategy::ConfigViewYaml,
    ];

    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Strategy::ClusterInfo => &["cluster-info"],
            Strategy::ConfigViewJson => &["config", "view", "-o", "json"],
            Strategy::ConfigViewYaml => &["config", "view", "-o", "yaml"],
        }
    }

    fn extract(&self, stdout: &str) -> Result<Option<String>> {
        match self {
            Strategy::ClusterInfo => Ok(parse_cluster_info(stdout)),
            Strategy::ConfigViewJson => server_from_json(stdout),
            Strategy::ConfigViewYaml => server_from_yaml(stdout),
        }
    }

    /// Run this strategy once. `Ok(None)` means the source had no address.
    pub async fn lookup<R: CommandRunner>(&self, runner: &R) -> Result<Option<String>> {
        let output = runner.output(self.args()).await?;
        if !output.success() {
            return Err(RegisterError::CommandFailed {
                command: self.args().join(" "),
                code: output.code,
            });
        }
        self.extract(&output.stdout)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kubectl {}", self.args().join(" "))
    }
}

/// Resolve the API server address, trying each [`Strategy`] in order.
/// A failing source counts as empty.
#[instrument(skip(runner, config), fields(infer = config.infer_config))]
pub async fn resolve_api_server<R: CommandRunner>(runner: &R, config: &Config) -> Result<String> {
    for strategy in Strategy::ALL {
        match strategy.lookup(runner).await {
            Ok(Some(server)) => {
                info!("Resolved API server {} via `{}`", server, strategy);
                return Ok(server);
            }
            Ok(None) => debug!("`{}` returned no API server", strategy),
            Err(e) => warn!("`{}` failed: {}", strategy, e),
        }
    }

    if config.infer_config {
        match infer_api_server().await {
            Ok(Some(server)) => {
                info!("Resolved API server {} via kube config inference", server);
                return Ok(server);
            }
            Ok(None) => debug!("kube config inference returned no API server"),
            Err(e) => warn!("kube config inference failed: {}", e),
        }
    }

    Err(RegisterError::EndpointUnavailable)
}
