// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{api, env as vars, DEFAULT_KUBECTL};
use crate::error::Result;
use anyhow::Context;
use std::env;
use url::Url;

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// kubectl binary used for every cluster query and for the apply
    pub kubectl: String,
    /// Optional kubeconfig context passed to kubectl as `--context`
    pub kube_context: Option<String>,
    /// Base address of the registration service
    pub api_url: Url,
    /// API server used when none is given on the command line
    pub api_server: Option<String>,
    /// After the kubectl sources, try kube's own config inference
    /// (kubeconfig, then the in-cluster service account)
    pub infer_config: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
            .context("Invalid configuration in environment")
    }

    /// Load configuration through an arbitrary variable lookup.
    /// Unset and empty variables both fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let kubectl = get(vars::KUBECTL).unwrap_or_else(|| DEFAULT_KUBECTL.to_string());
        let kube_context = get(vars::KUBE_CONTEXT);
        let api_url = Url::parse(&get(vars::API_URL).unwrap_or_else(|| api::DEFAULT_URL.to_string()))?;
        let api_server = get(vars::API_SERVER);
        let infer_config: bool = get(vars::INFER_CONFIG)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(false);

        Ok(Config {
            kubectl,
            kube_context,
            api_url,
            api_server,
            infer_config,
        })
    }
}
