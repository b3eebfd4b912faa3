// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API server discovery through kube's own config inference

use crate::error::{RegisterError, Result};
use kube::Config as KConfig;
use tracing::{debug, instrument};

/// Infer the API server the way kube clients do: `KUBECONFIG` or
/// `~/.kube/config` first, then the in-cluster service account environment.
#[instrument]
pub async fn infer_api_server() -> Result<Option<String>> {
    let config = KConfig::infer()
        .await
        .map_err(|e| RegisterError::InferConfig(e.to_string()))?;

    debug!("Inferred cluster URL {}", config.cluster_url);
    Ok(api_server_of(&config))
}

/// Cluster URL of a client config without the trailing root slash
pub fn api_server_of(config: &KConfig) -> Option<String> {
    let url = config.cluster_url.to_string();
    let url = url.trim_end_matches('/');
    (!url.is_empty()).then(|| url.to_string())
}
