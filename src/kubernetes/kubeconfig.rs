// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed access to `kubectl config view` output

use crate::error::{RegisterError, Result};
use kube::config::Kubeconfig;

/// Server address of the first cluster in a JSON-serialized kubeconfig
pub fn server_from_json(raw: &str) -> Result<Option<String>> {
    let kubeconfig: Kubeconfig = serde_json::from_str(raw)
        .map_err(|e| RegisterError::KubeconfigParse(format!("invalid JSON: {}", e)))?;
    Ok(first_cluster_server(&kubeconfig))
}

/// Server address of the first cluster in a YAML-serialized kubeconfig
pub fn server_from_yaml(raw: &str) -> Result<Option<String>> {
    let kubeconfig: Kubeconfig = serde_yaml::from_str(raw)
        .map_err(|e| RegisterError::KubeconfigParse(format!("invalid YAML: {}", e)))?;
    Ok(first_cluster_server(&kubeconfig))
}

/// The first cluster wins regardless of the current context.
pub fn first_cluster_server(kubeconfig: &Kubeconfig) -> Option<String> {
    kubeconfig
        .clusters
        .first()
        .and_then(|named| named.cluster.as_ref())
        .and_then(|cluster| cluster.server.as_deref())
        .map(str::trim)
        .filter(|server| !server.is_empty())
        .map(str::to_string)
}
