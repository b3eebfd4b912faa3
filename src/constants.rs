// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Registration API
pub mod api {
    /// Base address of the registration service
    pub const DEFAULT_URL: &str = "https://api.peragis.ai";
    /// Path serving the cluster manifest
    pub const MANIFEST_PATH: &str = "/kubernetes-yaml";

    /// Query parameter names, in the order they appear in the manifest URL
    pub mod params {
        pub const API_TOKEN: &str = "api-token";
        pub const CLUSTER_NAME: &str = "k8s-cluster-name";
        pub const API_SERVER: &str = "k8s-api";
    }
}

/// Environment variables read by [`crate::config::Config`]
pub mod env {
    pub const KUBECTL: &str = "KUBECTL";
    pub const KUBE_CONTEXT: &str = "KUBE_CONTEXT";
    pub const API_URL: &str = "REGISTER_API_URL";
    pub const API_SERVER: &str = "K8S_API_URL";
    pub const INFER_CONFIG: &str = "REGISTER_INFER_CONFIG";
}

/// kubectl binary used when `KUBECTL` is not set
pub const DEFAULT_KUBECTL: &str = "kubectl";

/// Labels preceding the API server address in `kubectl cluster-info` output.
/// Older kubectl releases print the first one.
pub const CLUSTER_INFO_LABELS: [&str; 2] = [
    "Kubernetes master is running at",
    "Kubernetes control plane is running at",
];

/// Exit code for every failure, usage errors included
pub const FAILURE_EXIT_CODE: u8 = 1;
