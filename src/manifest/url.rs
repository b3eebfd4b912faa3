// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Manifest URL construction

use crate::constants::api::{params, MANIFEST_PATH};
use std::fmt;
use url::Url;

const REDACTED: &str = "REDACTED";

/// Address of the registration manifest for one cluster.
///
/// Parameter values are inserted verbatim in the fixed order `api-token`,
/// `k8s-cluster-name`, `k8s-api`. Only characters that cannot appear in a
/// query at all (spaces, quotes, `#`, `<`, `>`) are percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestUrl {
    url: Url,
    redacted: Url,
}

impl ManifestUrl {
    pub fn new(base: &Url, token: &str, cluster_name: &str, api_server: &str) -> Self {
        Self {
            url: compose(base, token, cluster_name, api_server),
            redacted: compose(base, REDACTED, cluster_name, api_server),
        }
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// The same address with the token masked, safe for logs
    pub fn redacted(&self) -> &str {
        self.redacted.as_str()
    }
}

impl fmt::Display for ManifestUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn compose(base: &Url, token: &str, cluster_name: &str, api_server: &str) -> Url {
    let mut url = base.clone();
    let path = format!("{}{}", base.path().trim_end_matches('/'), MANIFEST_PATH);
    url.set_path(&path);
    url.set_fragment(None);
    url.set_query(Some(&format!(
        "{}={}&{}={}&{}={}",
        params::API_TOKEN,
        token,
        params::CLUSTER_NAME,
        cluster_name,
        params::API_SERVER,
        api_server
    )));
    url
}
