// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// A single registration request. Values are opaque and forwarded unmodified.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub token: String,
    pub cluster_name: String,
    pub api_server: Option<String>,
}

impl Registration {
    pub fn new(
        token: impl Into<String>,
        cluster_name: impl Into<String>,
        api_server: Option<String>,
    ) -> Self {
        Self {
            token: token.into(),
            cluster_name: cluster_name.into(),
            api_server,
        }
    }

    /// The caller-supplied API server, if any. An empty value counts as absent.
    pub fn explicit_api_server(&self) -> Option<&str> {
        self.api_server.as_deref().filter(|s| !s.is_empty())
    }
}

// Keep the token out of debug output and logs
impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("token", &"<redacted>")
            .field("cluster_name", &self.cluster_name)
            .field("api_server", &self.api_server)
            .finish()
    }
}
