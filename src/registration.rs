// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! End-to-end registration flow: resolve the API server, build the manifest
//! URL, apply it.

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::CommandRunner;
use crate::manifest::{apply_manifest, ManifestUrl};
use crate::resolver::resolve_api_server;
use crate::types::Registration;
use tracing::{debug, info, instrument};

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The manifest was applied to the cluster
    Applied { cluster_name: String },
    /// Dry run, nothing was applied
    Planned { url: ManifestUrl },
}

/// Register a cluster. With `dry_run` the flow stops after the URL is built.
#[instrument(skip(runner, config), fields(cluster = %registration.cluster_name))]
pub async fn register<R: CommandRunner>(
    runner: &R,
    config: &Config,
    registration: &Registration,
    dry_run: bool,
) -> Result<Outcome> {
    let api_server = match (registration.explicit_api_server(), &config.api_server) {
        (Some(server), _) => {
            debug!("Using API server {} from the command line", server);
            server.to_string()
        }
        (None, Some(server)) => {
            debug!("Using API server {} from the environment", server);
            server.clone()
        }
        (None, None) => resolve_api_server(runner, config).await?,
    };

    let url = ManifestUrl::new(
        &config.api_url,
        &registration.token,
        &registration.cluster_name,
        &api_server,
    );
    info!("Manifest URL: {}", url.redacted());

    if dry_run {
        return Ok(Outcome::Planned { url });
    }

    apply_manifest(runner, &url).await?;

    Ok(Outcome::Applied {
        cluster_name: registration.cluster_name.clone(),
    })
}
