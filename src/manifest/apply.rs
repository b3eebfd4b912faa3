// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Applying the registration manifest through kubectl

use crate::error::{RegisterError, Result};
use crate::kubernetes::CommandRunner;
use crate::manifest::ManifestUrl;
use tracing::{info, instrument};

/// Let kubectl fetch the manifest and apply it to the cluster.
/// Any non-zero exit is an apply failure; causes are not distinguished.
#[instrument(skip_all, fields(url = %url.redacted()))]
pub async fn apply_manifest<R: CommandRunner>(runner: &R, url: &ManifestUrl) -> Result<()> {
    info!("Applying registration manifest");

    match runner.status(&["apply", "-f", url.as_str()]).await? {
        Some(0) => {
            info!("Registration manifest applied");
            Ok(())
        }
        code => Err(RegisterError::ApplyFailed { code }),
    }
}
