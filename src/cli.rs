// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line surface

use crate::constants::FAILURE_EXIT_CODE;
use crate::types::Registration;
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "kube-register", version)]
#[command(about = "Register this Kubernetes cluster with the registration API", long_about = None)]
pub struct Cli {
    /// API token issued by the registration service
    #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
    pub token: String,

    /// Name to register the cluster under
    #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
    pub cluster_name: String,

    /// Kubernetes API server address, discovered through kubectl when omitted
    #[arg(allow_hyphen_values = true)]
    pub api_server: Option<String>,

    /// Print the manifest URL instead of applying it
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn registration(&self) -> Registration {
        Registration::new(
            self.token.clone(),
            self.cluster_name.clone(),
            self.api_server.clone(),
        )
    }
}

/// Process exit code for a parse error. Help and version requests succeed,
/// every usage error exits with the common failure code.
pub fn parse_error_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        FAILURE_EXIT_CODE
    } else {
        0
    }
}
