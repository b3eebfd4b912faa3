// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("Failed to execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`kubectl {command}` {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Failed to parse kubeconfig: {0}")]
    KubeconfigParse(String),

    #[error("Failed to infer Kubernetes client configuration: {0}")]
    InferConfig(String),

    #[error("Unable to determine the Kubernetes API server from local configuration")]
    EndpointUnavailable,

    #[error("Failed to apply registration manifest: kubectl apply {}", describe_exit(.code))]
    ApplyFailed { code: Option<i32> },

    #[error("Invalid registration API URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, RegisterError>;
