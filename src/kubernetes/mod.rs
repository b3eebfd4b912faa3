// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! kubectl invocation, kubeconfig parsing and client config inference.

pub mod inferred;
pub mod kubeconfig;
pub mod kubectl;

pub use inferred::infer_api_server;
pub use kubeconfig::{server_from_json, server_from_yaml};
pub use kubectl::{CommandOutput, CommandRunner, Kubectl};
