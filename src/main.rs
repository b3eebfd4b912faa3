// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kube_register::cli::{parse_error_exit_code, Cli};
use kube_register::config::Config;
use kube_register::constants::FAILURE_EXIT_CODE;
use kube_register::kubernetes::Kubectl;
use kube_register::registration::{register, Outcome};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage goes to stderr, help and version to stdout. A failed write
            // is ignored, as clap::Error::exit does.
            let _ = e.print();
            return ExitCode::from(parse_error_exit_code(&e));
        }
    };

    // Logs share stderr with error messages, stdout stays for results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: kubectl={}, api_url={}",
        config.kubectl, config.api_url
    );

    let kubectl = Kubectl::from_config(&config);

    match register(&kubectl, &config, &cli.registration(), cli.dry_run).await? {
        Outcome::Applied { cluster_name } => {
            println!("Successfully registered cluster '{}'", cluster_name);
        }
        Outcome::Planned { url } => println!("{}", url),
    }

    Ok(())
}
