// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Scraping the API server address from `kubectl cluster-info`

use crate::constants::CLUSTER_INFO_LABELS;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("ANSI escape pattern compiles"));

/// Extract the address following the control plane label.
/// kubectl colours this output even when it is not a terminal.
pub fn parse_cluster_info(stdout: &str) -> Option<String> {
    let plain = ANSI_ESCAPE.replace_all(stdout, "");

    plain.lines().find_map(|line| {
        CLUSTER_INFO_LABELS.iter().find_map(|label| {
            line.split_once(label)
                .and_then(|(_, rest)| rest.split_whitespace().next())
                .map(str::to_string)
        })
    })
}
