// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Registration manifest URL construction and apply.

pub mod apply;
pub mod url;

pub use self::apply::apply_manifest;
pub use self::url::ManifestUrl;
