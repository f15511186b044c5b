// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! YAML manifest loading

use crate::error::{HelperError, Result};
use kube::core::DynamicObject;
use std::path::Path;
use tracing::debug;

/// Read a single-document YAML manifest into an untyped object
pub async fn load_manifest(path: &Path) -> Result<DynamicObject> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| HelperError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Loaded manifest {} ({} bytes)", path.display(), raw.len());

    serde_yaml::from_str(&raw).map_err(|source| HelperError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}
