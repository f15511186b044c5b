// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API server version lookup

use crate::error::Result;
use crate::types::version::strip_version_prefix;
use kube::Client;
use tracing::debug;

/// Query `/version` and return `gitVersion` without its leading `v`
pub async fn get_kubernetes_version(client: &Client) -> Result<String> {
    let info = client.apiserver_version().await?;
    debug!("API server reports gitVersion {}", info.git_version);

    Ok(strip_version_prefix(&info.git_version).to_string())
}
