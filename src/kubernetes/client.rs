// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation for the cluster under test

use crate::error::{HelperError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a client from the ambient environment (in-cluster service account or `KUBECONFIG`)
pub async fn infer_client() -> Result<Client> {
    let config = KConfig::infer()
        .await
        .map_err(|e| HelperError::Kubeconfig(format!("Failed to infer config: {}", e)))?;

    debug!("Inferred cluster URL {}", config.cluster_url);

    Client::try_from(config)
        .map_err(|e| HelperError::Kubeconfig(format!("Failed to create client: {}", e)))
}

/// Create a client from a kubeconfig file on disk
#[instrument]
pub async fn client_from_kubeconfig_file(path: &Path) -> Result<Client> {
    let kubeconfig = tokio::fs::read_to_string(path).await.map_err(|e| {
        HelperError::Kubeconfig(format!("Failed to read kubeconfig {}: {}", path.display(), e))
    })?;

    info!("Creating Kubernetes client from kubeconfig {}", path.display());
    client_from_kubeconfig(&kubeconfig).await
}

/// Create a Kubernetes client from a kubeconfig string
pub async fn client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| HelperError::Kubeconfig(format!("Failed to parse kubeconfig: {}", e)))?;

    let client_config =
        KConfig::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| HelperError::Kubeconfig(format!("Failed to create config: {}", e)))?;

    Client::try_from(client_config)
        .map_err(|e| HelperError::Kubeconfig(format!("Failed to create client: {}", e)))
}
