// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom-object operations used by the monitoring end-to-end suite.

use crate::config::Config;
use crate::constants::{hpa, qubership, service_monitor};
use crate::error::Result;
use crate::kubernetes::{get_kubernetes_version, infer_client, load_manifest};
use crate::types::selector::{insert_selector, monitoring_selector, remove_selector};
use crate::types::version::is_new_version;
use crate::types::{CustomResourceCoordinates, ResourceType};
use either::Either;
use kube::client::Status;
use kube::{
    api::{DeleteParams, Patch, PatchParams, PostParams},
    core::DynamicObject,
    Api, Client,
};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Thin façade over the custom-object API for one test session.
///
/// The cluster version is looked up once at construction; every other call
/// is a single request whose errors are returned unchanged.
#[derive(Clone)]
pub struct CrdTestHelper {
    client: Client,
    config: Config,
    kubernetes_version_is_new: bool,
}

impl CrdTestHelper {
    /// Build a helper, querying the cluster version to select the autoscaling API
    pub async fn new(client: Client, config: Config) -> Result<Self> {
        let version = get_kubernetes_version(&client).await?;
        let kubernetes_version_is_new = is_new_version(&version)?;

        info!(
            "Kubernetes version {} (new autoscaling API: {}), namespace={}, operator={}",
            version, kubernetes_version_is_new, config.namespace, config.operator
        );

        Ok(Self::with_version_flag(client, config, kubernetes_version_is_new))
    }

    /// Build a helper with a known version flag, skipping the version lookup
    pub fn with_version_flag(client: Client, config: Config, kubernetes_version_is_new: bool) -> Self {
        Self {
            client,
            config,
            kubernetes_version_is_new,
        }
    }

    /// Resolve configuration from the environment and connect with the inferred client
    pub async fn from_env() -> anyhow::Result<Self> {
        let config = Config::from_env()?;
        let client = infer_client().await?;
        Ok(Self::new(client, config).await?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn kubernetes_version_is_new(&self) -> bool {
        self.kubernetes_version_is_new
    }

    fn api(&self, resource: &ResourceType) -> Api<DynamicObject> {
        resource.namespaced_api(self.client.clone(), &self.config.namespace)
    }

    fn service_monitors(&self) -> Api<DynamicObject> {
        self.api(&ResourceType::new(
            service_monitor::GROUP,
            service_monitor::VERSION,
            service_monitor::KIND,
            service_monitor::PLURAL,
        ))
    }

    fn custom_metric_rules(&self) -> Api<DynamicObject> {
        self.api(&ResourceType::new(
            qubership::GROUP,
            qubership::VERSION,
            qubership::CUSTOM_METRIC_RULE_KIND,
            qubership::CUSTOM_METRIC_RULE_PLURAL,
        ))
    }

    fn horizontal_pod_autoscalers(&self, version: &str) -> Api<DynamicObject> {
        self.api(&ResourceType::new(hpa::GROUP, version, hpa::KIND, hpa::PLURAL))
    }

    /// Monitoring custom resource whose plural is its name plus "s".
    /// Only group, version and plural reach the request path, so the name
    /// doubles as the kind.
    fn monitoring_resource(cr_name: &str, namespace: &str) -> CustomResourceCoordinates {
        ResourceType::new(
            qubership::GROUP,
            qubership::VERSION,
            cr_name,
            &format!("{}s", cr_name),
        )
        .object(namespace, cr_name)
    }

    /// Autoscaling API version and manifest file name for this cluster
    pub fn hpa_version_and_manifest(&self) -> (&'static str, &'static str) {
        if self.kubernetes_version_is_new {
            (hpa::VERSION_NEW, hpa::MANIFEST_NEW)
        } else {
            (hpa::VERSION_OLD, hpa::MANIFEST_OLD)
        }
    }

    #[instrument(skip(self))]
    pub async fn get_service_monitor(&self, name: &str) -> Result<DynamicObject> {
        Ok(self.service_monitors().get(name).await?)
    }

    #[instrument(skip(self))]
    pub async fn create_service_monitor(&self, file_path: &Path) -> Result<DynamicObject> {
        let body = load_manifest(file_path).await?;
        Ok(self
            .service_monitors()
            .create(&PostParams::default(), &body)
            .await?)
    }

    /// Apply a JSON merge patch to a ServiceMonitor
    #[instrument(skip(self, body))]
    pub async fn patch_service_monitor(
        &self,
        name: &str,
        body: &serde_json::Value,
    ) -> Result<DynamicObject> {
        Ok(self
            .service_monitors()
            .patch(name, &PatchParams::default(), &Patch::Merge(body))
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_service_monitor(&self, name: &str) -> Result<Either<DynamicObject, Status>> {
        Ok(self
            .service_monitors()
            .delete(name, &DeleteParams::default())
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn create_custom_metric_rule(&self, file_path: &Path) -> Result<DynamicObject> {
        let body = load_manifest(file_path).await?;
        Ok(self
            .custom_metric_rules()
            .create(&PostParams::default(), &body)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_custom_metric_rule(
        &self,
        name: &str,
    ) -> Result<Either<DynamicObject, Status>> {
        Ok(self
            .custom_metric_rules()
            .delete(name, &DeleteParams::default())
            .await?)
    }

    /// Create the HPA from `dir_path`, picking the manifest matching the cluster version
    #[instrument(skip(self))]
    pub async fn create_horizontal_pod_autoscaler(&self, dir_path: &Path) -> Result<DynamicObject> {
        let (version, manifest) = self.hpa_version_and_manifest();
        let file_path = dir_path.join(manifest);
        debug!("Creating autoscaling/{} HPA from {}", version, file_path.display());

        let body = load_manifest(&file_path).await?;
        Ok(self
            .horizontal_pod_autoscalers(version)
            .create(&PostParams::default(), &body)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_horizontal_pod_autoscaler(
        &self,
        name: &str,
    ) -> Result<Either<DynamicObject, Status>> {
        let (version, _) = self.hpa_version_and_manifest();
        Ok(self
            .horizontal_pod_autoscalers(version)
            .delete(name, &DeleteParams::default())
            .await?)
    }

    /// Read the HPA status subresource.
    ///
    /// Always goes through `v2beta1`, unlike create and delete which follow the
    /// cluster version.
    // TODO: confirm with the suite owners whether this should follow hpa_version_and_manifest()
    #[instrument(skip(self))]
    pub async fn get_horizontal_pod_autoscaler_status(&self, name: &str) -> Result<DynamicObject> {
        Ok(self
            .horizontal_pod_autoscalers(hpa::VERSION_OLD)
            .get_status(name)
            .await?)
    }

    pub async fn get_kubernetes_version(&self) -> Result<String> {
        get_kubernetes_version(&self.client).await
    }

    /// Query the live version and compare it against the threshold
    pub async fn check_kubernetes_version(&self) -> Result<bool> {
        let version = self.get_kubernetes_version().await?;
        is_new_version(&version)
    }

    /// Point the operator's serviceMonitorSelector at monitoring-component ServiceMonitors.
    ///
    /// The resource is merge-patched back even when the operator is unknown
    /// and nothing was changed.
    #[instrument(skip(self))]
    pub async fn add_selector_to_cr(&self, cr_name: &str, namespace: &str) -> Result<DynamicObject> {
        let coordinates = Self::monitoring_resource(cr_name, namespace);
        let api = coordinates.api(self.client.clone());
        debug!("Fetching {}", coordinates);
        let mut custom_resource = api.get_status(&coordinates.name).await?;

        match self.config.operator.selector_parent_path() {
            Some(path) => {
                insert_selector(&mut custom_resource.data, path, &monitoring_selector())?;
                info!("Added serviceMonitorSelector under {}", path.join("."));
            }
            None => warn!(
                operator = %self.config.operator,
                "Prometheus or victoriametrics operator is not found!"
            ),
        }

        Ok(api
            .patch(&coordinates.name, &PatchParams::default(), &Patch::Merge(&custom_resource))
            .await?)
    }

    /// Drop the operator's serviceMonitorSelector, then replace the whole resource
    #[instrument(skip(self))]
    pub async fn delete_selector_from_cr(
        &self,
        cr_name: &str,
        namespace: &str,
    ) -> Result<DynamicObject> {
        let coordinates = Self::monitoring_resource(cr_name, namespace);
        let api = coordinates.api(self.client.clone());
        debug!("Fetching {}", coordinates);
        let mut custom_resource = api.get_status(&coordinates.name).await?;

        match self.config.operator.selector_parent_path() {
            Some(path) => {
                if remove_selector(&mut custom_resource.data, path) {
                    info!("Removed serviceMonitorSelector under {}", path.join("."));
                } else {
                    debug!("No serviceMonitorSelector under {}", path.join("."));
                }
            }
            None => warn!(
                operator = %self.config.operator,
                "Prometheus or victoriametrics operator is not found!"
            ),
        }

        Ok(api
            .replace(&coordinates.name, &PostParams::default(), &custom_resource)
            .await?)
    }
}
