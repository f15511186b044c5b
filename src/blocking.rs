// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Synchronous wrapper around [`crate::helper::CrdTestHelper`] for test
//! runners that are not async. Each method blocks on the owned runtime, so it
//! must not be called from inside another tokio runtime.

use crate::config::Config;
use crate::error::{HelperError, Result};
use crate::helper::CrdTestHelper as AsyncCrdTestHelper;
use crate::kubernetes::infer_client;
use either::Either;
use kube::client::Status;
use kube::{core::DynamicObject, Client};
use std::fmt::{Debug, Formatter};
use std::path::Path;
use tokio::runtime::{Builder, Runtime};

pub struct CrdTestHelper {
    inner: AsyncCrdTestHelper,
    runtime: Runtime,
}

impl Debug for CrdTestHelper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrdTestHelper")
            .field("config", self.inner.config())
            .field("kubernetes_version_is_new", &self.inner.kubernetes_version_is_new())
            .finish()
    }
}

fn build_runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(HelperError::Runtime)
}

impl CrdTestHelper {
    /// Connect with the inferred client
    pub fn connect(config: Config) -> Result<Self> {
        let runtime = build_runtime()?;
        let inner = runtime.block_on(async {
            let client = infer_client().await?;
            AsyncCrdTestHelper::new(client, config).await
        })?;
        Ok(Self { inner, runtime })
    }

    /// Build from a client created inside `runtime` (under `runtime.enter()`),
    /// since the client's request buffer is spawned on the runtime current at
    /// creation time.
    pub fn with_runtime(runtime: Runtime, client: Client, config: Config) -> Result<Self> {
        let inner = runtime.block_on(AsyncCrdTestHelper::new(client, config))?;
        Ok(Self { inner, runtime })
    }

    pub fn inner(&self) -> &AsyncCrdTestHelper {
        &self.inner
    }

    pub fn get_service_monitor(&self, name: &str) -> Result<DynamicObject> {
        self.runtime.block_on(self.inner.get_service_monitor(name))
    }

    pub fn create_service_monitor(&self, file_path: &Path) -> Result<DynamicObject> {
        self.runtime
            .block_on(self.inner.create_service_monitor(file_path))
    }

    pub fn patch_service_monitor(
        &self,
        name: &str,
        body: &serde_json::Value,
    ) -> Result<DynamicObject> {
        self.runtime
            .block_on(self.inner.patch_service_monitor(name, body))
    }

    pub fn delete_service_monitor(&self, name: &str) -> Result<Either<DynamicObject, Status>> {
        self.runtime.block_on(self.inner.delete_service_monitor(name))
    }

    pub fn create_custom_metric_rule(&self, file_path: &Path) -> Result<DynamicObject> {
        self.runtime
            .block_on(self.inner.create_custom_metric_rule(file_path))
    }

    pub fn delete_custom_metric_rule(&self, name: &str) -> Result<Either<DynamicObject, Status>> {
        self.runtime
            .block_on(self.inner.delete_custom_metric_rule(name))
    }

    pub fn create_horizontal_pod_autoscaler(&self, dir_path: &Path) -> Result<DynamicObject> {
        self.runtime
            .block_on(self.inner.create_horizontal_pod_autoscaler(dir_path))
    }

    pub fn delete_horizontal_pod_autoscaler(
        &self,
        name: &str,
    ) -> Result<Either<DynamicObject, Status>> {
        self.runtime
            .block_on(self.inner.delete_horizontal_pod_autoscaler(name))
    }

    pub fn get_horizontal_pod_autoscaler_status(&self, name: &str) -> Result<DynamicObject> {
        self.runtime
            .block_on(self.inner.get_horizontal_pod_autoscaler_status(name))
    }

    pub fn get_kubernetes_version(&self) -> Result<String> {
        self.runtime.block_on(self.inner.get_kubernetes_version())
    }

    pub fn check_kubernetes_version(&self) -> Result<bool> {
        self.runtime.block_on(self.inner.check_kubernetes_version())
    }

    pub fn add_selector_to_cr(&self, cr_name: &str, namespace: &str) -> Result<DynamicObject> {
        self.runtime
            .block_on(self.inner.add_selector_to_cr(cr_name, namespace))
    }

    pub fn delete_selector_from_cr(&self, cr_name: &str, namespace: &str) -> Result<DynamicObject> {
        self.runtime
            .block_on(self.inner.delete_selector_from_cr(cr_name, namespace))
    }
}
