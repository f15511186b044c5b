// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, manifest loading and version lookup.

pub mod client;
pub mod manifest;
pub mod version;

pub use client::{client_from_kubeconfig_file, infer_client};
pub use manifest::load_manifest;
pub use version::get_kubernetes_version;
