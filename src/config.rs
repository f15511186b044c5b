// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::env as vars;
use crate::types::OperatorKind;
use anyhow::{Context, Result};
use std::env;

/// Helper configuration, resolved once per test session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Namespace the monitoring stack under test is installed in
    pub namespace: String,
    pub operator: OperatorKind,
}

impl Config {
    pub fn new(namespace: impl Into<String>, operator: OperatorKind) -> Self {
        Self {
            namespace: namespace.into(),
            operator,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespace = lookup(vars::NAMESPACE)
            .with_context(|| format!("{} environment variable not set", vars::NAMESPACE))?;
        let operator = OperatorKind::from_raw(lookup(vars::OPERATOR).as_deref());

        Ok(Config::new(namespace, operator))
    }
}
