// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const VM_AGENT_PATH: &[&str] = &["spec", "victoriametrics", "vmAgent"];
const PROMETHEUS_PATH: &[&str] = &["spec", "prometheus"];

/// Monitoring operator installed in the cluster under test
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorKind {
    VictoriaMetrics,
    Prometheus,
    /// Anything else, keeping the raw value (if any) for logging
    Unknown(Option<String>),
}

impl OperatorKind {
    pub const VICTORIA_METRICS: &'static str = "victoriametrics-operator";
    pub const PROMETHEUS: &'static str = "prometheus-operator";

    /// Resolve from an optional raw value, `None` meaning the variable is unset
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(value) => match value.parse::<OperatorKind>() {
                Ok(kind) => kind,
                Err(never) => match never {},
            },
            None => OperatorKind::Unknown(None),
        }
    }

    /// Path inside the PlatformMonitoring body that holds the serviceMonitorSelector
    pub fn selector_parent_path(&self) -> Option<&'static [&'static str]> {
        match self {
            OperatorKind::VictoriaMetrics => Some(VM_AGENT_PATH),
            OperatorKind::Prometheus => Some(PROMETHEUS_PATH),
            OperatorKind::Unknown(_) => None,
        }
    }
}

impl Default for OperatorKind {
    fn default() -> Self {
        OperatorKind::Unknown(None)
    }
}

impl FromStr for OperatorKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            Self::VICTORIA_METRICS => OperatorKind::VictoriaMetrics,
            Self::PROMETHEUS => OperatorKind::Prometheus,
            other => OperatorKind::Unknown(Some(other.to_string())),
        })
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorKind::VictoriaMetrics => f.write_str(Self::VICTORIA_METRICS),
            OperatorKind::Prometheus => f.write_str(Self::PROMETHEUS),
            OperatorKind::Unknown(Some(raw)) => f.write_str(raw),
            OperatorKind::Unknown(None) => f.write_str("<unset>"),
        }
    }
}
