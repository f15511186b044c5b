// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read by [`crate::config::Config::from_env`]
pub mod env {
    pub const NAMESPACE: &str = "NAMESPACE";
    pub const OPERATOR: &str = "OPERATOR";
}

/// prometheus-operator ServiceMonitor
pub mod service_monitor {
    pub const GROUP: &str = "monitoring.coreos.com";
    pub const VERSION: &str = "v1";
    pub const KIND: &str = "ServiceMonitor";
    pub const PLURAL: &str = "servicemonitors";
}

/// Custom resources owned by the monitoring operator
pub mod qubership {
    pub const GROUP: &str = "monitoring.qubership.org";
    pub const VERSION: &str = "v1alpha1";

    pub const CUSTOM_METRIC_RULE_KIND: &str = "CustomScaleMetricRule";
    pub const CUSTOM_METRIC_RULE_PLURAL: &str = "customscalemetricrules";
}

/// HorizontalPodAutoscaler coordinates and manifest file names
pub mod hpa {
    pub const GROUP: &str = "autoscaling";
    pub const KIND: &str = "HorizontalPodAutoscaler";
    pub const PLURAL: &str = "horizontalpodautoscalers";

    /// API version used on clusters at or above the version threshold
    pub const VERSION_NEW: &str = "v2";
    /// API version used on older clusters, and always for status reads
    pub const VERSION_OLD: &str = "v2beta1";

    pub const MANIFEST_NEW: &str = "horizontal-pod-autoscaler.yaml";
    pub const MANIFEST_OLD: &str = "horizontal-pod-autoscaler-old.yaml";
}

/// Clusters whose version compares at or above this are treated as "new"
pub const KUBERNETES_VERSION_THRESHOLD: &str = "1.23";

/// Label requirement injected as a serviceMonitorSelector
pub mod selector {
    pub const FIELD: &str = "serviceMonitorSelector";
    pub const LABEL_KEY: &str = "app.kubernetes.io/component";
    pub const OPERATOR: &str = "In";
    pub const LABEL_VALUE: &str = "monitoring";
}
