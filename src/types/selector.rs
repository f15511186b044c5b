// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! serviceMonitorSelector toggling on an untyped PlatformMonitoring body

use crate::constants::selector::{FIELD, LABEL_KEY, LABEL_VALUE, OPERATOR};
use crate::error::{HelperError, Result};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, LabelSelectorRequirement};
use serde_json::{Map, Value};

/// Selector restricting scraping to ServiceMonitors of the monitoring component
pub fn monitoring_selector() -> LabelSelector {
    LabelSelector {
        match_expressions: Some(vec![LabelSelectorRequirement {
            key: LABEL_KEY.to_string(),
            operator: OPERATOR.to_string(),
            values: Some(vec![LABEL_VALUE.to_string()]),
        }]),
        match_labels: None,
    }
}

fn object_at_mut<'a>(data: &'a mut Value, path: &[&str]) -> Option<&'a mut Map<String, Value>> {
    path.iter()
        .try_fold(data, |node, key| node.get_mut(*key))
        .and_then(Value::as_object_mut)
}

/// Set `<parent_path>.serviceMonitorSelector` to `selector`.
///
/// The parent object must already exist.
pub fn insert_selector(data: &mut Value, parent_path: &[&str], selector: &LabelSelector) -> Result<()> {
    let value = serde_json::to_value(selector)?;
    let parent = object_at_mut(data, parent_path)
        .ok_or_else(|| HelperError::MissingField(parent_path.join(".")))?;

    parent.insert(FIELD.to_string(), value);
    Ok(())
}

/// Remove `<parent_path>.serviceMonitorSelector`, returning whether it was there.
/// A missing parent is treated the same as a missing selector.
pub fn remove_selector(data: &mut Value, parent_path: &[&str]) -> bool {
    object_at_mut(data, parent_path)
        .and_then(|parent| parent.remove(FIELD))
        .is_some()
}
