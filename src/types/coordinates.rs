// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::{api::ApiResource, core::DynamicObject, Api, Client};
use std::fmt;

/// Group/version/plural of a custom resource type, plus its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceType {
    pub group: String,
    pub version: String,
    pub kind: String,
    pub plural: String,
}

impl ResourceType {
    pub fn new(group: &str, version: &str, kind: &str, plural: &str) -> Self {
        Self {
            group: group.to_string(),
            version: version.to_string(),
            kind: kind.to_string(),
            plural: plural.to_string(),
        }
    }

    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    pub fn api_resource(&self) -> ApiResource {
        ApiResource {
            group: self.group.clone(),
            version: self.version.clone(),
            api_version: self.api_version(),
            kind: self.kind.clone(),
            plural: self.plural.clone(),
        }
    }

    /// Dynamic API handle for this type in `namespace`
    pub fn namespaced_api(&self, client: Client, namespace: &str) -> Api<DynamicObject> {
        Api::namespaced_with(client, namespace, &self.api_resource())
    }

    /// Address a single named object of this type
    pub fn object(&self, namespace: &str, name: &str) -> CustomResourceCoordinates {
        CustomResourceCoordinates {
            resource: self.clone(),
            namespace: namespace.to_string(),
            name: name.to_string(),
        }
    }
}

/// Fully qualified address of one custom object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomResourceCoordinates {
    pub resource: ResourceType,
    pub namespace: String,
    pub name: String,
}

impl CustomResourceCoordinates {
    pub fn api(&self, client: Client) -> Api<DynamicObject> {
        self.resource.namespaced_api(client, &self.namespace)
    }
}

impl fmt::Display for CustomResourceCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}/{} {}/{}",
            self.resource.plural, self.resource.group, self.resource.version, self.namespace, self.name
        )
    }
}
