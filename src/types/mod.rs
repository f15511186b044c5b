// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Value types shared by the helper: resource coordinates, operator flavor,
//! cluster version comparison and selector mutation.

pub mod coordinates;
pub mod operator;
pub mod selector;
pub mod version;

pub use coordinates::{CustomResourceCoordinates, ResourceType};
pub use operator::OperatorKind;
