// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod blocking;
pub mod config;
pub mod constants;
pub mod error;
pub mod helper;
pub mod kubernetes;
pub mod logging;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use error::{HelperError, Result};
pub use helper::CrdTestHelper;
pub use types::OperatorKind;
