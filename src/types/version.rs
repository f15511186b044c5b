// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster version handling.
//!
//! Components are compared as strings, not integers, so `"1.9"` sorts above
//! `"1.23"`. Callers in the test suite rely on this ordering.

use crate::constants::KUBERNETES_VERSION_THRESHOLD;
use crate::error::{HelperError, Result};
use std::cmp::Ordering;

/// Strip exactly one leading `v` from a `gitVersion` string
pub fn strip_version_prefix(git_version: &str) -> &str {
    git_version.strip_prefix('v').unwrap_or(git_version)
}

/// Compare `version` against `threshold` component by component.
///
/// The first differing component decides; if every threshold component is
/// equal the version counts as at-least. Extra trailing components of
/// `version` (patch level) are ignored.
pub fn is_at_least(version: &str, threshold: &str) -> Result<bool> {
    let components: Vec<&str> = version.split('.').collect();

    for (i, wanted) in threshold.split('.').enumerate() {
        let Some(actual) = components.get(i) else {
            return Err(HelperError::InvalidVersion(format!(
                "'{}' has fewer components than '{}'",
                version, threshold
            )));
        };

        match (*actual).cmp(wanted) {
            Ordering::Greater => return Ok(true),
            Ordering::Less => return Ok(false),
            Ordering::Equal => {}
        }
    }

    Ok(true)
}

/// Whether a cluster of this version should use the newer autoscaling API
pub fn is_new_version(version: &str) -> Result<bool> {
    is_at_least(version, KUBERNETES_VERSION_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_version_prefix() {
        assert_eq!(strip_version_prefix("v1.24.3"), "1.24.3");
        assert_eq!(strip_version_prefix("1.24.3"), "1.24.3");
        assert_eq!(strip_version_prefix("vv1.24"), "v1.24");
        assert_eq!(strip_version_prefix(""), "");
    }

    #[test]
    fn test_major_above_threshold_is_new() {
        assert!(is_new_version("2.0").unwrap());
        assert!(is_new_version("2.99.1").unwrap());
        assert!(is_new_version("3.1").unwrap());
    }

    #[test]
    fn test_minor_compared_as_string() {
        // "9" > "2" on the first character
        assert!(is_new_version("1.9").unwrap());
        assert!(is_new_version("1.3.0").unwrap());
        assert!(!is_new_version("1.100").unwrap());
    }

    #[test]
    fn test_threshold_and_neighbours() {
        assert!(is_new_version("1.23").unwrap());
        assert!(is_new_version("1.23.4").unwrap());
        assert!(is_new_version("1.24.3").unwrap());
        assert!(!is_new_version("1.22.17").unwrap());
        assert!(!is_new_version("1.20").unwrap());
    }

    #[test]
    fn test_major_below_threshold_is_old() {
        assert!(!is_new_version("0.99").unwrap());
    }

    #[test]
    fn test_too_few_components() {
        let err = is_new_version("1").unwrap_err();
        assert!(matches!(err, HelperError::InvalidVersion(_)));
    }

    #[test]
    fn test_custom_threshold() {
        assert!(is_at_least("1.30.2", "1.30").unwrap());
        assert!(!is_at_least("1.29.9", "1.30").unwrap());
    }
}
