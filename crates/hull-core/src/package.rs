use std::collections::BTreeMap;

use semver::Version;
use serde::{Deserialize, Serialize};

/// Dependency declarations of a single package version: name -> version range.
pub type DependencySet = BTreeMap<String, String>;

/// One published version of a package, as recorded in a closure.
///
/// The package name lives in the enclosing map key; a record carries only the
/// concrete version and the ranges it declares on other packages. Records are
/// immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub version: Version,
    #[serde(default)]
    pub dependencies: DependencySet,
}

impl VersionRecord {
    /// A record with no dependencies.
    pub fn new(version: Version) -> Self {
        Self {
            version,
            dependencies: DependencySet::new(),
        }
    }

    pub fn with_dependencies(version: Version, dependencies: DependencySet) -> Self {
        Self {
            version,
            dependencies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_without_dependencies_field() {
        let record: VersionRecord = serde_json::from_str(r#"{"version": "1.2.3"}"#).unwrap();
        assert_eq!(record.version, Version::new(1, 2, 3));
        assert!(record.dependencies.is_empty());
    }

    #[test]
    fn serializes_empty_dependencies_explicitly() {
        let record = VersionRecord::new(Version::new(1, 0, 0));
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""dependencies":{}"#), "got: {json}");
    }

    #[test]
    fn ignores_extra_registry_fields() {
        // Registry version objects carry dist, engines, scripts, and more.
        let json = r#"{"version": "2.0.0", "dependencies": {"a": "^1.0.0"}, "dist": {"tarball": "x"}}"#;
        let record: VersionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.dependencies.get("a").map(String::as_str), Some("^1.0.0"));
    }
}
