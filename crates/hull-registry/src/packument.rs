//! Packument parsing: the registry's per-package version listing.

use std::collections::BTreeMap;

use semver::Version;
use serde::Deserialize;
use tracing::debug;

use hull_core::package::{DependencySet, VersionRecord};

/// The slice of a registry packument that hull cares about.
///
/// A packument carries much more (dist-tags, times, maintainers, readme);
/// everything but the version map is ignored. A document without a
/// `versions` field parses to an empty map.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Packument {
    #[serde(default)]
    pub versions: BTreeMap<String, VersionManifest>,
}

/// One version object inside a packument.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionManifest {
    pub version: String,
    #[serde(default)]
    pub dependencies: DependencySet,
}

impl Packument {
    /// Convert into version records, dropping entries whose version string is
    /// not parseable semver (old packuments carry a few of these).
    pub fn into_records(self) -> Vec<VersionRecord> {
        self.versions
            .into_values()
            .filter_map(|manifest| match Version::parse(&manifest.version) {
                Ok(version) => Some(VersionRecord {
                    version,
                    dependencies: manifest.dependencies,
                }),
                Err(err) => {
                    debug!(version = %manifest.version, error = %err, "skipping unparseable version");
                    None
                }
            })
            .collect()
    }
}

/// Parse a raw packument document.
pub fn parse_packument(json: &str) -> miette::Result<Packument> {
    serde_json::from_str(json).map_err(|e| {
        hull_util::errors::HullError::Generic {
            message: format!("Failed to parse packument: {e}"),
        }
        .into()
    })
}
