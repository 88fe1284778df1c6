use std::path::Path;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::package::{DependencySet, VersionRecord};

/// The parsed representation of a `package.json`-style manifest.
///
/// Only the fields hull needs are modelled; everything else in the file is
/// ignored, so real-world manifests load as-is. The manifest's own version is
/// never matched against a range -- the root package is installed outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version: Version,
    #[serde(default)]
    pub dependencies: DependencySet,
}

impl Manifest {
    /// Load and parse a manifest file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            hull_util::errors::HullError::Manifest {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        Self::parse(&content)
    }

    /// Parse a manifest from a JSON string.
    pub fn parse(content: &str) -> miette::Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            hull_util::errors::HullError::Manifest {
                message: format!("Failed to parse manifest: {e}"),
            }
            .into()
        })
    }

    /// The root package as a version record, for pinning into a working set.
    pub fn record(&self) -> VersionRecord {
        VersionRecord {
            version: self.version.clone(),
            dependencies: self.dependencies.clone(),
        }
    }
}
