use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::package::{DependencySet, VersionRecord};
use crate::range;

/// One version installed into a plan, with the packages that pulled it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledEntry {
    pub version: Version,
    #[serde(default)]
    pub dependencies: DependencySet,
    /// Names of the packages whose ranges this entry was installed or reused
    /// to satisfy. Diagnostic only; empty for backtracking plans.
    #[serde(
        default,
        rename = "requiredBy",
        skip_serializing_if = "BTreeSet::is_empty"
    )]
    pub required_by: BTreeSet<String>,
}

impl InstalledEntry {
    /// Build an entry from a closure record, seeded with one requiredBy edge.
    pub fn from_record(record: &VersionRecord, required_by: &str) -> Self {
        Self {
            version: record.version.clone(),
            dependencies: record.dependencies.clone(),
            required_by: BTreeSet::from([required_by.to_string()]),
        }
    }

    /// Build an entry with no requiredBy bookkeeping.
    pub fn bare(record: &VersionRecord) -> Self {
        Self {
            version: record.version.clone(),
            dependencies: record.dependencies.clone(),
            required_by: BTreeSet::new(),
        }
    }
}

/// The output of a resolution run: package name -> installed versions.
///
/// The greedy resolver may install several versions of the same package side
/// by side; the backtracking resolver emits exactly one entry per package.
/// Serialized like a closure: a bare JSON object keyed by package name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstallationPlan {
    packages: BTreeMap<String, Vec<InstalledEntry>>,
}

impl InstallationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installed entries for a package, in installation order.
    pub fn entries(&self, name: &str) -> &[InstalledEntry] {
        self.packages.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First installed entry of `name` satisfying `range`, in installation order.
    pub fn entry_satisfying(&self, name: &str, range: &str) -> Option<&InstalledEntry> {
        self.packages
            .get(name)?
            .iter()
            .find(|entry| range::satisfies(&entry.version, range))
    }

    /// Mutable variant of [`entry_satisfying`](Self::entry_satisfying), for
    /// recording requiredBy edges on reuse.
    pub fn entry_satisfying_mut(&mut self, name: &str, range: &str) -> Option<&mut InstalledEntry> {
        self.packages
            .get_mut(name)?
            .iter_mut()
            .find(|entry| range::satisfies(&entry.version, range))
    }

    /// Append an installed entry for `name`, coexisting with prior versions.
    pub fn push(&mut self, name: &str, entry: InstalledEntry) {
        self.packages.entry(name.to_string()).or_default().push(entry);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[InstalledEntry])> {
        self.packages
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Number of distinct package names in the plan.
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Total number of installed versions across all packages.
    pub fn version_count(&self) -> usize {
        self.packages.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Load and parse a plan file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            hull_util::errors::HullError::Generic {
                message: format!("Failed to read plan {}: {e}", path.display()),
            }
        })?;
        serde_json::from_str(&content).map_err(|e| {
            hull_util::errors::HullError::Generic {
                message: format!("Failed to parse plan {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Write the plan as pretty-printed JSON, creating parent directories.
    pub fn write_to(&self, path: &Path) -> miette::Result<()> {
        hull_util::fs::ensure_parent_dir(path).map_err(hull_util::errors::HullError::Io)?;
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            hull_util::errors::HullError::Generic {
                message: format!("Failed to serialize plan: {e}"),
            }
        })?;
        std::fs::write(path, json + "\n").map_err(hull_util::errors::HullError::Io)?;
        Ok(())
    }
}
