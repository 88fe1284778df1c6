use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::package::VersionRecord;
use crate::range;

/// A crawled snapshot of every package reachable from a manifest, with the
/// full version listing for each.
///
/// Serialized as a bare JSON object keyed by package name. An empty version
/// list is a real (terminal) entry: the package was fetched and has nothing
/// installable, or its fetch failed. Version lists are kept ascending so
/// "highest satisfying first" scans are reverse scans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Closure {
    packages: BTreeMap<String, Vec<VersionRecord>>,
}

impl Closure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a closure from raw crawl output, sorting each version list.
    pub fn from_packages(packages: BTreeMap<String, Vec<VersionRecord>>) -> Self {
        let mut closure = Self { packages };
        for records in closure.packages.values_mut() {
            records.sort_by(|a, b| a.version.cmp(&b.version));
        }
        closure
    }

    /// Insert a package's version list, keeping it ascending.
    pub fn insert(&mut self, name: &str, mut records: Vec<VersionRecord>) {
        records.sort_by(|a, b| a.version.cmp(&b.version));
        self.packages.insert(name.to_string(), records);
    }

    /// Whether the package has an entry (possibly an empty one).
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// All versions of a package, ascending. Missing packages yield an empty slice.
    pub fn versions(&self, name: &str) -> &[VersionRecord] {
        self.packages.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Versions of a package satisfying `range`, ascending.
    pub fn satisfying(&self, name: &str, range: &str) -> Vec<&VersionRecord> {
        self.versions(name)
            .iter()
            .filter(|record| range::satisfies(&record.version, range))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[VersionRecord])> {
        self.packages
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    /// Number of packages, counting empty entries.
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Total number of version records across all packages.
    pub fn version_count(&self) -> usize {
        self.packages.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Check referential completeness: every dependency name mentioned by any
    /// record must have its own entry. Returns the first missing name.
    pub fn verify(&self) -> Result<(), String> {
        for records in self.packages.values() {
            for record in records {
                for dep in record.dependencies.keys() {
                    if !self.packages.contains_key(dep) {
                        return Err(dep.clone());
                    }
                }
            }
        }
        Ok(())
    }

    /// Load and parse a closure file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            hull_util::errors::HullError::Closure {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        serde_json::from_str(&content).map_err(|e| {
            hull_util::errors::HullError::Closure {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Write the closure as pretty-printed JSON, creating parent directories.
    pub fn write_to(&self, path: &Path) -> miette::Result<()> {
        hull_util::fs::ensure_parent_dir(path).map_err(hull_util::errors::HullError::Io)?;
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            hull_util::errors::HullError::Generic {
                message: format!("Failed to serialize closure: {e}"),
            }
        })?;
        std::fs::write(path, json + "\n").map_err(hull_util::errors::HullError::Io)?;
        Ok(())
    }
}
