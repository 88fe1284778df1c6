//! Exhaustive backtracking resolution.
//!
//! Explores candidate versions depth-first, highest first, and abandons a
//! branch the moment two requirements need the same package at different
//! versions. Branch state is a copy-per-branch map from package name to its
//! chosen version, so unwinding a failed branch is just dropping its map.
//! The requirement slots of one package are enumerated lazily as a cartesian
//! product: the slot at a lower index varies slowest, and each tail iterator
//! is regenerated per head choice instead of being materialized up front.

use std::collections::BTreeMap;
use std::iter;

use hull_core::closure::Closure;
use hull_core::manifest::Manifest;
use hull_core::package::{DependencySet, VersionRecord};
use hull_core::plan::{InstallationPlan, InstalledEntry};
use hull_core::range;

use crate::error::ResolveError;

/// One proposed pick: a package at a concrete version.
#[derive(Debug, Clone)]
struct Candidate {
    name: String,
    record: VersionRecord,
}

/// Versions committed on the current branch.
type Installed = BTreeMap<String, VersionRecord>;

/// Find an installation with exactly one version per package, satisfying the
/// manifest and every dependency of every chosen version.
///
/// Succeeds with the first solution in exploration order (highest versions
/// preferred); fails with [`ResolveError::Exhausted`] only after every
/// combination of candidates has conflicted.
pub fn resolve(closure: &Closure, manifest: &Manifest) -> Result<InstallationPlan, ResolveError> {
    for name in manifest.dependencies.keys() {
        if !closure.contains(name) {
            return Err(ResolveError::UnknownPackage { name: name.clone() });
        }
    }
    closure
        .verify()
        .map_err(|name| ResolveError::UnknownPackage { name })?;

    // The root is installed outright. Dependency edges pointing back at it
    // resolve against the manifest version like any other pinned package.
    let mut installed = Installed::new();
    installed.insert(manifest.name.clone(), manifest.record());

    let requirements = requirement_list(&manifest.dependencies);
    let solution = assignments(closure, &installed, &requirements, 0)
        .find_map(|assignment| commit(closure, &installed, &assignment));

    match solution {
        Some(set) => Ok(to_plan(set, &manifest.name)),
        None => Err(ResolveError::Exhausted {
            root: manifest.name.clone(),
        }),
    }
}

fn requirement_list(deps: &DependencySet) -> Vec<(String, String)> {
    deps.iter()
        .map(|(name, req)| (name.clone(), req.clone()))
        .collect()
}

/// Install every candidate of one assignment onto a fresh copy of the branch.
fn commit(closure: &Closure, installed: &Installed, assignment: &[Candidate]) -> Option<Installed> {
    let mut current = installed.clone();
    for candidate in assignment {
        current = try_install(closure, &current, candidate)?;
    }
    Some(current)
}

/// Install one candidate and, recursively, a consistent assignment for its
/// dependencies. Returns the extended branch, or `None` when the candidate
/// conflicts with a version already committed.
fn try_install(
    closure: &Closure,
    installed: &Installed,
    candidate: &Candidate,
) -> Option<Installed> {
    if let Some(existing) = installed.get(&candidate.name) {
        // The same version settles immediately, which is how dependency
        // cycles bottom out. A different version kills the branch.
        return (existing.version == candidate.record.version).then(|| installed.clone());
    }

    let requirements = requirement_list(&candidate.record.dependencies);
    let extended = assignments(closure, installed, &requirements, 0).find_map(|assignment| {
        let mut current = installed.clone();
        current.insert(candidate.name.clone(), candidate.record.clone());
        for dep in &assignment {
            current = try_install(closure, &current, dep)?;
        }
        Some(current)
    });
    extended
}

/// Lazily enumerate every candidate combination for `requirements[index..]`.
///
/// A requirement whose package is already committed contributes the pinned
/// version when it satisfies the requirement and nothing otherwise; an open
/// requirement contributes its satisfying closure versions in descending
/// order. Pinning is judged against the branch as of enumeration; later
/// installs within one assignment are reconciled by [`try_install`].
fn assignments<'a>(
    closure: &'a Closure,
    installed: &'a Installed,
    requirements: &'a [(String, String)],
    index: usize,
) -> Box<dyn Iterator<Item = Vec<Candidate>> + 'a> {
    let Some((name, req)) = requirements.get(index) else {
        return Box::new(iter::once(Vec::new()));
    };

    if let Some(existing) = installed.get(name) {
        if !range::satisfies(&existing.version, req) {
            return Box::new(iter::empty());
        }
        let pinned = Candidate {
            name: name.clone(),
            record: existing.clone(),
        };
        return Box::new(
            assignments(closure, installed, requirements, index + 1).map(move |mut tail| {
                tail.insert(0, pinned.clone());
                tail
            }),
        );
    }

    let choices: Vec<Candidate> = closure
        .versions(name)
        .iter()
        .rev()
        .filter(|record| range::satisfies(&record.version, req))
        .map(|record| Candidate {
            name: name.clone(),
            record: record.clone(),
        })
        .collect();

    Box::new(choices.into_iter().flat_map(move |choice| {
        assignments(closure, installed, requirements, index + 1).map(move |mut tail| {
            tail.insert(0, choice.clone());
            tail
        })
    }))
}

/// Strip the pinned root and lay the surviving picks out as a plan.
fn to_plan(mut installed: Installed, root: &str) -> InstallationPlan {
    installed.remove(root);
    let mut plan = InstallationPlan::new();
    for (name, record) in installed {
        plan.push(&name, InstalledEntry::bare(&record));
    }
    plan
}
