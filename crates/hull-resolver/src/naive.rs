//! Greedy first-fit resolution.
//!
//! Walks the dependency tree depth-first, reusing an already-installed
//! version whenever one satisfies the range and otherwise installing the
//! highest satisfying version from the closure. Choices are never revisited:
//! a committed version that later turns out to block a subtree fails the
//! whole run, even when a different pick would have succeeded.

use hull_core::closure::Closure;
use hull_core::manifest::Manifest;
use hull_core::plan::{InstallationPlan, InstalledEntry};
use hull_core::range;

use crate::error::ResolveError;

/// Resolve every dependency of the manifest into an installation plan.
pub fn install_manifest(
    closure: &Closure,
    manifest: &Manifest,
) -> Result<InstallationPlan, ResolveError> {
    let mut plan = InstallationPlan::new();
    for (name, req) in &manifest.dependencies {
        install_greedy(closure, &mut plan, name, req, &manifest.name)?;
    }
    Ok(plan)
}

/// Satisfy one requirement, recursing into the dependencies of whatever
/// version gets installed.
pub fn install_greedy(
    closure: &Closure,
    plan: &mut InstallationPlan,
    name: &str,
    req: &str,
    required_by: &str,
) -> Result<(), ResolveError> {
    if let Some(entry) = plan.entry_satisfying_mut(name, req) {
        entry.required_by.insert(required_by.to_string());
        return Ok(());
    }

    if !closure.contains(name) {
        return Err(ResolveError::UnknownPackage {
            name: name.to_string(),
        });
    }

    let record = closure
        .versions(name)
        .iter()
        .rev()
        .find(|record| range::satisfies(&record.version, req))
        .cloned()
        .ok_or_else(|| ResolveError::Unsatisfiable {
            name: name.to_string(),
            range: req.to_string(),
            required_by: required_by.to_string(),
        })?;

    // Recorded before the recursion so dependency cycles land on the reuse
    // path instead of recursing forever.
    plan.push(name, InstalledEntry::from_record(&record, required_by));

    for (dep_name, dep_req) in &record.dependencies {
        install_greedy(closure, plan, dep_name, dep_req, name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull_core::package::VersionRecord;
    use semver::Version;

    fn rec(version: &str, deps: &[(&str, &str)]) -> VersionRecord {
        VersionRecord::with_dependencies(
            Version::parse(version).unwrap(),
            deps.iter()
                .map(|(name, range)| (name.to_string(), range.to_string()))
                .collect(),
        )
    }

    fn closure(fixture: &[(&str, Vec<VersionRecord>)]) -> Closure {
        let mut closure = Closure::new();
        for (name, records) in fixture {
            closure.insert(name, records.clone());
        }
        closure
    }

    fn manifest(deps: &[(&str, &str)]) -> Manifest {
        Manifest {
            name: "app".to_string(),
            version: Version::new(1, 0, 0),
            dependencies: deps
                .iter()
                .map(|(name, range)| (name.to_string(), range.to_string()))
                .collect(),
        }
    }

    fn version_of(plan: &InstallationPlan, name: &str) -> Vec<String> {
        plan.entries(name)
            .iter()
            .map(|entry| entry.version.to_string())
            .collect()
    }

    #[test]
    fn installs_highest_satisfying_version() {
        let closure = closure(&[(
            "a",
            vec![rec("1.0.0", &[]), rec("1.4.0", &[]), rec("2.0.0", &[])],
        )]);
        let plan = install_manifest(&closure, &manifest(&[("a", "^1.0.0")])).unwrap();
        assert_eq!(version_of(&plan, "a"), ["1.4.0"]);
    }

    #[test]
    fn reuses_installed_version() {
        let closure = closure(&[
            ("a", vec![rec("1.0.0", &[])]),
            ("b", vec![rec("1.0.0", &[("a", "^1.0.0")])]),
        ]);
        let plan =
            install_manifest(&closure, &manifest(&[("a", "^1.0.0"), ("b", "^1.0.0")])).unwrap();
        assert_eq!(plan.entries("a").len(), 1);
        let required_by = &plan.entries("a")[0].required_by;
        assert!(required_by.contains("app"));
        assert!(required_by.contains("b"));
    }

    #[test]
    fn reuse_prefers_installed_over_higher_available() {
        // ~1.5.0 installs 1.5.0; the later ^1.0.0 is happy with it even
        // though 1.9.0 would be the fresh first-fit pick.
        let closure = closure(&[
            ("a", vec![rec("1.5.0", &[]), rec("1.9.0", &[])]),
            ("b", vec![rec("1.0.0", &[("a", "^1.0.0")])]),
        ]);
        let plan =
            install_manifest(&closure, &manifest(&[("a", "~1.5.0"), ("b", "^1.0.0")])).unwrap();
        assert_eq!(version_of(&plan, "a"), ["1.5.0"]);
    }

    #[test]
    fn coexisting_versions_when_reuse_cannot_satisfy() {
        let closure = closure(&[
            ("a", vec![rec("1.0.0", &[]), rec("2.0.0", &[])]),
            ("b", vec![rec("1.0.0", &[("a", "^2.0.0")])]),
            ("c", vec![rec("1.0.0", &[("a", "^1.0.0"), ("b", "^1.0.0")])]),
        ]);
        let plan = install_manifest(&closure, &manifest(&[("c", "^1.0.0")])).unwrap();

        assert_eq!(version_of(&plan, "a"), ["1.0.0", "2.0.0"]);
        assert_eq!(plan.entries("a")[0].required_by.iter().collect::<Vec<_>>(), ["c"]);
        assert_eq!(plan.entries("a")[1].required_by.iter().collect::<Vec<_>>(), ["b"]);
        assert_eq!(version_of(&plan, "b"), ["1.0.0"]);
        assert_eq!(version_of(&plan, "c"), ["1.0.0"]);
    }

    #[test]
    fn fails_when_committed_choice_dead_ends() {
        // x@1.0.0 would work, but greedy commits to the higher x@2.0.0 and
        // its impossible requirement on y.
        let closure = closure(&[
            (
                "x",
                vec![rec("1.0.0", &[]), rec("2.0.0", &[("y", "^9.0.0")])],
            ),
            ("y", vec![rec("1.0.0", &[])]),
        ]);
        let err = install_manifest(&closure, &manifest(&[("x", ">=1.0.0")])).unwrap_err();
        match err {
            ResolveError::Unsatisfiable {
                name,
                range,
                required_by,
            } => {
                assert_eq!(name, "y");
                assert_eq!(range, "^9.0.0");
                assert_eq!(required_by, "x");
            }
            other => panic!("expected Unsatisfiable, got {other:?}"),
        }
    }

    #[test]
    fn unknown_package_is_fatal() {
        let closure = closure(&[("a", vec![rec("1.0.0", &[("ghost", "*")])])]);
        let err = install_manifest(&closure, &manifest(&[("a", "*")])).unwrap_err();
        assert!(matches!(err, ResolveError::UnknownPackage { name } if name == "ghost"));
    }

    #[test]
    fn empty_version_list_is_unsatisfiable() {
        let closure = closure(&[("a", vec![])]);
        let err = install_manifest(&closure, &manifest(&[("a", "*")])).unwrap_err();
        assert!(matches!(err, ResolveError::Unsatisfiable { name, .. } if name == "a"));
    }

    #[test]
    fn cycle_installs_each_package_once() {
        let closure = closure(&[
            ("a", vec![rec("1.0.0", &[("b", "^1.0.0")])]),
            ("b", vec![rec("1.0.0", &[("a", "^1.0.0")])]),
        ]);
        let plan = install_manifest(&closure, &manifest(&[("a", "^1.0.0")])).unwrap();
        assert_eq!(plan.entries("a").len(), 1);
        assert_eq!(plan.entries("b").len(), 1);
        assert!(plan.entries("a")[0].required_by.contains("b"));
    }

    #[test]
    fn direct_dependencies_are_required_by_the_manifest() {
        let closure = closure(&[("a", vec![rec("1.0.0", &[])])]);
        let plan = install_manifest(&closure, &manifest(&[("a", "*")])).unwrap();
        assert_eq!(
            plan.entries("a")[0].required_by.iter().collect::<Vec<_>>(),
            ["app"]
        );
    }
}
