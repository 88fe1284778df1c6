//! Version-range evaluation.
//!
//! Ranges are opaque strings everywhere else in hull; this module is the one
//! place that gives them meaning, via the `semver` crate.

use semver::{Version, VersionReq};

/// Whether `version` satisfies the range string `range`.
///
/// A range that fails to parse satisfies nothing; resolution treats the
/// requirement as unmeetable rather than erroring out mid-search.
pub fn satisfies(version: &Version, range: &str) -> bool {
    VersionReq::parse(range)
        .map(|req| req.matches(version))
        .unwrap_or(false)
}

/// Whether `range` parses as a semver range at all.
///
/// Used for diagnostics only; [`satisfies`] already handles malformed input.
pub fn valid(range: &str) -> bool {
    VersionReq::parse(range).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn caret_matches_compatible() {
        assert!(satisfies(&v("1.4.2"), "^1.0.0"));
        assert!(!satisfies(&v("2.0.0"), "^1.0.0"));
        assert!(!satisfies(&v("0.9.9"), "^1.0.0"));
    }

    #[test]
    fn tilde_matches_patch_range() {
        assert!(satisfies(&v("1.2.9"), "~1.2.0"));
        assert!(!satisfies(&v("1.3.0"), "~1.2.0"));
    }

    #[test]
    fn exact_version() {
        assert!(satisfies(&v("1.0.0"), "=1.0.0"));
        assert!(!satisfies(&v("1.0.1"), "=1.0.0"));
    }

    #[test]
    fn comparator_list() {
        assert!(satisfies(&v("1.5.0"), ">=1.0.0, <2.0.0"));
        assert!(!satisfies(&v("2.0.0"), ">=1.0.0, <2.0.0"));
    }

    #[test]
    fn wildcard_matches_everything_stable() {
        assert!(satisfies(&v("0.0.1"), "*"));
        assert!(satisfies(&v("42.0.0"), "*"));
    }

    #[test]
    fn prerelease_not_matched_by_plain_caret() {
        assert!(!satisfies(&v("1.1.0-beta.1"), "^1.0.0"));
    }

    #[test]
    fn malformed_range_satisfies_nothing() {
        assert!(!satisfies(&v("1.0.0"), "not a range"));
        assert!(!valid("not a range"));
        assert!(valid("^1.0.0"));
    }
}
