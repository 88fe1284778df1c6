//! Operation: backtracking resolution against a closure.

use std::path::Path;

use hull_core::closure::Closure;
use hull_core::manifest::Manifest;
use hull_resolver::backtrack;
use hull_util::progress::status;

/// Resolve the manifest with full backtracking, one version per package, and
/// write the plan to `out_path`.
///
/// A failed resolution writes nothing.
pub fn resolve(manifest_path: &Path, closure_path: &Path, out_path: &Path) -> miette::Result<()> {
    let manifest = Manifest::from_path(manifest_path)?;
    let closure = Closure::from_path(closure_path)?;

    let plan = backtrack::resolve(&closure, &manifest)?;
    plan.write_to(out_path)?;

    status(
        "Resolved",
        &format!("{} packages -> {}", plan.package_count(), out_path.display()),
    );
    Ok(())
}
