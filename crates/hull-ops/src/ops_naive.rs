//! Operation: greedy first-fit resolution against a closure.

use std::path::Path;

use hull_core::closure::Closure;
use hull_core::manifest::Manifest;
use hull_resolver::naive;
use hull_util::progress::status;

/// Resolve the manifest greedily and write the plan to `out_path`.
///
/// A failed resolution writes nothing.
pub fn naive_resolve(
    manifest_path: &Path,
    closure_path: &Path,
    out_path: &Path,
) -> miette::Result<()> {
    let manifest = Manifest::from_path(manifest_path)?;
    let closure = Closure::from_path(closure_path)?;

    let plan = naive::install_manifest(&closure, &manifest)?;
    plan.write_to(out_path)?;

    status(
        "Resolved",
        &format!(
            "{} packages, {} versions -> {}",
            plan.package_count(),
            plan.version_count(),
            out_path.display()
        ),
    );
    Ok(())
}
