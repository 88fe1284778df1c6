//! Handler for `hull resolve`.

use std::path::Path;

use miette::Result;

pub fn exec(manifest: &Path, closure: &Path, output: &Path) -> Result<()> {
    super::require_manifest(manifest)?;
    super::require_closure(closure)?;
    hull_ops::ops_resolve::resolve(manifest, closure, output)
}
