//! Handler for `hull naive-resolve`.

use std::path::Path;

use miette::Result;

pub fn exec(manifest: &Path, closure: &Path, output: &Path) -> Result<()> {
    super::require_manifest(manifest)?;
    super::require_closure(closure)?;
    hull_ops::ops_naive::naive_resolve(manifest, closure, output)
}
