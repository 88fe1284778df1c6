//! Handler for `hull gen-closure`.

use std::path::{Path, PathBuf};

use miette::Result;

pub async fn exec(
    manifest: Option<PathBuf>,
    output: &Path,
    registry: &str,
    verbose: bool,
) -> Result<()> {
    let manifest_path = super::locate_manifest(manifest)?;
    hull_ops::ops_closure::gen_closure(&manifest_path, output, registry, verbose).await
}
