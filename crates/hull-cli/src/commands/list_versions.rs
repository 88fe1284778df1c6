//! Handler for `hull list-versions`.

use std::path::Path;

use miette::Result;

pub fn exec(closure: &Path, package: &str, range: &str) -> Result<()> {
    super::require_closure(closure)?;
    hull_ops::ops_list::list_versions(closure, package, range)
}
