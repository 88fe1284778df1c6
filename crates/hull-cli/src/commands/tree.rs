//! Handler for `hull tree`.

use std::path::Path;

use miette::Result;

use hull_util::errors::HullError;

pub fn exec(plan: &Path, depth: Option<usize>) -> Result<()> {
    if !plan.is_file() {
        return Err(HullError::Generic {
            message: format!("No plan found at {}", plan.display()),
        }
        .into());
    }
    hull_ops::ops_tree::tree(plan, depth)
}
