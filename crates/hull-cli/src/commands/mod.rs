//! Command dispatch and handler modules.

mod gen_closure;
mod list_versions;
mod naive_resolve;
mod resolve;
mod tree;

use std::path::{Path, PathBuf};

use miette::Result;

use hull_util::errors::HullError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::GenClosure {
            manifest,
            output,
            registry,
        } => gen_closure::exec(manifest, &output, &registry, cli.verbose).await,
        Command::ListVersions {
            closure,
            package,
            range,
        } => list_versions::exec(&closure, &package, &range),
        Command::NaiveResolve {
            manifest,
            closure,
            output,
        } => naive_resolve::exec(&manifest, &closure, &output),
        Command::Resolve {
            manifest,
            closure,
            output,
        } => resolve::exec(&manifest, &closure, &output),
        Command::Tree { plan, depth } => tree::exec(&plan, depth),
    }
}

/// Resolve an optional manifest argument: an explicit path must exist; no
/// path means the nearest package.json upward from the current directory.
pub(crate) fn locate_manifest(manifest: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = manifest {
        require_manifest(&path)?;
        return Ok(path);
    }
    let cwd = std::env::current_dir().map_err(HullError::Io)?;
    match hull_util::fs::find_ancestor_with(&cwd, "package.json") {
        Some(dir) => Ok(dir.join("package.json")),
        None => Err(HullError::Manifest {
            message: "No package.json found in this directory or any parent".to_string(),
        }
        .into()),
    }
}

pub(crate) fn require_manifest(path: &Path) -> Result<()> {
    if path.is_file() {
        return Ok(());
    }
    Err(HullError::Manifest {
        message: format!("No manifest found at {}", path.display()),
    }
    .into())
}

pub(crate) fn require_closure(path: &Path) -> Result<()> {
    if path.is_file() {
        return Ok(());
    }
    Err(HullError::Closure {
        message: format!("No closure found at {}", path.display()),
    }
    .into())
}
