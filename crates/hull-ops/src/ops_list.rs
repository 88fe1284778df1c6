//! Operation: list the versions of a package matching a range.

use std::path::Path;

use hull_core::closure::Closure;
use hull_core::range;
use hull_resolver::error::ResolveError;
use hull_util::progress::{status, status_warn};

/// Print every closure version of `name` satisfying `req`, ascending, one
/// per line on stdout.
pub fn list_versions(closure_path: &Path, name: &str, req: &str) -> miette::Result<()> {
    let closure = Closure::from_path(closure_path)?;
    if !closure.contains(name) {
        return Err(ResolveError::UnknownPackage {
            name: name.to_string(),
        }
        .into());
    }

    if !range::valid(req) {
        // An unparseable range matches nothing; say so instead of printing
        // a silently empty list.
        status_warn("Invalid", &format!("range '{req}' does not parse"));
    }

    let matching = closure.satisfying(name, req);
    for record in &matching {
        println!("{}", record.version);
    }
    status(
        "Matched",
        &format!(
            "{} of {} versions of '{name}' against '{req}'",
            matching.len(),
            closure.versions(name).len()
        ),
    );
    Ok(())
}
