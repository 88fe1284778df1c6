//! Resolution error kinds shared by both resolvers.

use miette::Diagnostic;
use thiserror::Error;

/// Why a resolution run failed.
///
/// Transport failures never surface here; the crawler absorbs them into
/// empty closure entries. Everything below is fatal to the run raising it,
/// and a failed run writes no output.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    /// A required package has no entry in the closure at all.
    ///
    /// Distinct from a package that is present with an empty version list:
    /// that one is unsatisfiable, this one means the closure does not cover
    /// the dependency universe it is being resolved against.
    #[error("package '{name}' is not in the closure")]
    #[diagnostic(help("Regenerate the closure with `hull gen-closure` so it covers every reachable package"))]
    UnknownPackage { name: String },

    /// No installable version of a package satisfies the requested range.
    #[error("no version of '{name}' satisfies '{range}' (required by {required_by})")]
    Unsatisfiable {
        name: String,
        range: String,
        required_by: String,
    },

    /// The backtracking search ran out of candidate combinations.
    ///
    /// Deliberately does not say which package was to blame: by the time the
    /// search exhausts, every candidate has failed for its own reason and no
    /// single one of them is the cause.
    #[error("no consistent set of versions exists for '{root}': every candidate combination conflicts")]
    Exhausted { root: String },
}
