use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all hull operations.
#[derive(Debug, Error, Diagnostic)]
pub enum HullError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (e.g. package.json).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check that the manifest is valid JSON with name, version, and dependencies"))]
    Manifest { message: String },

    /// Invalid or malformed closure file.
    #[error("Closure error: {message}")]
    #[diagnostic(help("Regenerate the closure with `hull gen-closure`"))]
    Closure { message: String },

    /// Dependency resolution failed (unsatisfiable ranges, missing packages, etc.).
    #[error("Dependency resolution failed: {message}")]
    Resolution { message: String },

    /// Network request to the registry failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type HullResult<T> = miette::Result<T>;
