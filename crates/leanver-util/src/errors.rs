use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all leanver operations.
#[derive(Debug, Error, Diagnostic)]
pub enum LeanverError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable resolver configuration.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check the [ranking] table of your leanver config"))]
    Config { message: String },

    /// A range specifier matched no row of the specificity table while
    /// unranked ranges are rejected.
    #[error("Range `{range}` has no specificity rank")]
    #[diagnostic(help("Set `ranking.unranked = \"last\"` to resolve it after every ranked range"))]
    Unranked { range: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type LeanverResult<T> = miette::Result<T>;
