use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all deptree operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DeptreeError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The package index is unreadable or malformed.
    #[error("Index error: {message}")]
    #[diagnostic(help("Check your Deptree.toml for syntax errors"))]
    Index { message: String },

    /// The user configuration file is unreadable or malformed.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.deptree/config.toml for syntax errors"))]
    Config { message: String },

    /// A requested or transitive distribution is not known to the resolver.
    #[error("Unknown distribution: {name}")]
    #[diagnostic(help("Add a [packages.{name}] table to the index"))]
    UnknownDistribution { name: String },

    /// The dependency data contains a cycle and cannot be rendered as a tree.
    #[error("Dependency cycle detected: {chain}")]
    DependencyCycle { chain: String },

    /// Resolution failed for any other reason.
    #[error("Dependency resolution failed: {message}")]
    Resolution { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type DeptreeResult<T> = miette::Result<T>;
