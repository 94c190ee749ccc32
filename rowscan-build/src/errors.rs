use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while resolving, parsing, or generating scanners.
///
/// Every variant is fatal for a run: the generator never continues past the
/// first failing file. Underlying causes are exposed through `source()`.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No type names were supplied to match against.
    #[error("no target type names were given")]
    NoTargetTypes,

    /// A source file could not be read.
    #[error("failed to read {}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// A source file is not valid Rust.
    #[error("{}:{line}:{column}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        source: syn::Error,
    },

    /// Filesystem access outside of reading sources (stat, canonicalize, write).
    #[error("{}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// Listing a package directory failed.
    #[error("failed to list {}", path.display())]
    Walk { path: PathBuf, source: walkdir::Error },

    /// A `Cargo.toml` next to a package directory could not be decoded.
    #[error("invalid manifest {}", path.display())]
    Manifest { path: PathBuf, source: toml::de::Error },

    /// A package directory holds no Rust source files.
    #[error("no Rust source files in {}", path.display())]
    EmptyPackage { path: PathBuf },

    /// The runtime module path is not a valid Rust path.
    #[error("invalid runtime path `{path}`")]
    RuntimePath { path: String, source: syn::Error },

    /// Generated tokens did not re-parse as Rust items.
    #[error("failed to render generated code for `{type_name}`")]
    Render { type_name: String, source: syn::Error },
}

impl GenerateError {
    /// Build a [`GenerateError::Parse`] from a `syn` error, keeping its position.
    pub fn parse(path: impl Into<PathBuf>, source: syn::Error) -> Self {
        let start = source.span().start();
        Self::Parse {
            path: path.into(),
            line: start.line,
            column: start.column + 1,
            source,
        }
    }

    /// Build a [`GenerateError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Convenience alias for results returned by this crate.
pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
