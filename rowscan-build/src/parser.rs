//! Source file parsing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{GenerateError, Result};

/// A parsed Rust source file.
pub struct SourceFile {
    /// Path the file was read from
    pub path: PathBuf,
    /// Top-level declaration tree
    pub syntax: syn::File,
}

/// Read and parse a Rust source file.
///
/// A file that does not parse is an error; there is no partial result.
pub fn parse_source(path: &Path) -> Result<SourceFile> {
    let content = fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let syntax = parse_str(path, &content)?;
    log::debug!("parsed {} ({} items)", path.display(), syntax.items.len());

    Ok(SourceFile {
        path: path.to_path_buf(),
        syntax,
    })
}

/// Parse already-loaded source text, attributing errors to `path`.
pub fn parse_str(path: &Path, content: &str) -> Result<syn::File> {
    syn::parse_file(content).map_err(|err| GenerateError::parse(path, err))
}
