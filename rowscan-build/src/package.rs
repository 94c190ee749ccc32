//! Resolution of command-line inputs into a package name and source files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use crate::errors::{GenerateError, Result};

/// Source files belonging to one compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourcePackage {
    /// Module name used in the generated header (empty for explicit files)
    pub name: String,
    /// Files to parse, in processing order
    pub files: Vec<PathBuf>,
}

/// Minimal view of a `Cargo.toml`.
#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<ManifestPackage>,
}

#[derive(Debug, Deserialize)]
struct ManifestPackage {
    name: String,
}

/// Resolve positional inputs.
///
/// No inputs means the current directory. A single directory is read as a
/// package. Anything else is taken as a list of files with no package name.
pub fn resolve_inputs(inputs: &[PathBuf]) -> Result<SourcePackage> {
    let inputs = if inputs.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        inputs.to_vec()
    };

    if let [single] = inputs.as_slice() {
        let metadata = fs::metadata(single).map_err(|source| GenerateError::io(single, source))?;
        if metadata.is_dir() {
            return read_package_dir(single);
        }
    }

    Ok(SourcePackage {
        name: String::new(),
        files: inputs,
    })
}

/// Read the `.rs` files directly inside `dir`, sorted by file name.
///
/// Symlinks are followed, so a linked `.rs` file counts as a source. Hidden
/// files are skipped. A directory without sources is an error.
pub fn read_package_dir(dir: &Path) -> Result<SourcePackage> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|source| GenerateError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        files.push(path.to_path_buf());
    }

    if files.is_empty() {
        return Err(GenerateError::EmptyPackage { path: dir.to_path_buf() });
    }

    let name = package_name(dir)?;
    log::debug!("package `{name}` in {}: {} files", dir.display(), files.len());

    Ok(SourcePackage { name, files })
}

/// Module name for a directory.
///
/// A crate's `src/` directory takes the crate name from the neighbouring
/// `Cargo.toml` (hyphens become underscores). Any other directory uses its
/// own name.
pub fn package_name(dir: &Path) -> Result<String> {
    let canonical = dir.canonicalize().map_err(|source| GenerateError::io(dir, source))?;
    let dir_name = canonical
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    if dir_name == "src"
        && let Some(parent) = canonical.parent()
        && let Some(name) = crate_name(&parent.join("Cargo.toml"))?
    {
        return Ok(name.replace('-', "_"));
    }

    Ok(dir_name)
}

fn crate_name(manifest_path: &Path) -> Result<Option<String>> {
    if !manifest_path.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(manifest_path).map_err(|source| GenerateError::io(manifest_path, source))?;
    let manifest: Manifest = toml::from_str(&content).map_err(|source| GenerateError::Manifest {
        path: manifest_path.to_path_buf(),
        source,
    })?;

    Ok(manifest.package.map(|package| package.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_read_package_dir_lists_sorted_rust_files() {
        let dir = tempfile::tempdir().unwrap();
        let models = dir.path().join("models");
        fs::create_dir(&models).unwrap();
        touch(&models.join("user.rs"));
        touch(&models.join("account.rs"));
        touch(&models.join("notes.txt"));
        touch(&models.join(".hidden.rs"));
        fs::create_dir(models.join("nested")).unwrap();
        touch(&models.join("nested").join("deep.rs"));

        let package = read_package_dir(&models).unwrap();
        assert_eq!(package.name, "models");
        assert_eq!(package.files, [models.join("account.rs"), models.join("user.rs")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_package_dir_follows_symlinked_sources() {
        let dir = tempfile::tempdir().unwrap();
        let shared = dir.path().join("shared");
        let models = dir.path().join("models");
        fs::create_dir(&shared).unwrap();
        fs::create_dir(&models).unwrap();
        touch(&shared.join("row.rs"));
        touch(&models.join("user.rs"));
        std::os::unix::fs::symlink(shared.join("row.rs"), models.join("row.rs")).unwrap();
        std::os::unix::fs::symlink(&shared, models.join("linked.rs")).unwrap();

        let package = read_package_dir(&models).unwrap();
        assert_eq!(package.files, [models.join("row.rs"), models.join("user.rs")]);
    }

    #[test]
    fn test_read_package_dir_without_sources() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("README.md"));

        let err = read_package_dir(dir.path()).unwrap_err();
        assert!(matches!(err, GenerateError::EmptyPackage { .. }));
    }

    #[test]
    fn test_package_name_uses_crate_name_for_src() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("Cargo.toml"),
            "[package]\nname = \"billing-service\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();

        assert_eq!(package_name(&src).unwrap(), "billing_service");
    }

    #[test]
    fn test_package_name_workspace_manifest_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "[workspace]\nmembers = []\n").unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();

        assert_eq!(package_name(&src).unwrap(), "src");
    }

    #[test]
    fn test_package_name_invalid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "[package\n").unwrap();
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();

        assert!(matches!(package_name(&src).unwrap_err(), GenerateError::Manifest { .. }));
    }

    #[test]
    fn test_resolve_inputs_explicit_files() {
        let inputs = vec![PathBuf::from("a.rs"), PathBuf::from("b.rs")];
        let package = resolve_inputs(&inputs).unwrap();

        assert_eq!(package.name, "");
        assert_eq!(package.files, inputs);
    }

    #[test]
    fn test_resolve_inputs_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("row.rs");
        touch(&file);

        let package = resolve_inputs(std::slice::from_ref(&file)).unwrap();
        assert_eq!(package.name, "");
        assert_eq!(package.files, [file]);
    }

    #[test]
    fn test_resolve_inputs_single_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("db");
        fs::create_dir(&db).unwrap();
        touch(&db.join("rows.rs"));

        let package = resolve_inputs(&[db.clone()]).unwrap();
        assert_eq!(package.name, "db");
        assert_eq!(package.files, [db.join("rows.rs")]);
    }

    #[test]
    fn test_resolve_inputs_missing_path() {
        let err = resolve_inputs(&[PathBuf::from("no/such/dir")]).unwrap_err();
        assert!(matches!(err, GenerateError::Io { .. }));
    }
}
