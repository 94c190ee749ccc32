//! Per-file generation pipeline.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::emitter::emit;
use crate::errors::{GenerateError, Result};
use crate::package::{SourcePackage, read_package_dir};
use crate::parser::parse_source;
use crate::scanner::{TargetTypes, extract};

/// Builder for configuring and running the scanner generator.
#[derive(Debug, Clone)]
pub struct ScanGenerator {
    targets: TargetTypes,
    package_name: String,
    files: Vec<PathBuf>,
    runtime_path: String,
    output_file: Option<PathBuf>,
}

impl ScanGenerator {
    /// Create a generator with no targets and no sources.
    pub fn new() -> Self {
        Self {
            targets: TargetTypes::default(),
            package_name: String::new(),
            files: Vec::new(),
            runtime_path: "rowscan".to_string(),
            output_file: None,
        }
    }

    /// Set the struct names to generate scanners for.
    pub fn target_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets = TargetTypes::new(names);
        self
    }

    /// Set the targets from an already built [`TargetTypes`].
    pub fn targets(mut self, targets: TargetTypes) -> Self {
        self.targets = targets;
        self
    }

    /// Set the package name written into each generated header.
    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = name.into();
        self
    }

    /// Add a source file. Files are processed in the order they were added.
    pub fn source_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Use a resolved package: its name and all of its files.
    pub fn package(mut self, package: SourcePackage) -> Self {
        self.package_name = package.name;
        self.files.extend(package.files);
        self
    }

    /// Resolve `dir` as a package and use it.
    pub fn package_dir(self, dir: impl AsRef<Path>) -> Result<Self> {
        let package = read_package_dir(dir.as_ref())?;
        Ok(self.package(package))
    }

    /// Set the path of the runtime crate used by generated code.
    ///
    /// Default: `rowscan`
    pub fn runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    /// Set the file [`ScanGenerator::run`] writes to.
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Parse every source file and return the generated code.
    ///
    /// Each file contributes its own header, import and scanner blocks, so
    /// two files defining the same struct name produce two separate blocks.
    /// The first failing file aborts the whole run.
    pub fn generate(&self) -> Result<String> {
        if self.targets.is_empty() {
            return Err(GenerateError::NoTargetTypes);
        }

        let runtime: syn::Path = syn::parse_str(&self.runtime_path).map_err(|source| GenerateError::RuntimePath {
            path: self.runtime_path.clone(),
            source,
        })?;

        let mut buf = String::new();
        for path in &self.files {
            let source = parse_source(path)?;
            let specs = extract(&source.syntax, &self.targets);
            log::debug!("{}: {} matching structs", path.display(), specs.len());
            emit(&self.package_name, &runtime, &specs, &mut buf)?;
        }

        Ok(buf)
    }

    /// Generate and write the result to `out`.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        let code = self.generate()?;
        out.write_all(code.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|source| GenerateError::io("<output>", source))
    }

    /// Generate and write the result to the configured output file.
    ///
    /// The file is only rewritten when its content changed, so build scripts
    /// do not trigger needless recompilation.
    pub fn run(self) -> Result<()> {
        let code = self.generate()?;
        let output_file = self
            .output_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("src/generated/scanners.rs"));

        if let Some(parent) = output_file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| GenerateError::io(parent, source))?;
        }

        let should_write = match fs::read_to_string(&output_file) {
            Ok(existing) => existing != code,
            Err(_) => true,
        };

        if should_write {
            fs::write(&output_file, &code).map_err(|source| GenerateError::io(&output_file, source))?;
            log::info!("generated {} from {} files", output_file.display(), self.files.len());
        }

        Ok(())
    }
}

impl Default for ScanGenerator {
    fn default() -> Self {
        Self::new()
    }
}
