use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where generated code is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Open the destination.
    ///
    /// Files are created when missing and appended to, never truncated.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputTarget::File(path) => {
                let file = OpenOptions::new()
                    .read(true)
                    .append(true)
                    .create(true)
                    .open(path)
                    .with_context(|| format!("Failed to open output file {}", path.display()))?;
                Ok(Box::new(file))
            }
        }
    }
}
