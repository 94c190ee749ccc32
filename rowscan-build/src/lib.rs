//! Code generator for rowscan row scanners.
//!
//! This crate parses Rust source files, picks out the structs named in a
//! target list, and generates a [`rowscan::ScanRow`] impl for each one. The
//! impl's `scan` method hands the addresses of the struct's named fields, in
//! declaration order, to a [`rowscan::Scanner`].
//!
//! For `pub struct Row { id: i64, name: String }` the generated code is:
//!
//! ```text
//! impl ScanRow for Row {
//!     fn scan<S: Scanner + ?Sized>(&mut self, sc: &mut S) -> Result<(), S::Error> {
//!         let row = self;
//!         sc.scan(&mut [&mut row.id, &mut row.name])
//!     }
//! }
//! ```
//!
//! # Example
//!
//! In your `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     rowscan_build::generate_scanners()
//!         .target_types(["Row", "User"])
//!         .package_dir("src/models")
//!         .expect("Failed to read src/models")
//!         .output_file("src/generated/scanners.rs")
//!         .run()
//!         .expect("Failed to generate scanners");
//!
//!     println!("cargo:rerun-if-changed=src/models");
//! }
//! ```
//!
//! [`rowscan::ScanRow`]: https://docs.rs/rowscan
//! [`rowscan::Scanner`]: https://docs.rs/rowscan

pub mod emitter;
pub mod errors;
mod generator;
pub mod naming;
pub mod package;
pub mod parser;
pub mod scanner;

pub use errors::{GenerateError, Result};
pub use generator::ScanGenerator;
pub use package::{SourcePackage, resolve_inputs};
pub use scanner::{CompositeTypeSpec, Field, TargetTypes};

/// Create a new scanner generator with default settings.
///
/// # Example
///
/// ```ignore
/// let code = rowscan_build::generate_scanners()
///     .target_types(["Row"])
///     .source_file("src/models.rs")
///     .generate()?;
/// ```
pub fn generate_scanners() -> ScanGenerator {
    ScanGenerator::new()
}
