//! Row scanning runtime.
//!
//! Code generated by the `rowscan` binary (or by `rowscan-build` from a build
//! script) implements [`ScanRow`] for each selected struct. Its `scan` method
//! passes mutable references to the struct's named fields, in declaration
//! order, to a [`Scanner`]. A scanner fills them from whatever row source it
//! wraps.
//!
//! ```
//! use rowscan::prelude::*;
//! use rowscan::MemoryRow;
//!
//! #[derive(Default)]
//! struct Row {
//!     id: i64,
//!     name: String,
//! }
//!
//! // What `rowscan --types Row` generates:
//! impl ScanRow for Row {
//!     fn scan<S: Scanner + ?Sized>(&mut self, sc: &mut S) -> Result<(), S::Error> {
//!         let row = self;
//!         sc.scan(&mut [&mut row.id, &mut row.name])
//!     }
//! }
//!
//! let mut source = MemoryRow::new().with(7_i64).with(String::from("ada"));
//! let mut row = Row::default();
//! row.scan(&mut source).unwrap();
//! assert_eq!((row.id, row.name.as_str()), (7, "ada"));
//!
//! let row: Row = rowscan::scan_into(&mut MemoryRow::new().with(8_i64).with(String::new())).unwrap();
//! assert_eq!(row.id, 8);
//! ```

use std::any::Any;

pub mod errors;
pub mod memory;

pub use errors::ScanError;
pub use memory::MemoryRow;

/// A source of row values.
///
/// `scan` receives one destination per column, in column order, and writes
/// each column into its destination.
pub trait Scanner {
    type Error;

    fn scan(&mut self, dest: &mut [&mut dyn Any]) -> Result<(), Self::Error>;
}

impl<S: Scanner + ?Sized> Scanner for &mut S {
    type Error = S::Error;

    fn scan(&mut self, dest: &mut [&mut dyn Any]) -> Result<(), Self::Error> {
        (**self).scan(dest)
    }
}

impl<S: Scanner + ?Sized> Scanner for Box<S> {
    type Error = S::Error;

    fn scan(&mut self, dest: &mut [&mut dyn Any]) -> Result<(), Self::Error> {
        (**self).scan(dest)
    }
}

/// A struct whose named fields can be filled from one row.
///
/// Generated code implements this for every selected struct, so any of them
/// can be read through the same bound.
pub trait ScanRow {
    fn scan<S: Scanner + ?Sized>(&mut self, sc: &mut S) -> Result<(), S::Error>;
}

/// Read one row into a fresh `T`.
pub fn scan_into<T, S>(sc: &mut S) -> Result<T, S::Error>
where
    T: ScanRow + Default,
    S: Scanner + ?Sized,
{
    let mut value = T::default();
    value.scan(sc)?;
    Ok(value)
}

/// Items generated code brings into scope.
pub mod prelude {
    pub use crate::{ScanRow, Scanner};
}
