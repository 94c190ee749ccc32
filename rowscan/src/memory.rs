//! In-memory row source.

use std::any::{Any, type_name};

use crate::Scanner;
use crate::errors::ScanError;

struct Column {
    value: Box<dyn Any>,
    type_name: &'static str,
    accepts: fn(&dyn Any) -> bool,
    store: fn(Box<dyn Any>, &mut dyn Any),
}

impl Column {
    fn new<T: Any>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
            accepts: accepts::<T>,
            store: store::<T>,
        }
    }
}

fn accepts<T: Any>(dest: &dyn Any) -> bool {
    dest.is::<T>() || dest.is::<Option<T>>()
}

fn store<T: Any>(value: Box<dyn Any>, dest: &mut dyn Any) {
    let Ok(value) = value.downcast::<T>() else {
        return;
    };
    if let Some(slot) = dest.downcast_mut::<T>() {
        *slot = *value;
    } else if let Some(slot) = dest.downcast_mut::<Option<T>>() {
        *slot = Some(*value);
    }
}

/// A single row of owned values that can be scanned once.
///
/// Each value moves into the destination at the same position. A value of
/// type `T` can also fill an `Option<T>` destination.
#[derive(Default)]
pub struct MemoryRow {
    columns: Vec<Column>,
    consumed: bool,
}

impl MemoryRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column value.
    pub fn with<T: Any>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Append a column value in place.
    pub fn push<T: Any>(&mut self, value: T) {
        self.columns.push(Column::new(value));
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl std::fmt::Debug for MemoryRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let types: Vec<&str> = self.columns.iter().map(|column| column.type_name).collect();
        f.debug_struct("MemoryRow")
            .field("columns", &types)
            .field("consumed", &self.consumed)
            .finish()
    }
}

impl Scanner for MemoryRow {
    type Error = ScanError;

    /// Move every column into its destination.
    ///
    /// All destinations are checked before any is written, so a mismatch
    /// leaves both the row and the destinations untouched.
    fn scan(&mut self, dest: &mut [&mut dyn Any]) -> Result<(), ScanError> {
        if self.consumed {
            return Err(ScanError::Consumed);
        }
        if dest.len() != self.columns.len() {
            return Err(ScanError::ColumnCount {
                expected: self.columns.len(),
                actual: dest.len(),
            });
        }

        for (index, (column, slot)) in self.columns.iter().zip(dest.iter()).enumerate() {
            if !(column.accepts)(&**slot) {
                return Err(ScanError::TypeMismatch {
                    index,
                    value: column.type_name,
                });
            }
        }

        self.consumed = true;
        for (column, slot) in self.columns.drain(..).zip(dest.iter_mut()) {
            (column.store)(column.value, &mut **slot);
        }

        Ok(())
    }
}
