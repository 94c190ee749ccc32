//! Struct discovery in parsed source files.

use std::collections::HashSet;

use proc_macro2::Ident;
use syn::ext::IdentExt;
use syn::{Fields, Item, ItemStruct};

/// The set of struct names to generate scanners for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetTypes {
    names: HashSet<String>,
}

impl TargetTypes {
    /// Build a target set, ignoring empty names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(Into::into)
                .map(|name: String| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }

    /// Parse a comma-separated list such as `"Row,User"`.
    pub fn from_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

/// A single struct field, reduced to its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub ident: Ident,
}

impl Field {
    /// The field name without any `r#` prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// A matched struct and its named fields in declaration order.
#[derive(Debug, Clone)]
pub struct CompositeTypeSpec {
    pub ident: Ident,
    pub fields: Vec<Field>,
}

impl CompositeTypeSpec {
    fn from_item(item: &ItemStruct) -> Self {
        let fields = match &item.fields {
            // Tuple fields carry no name and are never scanned.
            Fields::Named(named) => named
                .named
                .iter()
                .filter_map(|field| field.ident.clone())
                .map(|ident| Field { ident })
                .collect(),
            Fields::Unnamed(_) | Fields::Unit => Vec::new(),
        };

        Self {
            ident: item.ident.clone(),
            fields,
        }
    }

    /// The struct name without any `r#` prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// Collect the top-level structs of `file` whose names are in `targets`.
///
/// Results keep the order in which each name first appears. A later struct
/// with the same name (for example a second `#[cfg]` variant) replaces the
/// earlier one in place.
pub fn extract(file: &syn::File, targets: &TargetTypes) -> Vec<CompositeTypeSpec> {
    let mut specs: Vec<CompositeTypeSpec> = Vec::new();

    for item in &file.items {
        let Item::Struct(item_struct) = item else {
            continue;
        };

        let name = item_struct.ident.unraw().to_string();
        if !targets.contains(&name) {
            continue;
        }

        if !item_struct.generics.params.is_empty() {
            log::warn!("skipping generic struct `{name}`: generic types are not supported");
            continue;
        }

        let spec = CompositeTypeSpec::from_item(item_struct);
        match specs.iter_mut().find(|existing| existing.name() == name) {
            Some(existing) => *existing = spec,
            None => specs.push(spec),
        }
    }

    specs
}

/// Names of the fields a generated scanner forwards, in declaration order.
pub fn fields(spec: &CompositeTypeSpec) -> Vec<String> {
    spec.fields.iter().map(Field::name).collect()
}
