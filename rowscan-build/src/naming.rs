//! Identifier helpers for generated code.

use proc_macro2::{Ident, Span};

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Words reserved by recent editions that `syn` still parses as identifiers.
const RESERVED_WORDS: &[&str] = &["gen", "try"];

/// Derive a local binding name from a type name.
///
/// Lowercases the first character and keeps the rest. When that leaves the
/// name unchanged (already lowercase, or not alphabetic) a trailing `_` is
/// appended so the result never equals the type name.
pub fn variablize(name: &str) -> String {
    let mut chars = name.chars();
    let mut vn = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    if vn == name {
        vn.push('_');
    }
    vn
}

/// Turn a generated name into an identifier usable as a local binding.
///
/// Reserved words come back as raw identifiers (`type` becomes `r#type`,
/// `gen` becomes `r#gen`). Path keywords cannot be raw, so they get a
/// trailing `_` instead.
pub fn binding_ident(name: &str) -> Ident {
    if NON_RAW_KEYWORDS.contains(&name) {
        return Ident::new(&format!("{name}_"), Span::call_site());
    }
    if !RESERVED_WORDS.contains(&name) && syn::parse_str::<Ident>(name).is_ok() {
        Ident::new(name, Span::call_site())
    } else {
        Ident::new_raw(name, Span::call_site())
    }
}
