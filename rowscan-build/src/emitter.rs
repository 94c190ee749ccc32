//! Rendering of generated scanner methods.

use std::fmt::Write;

use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::errors::{GenerateError, Result};
use crate::naming::{binding_ident, variablize};
use crate::scanner::CompositeTypeSpec;

/// Append one file's generated block to `out`.
///
/// The block is a header comment naming the package, the runtime prelude
/// import, then one `impl` per matched struct in the order given.
pub fn emit(package_name: &str, runtime: &syn::Path, specs: &[CompositeTypeSpec], out: &mut String) -> Result<()> {
    if package_name.is_empty() {
        let _ = writeln!(out, "// Code generated by rowscan. DO NOT EDIT.");
    } else {
        let _ = writeln!(out, "// Code generated by rowscan for package `{package_name}`. DO NOT EDIT.");
    }
    out.push('\n');

    let _ = writeln!(out, "use {}::prelude::*;", path_text(runtime));
    out.push('\n');

    for spec in specs {
        out.push_str(&render_impl(spec)?);
        out.push('\n');
    }

    Ok(())
}

/// Render the `ScanRow` impl for one struct.
///
/// Every struct gets the same `scan` method; the variablized type name only
/// names the local binding that stands in for the receiver.
pub fn render_impl(spec: &CompositeTypeSpec) -> Result<String> {
    let tokens = impl_tokens(spec);
    let syntax: syn::File = syn::parse2(tokens).map_err(|source| GenerateError::Render {
        type_name: spec.name(),
        source,
    })?;
    Ok(prettyplease::unparse(&syntax))
}

fn path_text(path: &syn::Path) -> String {
    let segments: Vec<String> = path.segments.iter().map(|segment| segment.ident.to_string()).collect();
    let joined = segments.join("::");
    if path.leading_colon.is_some() {
        format!("::{joined}")
    } else {
        joined
    }
}

fn impl_tokens(spec: &CompositeTypeSpec) -> TokenStream {
    let type_ident = &spec.ident;
    let fields: Vec<_> = spec.fields.iter().map(|field| &field.ident).collect();

    // A struct without named fields never touches its receiver.
    let body = if fields.is_empty() {
        quote! {
            sc.scan(&mut [])
        }
    } else {
        let receiver = receiver_ident(spec);
        quote! {
            let #receiver = self;
            sc.scan(&mut [#(&mut #receiver.#fields),*])
        }
    };

    quote! {
        impl ScanRow for #type_ident {
            fn scan<S: Scanner + ?Sized>(&mut self, sc: &mut S) -> Result<(), S::Error> {
                #body
            }
        }
    }
}

/// The binding may not shadow the scanner parameter `sc`.
fn receiver_ident(spec: &CompositeTypeSpec) -> Ident {
    let mut name = variablize(&spec.name());
    if name == "sc" {
        name.push('_');
    }
    binding_ident(&name)
}
