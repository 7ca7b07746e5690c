//! Emission of the generated model module.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use proc_macro2::{Ident, Span, TokenStream};
use propkit::ValueKind;
use quote::{format_ident, quote};
use syn::LitStr;

use crate::errors::SchemaError;
use crate::schema::{Property, Schema};

/// Suffixes and value templates of the query predicate constants, in emission order.
const PREDICATES: [(&str, &str, &str); 7] = [
    ("", "", " ="),
    ("_asc", "", ""),
    ("_desc", "-", ""),
    ("_gt", "", " >"),
    ("_gte", "", " >="),
    ("_lt", "", " <"),
    ("_lte", "", " <="),
];

/// Render the whole generated module for `schemas`.
///
/// `import_path` names the module holding the entity types; the generated file
/// glob-imports it. Nothing is returned unless every schema emits cleanly.
pub fn generate_code(schemas: &[Schema], import_path: &str) -> Result<String> {
    let import: syn::Path =
        syn::parse_str(import_path).with_context(|| format!("invalid import path {import_path:?}"))?;

    let constants = emit_constants(schemas)?;
    let impls = schemas.iter().map(emit_impl).collect::<Result<Vec<_>>>()?;

    let output = quote! {
        //! Auto-generated by propkit-build. Do not edit manually.
        //!
        //! Regenerate with the `genmodel` binary or from a build script.

        #![allow(
            dead_code,
            non_upper_case_globals,
            unused_imports,
            unused_mut,
            unused_variables,
            clippy::all
        )]

        use #import::*;

        #(#constants)*

        #(#impls)*
    };

    let syntax_tree = syn::parse2(output).context("Failed to parse generated code")?;
    Ok(prettyplease::unparse(&syntax_tree))
}

/// Discriminator plus predicate constants for every kind.
///
/// The discriminator is `{Kind}Kind`; predicates are `{Kind}_{field}` plus a
/// suffix, so a discriminator never shares a name with a predicate.
fn emit_constants(schemas: &[Schema]) -> Result<Vec<TokenStream>> {
    let mut seen = BTreeSet::new();
    let mut tokens = Vec::new();

    for schema in schemas {
        let kind = unraw(&schema.kind);

        let kind_const = format!("{kind}Kind");
        claim(&mut seen, &kind_const, schema, "kind")?;
        tokens.push(constant(&kind_const, &schema.key)?);

        for prop in schema.indexed() {
            let base = format!("{kind}_{}", unraw(&prop.field));
            for (suffix, before, after) in PREDICATES {
                let name = format!("{base}{suffix}");
                claim(&mut seen, &name, schema, &prop.field)?;
                tokens.push(constant(&name, &format!("{before}{}{after}", prop.name))?);
            }
        }
    }

    Ok(tokens)
}

fn claim(seen: &mut BTreeSet<String>, name: &str, schema: &Schema, field: &str) -> Result<()> {
    if !seen.insert(name.to_string()) {
        return Err(SchemaError::ConstantCollision {
            constant: name.to_string(),
            kind: schema.kind.clone(),
            field: field.to_string(),
        }
        .into());
    }
    Ok(())
}

fn constant(name: &str, value: &str) -> Result<TokenStream> {
    let ident = ident(name)?;
    let value = LitStr::new(value, Span::call_site());
    Ok(quote! {
        pub const #ident: &str = #value;
    })
}

fn emit_impl(schema: &Schema) -> Result<TokenStream> {
    let kind = ident(&schema.kind)?;

    let resets = schema
        .sequence_fields
        .iter()
        .map(|field| {
            let field = ident(field)?;
            Ok(quote! { self.#field = ::std::vec::Vec::new(); })
        })
        .collect::<Result<Vec<_>>>()?;

    let arms = schema
        .by_name()
        .map(|prop| load_arm(schema, prop))
        .collect::<Result<Vec<_>>>()?;

    let saves = schema.by_field().map(save_stmt).collect::<Result<Vec<_>>>()?;

    Ok(quote! {
        impl ::propkit::PropertyLoadSaver for #kind {
            fn load(&mut self, props: ::std::vec::Vec<::propkit::Property>) -> ::propkit::PropertyResult<()> {
                #(#resets)*
                for prop in props {
                    let ::propkit::Property { name, value, .. } = prop;
                    match name.as_str() {
                        #(#arms)*
                        _ => {}
                    }
                }
                ::std::result::Result::Ok(())
            }

            fn save(&self) -> ::propkit::PropertyResult<::std::vec::Vec<::propkit::Property>> {
                let mut props = ::std::vec::Vec::new();
                #(#saves)*
                ::std::result::Result::Ok(props)
            }
        }
    })
}

fn load_arm(schema: &Schema, prop: &Property) -> Result<TokenStream> {
    let name = LitStr::new(&prop.name, Span::call_site());
    let field = ident(&prop.field)?;
    let variant = format_ident!("{}", prop.kind.variant_name());
    let kind_name = schema.kind.as_str();
    let field_name = prop.field.as_str();
    let expected = prop.kind.type_name();

    let (error, assign) = if prop.multiple {
        (
            quote! { ::propkit::PropertyError::element_mismatch(#kind_name, #field_name, #expected) },
            quote! { self.#field.push(val); },
        )
    } else {
        (
            quote! { ::propkit::PropertyError::mismatch(#kind_name, #field_name, #expected) },
            quote! { self.#field = val; },
        )
    };

    Ok(quote! {
        #name => {
            let ::propkit::Value::#variant(val) = value else {
                return ::std::result::Result::Err(#error);
            };
            #assign
        }
    })
}

fn save_stmt(prop: &Property) -> Result<TokenStream> {
    let name = LitStr::new(&prop.name, Span::call_site());
    let field = ident(&prop.field)?;
    let variant = format_ident!("{}", prop.kind.variant_name());
    let no_index = prop.no_index.then(|| quote! { .no_index() });

    if prop.multiple {
        let value = if is_copy(prop.kind) {
            quote! { *elem }
        } else {
            quote! { elem.clone() }
        };
        Ok(quote! {
            for elem in &self.#field {
                props.push(::propkit::Property::new(#name, ::propkit::Value::#variant(#value)).multiple() #no_index);
            }
        })
    } else {
        let value = if is_copy(prop.kind) {
            quote! { self.#field }
        } else {
            quote! { self.#field.clone() }
        };
        Ok(quote! {
            props.push(::propkit::Property::new(#name, ::propkit::Value::#variant(#value)) #no_index);
        })
    }
}

fn is_copy(kind: ValueKind) -> bool {
    matches!(
        kind,
        ValueKind::Bool | ValueKind::Int64 | ValueKind::Float64 | ValueKind::Timestamp
    )
}

/// Parse an identifier, accepting raw identifiers such as `r#type`.
fn ident(name: &str) -> Result<Ident> {
    syn::parse_str::<Ident>(name).with_context(|| format!("{name:?} is not a valid identifier"))
}

fn unraw(name: &str) -> &str {
    name.strip_prefix("r#").unwrap_or(name)
}
