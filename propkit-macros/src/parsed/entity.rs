use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Error, Fields, Ident, LitStr, Result, spanned::Spanned};

use super::ParsedField;

pub(crate) struct ParsedEntity {
    name: Ident,
    kind: String,
    fields: Vec<ParsedField>,
}

impl ParsedEntity {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(Error::new(
                input.generics.span(),
                "Entity cannot be derived for generic structs",
            ));
        }

        let mut kind: Option<String> = None;
        for attr in &input.attrs {
            if attr.path().is_ident("datastore") {
                Self::parse_container_attr(attr, &mut kind)?;
            }
        }

        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => {
                    let mut parsed = Vec::new();
                    for field in &named.named {
                        parsed.push(ParsedField::from_field(field)?);
                    }
                    parsed
                }
                _ => return Err(Error::new(input.ident.span(), "Entity requires named fields")),
            },
            _ => return Err(Error::new(input.ident.span(), "Entity can only be derived for structs")),
        };

        Ok(Self {
            name: input.ident.clone(),
            kind: kind.unwrap_or_else(|| input.ident.to_string()),
            fields,
        })
    }

    fn parse_container_attr(attr: &Attribute, kind: &mut Option<String>) -> Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("kind") {
                if kind.is_some() {
                    return Err(meta.error("kind already set"));
                }
                let value: LitStr = meta.value()?.parse()?;
                if value.value().trim().is_empty() {
                    return Err(Error::new(value.span(), "kind must not be empty"));
                }
                *kind = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unknown datastore attribute, expected `kind = \"...\"`"))
            }
        })
    }

    pub(crate) fn emit(&self) -> TokenStream2 {
        let name = &self.name;
        let type_name = name.to_string();
        let kind = &self.kind;
        let fields = self.fields.iter().map(ParsedField::to_def_tokens);

        quote! {
            impl ::propkit::model::EntityModel for #name {
                const KIND: &'static str = #kind;

                fn entity_def() -> ::propkit::model::EntityDef {
                    ::propkit::model::EntityDef {
                        type_name: #type_name.to_string(),
                        fields: ::std::vec![#(#fields),*],
                    }
                }
            }

            ::propkit::inventory::submit! {
                ::propkit::registration::EntityRegistration {
                    kind: #kind,
                    type_name: #type_name,
                    def_fn: <#name as ::propkit::model::EntityModel>::entity_def,
                }
            }
        }
    }
}
