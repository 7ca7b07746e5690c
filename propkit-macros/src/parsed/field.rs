use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::{
    Error, Field, GenericArgument, Ident, LitStr, Path, PathArguments, Result, Type, TypePath, Visibility,
    spanned::Spanned,
};

pub(crate) struct ParsedField {
    ident: Ident,
    exported: bool,
    tag: Option<String>,
    shape: Shape,
}

/// Mirror of `propkit::model::TypeShape`, built from the syntax tree.
#[derive(Clone, Debug, PartialEq)]
enum Shape {
    Bool,
    I64,
    F64,
    U8,
    Str,
    Bytes,
    ByteString,
    Timestamp,
    Seq(Box<Shape>),
    Unsupported(String),
}

impl ParsedField {
    pub(crate) fn from_field(field: &Field) -> Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new(field.span(), "Entity requires named fields"))?;

        let mut tag = None;
        for attr in &field.attrs {
            if !attr.path().is_ident("datastore") {
                continue;
            }
            if tag.is_some() {
                return Err(Error::new(attr.span(), "field already has a #[datastore(...)] annotation"));
            }
            let value: LitStr = attr.parse_args().map_err(|_| {
                Error::new(
                    attr.span(),
                    "expected #[datastore(\"name\")] or #[datastore(\"name,noindex\")]",
                )
            })?;
            tag = Some(value.value());
        }

        Ok(Self {
            ident,
            exported: matches!(field.vis, Visibility::Public(_)),
            tag,
            shape: classify_type(&field.ty),
        })
    }

    pub(crate) fn to_def_tokens(&self) -> TokenStream2 {
        let name = self.ident.to_string();
        let exported = self.exported;
        let tag = match &self.tag {
            Some(tag) => quote! { ::std::option::Option::Some(#tag.to_string()) },
            None => quote! { ::std::option::Option::None },
        };
        let shape = self.shape.to_tokens();

        quote! {
            ::propkit::model::FieldDef {
                name: #name.to_string(),
                exported: #exported,
                tag: #tag,
                shape: #shape,
            }
        }
    }
}

impl Shape {
    fn to_tokens(&self) -> TokenStream2 {
        match self {
            Shape::Bool => quote! { ::propkit::model::TypeShape::Bool },
            Shape::I64 => quote! { ::propkit::model::TypeShape::I64 },
            Shape::F64 => quote! { ::propkit::model::TypeShape::F64 },
            Shape::U8 => quote! { ::propkit::model::TypeShape::U8 },
            Shape::Str => quote! { ::propkit::model::TypeShape::Str },
            Shape::Bytes => quote! { ::propkit::model::TypeShape::Bytes },
            Shape::ByteString => quote! { ::propkit::model::TypeShape::ByteString },
            Shape::Timestamp => quote! { ::propkit::model::TypeShape::Timestamp },
            Shape::Seq(inner) => {
                let inner = inner.to_tokens();
                quote! { ::propkit::model::TypeShape::Seq(::std::boxed::Box::new(#inner)) }
            }
            Shape::Unsupported(ty) => quote! { ::propkit::model::TypeShape::Unsupported(#ty.to_string()) },
        }
    }
}

fn classify_type(ty: &Type) -> Shape {
    match ty {
        Type::Group(group) => classify_type(&group.elem),
        Type::Paren(paren) => classify_type(&paren.elem),
        Type::Path(TypePath { qself: None, path }) => classify_path(path).unwrap_or_else(|| unsupported(ty)),
        _ => unsupported(ty),
    }
}

/// Only the last path segment is inspected, so `std::string::String` and
/// `chrono::DateTime<chrono::Utc>` classify like their short forms.
fn classify_path(path: &Path) -> Option<Shape> {
    let last = path.segments.last()?;
    let ident = last.ident.to_string();

    match (ident.as_str(), &last.arguments) {
        ("bool", PathArguments::None) => Some(Shape::Bool),
        ("i64", PathArguments::None) => Some(Shape::I64),
        ("f64", PathArguments::None) => Some(Shape::F64),
        ("u8", PathArguments::None) => Some(Shape::U8),
        ("String", PathArguments::None) => Some(Shape::Str),
        ("ByteString", PathArguments::None) => Some(Shape::ByteString),
        ("DateTime", PathArguments::AngleBracketed(_)) => {
            let tz = single_type_arg(&last.arguments)?;
            is_named(tz, "Utc").then_some(Shape::Timestamp)
        }
        ("Vec", PathArguments::AngleBracketed(_)) => {
            let inner = single_type_arg(&last.arguments)?;
            match classify_type(inner) {
                Shape::U8 => Some(Shape::Bytes),
                other => Some(Shape::Seq(Box::new(other))),
            }
        }
        _ => None,
    }
}

fn single_type_arg(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    }
}

fn is_named(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(TypePath { qself: None, path }) => path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == name && segment.arguments.is_none()),
        _ => false,
    }
}

fn unsupported(ty: &Type) -> Shape {
    Shape::Unsupported(type_repr(ty))
}

/// Render a type roughly the way it was written, for diagnostics.
fn type_repr(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
}
