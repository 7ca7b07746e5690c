use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod parsed;

use parsed::ParsedEntity;

/// Describe a struct to `propkit-build`.
///
/// Every `pub` field is expected to carry `#[datastore("name")]` or
/// `#[datastore("name,noindex")]`. The annotation is recorded verbatim and
/// validated by the generator, which reports all schema errors in one place.
///
/// ```text
/// #[derive(Entity)]
/// #[datastore(kind = "Post")]   // optional, defaults to the type name
/// pub struct Post {
///     #[datastore("title")]
///     pub title: String,
///     #[datastore("tags,noindex")]
///     pub tags: Vec<String>,
///     cache: Option<String>,     // not pub: ignored
/// }
/// ```
#[proc_macro_derive(Entity, attributes(datastore))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ParsedEntity::from_input(&input) {
        Ok(parsed) => parsed.emit().into(),
        Err(err) => err.to_compile_error().into(),
    }
}
