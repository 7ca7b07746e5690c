//! propkit core library.
//!
//! Records are stored as ordered lists of named, typed properties. This crate
//! holds the runtime side of that contract: [`Value`], [`Property`], the
//! [`PropertyLoadSaver`] trait that generated code implements, and the entity
//! description model that `#[derive(Entity)]` fills in for `propkit-build`.
//!
//! ```text
//! #[derive(Entity, Default)]
//! pub struct Post {
//!     #[datastore("title")]
//!     pub title: String,
//!     #[datastore("tags,noindex")]
//!     pub tags: Vec<String>,
//! }
//! ```

extern crate self as propkit;

pub mod errors;
pub mod model;
pub mod registration;
pub mod types;

pub use errors::*;
pub use model::{EntityDef, EntityModel, FieldDef, TypeShape};
pub use propkit_macros::Entity;
pub use registration::{EntityRegistration, registered_entities};
pub use types::{ByteString, Property, PropertyLoadSaver, Value, ValueKind};

// Re-exported so derived code and generated modules don't need their own versions.
pub use chrono;
pub use inventory;
