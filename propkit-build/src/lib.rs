//! Build-time generator for propkit load/save code.
//!
//! Entity structs carry `#[derive(Entity)]`, which records their fields and
//! registers them. This crate validates those descriptions and emits a module
//! with kind and query constants plus a [`propkit::PropertyLoadSaver`] impl for
//! every kind.
//!
//! # Example
//!
//! A small generator binary that links the model crate:
//!
//! ```ignore
//! fn main() {
//!     propkit_build::generate_model()
//!         .from_inventory()
//!         .output_file("src/model_gen.rs")
//!         .run()
//!         .expect("Failed to generate model code");
//! }
//! ```
//!
//! Or with an explicit registry:
//!
//! ```ignore
//! let code = propkit_build::generate_model()
//!     .register::<Post>()
//!     .register::<User>()
//!     .generate()?;
//! ```

mod codegen;
mod errors;
mod generator;
mod registry;
mod schema;
mod type_map;

pub use codegen::generate_code;
pub use errors::{SchemaError, SchemaResult};
pub use generator::ModelGenerator;
pub use registry::Registry;
pub use schema::{Property, Schema, derive_schema, derive_schemas};
pub use type_map::{TypeMapping, Unsupported, map_type};

/// Create a new model generator with default settings.
pub fn generate_model() -> ModelGenerator {
    ModelGenerator::new()
}

/// Print `result`'s error as `ERROR: ...` and exit with status 1.
pub fn exit_on_error(result: anyhow::Result<()>) {
    if let Err(err) = result {
        eprintln!("ERROR: {err:#}");
        std::process::exit(1);
    }
}

/// Entry point for generator binaries: every entity linked into the binary,
/// generated code on stdout.
pub fn run_from_inventory() {
    let _ = env_logger::try_init();
    exit_on_error(generate_model().from_inventory().run());
}
