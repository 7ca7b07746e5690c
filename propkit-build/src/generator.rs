//! Builder that ties registry, schema derivation and emission together.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use propkit::EntityModel;

use crate::codegen::generate_code;
use crate::registry::Registry;
use crate::schema::derive_schemas;

/// Builder for configuring and running the model generator.
pub struct ModelGenerator {
    registry: Registry,
    output_file: Option<PathBuf>,
    import_path: String,
}

impl ModelGenerator {
    /// Create a new generator with an empty registry, writing to stdout.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            output_file: None,
            import_path: "super".to_string(),
        }
    }

    /// Add every entity in `registry`.
    pub fn registry(mut self, registry: Registry) -> Self {
        self.registry.extend(registry);
        self
    }

    /// Add `T` under its declared kind.
    pub fn register<T: EntityModel>(mut self) -> Self {
        self.registry = self.registry.register::<T>();
        self
    }

    /// Add every `#[derive(Entity)]` type linked into the running binary.
    pub fn from_inventory(mut self) -> Self {
        self.registry.extend(Registry::from_inventory());
        self
    }

    /// Write the generated module to `path` instead of stdout.
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Set the module path the generated file imports entity types from.
    ///
    /// Default: `super`
    pub fn import_path(mut self, path: impl Into<String>) -> Self {
        self.import_path = path.into();
        self
    }

    /// Validate every registered kind and render the generated module.
    pub fn generate(&self) -> Result<String> {
        let schemas = derive_schemas(&self.registry)?;
        debug!("generating code for {} kinds", schemas.len());
        generate_code(&schemas, &self.import_path)
    }

    /// Generate and write the module.
    ///
    /// Nothing is written when generation fails. An output file whose content
    /// is already current is left untouched.
    pub fn run(self) -> Result<()> {
        let code = self.generate()?;

        let Some(output_file) = self.output_file else {
            let mut stdout = io::stdout().lock();
            stdout.write_all(code.as_bytes()).context("Failed to write to stdout")?;
            return stdout.flush().context("Failed to write to stdout");
        };

        if write_if_changed(&output_file, &code)? {
            info!("generated {} for {} kinds", output_file.display(), self.registry.len());
        } else {
            debug!("{} is up to date", output_file.display());
        }

        Ok(())
    }
}

/// Write `contents` to `path` unless it already holds exactly that. Returns whether it wrote.
fn write_if_changed(path: &Path, contents: &str) -> Result<bool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let should_write = match fs::read_to_string(path) {
        Ok(existing) => existing != contents,
        Err(_) => true,
    };

    if should_write {
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(should_write)
}

impl Default for ModelGenerator {
    fn default() -> Self {
        Self::new()
    }
}
