//! Object-function stub generator.
//!
//! Expands a [`Catalog`] into one `object_functions<T<D, ScalarT>>`
//! specialization per generated type, plus the primary template header
//! every specialization includes. Output depends only on the catalog and
//! [`GeneratorConfig`], so regenerating rewrites identical bytes.

pub mod catalog;
pub mod stubs;
pub mod writer;

pub use catalog::Catalog;

use crate::error::{Error, Result};
use std::fs;
use std::path::PathBuf;

/// Where generated headers go.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory receiving `<type>.hh`.
    pub out_dir: PathBuf,
    /// Path of the primary template header.
    pub default_header: PathBuf,
    /// Path written in each `#include <...>` of a generated header.
    pub include: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("typed-geometry/object-functions"),
            default_header: PathBuf::from("typed-geometry/object_functions.hh"),
            include: "typed-geometry/object_functions.hh".to_string(),
        }
    }
}

/// A rendered file not yet written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Render every output file in memory: the primary template header first,
/// then one header per generated type in catalog order.
pub fn plan(catalog: &Catalog, config: &GeneratorConfig) -> Result<Vec<GeneratedFile>> {
    catalog.validate()?;
    tracing::info!(
        types = catalog.partner_types().count(),
        generated = catalog.generated_types().len(),
        "expanding catalog"
    );

    let mut files = vec![GeneratedFile {
        path: config.default_header.clone(),
        contents: stubs::DEFAULT_HEADER.to_string(),
    }];
    for ty in catalog.generated_types() {
        files.push(GeneratedFile {
            path: header_path(config, ty),
            contents: stubs::object_functions_header(ty, catalog, &config.include),
        });
    }
    Ok(files)
}

/// Write planned files, creating parent directories as needed.
pub fn write_files(files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        if let Some(parent) = file.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(&file.path, &file.contents).map_err(|e| Error::io(&file.path, e))?;
        tracing::debug!(path = %file.path.display(), bytes = file.contents.len(), "wrote header");
    }
    Ok(())
}

/// Plan and write all headers, returning the written paths.
pub fn generate(catalog: &Catalog, config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    let files = plan(catalog, config)?;
    write_files(&files)?;
    Ok(files.into_iter().map(|f| f.path).collect())
}

/// Path of the header generated for `ty`.
pub fn header_path(config: &GeneratorConfig, ty: &str) -> PathBuf {
    config.out_dir.join(format!("{}.hh", ty))
}
