#![deny(unsafe_code)]

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use arp_core::{Collation, ViewOptions};
use arp_model::{DEFAULT_ID_FIELD, FieldName};
use serde::{Deserialize, Serialize};

use crate::error::{FixtureError, Result};

pub const MANIFEST_SCHEMA: &str = "arp.fixtures-manifest";
pub const MANIFEST_FILE: &str = "manifest.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest: ManifestHeader,
    #[serde(default)]
    pub tables: Vec<TableSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
}

/// One table entry in `manifest.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    pub name: String,
    pub title: String,
    /// CSV file, relative to the fixtures directory.
    pub file: String,
    #[serde(default)]
    pub id_field: Option<String>,
    /// Columns searched by default; every column when absent.
    #[serde(default)]
    pub search_fields: Option<Vec<String>>,
    /// Columns parsed as integers or floats.
    #[serde(default)]
    pub numeric_fields: Vec<String>,
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default)]
    pub collation: Option<Collation>,
}

impl TableSpec {
    pub fn id_field(&self) -> Result<FieldName> {
        let name = self.id_field.as_deref().unwrap_or(DEFAULT_ID_FIELD);
        FieldName::new(name).map_err(|e| FixtureError::model(&self.name, e))
    }

    pub fn search_fields(&self) -> Result<Option<Vec<FieldName>>> {
        let Some(fields) = &self.search_fields else {
            return Ok(None);
        };
        fields
            .iter()
            .map(|field| {
                FieldName::new(field.as_str()).map_err(|e| FixtureError::model(&self.name, e))
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    pub fn is_numeric(&self, field: &str) -> bool {
        self.numeric_fields.iter().any(|name| name == field)
    }

    /// `base` with this table's page size and collation overrides applied.
    pub fn view_options(&self, base: ViewOptions) -> ViewOptions {
        let mut options = base;
        if let Some(page_size) = self.page_size {
            options.page_size = page_size;
        }
        if let Some(collation) = self.collation {
            options.collation = collation;
        }
        options
    }
}

pub(crate) fn parse_manifest(path: &Path, contents: &str) -> Result<Manifest> {
    let manifest: Manifest = toml::from_str(contents).map_err(|e| FixtureError::Toml {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate_manifest(&manifest)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest) -> Result<()> {
    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(FixtureError::InvalidManifest {
            message: format!("unsupported schema: {}", manifest.manifest.schema),
        });
    }
    if manifest.manifest.schema_version != 1 {
        return Err(FixtureError::InvalidManifest {
            message: format!(
                "unsupported schema_version: {}",
                manifest.manifest.schema_version
            ),
        });
    }

    let mut names: BTreeSet<&str> = BTreeSet::new();
    for table in &manifest.tables {
        if table.name.trim().is_empty() {
            return Err(FixtureError::InvalidManifest {
                message: format!("table with blank name (file {})", table.file),
            });
        }
        if !names.insert(table.name.as_str()) {
            return Err(FixtureError::DuplicateTable {
                name: table.name.clone(),
            });
        }
        if table.page_size == Some(0) {
            return Err(FixtureError::InvalidManifest {
                message: format!("page_size for {} must be positive", table.name),
            });
        }
        validate_path(&table.file)?;
        table.id_field()?;
        table.search_fields()?;
    }
    Ok(())
}

/// Manifest file paths must be plain relative paths inside the fixtures
/// directory.
pub(crate) fn validate_path(raw: &str) -> Result<PathBuf> {
    let path = PathBuf::from(raw);
    if raw.trim().is_empty() {
        return Err(FixtureError::InvalidPath {
            path,
            message: "path is empty".to_string(),
        });
    }
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => {
                return Err(FixtureError::InvalidPath {
                    path: path.clone(),
                    message: "must be relative and stay inside the fixtures directory"
                        .to_string(),
                });
            }
        }
    }
    Ok(path)
}
