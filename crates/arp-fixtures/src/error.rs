#![deny(unsafe_code)]

use std::path::PathBuf;

use arp_core::ViewError;
use arp_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML manifest {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid manifest: {message}")]
    InvalidManifest { message: String },

    #[error("duplicate table in manifest: {name}")]
    DuplicateTable { name: String },

    #[error("invalid manifest path {path}: {message}")]
    InvalidPath { path: PathBuf, message: String },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("invalid number {value:?} in column {field} of {path} (line {line})")]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        field: String,
        value: String,
    },

    #[error("invalid rows in table {table}: {source}")]
    Model {
        table: String,
        #[source]
        source: ModelError,
    },

    #[error("unknown table: {name}")]
    UnknownTable { name: String },

    #[error(transparent)]
    View(#[from] ViewError),
}

impl FixtureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub(crate) fn model(table: &str, source: ModelError) -> Self {
        Self::Model {
            table: table.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
