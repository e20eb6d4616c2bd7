#![deny(unsafe_code)]

//! Mock record tables backing the console's list views.
//!
//! Tables are described by a `manifest.toml` and stored as CSV. A copy of
//! the default set is compiled in; `ARP_FIXTURES_DIR` points at a directory
//! with the same layout to use other data.

pub mod catalog;
pub mod error;
pub mod manifest;
pub mod table;

pub use crate::catalog::{FIXTURES_ENV_VAR, FixtureCatalog, default_fixtures_root};
pub use crate::error::FixtureError;
pub use crate::manifest::{Manifest, TableSpec};
pub use crate::table::FixtureTable;
