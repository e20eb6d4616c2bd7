#![deny(unsafe_code)]

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{FixtureError, Result};
use crate::manifest::{MANIFEST_FILE, Manifest, parse_manifest, validate_path};
use crate::table::{FixtureTable, parse_table};

/// Environment variable for overriding the fixtures directory.
pub const FIXTURES_ENV_VAR: &str = "ARP_FIXTURES_DIR";

const BUILTIN_ROOT: &str = "<builtin>";
const BUILTIN_MANIFEST: &str = include_str!("../fixtures/manifest.toml");
const BUILTIN_FILES: &[(&str, &str)] = &[
    ("students.csv", include_str!("../fixtures/students.csv")),
    ("faculty.csv", include_str!("../fixtures/faculty.csv")),
    ("courses.csv", include_str!("../fixtures/courses.csv")),
    ("examinations.csv", include_str!("../fixtures/examinations.csv")),
    ("outcomes.csv", include_str!("../fixtures/outcomes.csv")),
];

/// Every table listed in a fixtures manifest, loaded and validated.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    root: PathBuf,
    tables: Vec<FixtureTable>,
}

impl FixtureCatalog {
    /// The tables compiled into this crate.
    pub fn builtin() -> Result<Self> {
        let root = PathBuf::from(BUILTIN_ROOT);
        let manifest = parse_manifest(&root.join(MANIFEST_FILE), BUILTIN_MANIFEST)?;
        let tables = manifest
            .tables
            .iter()
            .map(|spec| {
                let path = root.join(validate_path(&spec.file)?);
                let contents = BUILTIN_FILES
                    .iter()
                    .find(|(file, _)| *file == spec.file)
                    .map(|(_, contents)| *contents)
                    .ok_or_else(|| FixtureError::InvalidPath {
                        path: path.clone(),
                        message: "no built-in file with this name".to_string(),
                    })?;
                parse_table(contents.as_bytes(), &path, spec)
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(tables = tables.len(), "loaded built-in fixtures");
        Ok(Self { root, tables })
    }

    /// Load `manifest.toml` and the CSV files it lists from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let manifest_path = dir.join(MANIFEST_FILE);
        let contents = std::fs::read_to_string(&manifest_path)
            .map_err(|e| FixtureError::io(&manifest_path, e))?;
        let manifest = parse_manifest(&manifest_path, &contents)?;
        let tables = load_tables(dir, &manifest)?;
        info!(dir = %dir.display(), tables = tables.len(), "loaded fixtures");
        Ok(Self {
            root: dir.to_path_buf(),
            tables,
        })
    }

    /// `ARP_FIXTURES_DIR` when set, the built-in tables otherwise.
    pub fn load_default() -> Result<Self> {
        match default_fixtures_root() {
            Some(dir) => Self::from_dir(&dir),
            None => Self::builtin(),
        }
    }

    /// Where the tables came from; `<builtin>` for the embedded set.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tables(&self) -> &[FixtureTable] {
        &self.tables
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(FixtureTable::name)
    }

    pub fn table(&self, name: &str) -> Result<&FixtureTable> {
        self.tables
            .iter()
            .find(|table| table.name() == name)
            .ok_or_else(|| FixtureError::UnknownTable {
                name: name.to_string(),
            })
    }
}

/// The directory named by `ARP_FIXTURES_DIR`, if set and non-empty.
pub fn default_fixtures_root() -> Option<PathBuf> {
    std::env::var_os(FIXTURES_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn load_tables(dir: &Path, manifest: &Manifest) -> Result<Vec<FixtureTable>> {
    manifest
        .tables
        .iter()
        .map(|spec| {
            let path = dir.join(validate_path(&spec.file)?);
            let file = File::open(&path).map_err(|e| FixtureError::io(&path, e))?;
            let table = parse_table(BufReader::new(file), &path, spec)?;
            debug!(table = %spec.name, rows = table.rows.len(), "loaded fixture table");
            Ok(table)
        })
        .collect()
}
