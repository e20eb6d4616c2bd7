//! CSV parsing for fixture tables.

#![deny(unsafe_code)]

use std::io::Read;
use std::path::Path;

use arp_core::{DataView, ViewOptions};
use arp_model::{FieldName, Row, RowSet, Scalar};
use csv::ReaderBuilder;

use crate::error::{FixtureError, Result};
use crate::manifest::TableSpec;

/// A loaded fixture table.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureTable {
    pub spec: TableSpec,
    pub rows: RowSet<Row>,
    columns: Vec<FieldName>,
}

impl FixtureTable {
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// CSV header order, which is also the display column order.
    pub fn columns(&self) -> &[FieldName] {
        &self.columns
    }

    /// A data view over a copy of the rows, with the manifest's search
    /// fields and view option overrides applied on top of `base`.
    pub fn view(&self, base: ViewOptions) -> Result<DataView<Row>> {
        self.view_with_options(self.spec.view_options(base))
    }

    /// Like [`FixtureTable::view`], but `options` are used as given.
    pub fn view_with_options(&self, options: ViewOptions) -> Result<DataView<Row>> {
        let mut view = DataView::new(self.rows.clone(), options)?;
        view.set_search_fields(self.spec.search_fields()?);
        Ok(view)
    }
}

/// Parse one CSV document into a fixture table.
///
/// Header names lose a leading byte-order mark and cells are trimmed.
/// Numeric columns hold integers (or floats when the cell is not an
/// integer); an empty numeric cell leaves the field out of that row.
pub(crate) fn parse_table<R: Read>(
    reader: R,
    path: &Path,
    spec: &TableSpec,
) -> Result<FixtureTable> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| FixtureError::csv(path, &e))?
        .iter()
        .map(|header| {
            FieldName::new(header.trim_matches('\u{feff}'))
                .map_err(|e| FixtureError::model(&spec.name, e))
        })
        .collect::<Result<Vec<_>>>()?;
    let id_field = spec.id_field()?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| FixtureError::csv(path, &e))?;
        let line = record.position().map_or(0, csv::Position::line);
        let mut fields = Vec::with_capacity(headers.len());
        for (header, raw) in headers.iter().zip(record.iter()) {
            let value = raw.trim();
            if spec.is_numeric(header.as_str()) {
                if value.is_empty() {
                    continue;
                }
                let number = parse_number(value).ok_or_else(|| FixtureError::InvalidNumber {
                    path: path.to_path_buf(),
                    line,
                    field: header.to_string(),
                    value: value.to_string(),
                })?;
                fields.push((header.clone(), number));
            } else {
                fields.push((header.clone(), Scalar::from(value)));
            }
        }
        let row = Row::with_id_field(id_field.clone(), fields)
            .map_err(|e| FixtureError::model(&spec.name, e))?;
        rows.push(row);
    }

    let rows = RowSet::new(rows).map_err(|e| FixtureError::model(&spec.name, e))?;
    Ok(FixtureTable {
        spec: spec.clone(),
        rows,
        columns: headers,
    })
}

fn parse_number(value: &str) -> Option<Scalar> {
    if let Ok(integer) = value.parse::<i64>() {
        return Some(Scalar::Integer(integer));
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|float| float.is_finite())
        .map(Scalar::Float)
}
