#![deny(unsafe_code)]

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use serde::Deserialize;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;

use crate::ModelError;
use crate::ids::{DEFAULT_ID_FIELD, FieldName, RowId};
use crate::scalar::Scalar;

/// A record that can be shown in a table view.
///
/// The engines only need three things from a row: its identity, the value of
/// a named field, and every value in field order (the "all fields" search
/// haystack). Typed structs can implement this directly instead of going
/// through [`Row`].
pub trait Record {
    type Id: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    fn id(&self) -> Self::Id;

    fn value(&self, field: &str) -> Option<Cow<'_, Scalar>>;

    fn values(&self) -> Vec<Cow<'_, Scalar>>;
}

/// A generic record: ordered field/value pairs with a designated id field.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: RowId,
    id_field: FieldName,
    fields: Vec<(FieldName, Scalar)>,
}

impl Row {
    /// Build a row keyed by the default `id` field.
    pub fn new(fields: Vec<(FieldName, Scalar)>) -> Result<Self, ModelError> {
        Self::with_id_field(FieldName::new(DEFAULT_ID_FIELD)?, fields)
    }

    /// Build a row keyed by `id_field`. Later duplicates of a field name
    /// replace earlier ones in place.
    pub fn with_id_field(
        id_field: FieldName,
        fields: Vec<(FieldName, Scalar)>,
    ) -> Result<Self, ModelError> {
        let mut ordered: Vec<(FieldName, Scalar)> = Vec::with_capacity(fields.len());
        for (name, value) in fields {
            match ordered.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = value,
                None => ordered.push((name, value)),
            }
        }
        let id = ordered
            .iter()
            .find(|(name, _)| *name == id_field)
            .map(|(_, value)| RowId::from(value))
            .ok_or_else(|| ModelError::MissingId {
                field: id_field.to_string(),
            })?;
        Ok(Self {
            id,
            id_field,
            fields: ordered,
        })
    }

    /// Convenience constructor from loosely typed pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Scalar>,
    {
        let fields = pairs
            .into_iter()
            .map(|(name, value)| Ok((FieldName::new(name)?, value.into())))
            .collect::<Result<Vec<_>, ModelError>>()?;
        Self::new(fields)
    }

    pub fn row_id(&self) -> &RowId {
        &self.id
    }

    pub fn id_field(&self) -> &FieldName {
        &self.id_field
    }

    pub fn get(&self, field: &str) -> Option<&Scalar> {
        self.fields
            .iter()
            .find(|(name, _)| name.as_str() == field)
            .map(|(_, value)| value)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&FieldName, &Scalar)> {
        self.fields.iter().map(|(name, value)| (name, value))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &FieldName> {
        self.fields.iter().map(|(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Replacement row with `field` set to `value`; the original is untouched.
    pub fn with_value(&self, field: FieldName, value: Scalar) -> Result<Self, ModelError> {
        let mut fields = self.fields.clone();
        fields.push((field, value));
        Self::with_id_field(self.id_field.clone(), fields)
    }

    /// Replacement row without `field`. Removing the id field is rejected.
    pub fn without(&self, field: &str) -> Result<Self, ModelError> {
        let fields = self
            .fields
            .iter()
            .filter(|(name, _)| name.as_str() != field)
            .cloned()
            .collect();
        Self::with_id_field(self.id_field.clone(), fields)
    }
}

impl Record for Row {
    type Id = RowId;

    fn id(&self) -> RowId {
        self.id.clone()
    }

    fn value(&self, field: &str) -> Option<Cow<'_, Scalar>> {
        self.get(field).map(Cow::Borrowed)
    }

    fn values(&self) -> Vec<Cow<'_, Scalar>> {
        self.fields
            .iter()
            .map(|(_, value)| Cow::Borrowed(value))
            .collect()
    }
}

impl serde::Serialize for Row {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name.as_str(), value)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for Row {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = FieldList::deserialize(deserializer)?;
        Row::new(fields.0).map_err(serde::de::Error::custom)
    }
}

/// Field/value pairs in document order, before an id field is chosen.
///
/// Deserializes from a map like [`Row`] does, for callers whose id field is
/// not `id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldList(Vec<(FieldName, Scalar)>);

impl FieldList {
    pub fn into_inner(self) -> Vec<(FieldName, Scalar)> {
        self.0
    }

    pub fn into_row(self, id_field: FieldName) -> Result<Row, ModelError> {
        Row::with_id_field(id_field, self.0)
    }
}

impl From<Vec<(FieldName, Scalar)>> for FieldList {
    fn from(fields: Vec<(FieldName, Scalar)>) -> Self {
        Self(fields)
    }
}

impl<'de> serde::Deserialize<'de> for FieldList {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = FieldList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to scalar values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FieldList, A::Error> {
                let mut fields = Vec::new();
                while let Some((name, value)) = access.next_entry::<String, Option<Scalar>>()? {
                    let name = FieldName::new(name).map_err(serde::de::Error::custom)?;
                    // null cells are absent fields
                    if let Some(value) = value {
                        fields.push((name, value));
                    }
                }
                Ok(FieldList(fields))
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

/// An immutable snapshot of rows with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSet<R = Row> {
    rows: Vec<R>,
}

impl<R> Default for RowSet<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R: Record> RowSet<R> {
    pub fn new(rows: Vec<R>) -> Result<Self, ModelError> {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            let id = row.id();
            if !seen.insert(id.clone()) {
                return Err(ModelError::DuplicateId(id.to_string()));
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn position(&self, id: &R::Id) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == *id)
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.position(id).map(|idx| &self.rows[idx])
    }

    /// Append `row`, rejecting an id already in the set.
    pub fn insert(&mut self, row: R) -> Result<(), ModelError> {
        let id = row.id();
        if self.contains(&id) {
            return Err(ModelError::DuplicateId(id.to_string()));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Swap the row sharing `row`'s id; returns the previous row.
    pub fn replace(&mut self, row: R) -> Option<R> {
        let idx = self.position(&row.id())?;
        Some(std::mem::replace(&mut self.rows[idx], row))
    }

    pub fn remove(&mut self, id: &R::Id) -> Option<R> {
        let idx = self.position(id)?;
        Some(self.rows.remove(idx))
    }

    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }
}

impl<'a, R> IntoIterator for &'a RowSet<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
