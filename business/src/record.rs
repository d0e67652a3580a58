//! User records as delivered by the users endpoint.
//!
//! A record is a flat JSON object with a required integer `id` plus any number of
//! scalar fields. Everything except `id` is kept in a column-keyed map so the
//! table can address fields through [`ColumnId`] without knowing the schema.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

use crate::{ColumnId, RecordError};

/// Identity of a record. Unique within a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A scalar field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Num(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            // Integral numbers print without a trailing `.0`.
            Self::Num(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                write!(f, "{}", *value as i64)
            }
            Self::Num(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Num(value as f64)
    }
}

impl TryFrom<&Value> for FieldValue {
    type Error = ();

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Self::Str(s.clone())),
            Value::Number(n) => n.as_f64().map(Self::Num).ok_or(()),
            _ => Err(()),
        }
    }
}

/// One row of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    fields: BTreeMap<ColumnId, FieldValue>,
}

impl Record {
    pub fn new(id: i64) -> Self {
        Self {
            id: RecordId(id),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insertion, mostly for fixtures.
    pub fn with(mut self, column: &str, value: impl Into<FieldValue>) -> Self {
        self.set(ColumnId::new(column), value.into());
        self
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Value of a column. The `id` column resolves to the record id as a number.
    pub fn value(&self, column: &ColumnId) -> Option<Cow<'_, FieldValue>> {
        if column.is_id() {
            Some(Cow::Owned(FieldValue::from(self.id.0)))
        } else {
            self.fields.get(column).map(Cow::Borrowed)
        }
    }

    /// Replaces (or adds) a field. Writes to the `id` column are ignored.
    pub fn set(&mut self, column: ColumnId, value: FieldValue) -> bool {
        if column.is_id() {
            return false;
        }
        self.fields.insert(column, value);
        true
    }

    pub fn fields(&self) -> impl Iterator<Item = (&ColumnId, &FieldValue)> {
        self.fields.iter()
    }
}

impl TryFrom<&Value> for Record {
    type Error = RecordError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let object = value.as_object().ok_or(RecordError::NotAnObject)?;
        Self::from_object(object)
    }
}

impl Record {
    fn from_object(object: &Map<String, Value>) -> Result<Self, RecordError> {
        let id = match object.get("id") {
            None => return Err(RecordError::MissingId),
            Some(raw) => raw
                .as_i64()
                .ok_or_else(|| RecordError::InvalidId(raw.to_string()))?,
        };

        let mut record = Self::new(id);
        for (name, raw) in object.iter().filter(|(name, _)| name.as_str() != "id") {
            let value = FieldValue::try_from(raw).map_err(|()| RecordError::UnsupportedField {
                field: name.clone(),
            })?;
            record.fields.insert(ColumnId::new(name), value);
        }

        Ok(record)
    }
}
