use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use super::{Column, StatCategory};

/// A single cell of a normalized record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent after a join, or unparseable after numeric coercion.
    Missing,
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Value {
    /// Coerce to a float. Text that does not parse as a number becomes `Missing`.
    pub fn to_float(&self) -> Value {
        match self {
            Value::Missing => Value::Missing,
            Value::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map_or(Value::Missing, Value::Float),
            Value::Integer(v) => Value::Float(*v as f64),
            Value::Float(v) => Value::Float(*v),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Missing | Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Missing => Ok(()),
            Value::Text(text) => f.write_str(text),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Missing => serializer.serialize_str(""),
            Value::Text(text) => serializer.serialize_str(text),
            Value::Integer(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
        }
    }
}

/// Rows exactly as scraped from one HTML table, before any renaming or typing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    /// Each row has one cell per header.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&str> {
        let idx = self.column_index(name)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One player's fields in one stat category for one season, keyed by canonical column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerSeasonRecord {
    fields: BTreeMap<Column, Value>,
}

/// A basic record joined with its advanced fields, award flag and season.
pub type MergedSeasonRecord = PlayerSeasonRecord;

impl PlayerSeasonRecord {
    pub fn get(&self, column: Column) -> Option<&Value> {
        self.fields.get(&column)
    }

    pub fn insert(&mut self, column: Column, value: Value) {
        self.fields.insert(column, value);
    }

    pub fn contains(&self, column: Column) -> bool {
        self.fields.contains_key(&column)
    }

    /// The join key. Every stored record has a non-empty player name.
    pub fn player(&self) -> &str {
        self.get(Column::Player)
            .and_then(Value::as_text)
            .unwrap_or_default()
    }

    pub fn team(&self) -> Option<&str> {
        self.get(Column::Team).and_then(Value::as_text)
    }

    /// Fields in canonical column order.
    pub fn iter(&self) -> impl Iterator<Item = (Column, &Value)> {
        self.fields.iter().map(|(c, v)| (*c, v))
    }

    pub(crate) fn fields_mut(&mut self) -> impl Iterator<Item = (Column, &mut Value)> {
        self.fields.iter_mut().map(|(c, v)| (*c, v))
    }
}

impl FromIterator<(Column, Value)> for PlayerSeasonRecord {
    fn from_iter<T: IntoIterator<Item = (Column, Value)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// The normalized records of one stat category for one season.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTable {
    pub category: StatCategory,
    /// The columns present in every record, in canonical order.
    pub columns: Vec<Column>,
    pub records: Vec<PlayerSeasonRecord>,
}

impl StatTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
