//! Normalized cell values and ordered attribute maps.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Cell contents treated as "no value" after trimming.
const NAN_LIKE: &[&str] = &["nan", "#n/a", "null", "none"];

/// A single table cell after normalization.
///
/// Blank and NaN-like cells collapse into [`Value::Absent`] so that they can
/// never be used as navigation keys or shown as data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Absent,
    Text(String),
}

impl Value {
    /// Normalize a raw cell.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('\u{feff}').trim();
        if trimmed.is_empty() || is_nan_like(trimmed) {
            Self::Absent
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Text(text) => Some(text.as_str()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Value {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

fn is_nan_like(value: &str) -> bool {
    NAN_LIKE
        .iter()
        .any(|marker| value.eq_ignore_ascii_case(marker))
}

/// Column name to value mapping that keeps source column order.
///
/// Absent values are kept so that a row can be reproduced faithfully;
/// [`Attributes::present`] yields only the displayable ones. Serializes as a
/// map in column order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    entries: Vec<(String, Value)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a column. The first insertion fixes its position.
    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        let column = column.into();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Present value of a column, if any.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Columns with a present value, in source order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| value.as_str().map(|text| (name.as_str(), text)))
    }

    /// Copy of this map without absent values and without `excluded` columns.
    pub fn without_absent(&self, excluded: &[&str]) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|(name, value)| !value.is_absent() && !excluded.contains(&name.as_str()))
            .cloned()
            .collect();
        Self { entries }
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (column, value) in iter {
            attributes.insert(column, value);
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_nan_like_cells_are_absent() {
        for raw in ["", "   ", "nan", "NaN", " NAN ", "#N/A", "null", "None", "\u{feff}"] {
            assert_eq!(Value::from_raw(raw), Value::Absent, "{raw:?}");
        }
    }

    #[test]
    fn text_cells_are_trimmed() {
        assert_eq!(Value::from_raw("  P100 "), Value::Text("P100".to_string()));
        assert_eq!(Value::from_raw("\u{feff}装置"), Value::Text("装置".to_string()));
        assert_eq!(Value::from_raw("nano"), Value::Text("nano".to_string()));
    }

    #[test]
    fn attributes_keep_insertion_order_and_overwrite_in_place() {
        let mut attrs = Attributes::new();
        attrs.insert("B", Value::from_raw("1"));
        attrs.insert("A", Value::from_raw(""));
        attrs.insert("C", Value::from_raw("3"));
        attrs.insert("B", Value::from_raw("2"));

        let names: Vec<&str> = attrs.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(attrs.text("B"), Some("2"));
        assert_eq!(attrs.text("A"), None);

        let present: Vec<(&str, &str)> = attrs.present().collect();
        assert_eq!(present, vec![("B", "2"), ("C", "3")]);
    }

    #[test]
    fn without_absent_drops_excluded_columns() {
        let attrs: Attributes = [
            ("parent", Value::from_raw("ROOT")),
            ("child", Value::from_raw("A")),
            ("name", Value::from_raw("Frame")),
            ("note", Value::from_raw("nan")),
        ]
        .into_iter()
        .collect();
        let shown = attrs.without_absent(&["parent", "child"]);
        let present: Vec<(&str, &str)> = shown.present().collect();
        assert_eq!(present, vec![("name", "Frame")]);
        assert_eq!(shown.len(), 1);
    }
}
