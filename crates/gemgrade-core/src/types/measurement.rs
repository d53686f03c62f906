//! MeasurementMap: the parsed `KEY=VALUE` export of one stone.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Raw source key → raw string value. Keys are unique; order is irrelevant.
///
/// Built once per upload and never mutated afterwards: the only ways in
/// are `From<HashMap>` and `FromIterator`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasurementMap {
    entries: HashMap<String, String>,
}

impl MeasurementMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The value under `key` as a finite number, if it parses as one.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(parse_number)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<HashMap<String, String>> for MeasurementMap {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MeasurementMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse a raw measurement as a finite `f64`.
///
/// Surrounding whitespace is ignored; `NaN` and infinities count as
/// non-numeric. The whole trimmed value must be a number: no numeric
/// prefix is extracted, so values with a unit suffix such as `"60.4 %"`
/// or `"41.2deg"` are non-numeric and their fields are left out.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
