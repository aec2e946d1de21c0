use crate::compat::{String, ToString, Vec, format};
use crate::percent::{decode, encode_component};

/// The value side of a parameter entry.
///
/// A key seen once holds `Flag` (bare key, no `=`) or `Single`. A second
/// occurrence promotes the entry to `Multi` with two elements, and further
/// occurrences append; `None` elements record bare-key occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Key present with no value (`?key`)
    Flag,
    /// Key with a single value (`?key=value`)
    Single(String),
    /// Repeated key, one element per occurrence in first-seen order
    Multi(Vec<Option<String>>),
}

impl ParamValue {
    /// The value as a string slice, for `Single` entries.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value.as_str()),
            Self::Flag | Self::Multi(_) => None,
        }
    }

    /// Whether this is a bare key with no value.
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }

    /// A copy with every textual element percent-encoded.
    pub fn encoded(&self) -> Self {
        self.map_text(&|text| encode_component(text))
    }

    /// A copy with every textual element percent-decoded.
    pub fn decoded(&self) -> Self {
        self.map_text(&|text| decode(text).into_owned())
    }

    /// Fold another occurrence of the same key into this value.
    fn push_occurrence(&mut self, value: Option<String>) {
        let current = core::mem::replace(self, Self::Flag);
        *self = match current {
            Self::Flag => Self::Multi(Vec::from([None, value])),
            Self::Single(first) => Self::Multi(Vec::from([Some(first), value])),
            Self::Multi(mut items) => {
                items.push(value);
                Self::Multi(items)
            }
        };
    }

    /// Apply `f` to every textual element, preserving structure.
    fn map_text(&self, f: &impl Fn(&str) -> String) -> Self {
        match self {
            Self::Flag => Self::Flag,
            Self::Single(value) => Self::Single(f(value)),
            Self::Multi(items) => {
                Self::Multi(items.iter().map(|item| item.as_deref().map(f)).collect())
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Option<&str>> for ParamValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Flag, Into::into)
    }
}

impl From<Option<String>> for ParamValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Flag, Self::Single)
    }
}

impl From<Vec<Option<String>>> for ParamValue {
    fn from(items: Vec<Option<String>>) -> Self {
        Self::Multi(items)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(items: Vec<String>) -> Self {
        Self::Multi(items.into_iter().map(Some).collect())
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(items: Vec<&str>) -> Self {
        Self::Multi(items.into_iter().map(|item| Some(item.to_string())).collect())
    }
}

/// An ordered multi-map of URL parameters (path parameters or query).
///
/// Insertion order is preserved and significant: serialization walks the
/// entries in order, and repeated keys group in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: Vec<(String, ParamValue)>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse from a delimited string (e.g. `"a=1&b&a=2"` with `"&"`).
    ///
    /// Empty items are skipped; each item splits at the first `=` (a
    /// missing `=` yields a `Flag`); keys and values are percent-decoded.
    pub fn parse(source: &str, delimiter: &str) -> Self {
        let mut map = Self::new();
        map.parse_into(source, delimiter);
        map
    }

    /// [`parse`](Self::parse) into an existing map, accumulating repeated
    /// keys across both.
    pub(crate) fn parse_into(&mut self, source: &str, delimiter: &str) {
        if source.is_empty() {
            return;
        }
        for item in source.split(delimiter) {
            if item.is_empty() {
                continue;
            }
            match item.split_once('=') {
                Some((key, value)) => self.append(&decode(key), Some(decode(value).into_owned())),
                None => self.append(&decode(item), None),
            }
        }
    }

    /// Number of keys (not occurrences).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a key exists.
    pub fn has(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// The first value for a key, skipping bare occurrences. `None` both
    /// for a missing key and for a key present only bare; use
    /// [`has`](Self::has) to tell them apart.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.get_value(key)? {
            ParamValue::Flag => None,
            ParamValue::Single(value) => Some(value),
            ParamValue::Multi(items) => items.iter().find_map(|item| item.as_deref()),
        }
    }

    /// Every occurrence of a key in order, `None` for bare occurrences.
    /// Empty when the key is missing.
    pub fn get_all(&self, key: &str) -> Vec<Option<&str>> {
        match self.get_value(key) {
            None => Vec::new(),
            Some(ParamValue::Flag) => Vec::from([None]),
            Some(ParamValue::Single(value)) => Vec::from([Some(value.as_str())]),
            Some(ParamValue::Multi(items)) => {
                items.iter().map(|item| item.as_deref()).collect()
            }
        }
    }

    /// The structured value for a key.
    pub fn get_value(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Set a key to a value, replacing any existing value in place;
    /// a new key appends at the end.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Record one occurrence of `key` (`None` = bare key), applying the
    /// repeated-key promotion rule.
    pub fn append(&mut self, key: &str, value: Option<String>) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => existing.push_occurrence(value),
            None => {
                let value = value.map_or(ParamValue::Flag, ParamValue::Single);
                self.entries.push((key.to_string(), value));
            }
        }
    }

    /// Remove a key, returning its value if it was present.
    pub fn delete(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Render to a delimited string, one token per occurrence:
    /// `Flag` as the bare key, `Single` as `key=value`, `Multi` as one
    /// token per element. Entries serialize exactly as stored - apply
    /// [`encoded`](Self::encoded) first if the map holds raw text.
    pub fn serialize(&self, delimiter: &str) -> String {
        let mut tokens: Vec<String> = Vec::new();
        for (key, value) in &self.entries {
            match value {
                ParamValue::Flag => tokens.push(key.clone()),
                ParamValue::Single(v) => tokens.push(format!("{key}={v}")),
                ParamValue::Multi(items) => {
                    for item in items {
                        match item {
                            None => tokens.push(key.clone()),
                            Some(v) => tokens.push(format!("{key}={v}")),
                        }
                    }
                }
            }
        }
        tokens.join(delimiter)
    }

    /// A copy with every key and textual value percent-encoded.
    /// Bare-key occurrences pass through unchanged.
    pub fn encoded(&self) -> Self {
        self.map_text(&|text| encode_component(text))
    }

    /// A copy with every key and textual value percent-decoded.
    /// Decoding twice loses data; apply to wire-form maps only.
    pub fn decoded(&self) -> Self {
        self.map_text(&|text| decode(text).into_owned())
    }

    fn map_text(&self, f: &impl Fn(&str) -> String) -> Self {
        self.entries
            .iter()
            .map(|(key, value)| (f(key), value.map_text(f)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
