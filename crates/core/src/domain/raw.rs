use crate::domain::fields::is_known_field;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Raw ratio values exactly as a transport delivered them.
///
/// Only the seven known ratio keys are kept. Entries stay in the order their key first
/// appeared; a repeated key keeps that position and takes the latest value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFieldMap {
    entries: Vec<(String, String)>,
}

impl RawFieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects known ratio keys from arbitrary request pairs, dropping everything else
    /// (including the language selector).
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Self::new();
        for (key, value) in pairs {
            let key = key.into();
            if is_known_field(&key) {
                map.insert(key, value.into());
            } else {
                tracing::debug!(%key, "ignoring unknown field");
            }
        }
        map
    }

    pub fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RawFieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
