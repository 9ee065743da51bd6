// src/document.rs
use std::collections::{HashMap, HashSet};

/// A single member value: either a string or a nested [`Document`].
///
/// Keeping the union as a tagged enum means a member is always exactly one
/// of the two kinds; there is no runtime type inspection at lookup time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Object(Document),
}

/// The parsed in-memory representation of one object.
///
/// A `Document` maps unique string keys to [`Value`]s. Insertion order is
/// not significant. Nested documents are owned by their parent entry, so a
/// parsed result is always a tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    members: HashMap<String, Value>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members, of either kind.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the string value for `key`, or `None` if the key is missing
    /// or its value is a nested object.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.members.get(key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Inserts or overwrites `key` with a string value.
    ///
    /// Returns `self` so insertions can be chained.
    pub fn set_string<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.members.insert(key.into(), Value::String(value.into()));
        self
    }

    /// Returns the nested document for `key`, or `None` if the key is
    /// missing or its value is a string.
    pub fn get_object(&self, key: &str) -> Option<&Document> {
        match self.members.get(key) {
            Some(Value::Object(doc)) => Some(doc),
            _ => None,
        }
    }

    /// Inserts or overwrites `key` with a nested document.
    ///
    /// Returns `self` so insertions can be chained.
    pub fn set_object<K>(&mut self, key: K, value: Document) -> &mut Self
    where
        K: Into<String>,
    {
        self.members.insert(key.into(), Value::Object(value));
        self
    }

    /// The set of keys whose value is a string. No ordering guarantee.
    pub fn string_keys(&self) -> HashSet<&str> {
        self.members
            .iter()
            .filter(|(_, v)| matches!(v, Value::String(_)))
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// The set of keys whose value is a nested document. No ordering
    /// guarantee.
    pub fn object_keys(&self) -> HashSet<&str> {
        self.members
            .iter()
            .filter(|(_, v)| matches!(v, Value::Object(_)))
            .map(|(k, _)| k.as_str())
            .collect()
    }
}
