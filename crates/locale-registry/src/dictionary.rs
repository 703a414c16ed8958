//! Per-locale message dictionaries.
//!
//! Dictionaries are persistent maps: cloning one is O(1), and a write
//! copies only the path to the written key.

use im::HashMap;
use serde::{Deserialize, Serialize};

/// A stored translation: one string, or plural variants indexed by the
/// locale's plural form index.
///
/// Deserializes from a JSON/TOML string or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    /// A non-pluralized string. An empty string means "not yet translated"
    /// but is still returned as-is.
    Single(String),
    /// Plural variants, ordered by plural form index.
    Plural(Vec<String>),
}

impl Message {
    /// Whether this message has plural variants.
    #[must_use]
    pub fn is_plural(&self) -> bool {
        matches!(self, Self::Plural(_))
    }

    /// Whether any stored text is empty.
    #[must_use]
    pub fn is_untranslated(&self) -> bool {
        match self {
            Self::Single(s) => s.is_empty(),
            Self::Plural(variants) => variants.is_empty() || variants.iter().any(String::is_empty),
        }
    }
}

impl From<&str> for Message {
    fn from(s: &str) -> Self {
        Self::Single(s.to_owned())
    }
}

impl From<String> for Message {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl From<Vec<String>> for Message {
    fn from(variants: Vec<String>) -> Self {
        Self::Plural(variants)
    }
}

/// Message key → message for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    messages: HashMap<String, Message>,
}

/// Key counts from merging one dictionary into another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Keys that were not present before.
    pub added: usize,
    /// Keys whose previous value was replaced.
    pub overwritten: usize,
}

impl Dictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single-string message.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.messages
            .insert(key.into(), Message::Single(value.into()));
    }

    /// Insert plural variants, ordered by plural form index.
    pub fn insert_plural<I, S>(&mut self, key: impl Into<String>, variants: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variants = variants.into_iter().map(Into::into).collect();
        self.messages.insert(key.into(), Message::Plural(variants));
    }

    /// Insert an already-built message.
    pub fn insert_message(&mut self, key: impl Into<String>, message: Message) {
        self.messages.insert(key.into(), message);
    }

    /// Look up a message by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Message> {
        self.messages.get(key)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the dictionary has no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over all keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Iterate over all `(key, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.messages.iter().map(|(k, m)| (k.as_str(), m))
    }

    /// Merge `other` into `self` key by key; values from `other` win.
    pub fn merge(&mut self, other: Dictionary) -> MergeStats {
        let mut stats = MergeStats::default();
        for (key, message) in other.messages {
            match self.messages.insert(key, message) {
                Some(_) => stats.overwritten += 1,
                None => stats.added += 1,
            }
        }
        stats
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: Into<String>,
    V: Into<Message>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
