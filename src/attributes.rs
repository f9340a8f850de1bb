//! Untyped attribute maps for tags and inclusion frames.
//!
//! Tag and frame attributes are string-to-string maps at the host
//! boundary. Only presence/absence and value carry meaning; no lookup
//! in this crate depends on ordering. Insertion order is still kept so
//! hosts that echo attribute maps back out (help UIs, debug dumps) see
//! them the way the template author wrote them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An insertion-ordered map of string attributes.
///
/// Used both for the parameters recorded on an inclusion [`Frame`] and
/// for the attributes written on a single tag invocation.
///
/// [`Frame`]: crate::context::Frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an attribute value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set an attribute, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Check whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of attributes in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Truthiness of a parameter value, mirroring the host engine's
/// blank/attr-presence semantics.
///
/// A value is truthy when, after trimming, it is non-empty and not the
/// word `false` (case-insensitive). Everything else, including `"0"`
/// and `"no"`, is data rather than a boolean and counts as set.
pub fn is_truthy(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("false")
}
