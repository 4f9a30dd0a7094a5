//! HTML attribute model for breadcrumb links.
//!
//! # Responsibility
//! - Keep caller-supplied `key -> value` attribute pairs in insertion order.
//! - Flatten them into the `key="value" ` string templates splice into markup.
//!
//! # Invariants
//! - Iteration order is insertion order; re-inserting a key keeps its slot.
//! - `render_attribute_string` is pure and never escapes keys or values.

use serde::{Deserialize, Serialize};

/// Insertion-ordered HTML attributes attached to one breadcrumb link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlAttributes {
    pairs: Vec<(String, String)>,
}

impl HtmlAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one attribute.
    ///
    /// An existing key is overwritten in place, so its position is preserved.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Builder form of [`HtmlAttributes::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for HtmlAttributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

/// Flattens attributes into `key="value" ` segments in insertion order.
///
/// Every pair is followed by one trailing space, and empty input yields `""`.
/// Values are emitted verbatim. Callers own the trust boundary.
pub fn render_attribute_string(attributes: &HtmlAttributes) -> String {
    let mut rendered = String::new();
    for (key, value) in attributes.iter() {
        rendered.push_str(key);
        rendered.push_str("=\"");
        rendered.push_str(value);
        rendered.push_str("\" ");
    }
    rendered
}
