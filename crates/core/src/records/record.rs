use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Pass-through columns keyed by header, in source column order.
pub type Attributes = IndexMap<String, String>;

/// One person entry of a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: Attributes,
}

impl Record {
    /// Create a record without attributes.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attributes: Attributes::new(),
        }
    }

    /// Replace the attribute map.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Append a single attribute, replacing any previous value for `key`.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up an attribute by column name.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Iterate over the words of the name, split on whitespace and hyphens.
    pub fn name_tokens(&self) -> impl Iterator<Item = &str> {
        self.name
            .split(|ch: char| ch.is_whitespace() || ch == '-')
            .filter(|token| !token.is_empty())
    }
}
