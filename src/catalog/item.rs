use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Number(i64),
}

/// Passthrough descriptive columns (material, color, ...).
///
/// Never interpreted by the parser or the allocator; carried through to the
/// selection output unmodified. BTreeMap keeps serialization deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    inner: BTreeMap<String, AttributeValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Attributes {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner
            .insert(key.into(), AttributeValue::String(value.into()));
    }

    pub fn insert_number(&mut self, key: impl Into<String>, value: i64) {
        self.inner.insert(key.into(), AttributeValue::Number(value));
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.inner.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.inner.iter()
    }
}

/// One purchasable furniture row.
///
/// Immutable once the owning catalog is built; the allocator never mutates
/// items, it only marks row indices as consumed in its own pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Compared case-insensitively everywhere.
    pub category: String,
    /// Non-negative, in the base currency unit.
    pub price: f64,
    pub attributes: Attributes,
}

impl CatalogItem {
    pub fn new(category: impl Into<String>, price: f64) -> Self {
        CatalogItem {
            category: category.into(),
            price,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(
        category: impl Into<String>,
        price: f64,
        attributes: Attributes,
    ) -> Self {
        CatalogItem {
            category: category.into(),
            price,
            attributes,
        }
    }
}
