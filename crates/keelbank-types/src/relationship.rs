//! Relationship types
//!
//! JSON:API relationships are foreign-key pointers to other resources. On
//! the wire each one is `{"data": {"type": ..., "id": ...}}`, and a resource
//! carries a named map of them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A `{type, id}` pair identifying another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// Resource type discriminant
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Resource id
    pub id: String,
}

/// A single named relationship, wrapping its resource identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// The pointed-to resource
    pub data: ResourceIdentifier,
}

impl Relationship {
    /// Create a relationship to a resource of the given type.
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            data: ResourceIdentifier {
                resource_type: resource_type.into(),
                id: id.into(),
            },
        }
    }

    /// Relationship to a deposit account.
    pub fn account(id: impl Into<String>) -> Self {
        Self::new("depositAccount", id)
    }

    /// Relationship to a customer.
    pub fn customer(id: impl Into<String>) -> Self {
        Self::new("customer", id)
    }

    /// Relationship to a counterparty.
    pub fn counterparty(id: impl Into<String>) -> Self {
        Self::new("counterparty", id)
    }

    /// Id of the pointed-to resource.
    pub fn id(&self) -> &str {
        &self.data.id
    }

    /// Type of the pointed-to resource.
    pub fn resource_type(&self) -> &str {
        &self.data.resource_type
    }
}

/// Named map of relationships carried by a resource.
///
/// Backed by a `BTreeMap` so serialized documents are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Relationships(BTreeMap<String, Relationship>);

impl Relationships {
    /// Empty relationship map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a relationship under the given name, consuming and returning
    /// self so maps can be built fluently.
    pub fn with(mut self, name: impl Into<String>, relationship: Relationship) -> Self {
        self.0.insert(name.into(), relationship);
        self
    }

    /// Insert a relationship under the given name.
    pub fn insert(&mut self, name: impl Into<String>, relationship: Relationship) {
        self.0.insert(name.into(), relationship);
    }

    /// Look up a relationship by name.
    pub fn get(&self, name: &str) -> Option<&Relationship> {
        self.0.get(name)
    }

    /// Whether the map holds no relationships.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of relationships in the map.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(name, relationship)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Relationship)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Relationship)> for Relationships {
    fn from_iter<I: IntoIterator<Item = (String, Relationship)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
