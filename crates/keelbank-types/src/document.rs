//! Request encoding
//!
//! Every mutating call sends a JSON:API document:
//! `{"data": {"type", "attributes", "relationships"}}`. Request types
//! serialize themselves as the `attributes` object; optional attributes are
//! `Option<T>` fields marked `skip_serializing_if`, so an unset optional is
//! absent from the document rather than a `null`-valued key. The two are not
//! equivalent in the wire format.

use crate::relationship::Relationships;
use serde::Serialize;

/// A complete JSON:API request document.
#[derive(Debug, Clone, Serialize)]
pub struct Document<A> {
    /// The primary resource object
    pub data: Resource<A>,
}

/// The resource object inside a request document.
#[derive(Debug, Clone, Serialize)]
pub struct Resource<A> {
    /// Resource type discriminant
    #[serde(rename = "type")]
    pub resource_type: &'static str,
    /// Attribute payload
    pub attributes: A,
    /// Foreign-key pointers, passed through as-is; omitted when empty
    #[serde(skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
}

impl<A: Serialize> Document<A> {
    /// Build a full document with attributes and relationships.
    pub fn new(resource_type: &'static str, attributes: A, relationships: Relationships) -> Self {
        Self {
            data: Resource {
                resource_type,
                attributes,
                relationships,
            },
        }
    }

    /// Build an attributes-only document (patch requests carry no
    /// relationships).
    pub fn attributes_only(resource_type: &'static str, attributes: A) -> Self {
        Self::new(resource_type, attributes, Relationships::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relationship::Relationship;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Attrs {
        amount: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        idempotency_key: Option<String>,
    }

    #[test]
    fn test_document_envelope() {
        let doc = Document::new(
            "bookPayment",
            Attrs {
                amount: 100,
                idempotency_key: None,
            },
            Relationships::new().with("account", Relationship::account("1")),
        );
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["data"]["type"], "bookPayment");
        assert_eq!(value["data"]["attributes"]["amount"], 100);
        assert_eq!(value["data"]["relationships"]["account"]["data"]["id"], "1");
    }

    #[test]
    fn test_unset_optional_is_absent_not_null() {
        let doc = Document::attributes_only(
            "bookPayment",
            Attrs {
                amount: 100,
                idempotency_key: None,
            },
        );
        let value = serde_json::to_value(&doc).unwrap();
        let attributes = value["data"]["attributes"].as_object().unwrap();
        assert!(!attributes.contains_key("idempotencyKey"));
        // empty relationships are dropped from the envelope entirely
        assert!(value["data"].get("relationships").is_none());
    }
}
