//! Response decoding
//!
//! A response's `data` node is either a single resource object or an ordered
//! sequence of them. Each resource family implements [`FromJsonApi`] with an
//! exhaustive match over its known `type` discriminants; the default arm
//! fails with [`DecodeError::UnknownType`]. Sequence decoding is
//! element-wise and stateless, preserving input order.

use crate::error::DecodeError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Types that decode from a JSON:API resource object.
pub trait FromJsonApi: Sized {
    /// Decode a single `{type, id, attributes, relationships}` node.
    fn from_json_api(node: &Value) -> Result<Self, DecodeError>;
}

/// Decode a single resource object.
pub fn decode_one<T: FromJsonApi>(data: &Value) -> Result<T, DecodeError> {
    T::from_json_api(data)
}

/// Decode an ordered sequence of resource objects, preserving order and
/// length.
pub fn decode_many<T: FromJsonApi>(data: &Value) -> Result<Vec<T>, DecodeError> {
    let items = data
        .as_array()
        .ok_or_else(|| DecodeError::malformed("expected an array of resource objects"))?;
    items.iter().map(T::from_json_api).collect()
}

/// The `type` discriminant of a resource object.
pub fn resource_type(node: &Value) -> Result<&str, DecodeError> {
    node.get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| DecodeError::missing_field("type"))
}

/// Deserialize a resource object into a concrete DTO once its discriminant
/// has been matched.
pub(crate) fn from_node<T: DeserializeOwned>(node: &Value) -> Result<T, DecodeError> {
    Ok(serde_json::from_value(node.clone())?)
}
