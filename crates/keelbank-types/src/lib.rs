//! Keelbank Types - Wire types and JSON:API codec for the Keelbank API
//!
//! This crate contains everything the SDK needs to talk JSON:API with zero
//! dependencies on other keelbank crates:
//!
//! - Request types that serialize into `{"data": {"type", "attributes",
//!   "relationships"}}` documents, omitting unset optional attributes
//! - Response DTOs, one closed variant set per resource family, decoded by
//!   their `type` discriminant
//! - Relationship types (foreign-key pointers to other resources)
//! - List-query parameter types (`page[limit]`, `page[offset]`,
//!   `filter[...]`)
//! - Wire-level error values (JSON:API `errors` arrays, decode failures)
//!
//! # Decode policy
//!
//! Decoding is total over the known `type` discriminant set. An unrecognized
//! discriminant always fails with [`DecodeError::UnknownType`] naming the
//! offending tag; nothing is silently dropped or returned half-built.

pub mod codec;
pub mod counterparty;
pub mod document;
pub mod error;
pub mod event;
pub mod payment;
pub mod received_payment;
pub mod recurring_payment;
pub mod relationship;
pub mod sort;

pub use codec::*;
pub use counterparty::*;
pub use document::*;
pub use error::*;
pub use event::*;
pub use payment::*;
pub use received_payment::*;
pub use recurring_payment::*;
pub use relationship::*;
pub use sort::*;

use std::collections::HashMap;

/// Free-form key/value tags attached to most resources.
pub type Tags = HashMap<String, String>;
