//! Keelbank SDK - Client for the Keelbank banking-as-a-service API
//!
//! The SDK wraps the JSON:API wire format in typed request and response
//! objects. Each resource façade method is one stateless HTTP exchange:
//! encode, send, branch on status, decode. There is no retry, caching or
//! pagination logic in this crate: offset/limit pass straight through, and
//! the transport's timeout is the only time bound.
//!
//! # Quick Start
//!
//! ```ignore
//! use keelbank_sdk::{Keelbank, CreateBookPaymentRequest, Relationship, Relationships};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bank = Keelbank::sandbox(std::env::var("KEELBANK_TOKEN")?)?;
//!
//!     let payment = bank
//!         .payments()
//!         .create(CreateBookPaymentRequest::new(
//!             5000,
//!             "rent",
//!             Relationships::new()
//!                 .with("account", Relationship::account("10001"))
//!                 .with("counterpartyAccount", Relationship::account("10002")),
//!         ))
//!         .await?;
//!
//!     println!("created payment {}", payment.id());
//!     Ok(())
//! }
//! ```
//!
//! # Error handling
//!
//! Every method returns `Result<_, Error>`: the server saying no is
//! [`Error::Api`] with the decoded JSON:API problems, and a payload the SDK
//! refuses to decode (unknown `type` discriminant, malformed document) is
//! [`Error::Decode`]. Nothing in this crate panics on server input.

pub use keelbank_types::*;

pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod transport;

pub use client::Keelbank;
pub use config::Config;
pub use error::{Error, Result};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
