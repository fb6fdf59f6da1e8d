//! Per-resource façades
//!
//! Every façade method is one stateless HTTP exchange: encode the request,
//! send it, branch on the status code. 2xx responses have their `data` node
//! decoded through the codec; anything else decodes the body into
//! [`ApiErrors`](keelbank_types::ApiErrors) and returns the error arm.

mod counterparties;
mod events;
mod payments;
mod received_payments;
mod recurring_payments;

pub use counterparties::Counterparties;
pub use events::Events;
pub use payments::Payments;
pub use received_payments::ReceivedPayments;
pub use recurring_payments::RecurringPayments;

use crate::error::{Error, Result};
use crate::transport::TransportResponse;
use keelbank_types::{codec, ApiErrors, DecodeError, FromJsonApi};
use serde_json::Value;

/// Extract the `data` node of a 2xx response, or turn a failure response
/// into [`Error::Api`].
fn unpack_data(response: TransportResponse) -> Result<Value> {
    if !response.is_success() {
        return Err(Error::Api(ApiErrors::from_json_api(&response.body)));
    }
    response
        .body
        .get("data")
        .cloned()
        .ok_or_else(|| DecodeError::missing_field("data").into())
}

/// Decode a single-resource response.
pub(crate) fn unpack_one<T: FromJsonApi>(response: TransportResponse) -> Result<T> {
    let data = unpack_data(response)?;
    Ok(codec::decode_one(&data)?)
}

/// Decode a list response.
pub(crate) fn unpack_many<T: FromJsonApi>(response: TransportResponse) -> Result<Vec<T>> {
    let data = unpack_data(response)?;
    Ok(codec::decode_many(&data)?)
}

/// Check a response that carries no payload (delete and similar).
pub(crate) fn unpack_unit(response: TransportResponse) -> Result<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(Error::Api(ApiErrors::from_json_api(&response.body)))
    }
}
