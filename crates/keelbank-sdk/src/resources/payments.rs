//! Payments resource

use super::{unpack_many, unpack_one};
use crate::error::Result;
use crate::transport::HttpTransport;
use keelbank_types::{CreatePaymentRequest, ListPaymentParams, PatchPaymentRequest, Payment};
use std::sync::Arc;

const RESOURCE: &str = "payments";

/// Façade for the `payments` resource.
pub struct Payments {
    transport: Arc<dyn HttpTransport>,
}

impl Payments {
    pub(crate) fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Create a payment.
    pub async fn create(&self, request: impl Into<CreatePaymentRequest>) -> Result<Payment> {
        let payload = request.into().to_json_api()?;
        let response = self.transport.post(RESOURCE, Some(payload)).await?;
        unpack_one(response)
    }

    /// Fetch a payment by id.
    pub async fn get(&self, payment_id: &str) -> Result<Payment> {
        let response = self
            .transport
            .get(&format!("{}/{}", RESOURCE, payment_id), &[])
            .await?;
        unpack_one(response)
    }

    /// Patch a payment's tags.
    pub async fn update(&self, request: impl Into<PatchPaymentRequest>) -> Result<Payment> {
        let request = request.into();
        let payload = request.to_json_api()?;
        let response = self
            .transport
            .patch(&format!("{}/{}", RESOURCE, request.payment_id()), payload)
            .await?;
        unpack_one(response)
    }

    /// List payments, newest-first by default on the server side.
    pub async fn list(&self, params: &ListPaymentParams) -> Result<Vec<Payment>> {
        let response = self.transport.get(RESOURCE, &params.to_query()).await?;
        unpack_many(response)
    }
}
