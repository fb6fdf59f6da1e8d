//! Received payments resource

use super::{unpack_many, unpack_one};
use crate::error::Result;
use crate::transport::HttpTransport;
use keelbank_types::{AchReceivedPayment, ListReceivedPaymentParams};
use std::sync::Arc;

const RESOURCE: &str = "received-payments";

/// Façade for the `received-payments` resource.
pub struct ReceivedPayments {
    transport: Arc<dyn HttpTransport>,
}

impl ReceivedPayments {
    pub(crate) fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetch a received payment by id.
    pub async fn get(&self, payment_id: &str) -> Result<AchReceivedPayment> {
        let response = self
            .transport
            .get(&format!("{}/{}", RESOURCE, payment_id), &[])
            .await?;
        unpack_one(response)
    }

    /// List received payments.
    pub async fn list(&self, params: &ListReceivedPaymentParams) -> Result<Vec<AchReceivedPayment>> {
        let response = self.transport.get(RESOURCE, &params.to_query()).await?;
        unpack_many(response)
    }

    /// Advance a pending received payment ahead of its completion date.
    pub async fn advance(&self, payment_id: &str) -> Result<AchReceivedPayment> {
        let response = self
            .transport
            .post(&format!("{}/{}/advance", RESOURCE, payment_id), None)
            .await?;
        unpack_one(response)
    }
}
