//! Recurring payments resource

use super::{unpack_many, unpack_one};
use crate::error::Result;
use crate::transport::HttpTransport;
use keelbank_types::{CreateRecurringPaymentRequest, ListRecurringPaymentParams, RecurringPayment};
use std::sync::Arc;

const RESOURCE: &str = "recurring-payments";

/// Façade for the `recurring-payments` resource.
pub struct RecurringPayments {
    transport: Arc<dyn HttpTransport>,
}

impl RecurringPayments {
    pub(crate) fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Create a recurring payment.
    pub async fn create(
        &self,
        request: impl Into<CreateRecurringPaymentRequest>,
    ) -> Result<RecurringPayment> {
        let payload = request.into().to_json_api()?;
        let response = self.transport.post(RESOURCE, Some(payload)).await?;
        unpack_one(response)
    }

    /// Fetch a recurring payment by id.
    pub async fn get(&self, payment_id: &str) -> Result<RecurringPayment> {
        let response = self
            .transport
            .get(&format!("{}/{}", RESOURCE, payment_id), &[])
            .await?;
        unpack_one(response)
    }

    /// List recurring payments.
    pub async fn list(&self, params: &ListRecurringPaymentParams) -> Result<Vec<RecurringPayment>> {
        let response = self.transport.get(RESOURCE, &params.to_query()).await?;
        unpack_many(response)
    }

    /// Disable an active recurring payment.
    pub async fn disable(&self, payment_id: &str) -> Result<RecurringPayment> {
        let response = self
            .transport
            .post(&format!("{}/{}/disable", RESOURCE, payment_id), None)
            .await?;
        unpack_one(response)
    }

    /// Re-enable a disabled recurring payment.
    pub async fn enable(&self, payment_id: &str) -> Result<RecurringPayment> {
        let response = self
            .transport
            .post(&format!("{}/{}/enable", RESOURCE, payment_id), None)
            .await?;
        unpack_one(response)
    }
}
