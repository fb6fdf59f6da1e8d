//! Counterparties resource

use super::{unpack_many, unpack_one, unpack_unit};
use crate::error::Result;
use crate::transport::HttpTransport;
use keelbank_types::{
    Counterparty, CreateCounterpartyRequest, ListCounterpartyParams, PatchCounterpartyRequest,
};
use std::sync::Arc;

const RESOURCE: &str = "counterparties";

/// Façade for the `counterparties` resource.
pub struct Counterparties {
    transport: Arc<dyn HttpTransport>,
}

impl Counterparties {
    pub(crate) fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Create a counterparty.
    pub async fn create(&self, request: impl Into<CreateCounterpartyRequest>) -> Result<Counterparty> {
        let payload = request.into().to_json_api()?;
        let response = self.transport.post(RESOURCE, Some(payload)).await?;
        unpack_one(response)
    }

    /// Fetch a counterparty by id.
    pub async fn get(&self, counterparty_id: &str) -> Result<Counterparty> {
        let response = self
            .transport
            .get(&format!("{}/{}", RESOURCE, counterparty_id), &[])
            .await?;
        unpack_one(response)
    }

    /// Patch a counterparty.
    pub async fn update(&self, request: &PatchCounterpartyRequest) -> Result<Counterparty> {
        let payload = serde_json::to_value(request.to_json_api())?;
        let response = self
            .transport
            .patch(&format!("{}/{}", RESOURCE, request.counterparty_id), payload)
            .await?;
        unpack_one(response)
    }

    /// Delete a counterparty.
    pub async fn delete(&self, counterparty_id: &str) -> Result<()> {
        let response = self
            .transport
            .delete(&format!("{}/{}", RESOURCE, counterparty_id))
            .await?;
        unpack_unit(response)
    }

    /// List counterparties.
    pub async fn list(&self, params: &ListCounterpartyParams) -> Result<Vec<Counterparty>> {
        let response = self.transport.get(RESOURCE, &params.to_query()).await?;
        unpack_many(response)
    }
}
