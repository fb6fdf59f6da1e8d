//! Webhook events resource

use super::{unpack_many, unpack_one, unpack_unit};
use crate::error::Result;
use crate::transport::HttpTransport;
use keelbank_types::{Event, ListEventParams};
use std::sync::Arc;

const RESOURCE: &str = "events";

/// Façade for the `events` resource.
pub struct Events {
    transport: Arc<dyn HttpTransport>,
}

impl Events {
    pub(crate) fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetch an event by id.
    pub async fn get(&self, event_id: &str) -> Result<Event> {
        let response = self
            .transport
            .get(&format!("{}/{}", RESOURCE, event_id), &[])
            .await?;
        unpack_one(response)
    }

    /// List events.
    pub async fn list(&self, params: &ListEventParams) -> Result<Vec<Event>> {
        let response = self.transport.get(RESOURCE, &params.to_query()).await?;
        unpack_many(response)
    }

    /// Request re-delivery of an event's webhook.
    pub async fn fire(&self, event_id: &str) -> Result<()> {
        let response = self
            .transport
            .post(&format!("{}/{}", RESOURCE, event_id), None)
            .await?;
        unpack_unit(response)
    }
}
