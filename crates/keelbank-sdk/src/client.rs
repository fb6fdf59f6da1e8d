//! Main client
//!
//! [`Keelbank`] is the entry point for all SDK operations. It owns the
//! transport behind an `Arc`, so it is cheap to clone and safe to share
//! across tasks: nothing is mutated after construction.

use crate::config::Config;
use crate::error::Result;
use crate::resources::{Counterparties, Events, Payments, ReceivedPayments, RecurringPayments};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

/// Client for the Keelbank API.
#[derive(Clone)]
pub struct Keelbank {
    transport: Arc<dyn HttpTransport>,
}

impl Keelbank {
    /// Connect to an arbitrary environment.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(base_url, token))
    }

    /// Connect to the sandbox environment.
    pub fn sandbox(token: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::sandbox(token))
    }

    /// Create with custom configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(ReqwestTransport::new(&config)?),
        })
    }

    /// Create over an injected transport.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Payments resource.
    pub fn payments(&self) -> Payments {
        Payments::new(Arc::clone(&self.transport))
    }

    /// Received (inbound ACH) payments resource.
    pub fn received_payments(&self) -> ReceivedPayments {
        ReceivedPayments::new(Arc::clone(&self.transport))
    }

    /// Recurring payments resource.
    pub fn recurring_payments(&self) -> RecurringPayments {
        RecurringPayments::new(Arc::clone(&self.transport))
    }

    /// Counterparties resource.
    pub fn counterparties(&self) -> Counterparties {
        Counterparties::new(Arc::clone(&self.transport))
    }

    /// Webhook events resource.
    pub fn events(&self) -> Events {
        Events::new(Arc::clone(&self.transport))
    }
}
