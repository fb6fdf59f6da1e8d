//! Webhook event types
//!
//! Events use dotted `type` discriminants (`account.frozen`,
//! `payment.returned`, ...). The set here is closed: an event type outside
//! it fails to decode rather than collapsing into a catch-all shape.

use crate::codec::{self, FromJsonApi};
use crate::error::DecodeError;
use crate::payment::PaymentStatus;
use crate::relationship::Relationships;
use crate::Tags;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An `account.closed` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountClosedEvent {
    pub id: String,
    pub attributes: AccountClosedAttributes,
    #[serde(default, skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
}

/// Attributes of an `account.closed` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountClosedAttributes {
    pub created_at: DateTime<Utc>,
    pub close_reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// An `account.frozen` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountFrozenEvent {
    pub id: String,
    pub attributes: AccountFrozenAttributes,
    #[serde(default, skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
}

/// Attributes of an `account.frozen` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountFrozenAttributes {
    pub created_at: DateTime<Utc>,
    pub freeze_reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// A `customer.created` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreatedEvent {
    pub id: String,
    pub attributes: CustomerCreatedAttributes,
    #[serde(default, skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
}

/// Attributes of a `customer.created` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreatedAttributes {
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// A payment lifecycle event (`payment.clearing`, `payment.sent`,
/// `payment.returned`), which all share one attribute shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStatusEvent {
    pub id: String,
    pub attributes: PaymentStatusEventAttributes,
    #[serde(default, skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
}

/// Attributes of a payment lifecycle event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusEventAttributes {
    pub created_at: DateTime<Utc>,
    /// Status the payment held before this transition
    pub previous_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// Any webhook event, dispatched by its dotted `type` discriminant.
#[derive(Debug, Clone)]
pub enum Event {
    AccountClosed(AccountClosedEvent),
    AccountFrozen(AccountFrozenEvent),
    CustomerCreated(CustomerCreatedEvent),
    PaymentClearing(PaymentStatusEvent),
    PaymentSent(PaymentStatusEvent),
    PaymentReturned(PaymentStatusEvent),
}

impl Event {
    /// Id of the underlying event resource.
    pub fn id(&self) -> &str {
        match self {
            Self::AccountClosed(event) => &event.id,
            Self::AccountFrozen(event) => &event.id,
            Self::CustomerCreated(event) => &event.id,
            Self::PaymentClearing(event)
            | Self::PaymentSent(event)
            | Self::PaymentReturned(event) => &event.id,
        }
    }

    /// The dotted `type` discriminant this event decoded from.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::AccountClosed(_) => "account.closed",
            Self::AccountFrozen(_) => "account.frozen",
            Self::CustomerCreated(_) => "customer.created",
            Self::PaymentClearing(_) => "payment.clearing",
            Self::PaymentSent(_) => "payment.sent",
            Self::PaymentReturned(_) => "payment.returned",
        }
    }

    /// Creation time of the event.
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::AccountClosed(event) => event.attributes.created_at,
            Self::AccountFrozen(event) => event.attributes.created_at,
            Self::CustomerCreated(event) => event.attributes.created_at,
            Self::PaymentClearing(event)
            | Self::PaymentSent(event)
            | Self::PaymentReturned(event) => event.attributes.created_at,
        }
    }
}

impl FromJsonApi for Event {
    fn from_json_api(node: &Value) -> Result<Self, DecodeError> {
        match codec::resource_type(node)? {
            "account.closed" => Ok(Self::AccountClosed(codec::from_node(node)?)),
            "account.frozen" => Ok(Self::AccountFrozen(codec::from_node(node)?)),
            "customer.created" => Ok(Self::CustomerCreated(codec::from_node(node)?)),
            "payment.clearing" => Ok(Self::PaymentClearing(codec::from_node(node)?)),
            "payment.sent" => Ok(Self::PaymentSent(codec::from_node(node)?)),
            "payment.returned" => Ok(Self::PaymentReturned(codec::from_node(node)?)),
            other => Err(DecodeError::unknown_type(other)),
        }
    }
}

/// Query parameters for listing events.
#[derive(Debug, Clone)]
pub struct ListEventParams {
    pub limit: u32,
    pub offset: u32,
    pub event_type: Option<Vec<String>>,
    pub since: Option<String>,
    pub until: Option<String>,
}

impl Default for ListEventParams {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
            event_type: None,
            since: None,
            until: None,
        }
    }
}

impl ListEventParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, offset: u32, limit: u32) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }

    pub fn event_type(mut self, event_type: Vec<String>) -> Self {
        self.event_type = Some(event_type);
        self
    }

    pub fn since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    pub fn until(mut self, until: impl Into<String>) -> Self {
        self.until = Some(until.into());
        self
    }

    /// Render as query parameters.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page[limit]".to_string(), self.limit.to_string()),
            ("page[offset]".to_string(), self.offset.to_string()),
        ];
        if let Some(event_type) = &self.event_type {
            for (idx, event_type) in event_type.iter().enumerate() {
                params.push((format!("filter[type][{}]", idx), event_type.clone()));
            }
        }
        if let Some(since) = &self.since {
            params.push(("filter[since]".to_string(), since.clone()));
        }
        if let Some(until) = &self.until {
            params.push(("filter[until]".to_string(), until.clone()));
        }
        params
    }
}
