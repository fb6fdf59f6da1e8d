//! Received ACH payment types
//!
//! Received payments are inbound ACH items addressed to an account on the
//! platform. They can be advanced ahead of their completion date, so the
//! lifecycle differs from outbound payments.

use crate::codec::{self, FromJsonApi};
use crate::error::DecodeError;
use crate::relationship::Relationships;
use crate::sort::Sort;
use crate::Tags;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle status of a received payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReceivedPaymentStatus {
    Pending,
    Advanced,
    Completed,
    Returned,
}

impl ReceivedPaymentStatus {
    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Returned)
    }

    /// Wire value, used when rendering filter parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Advanced => "Advanced",
            Self::Completed => "Completed",
            Self::Returned => "Returned",
        }
    }
}

/// An inbound ACH payment resource (`achReceivedPayment`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchReceivedPayment {
    pub id: String,
    pub attributes: AchReceivedPaymentAttributes,
    #[serde(default, skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
}

/// Attributes of an inbound ACH payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchReceivedPaymentAttributes {
    pub created_at: DateTime<Utc>,
    pub status: ReceivedPaymentStatus,
    /// Whether the funds were made available before the completion date
    pub was_advanced: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_reason: Option<String>,
    /// Amount in cents
    pub amount: i64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addenda: Option<String>,
    /// Name of the originating company
    pub company_name: String,
    pub counterparty_routing_number: String,
    /// ACH trace number assigned by the originating bank
    pub trace_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sec_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl FromJsonApi for AchReceivedPayment {
    fn from_json_api(node: &Value) -> Result<Self, DecodeError> {
        match codec::resource_type(node)? {
            "achReceivedPayment" => codec::from_node(node),
            other => Err(DecodeError::unknown_type(other)),
        }
    }
}

/// Query parameters for listing received payments.
#[derive(Debug, Clone)]
pub struct ListReceivedPaymentParams {
    pub limit: u32,
    pub offset: u32,
    pub account_id: Option<String>,
    pub customer_id: Option<String>,
    pub tags: Option<Tags>,
    pub status: Option<Vec<ReceivedPaymentStatus>>,
    pub include_completed: Option<bool>,
    pub sort: Option<Sort>,
    pub include: Option<String>,
}

impl Default for ListReceivedPaymentParams {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
            account_id: None,
            customer_id: None,
            tags: None,
            status: None,
            include_completed: None,
            sort: None,
            include: None,
        }
    }
}

impl ListReceivedPaymentParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, offset: u32, limit: u32) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }

    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn tags(mut self, tags: Tags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn status(mut self, status: Vec<ReceivedPaymentStatus>) -> Self {
        self.status = Some(status);
        self
    }

    pub fn include_completed(mut self, include_completed: bool) -> Self {
        self.include_completed = Some(include_completed);
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    /// Render as query parameters.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page[limit]".to_string(), self.limit.to_string()),
            ("page[offset]".to_string(), self.offset.to_string()),
        ];
        if let Some(customer_id) = &self.customer_id {
            params.push(("filter[customerId]".to_string(), customer_id.clone()));
        }
        if let Some(account_id) = &self.account_id {
            params.push(("filter[accountId]".to_string(), account_id.clone()));
        }
        if let Some(tags) = &self.tags {
            if let Ok(tags) = serde_json::to_string(tags) {
                params.push(("filter[tags]".to_string(), tags));
            }
        }
        if let Some(include_completed) = self.include_completed {
            params.push(("filter[includeCompleted]".to_string(), include_completed.to_string()));
        }
        if let Some(status) = &self.status {
            for (idx, status) in status.iter().enumerate() {
                params.push((format!("filter[status][{}]", idx), status.as_str().to_string()));
            }
        }
        if let Some(sort) = self.sort {
            params.push(("sort".to_string(), sort.as_str().to_string()));
        }
        if let Some(include) = &self.include {
            params.push(("include".to_string(), include.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_one;
    use serde_json::json;

    fn received_payment_node() -> Value {
        json!({
            "type": "achReceivedPayment",
            "id": "555",
            "attributes": {
                "createdAt": "2023-03-14T09:00:00Z",
                "status": "Pending",
                "wasAdvanced": false,
                "completionDate": "2023-03-16",
                "amount": 2500,
                "description": "payroll",
                "companyName": "Acme Payroll Co",
                "counterpartyRoutingNumber": "011000138",
                "traceNumber": "021000021234567",
                "secCode": "PPD"
            },
            "relationships": {
                "account": {"data": {"type": "depositAccount", "id": "10001"}}
            }
        })
    }

    #[test]
    fn test_decode_received_payment() {
        let payment: AchReceivedPayment = decode_one(&received_payment_node()).unwrap();
        assert_eq!(payment.id, "555");
        assert_eq!(payment.attributes.status, ReceivedPaymentStatus::Pending);
        assert!(!payment.attributes.was_advanced);
        assert_eq!(
            payment.attributes.completion_date,
            Some(NaiveDate::from_ymd_opt(2023, 3, 16).unwrap())
        );
        assert_eq!(payment.attributes.company_name, "Acme Payroll Co");
        assert_eq!(payment.attributes.sec_code.as_deref(), Some("PPD"));
    }

    #[test]
    fn test_decode_tolerates_missing_optional_dates() {
        let mut node = received_payment_node();
        node["attributes"]
            .as_object_mut()
            .unwrap()
            .remove("completionDate");
        let payment: AchReceivedPayment = decode_one(&node).unwrap();
        assert!(payment.attributes.completion_date.is_none());
    }

    #[test]
    fn test_decode_rejects_unknown_type() {
        let err = decode_one::<AchReceivedPayment>(&json!({"type": "wireReceivedPayment", "id": "1"})).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownType { .. }));
    }

    #[test]
    fn test_list_params_include_completed() {
        let params = ListReceivedPaymentParams::new()
            .account_id("10001")
            .include_completed(true)
            .status(vec![ReceivedPaymentStatus::Pending, ReceivedPaymentStatus::Advanced]);
        let query = params.to_query();
        assert!(query.contains(&("filter[includeCompleted]".to_string(), "true".to_string())));
        assert!(query.contains(&("filter[status][1]".to_string(), "Advanced".to_string())));
    }
}
