//! Recurring payment types
//!
//! Recurring payments generate a credit payment on a schedule. Two variants
//! exist, keyed by their `type` discriminant: `recurringCreditAchPayment`
//! and `recurringCreditBookPayment`. The schedule is a nested structured
//! attribute with its own sub-decoder.

use crate::codec::{self, FromJsonApi};
use crate::document::Document;
use crate::error::DecodeError;
use crate::relationship::Relationships;
use crate::sort::Sort;
use crate::Tags;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle status of a recurring payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecurringStatus {
    Active,
    Completed,
    Disabled,
}

impl RecurringStatus {
    /// Wire value, used when rendering filter parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Disabled => "Disabled",
        }
    }
}

/// Cadence of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    Weekly,
    Monthly,
}

/// Schedule attached to a recurring payment, as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub start_time: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,
    pub interval: Interval,
    pub next_scheduled_action: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_number_of_payments: Option<u32>,
}

/// Schedule submitted when creating a recurring payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchedule {
    pub interval: Interval,
    pub day_of_month: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_number_of_payments: Option<u32>,
}

impl CreateSchedule {
    pub fn new(interval: Interval, day_of_month: u32) -> Self {
        Self {
            interval,
            day_of_month,
            start_time: None,
            end_time: None,
            total_number_of_payments: None,
        }
    }

    pub fn start_time(mut self, start_time: NaiveDate) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn end_time(mut self, end_time: NaiveDate) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn total_number_of_payments(mut self, total: u32) -> Self {
        self.total_number_of_payments = Some(total);
        self
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// A recurring credit ACH payment resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringCreditAchPayment {
    pub id: String,
    pub attributes: RecurringPaymentAttributes,
    #[serde(default, skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
}

/// A recurring credit book payment resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringCreditBookPayment {
    pub id: String,
    pub attributes: RecurringPaymentAttributes,
    #[serde(default, skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
}

/// Attributes shared by both recurring payment variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringPaymentAttributes {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Amount in cents
    pub amount: i64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addenda: Option<String>,
    pub status: RecurringStatus,
    /// Number of payments generated so far
    pub number_of_payments: u32,
    pub schedule: Schedule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// Any recurring payment resource, dispatched by its `type` discriminant.
#[derive(Debug, Clone)]
pub enum RecurringPayment {
    CreditAch(RecurringCreditAchPayment),
    CreditBook(RecurringCreditBookPayment),
}

impl RecurringPayment {
    /// Id of the underlying resource.
    pub fn id(&self) -> &str {
        match self {
            Self::CreditAch(payment) => &payment.id,
            Self::CreditBook(payment) => &payment.id,
        }
    }

    /// Attributes, which share one shape across variants.
    pub fn attributes(&self) -> &RecurringPaymentAttributes {
        match self {
            Self::CreditAch(payment) => &payment.attributes,
            Self::CreditBook(payment) => &payment.attributes,
        }
    }
}

impl FromJsonApi for RecurringPayment {
    fn from_json_api(node: &Value) -> Result<Self, DecodeError> {
        match codec::resource_type(node)? {
            "recurringCreditAchPayment" => Ok(Self::CreditAch(codec::from_node(node)?)),
            "recurringCreditBookPayment" => Ok(Self::CreditBook(codec::from_node(node)?)),
            other => Err(DecodeError::unknown_type(other)),
        }
    }
}

// ============================================================================
// Create requests
// ============================================================================

/// Request to create a recurring credit ACH payment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecurringCreditAchPaymentRequest {
    pub amount: i64,
    pub description: String,
    pub schedule: CreateSchedule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addenda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(skip)]
    pub relationships: Relationships,
}

impl CreateRecurringCreditAchPaymentRequest {
    pub fn new(
        amount: i64,
        description: impl Into<String>,
        schedule: CreateSchedule,
        relationships: Relationships,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            schedule,
            addenda: None,
            idempotency_key: None,
            tags: None,
            relationships,
        }
    }

    pub fn addenda(mut self, addenda: impl Into<String>) -> Self {
        self.addenda = Some(addenda.into());
        self
    }

    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    pub fn tags(mut self, tags: Tags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn to_json_api(&self) -> Document<&Self> {
        Document::new("recurringCreditAchPayment", self, self.relationships.clone())
    }
}

/// Request to create a recurring credit book payment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecurringCreditBookPaymentRequest {
    pub amount: i64,
    pub description: String,
    pub schedule: CreateSchedule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_summary_override: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(skip)]
    pub relationships: Relationships,
}

impl CreateRecurringCreditBookPaymentRequest {
    pub fn new(
        amount: i64,
        description: impl Into<String>,
        schedule: CreateSchedule,
        relationships: Relationships,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            schedule,
            transaction_summary_override: None,
            idempotency_key: None,
            tags: None,
            relationships,
        }
    }

    pub fn transaction_summary_override(mut self, summary: impl Into<String>) -> Self {
        self.transaction_summary_override = Some(summary.into());
        self
    }

    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    pub fn tags(mut self, tags: Tags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn to_json_api(&self) -> Document<&Self> {
        Document::new("recurringCreditBookPayment", self, self.relationships.clone())
    }
}

/// Either way of creating a recurring payment.
#[derive(Debug, Clone)]
pub enum CreateRecurringPaymentRequest {
    CreditAch(CreateRecurringCreditAchPaymentRequest),
    CreditBook(CreateRecurringCreditBookPaymentRequest),
}

impl CreateRecurringPaymentRequest {
    pub fn to_json_api(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::CreditAch(request) => serde_json::to_value(request.to_json_api()),
            Self::CreditBook(request) => serde_json::to_value(request.to_json_api()),
        }
    }
}

impl From<CreateRecurringCreditAchPaymentRequest> for CreateRecurringPaymentRequest {
    fn from(request: CreateRecurringCreditAchPaymentRequest) -> Self {
        Self::CreditAch(request)
    }
}

impl From<CreateRecurringCreditBookPaymentRequest> for CreateRecurringPaymentRequest {
    fn from(request: CreateRecurringCreditBookPaymentRequest) -> Self {
        Self::CreditBook(request)
    }
}

// ============================================================================
// List parameters
// ============================================================================

/// Query parameters for listing recurring payments.
#[derive(Debug, Clone)]
pub struct ListRecurringPaymentParams {
    pub limit: u32,
    pub offset: u32,
    pub account_id: Option<String>,
    pub customer_id: Option<String>,
    pub tags: Option<Tags>,
    pub status: Option<Vec<RecurringStatus>>,
    pub payment_type: Option<Vec<String>>,
    pub from_start_time: Option<String>,
    pub to_start_time: Option<String>,
    pub from_end_time: Option<String>,
    pub to_end_time: Option<String>,
    pub sort: Option<Sort>,
}

impl Default for ListRecurringPaymentParams {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
            account_id: None,
            customer_id: None,
            tags: None,
            status: None,
            payment_type: None,
            from_start_time: None,
            to_start_time: None,
            from_end_time: None,
            to_end_time: None,
            sort: None,
        }
    }
}

impl ListRecurringPaymentParams {
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

    pub fn status(mut self, status: Vec<RecurringStatus>) -> Self {
        self.status = Some(status);
        self
    }

    pub fn payment_type(mut self, payment_type: Vec<String>) -> Self {
        self.payment_type = Some(payment_type);
        self
    }

    pub fn from_start_time(mut self, from_start_time: impl Into<String>) -> Self {
        self.from_start_time = Some(from_start_time.into());
        self
    }

    pub fn to_start_time(mut self, to_start_time: impl Into<String>) -> Self {
        self.to_start_time = Some(to_start_time.into());
        self
    }

    pub fn from_end_time(mut self, from_end_time: impl Into<String>) -> Self {
        self.from_end_time = Some(from_end_time.into());
        self
    }

    pub fn to_end_time(mut self, to_end_time: impl Into<String>) -> Self {
        self.to_end_time = Some(to_end_time.into());
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
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
        if let Some(status) = &self.status {
            for (idx, status) in status.iter().enumerate() {
                params.push((format!("filter[status][{}]", idx), status.as_str().to_string()));
            }
        }
        if let Some(payment_type) = &self.payment_type {
            for (idx, payment_type) in payment_type.iter().enumerate() {
                params.push((format!("filter[type][{}]", idx), payment_type.clone()));
            }
        }
        if let Some(from_start_time) = &self.from_start_time {
            params.push(("filter[fromStartTime]".to_string(), from_start_time.clone()));
        }
        if let Some(to_start_time) = &self.to_start_time {
            params.push(("filter[toStartTime]".to_string(), to_start_time.clone()));
        }
        if let Some(from_end_time) = &self.from_end_time {
            params.push(("filter[fromEndTime]".to_string(), from_end_time.clone()));
        }
        if let Some(to_end_time) = &self.to_end_time {
            params.push(("filter[toEndTime]".to_string(), to_end_time.clone()));
        }
        if let Some(sort) = self.sort {
            params.push(("sort".to_string(), sort.as_str().to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_one;
    use crate::relationship::Relationship;
    use serde_json::json;

    fn recurring_node(resource_type: &str) -> Value {
        json!({
            "type": resource_type,
            "id": "300",
            "attributes": {
                "createdAt": "2023-04-01T08:00:00Z",
                "updatedAt": "2023-05-01T08:00:00Z",
                "amount": 10000,
                "description": "salary",
                "status": "Active",
                "numberOfPayments": 2,
                "schedule": {
                    "startTime": "2023-04-01",
                    "interval": "Monthly",
                    "dayOfMonth": 1,
                    "nextScheduledAction": "2023-06-01"
                }
            }
        })
    }

    #[test]
    fn test_decode_both_variants() {
        let ach: RecurringPayment = decode_one(&recurring_node("recurringCreditAchPayment")).unwrap();
        assert!(matches!(ach, RecurringPayment::CreditAch(_)));
        let book: RecurringPayment = decode_one(&recurring_node("recurringCreditBookPayment")).unwrap();
        assert!(matches!(book, RecurringPayment::CreditBook(_)));
        assert_eq!(book.attributes().schedule.interval, Interval::Monthly);
        assert_eq!(
            book.attributes().schedule.next_scheduled_action,
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
        );
        assert!(book.attributes().schedule.end_time.is_none());
    }

    #[test]
    fn test_decode_unknown_recurring_type() {
        let err = decode_one::<RecurringPayment>(&recurring_node("recurringDebitAchPayment")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown resource type `recurringDebitAchPayment`"
        );
    }

    #[test]
    fn test_schedule_roundtrip_is_lossless() {
        let node = json!({
            "startTime": "2023-04-01",
            "endTime": "2024-04-01",
            "dayOfMonth": 15,
            "interval": "Monthly",
            "nextScheduledAction": "2023-06-15",
            "totalNumberOfPayments": 12
        });
        let schedule: Schedule = serde_json::from_value(node.clone()).unwrap();
        assert_eq!(serde_json::to_value(&schedule).unwrap(), node);
    }

    #[test]
    fn test_create_schedule_omits_unset_optionals() {
        let schedule = CreateSchedule::new(Interval::Monthly, 28);
        let value = serde_json::to_value(&schedule).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&"interval"));
        assert!(keys.contains(&"dayOfMonth"));
    }

    #[test]
    fn test_create_request_nests_schedule() {
        let request = CreateRecurringCreditAchPaymentRequest::new(
            10000,
            "salary",
            CreateSchedule::new(Interval::Monthly, 1).total_number_of_payments(12),
            Relationships::new()
                .with("account", Relationship::account("10001"))
                .with("counterparty", Relationship::counterparty("9")),
        )
        .addenda("monthly salary");
        let value = serde_json::to_value(request.to_json_api()).unwrap();
        assert_eq!(value["data"]["type"], "recurringCreditAchPayment");
        let attributes = &value["data"]["attributes"];
        assert_eq!(attributes["schedule"]["dayOfMonth"], 1);
        assert_eq!(attributes["schedule"]["totalNumberOfPayments"], 12);
        assert_eq!(attributes["addenda"], "monthly salary");
        assert!(attributes["schedule"].get("startTime").is_none());
        assert_eq!(
            value["data"]["relationships"]["counterparty"]["data"]["id"],
            "9"
        );
    }
}
