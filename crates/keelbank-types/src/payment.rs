//! Payment types
//!
//! Payments are a closed variant set keyed by their `type` discriminant:
//! `achPayment`, `bookPayment`, `wirePayment`, `billPayment`. Each variant
//! has a distinct attribute shape. Create requests come in several forms
//! depending on how the counterparty is identified (inline routing details,
//! a stored counterparty relationship, or a Plaid processor token).

use crate::codec::{self, FromJsonApi};
use crate::counterparty::{AchCounterparty, WireCounterparty};
use crate::document::Document;
use crate::error::DecodeError;
use crate::relationship::Relationships;
use crate::sort::Sort;
use crate::Tags;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Settlement direction of a payment, seen from the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Credit,
    Debit,
}

impl Direction {
    /// Wire value, used when rendering filter parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "Credit",
            Self::Debit => "Debit",
        }
    }
}

/// Lifecycle status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Rejected,
    Clearing,
    Sent,
    Canceled,
    Returned,
}

impl PaymentStatus {
    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Sent | Self::Canceled | Self::Returned)
    }

    /// Check if the payment is still moving through the rails.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Pending | Self::Clearing)
    }

    /// Wire value, used when rendering filter parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
            Self::Clearing => "Clearing",
            Self::Sent => "Sent",
            Self::Canceled => "Canceled",
            Self::Returned => "Returned",
        }
    }
}

/// Payment type discriminants accepted by the `filter[type]` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentType {
    AchPayment,
    BookPayment,
    WirePayment,
    BillPayment,
}

impl PaymentType {
    /// Wire value of the discriminant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AchPayment => "AchPayment",
            Self::BookPayment => "BookPayment",
            Self::WirePayment => "WirePayment",
            Self::BillPayment => "BillPayment",
        }
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// An ACH payment resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchPayment {
    pub id: String,
    pub attributes: AchPaymentAttributes,
    #[serde(default, skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
}

/// Attributes of an ACH payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchPaymentAttributes {
    pub created_at: DateTime<Utc>,
    pub status: PaymentStatus,
    /// The external account the payment settles against
    pub counterparty: AchCounterparty,
    pub direction: Direction,
    pub description: String,
    /// Amount in cents
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addenda: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// A book payment resource (instant transfer between two accounts on the
/// platform).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookPayment {
    pub id: String,
    pub attributes: BookPaymentAttributes,
    #[serde(default, skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
}

/// Attributes of a book payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPaymentAttributes {
    pub created_at: DateTime<Utc>,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    pub description: String,
    /// Amount in cents
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// A wire payment resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WirePayment {
    pub id: String,
    pub attributes: WirePaymentAttributes,
    #[serde(default, skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
}

/// Attributes of a wire payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePaymentAttributes {
    pub created_at: DateTime<Utc>,
    pub status: PaymentStatus,
    pub counterparty: WireCounterparty,
    pub direction: Direction,
    pub description: String,
    /// Amount in cents
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// A bill payment resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillPayment {
    pub id: String,
    pub attributes: BillPaymentAttributes,
    #[serde(default, skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
}

/// Attributes of a bill payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPaymentAttributes {
    pub created_at: DateTime<Utc>,
    pub status: PaymentStatus,
    pub direction: Direction,
    pub description: String,
    /// Amount in cents
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// Any payment resource, dispatched by its `type` discriminant.
#[derive(Debug, Clone)]
pub enum Payment {
    Ach(AchPayment),
    Book(BookPayment),
    Wire(WirePayment),
    Bill(BillPayment),
}

impl Payment {
    /// Id of the underlying resource.
    pub fn id(&self) -> &str {
        match self {
            Self::Ach(payment) => &payment.id,
            Self::Book(payment) => &payment.id,
            Self::Wire(payment) => &payment.id,
            Self::Bill(payment) => &payment.id,
        }
    }

    /// Amount in cents.
    pub fn amount(&self) -> i64 {
        match self {
            Self::Ach(payment) => payment.attributes.amount,
            Self::Book(payment) => payment.attributes.amount,
            Self::Wire(payment) => payment.attributes.amount,
            Self::Bill(payment) => payment.attributes.amount,
        }
    }

    /// Lifecycle status.
    pub fn status(&self) -> PaymentStatus {
        match self {
            Self::Ach(payment) => payment.attributes.status,
            Self::Book(payment) => payment.attributes.status,
            Self::Wire(payment) => payment.attributes.status,
            Self::Bill(payment) => payment.attributes.status,
        }
    }

    /// Creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Ach(payment) => payment.attributes.created_at,
            Self::Book(payment) => payment.attributes.created_at,
            Self::Wire(payment) => payment.attributes.created_at,
            Self::Bill(payment) => payment.attributes.created_at,
        }
    }
}

impl FromJsonApi for Payment {
    fn from_json_api(node: &Value) -> Result<Self, DecodeError> {
        match codec::resource_type(node)? {
            "achPayment" => Ok(Self::Ach(codec::from_node(node)?)),
            "bookPayment" => Ok(Self::Book(codec::from_node(node)?)),
            "wirePayment" => Ok(Self::Wire(codec::from_node(node)?)),
            "billPayment" => Ok(Self::Bill(codec::from_node(node)?)),
            other => Err(DecodeError::unknown_type(other)),
        }
    }
}

// ============================================================================
// Create requests
// ============================================================================

/// ACH payment with the counterparty's routing details given inline.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInlinePaymentRequest {
    pub amount: i64,
    pub direction: Direction,
    pub description: String,
    pub counterparty: AchCounterparty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addenda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(skip)]
    pub relationships: Relationships,
}

impl CreateInlinePaymentRequest {
    pub fn new(
        amount: i64,
        description: impl Into<String>,
        counterparty: AchCounterparty,
        relationships: Relationships,
    ) -> Self {
        Self {
            amount,
            direction: Direction::Credit,
            description: description.into(),
            counterparty,
            addenda: None,
            idempotency_key: None,
            tags: None,
            relationships,
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
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
        Document::new("achPayment", self, self.relationships.clone())
    }
}

/// ACH payment against a stored counterparty, referenced through the
/// `counterparty` relationship.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkedPaymentRequest {
    pub amount: i64,
    pub direction: Direction,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addenda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_counterparty_balance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(skip)]
    pub relationships: Relationships,
}

impl CreateLinkedPaymentRequest {
    pub fn new(amount: i64, description: impl Into<String>, relationships: Relationships) -> Self {
        Self {
            amount,
            direction: Direction::Credit,
            description: description.into(),
            addenda: None,
            verify_counterparty_balance: None,
            idempotency_key: None,
            tags: None,
            relationships,
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn addenda(mut self, addenda: impl Into<String>) -> Self {
        self.addenda = Some(addenda.into());
        self
    }

    pub fn verify_counterparty_balance(mut self, verify: bool) -> Self {
        self.verify_counterparty_balance = Some(verify);
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
        Document::new("achPayment", self, self.relationships.clone())
    }
}

/// ACH payment against an account identified by a Plaid processor token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVerifiedPaymentRequest {
    pub amount: i64,
    pub direction: Direction,
    pub description: String,
    pub plaid_processor_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_counterparty_balance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(skip)]
    pub relationships: Relationships,
}

impl CreateVerifiedPaymentRequest {
    pub fn new(
        amount: i64,
        description: impl Into<String>,
        plaid_processor_token: impl Into<String>,
        relationships: Relationships,
    ) -> Self {
        Self {
            amount,
            direction: Direction::Credit,
            description: description.into(),
            plaid_processor_token: plaid_processor_token.into(),
            counterparty_name: None,
            verify_counterparty_balance: None,
            idempotency_key: None,
            tags: None,
            relationships,
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn counterparty_name(mut self, name: impl Into<String>) -> Self {
        self.counterparty_name = Some(name.into());
        self
    }

    pub fn verify_counterparty_balance(mut self, verify: bool) -> Self {
        self.verify_counterparty_balance = Some(verify);
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
        Document::new("achPayment", self, self.relationships.clone())
    }
}

/// Book payment between two accounts on the platform.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookPaymentRequest {
    pub amount: i64,
    pub direction: Direction,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(skip)]
    pub relationships: Relationships,
}

impl CreateBookPaymentRequest {
    pub fn new(amount: i64, description: impl Into<String>, relationships: Relationships) -> Self {
        Self {
            amount,
            direction: Direction::Credit,
            description: description.into(),
            idempotency_key: None,
            tags: None,
            relationships,
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
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
        Document::new("bookPayment", self, self.relationships.clone())
    }
}

/// Wire payment with the beneficiary given inline.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWirePaymentRequest {
    pub amount: i64,
    pub direction: Direction,
    pub description: String,
    pub counterparty: WireCounterparty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(skip)]
    pub relationships: Relationships,
}

impl CreateWirePaymentRequest {
    pub fn new(
        amount: i64,
        description: impl Into<String>,
        counterparty: WireCounterparty,
        relationships: Relationships,
    ) -> Self {
        Self {
            amount,
            direction: Direction::Credit,
            description: description.into(),
            counterparty,
            idempotency_key: None,
            tags: None,
            relationships,
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
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
        Document::new("wirePayment", self, self.relationships.clone())
    }
}

/// Any way of creating a payment.
#[derive(Debug, Clone)]
pub enum CreatePaymentRequest {
    Inline(CreateInlinePaymentRequest),
    Linked(CreateLinkedPaymentRequest),
    Verified(CreateVerifiedPaymentRequest),
    Book(CreateBookPaymentRequest),
    Wire(CreateWirePaymentRequest),
}

impl CreatePaymentRequest {
    pub fn to_json_api(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Inline(request) => serde_json::to_value(request.to_json_api()),
            Self::Linked(request) => serde_json::to_value(request.to_json_api()),
            Self::Verified(request) => serde_json::to_value(request.to_json_api()),
            Self::Book(request) => serde_json::to_value(request.to_json_api()),
            Self::Wire(request) => serde_json::to_value(request.to_json_api()),
        }
    }
}

impl From<CreateInlinePaymentRequest> for CreatePaymentRequest {
    fn from(request: CreateInlinePaymentRequest) -> Self {
        Self::Inline(request)
    }
}

impl From<CreateLinkedPaymentRequest> for CreatePaymentRequest {
    fn from(request: CreateLinkedPaymentRequest) -> Self {
        Self::Linked(request)
    }
}

impl From<CreateVerifiedPaymentRequest> for CreatePaymentRequest {
    fn from(request: CreateVerifiedPaymentRequest) -> Self {
        Self::Verified(request)
    }
}

impl From<CreateBookPaymentRequest> for CreatePaymentRequest {
    fn from(request: CreateBookPaymentRequest) -> Self {
        Self::Book(request)
    }
}

impl From<CreateWirePaymentRequest> for CreatePaymentRequest {
    fn from(request: CreateWirePaymentRequest) -> Self {
        Self::Wire(request)
    }
}

// ============================================================================
// Patch requests
// ============================================================================

/// Attributes-only patch replacing an ACH payment's tags.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchAchPaymentRequest {
    #[serde(skip)]
    pub payment_id: String,
    pub tags: Tags,
}

impl PatchAchPaymentRequest {
    pub fn new(payment_id: impl Into<String>, tags: Tags) -> Self {
        Self {
            payment_id: payment_id.into(),
            tags,
        }
    }

    pub fn to_json_api(&self) -> Document<&Self> {
        Document::attributes_only("achPayment", self)
    }
}

/// Attributes-only patch replacing a book payment's tags.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchBookPaymentRequest {
    #[serde(skip)]
    pub payment_id: String,
    pub tags: Tags,
}

impl PatchBookPaymentRequest {
    pub fn new(payment_id: impl Into<String>, tags: Tags) -> Self {
        Self {
            payment_id: payment_id.into(),
            tags,
        }
    }

    pub fn to_json_api(&self) -> Document<&Self> {
        Document::attributes_only("bookPayment", self)
    }
}

/// Either payment patch.
#[derive(Debug, Clone)]
pub enum PatchPaymentRequest {
    Ach(PatchAchPaymentRequest),
    Book(PatchBookPaymentRequest),
}

impl PatchPaymentRequest {
    /// Id of the payment being patched, used for the request path.
    pub fn payment_id(&self) -> &str {
        match self {
            Self::Ach(request) => &request.payment_id,
            Self::Book(request) => &request.payment_id,
        }
    }

    pub fn to_json_api(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Ach(request) => serde_json::to_value(request.to_json_api()),
            Self::Book(request) => serde_json::to_value(request.to_json_api()),
        }
    }
}

impl From<PatchAchPaymentRequest> for PatchPaymentRequest {
    fn from(request: PatchAchPaymentRequest) -> Self {
        Self::Ach(request)
    }
}

impl From<PatchBookPaymentRequest> for PatchPaymentRequest {
    fn from(request: PatchBookPaymentRequest) -> Self {
        Self::Book(request)
    }
}

// ============================================================================
// List parameters
// ============================================================================

/// Query parameters for listing payments.
///
/// Multi-valued filters expand to indexed query keys
/// (`filter[status][0]=...`, `filter[status][1]=...`).
#[derive(Debug, Clone)]
pub struct ListPaymentParams {
    pub limit: u32,
    pub offset: u32,
    pub account_id: Option<String>,
    pub customer_id: Option<String>,
    pub tags: Option<Tags>,
    pub status: Option<Vec<PaymentStatus>>,
    pub payment_type: Option<Vec<PaymentType>>,
    pub direction: Option<Vec<Direction>>,
    pub since: Option<String>,
    pub until: Option<String>,
    pub sort: Option<Sort>,
    pub include: Option<String>,
}

impl Default for ListPaymentParams {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
            account_id: None,
            customer_id: None,
            tags: None,
            status: None,
            payment_type: None,
            direction: None,
            since: None,
            until: None,
            sort: None,
            include: None,
        }
    }
}

impl ListPaymentParams {
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

    pub fn status(mut self, status: Vec<PaymentStatus>) -> Self {
        self.status = Some(status);
        self
    }

    pub fn payment_type(mut self, payment_type: Vec<PaymentType>) -> Self {
        self.payment_type = Some(payment_type);
        self
    }

    pub fn direction(mut self, direction: Vec<Direction>) -> Self {
        self.direction = Some(direction);
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
        if let Some(status) = &self.status {
            for (idx, status) in status.iter().enumerate() {
                params.push((format!("filter[status][{}]", idx), status.as_str().to_string()));
            }
        }
        if let Some(payment_type) = &self.payment_type {
            for (idx, payment_type) in payment_type.iter().enumerate() {
                params.push((format!("filter[type][{}]", idx), payment_type.as_str().to_string()));
            }
        }
        if let Some(direction) = &self.direction {
            for (idx, direction) in direction.iter().enumerate() {
                params.push((format!("filter[direction][{}]", idx), direction.as_str().to_string()));
            }
        }
        if let Some(since) = &self.since {
            params.push(("filter[since]".to_string(), since.clone()));
        }
        if let Some(until) = &self.until {
            params.push(("filter[until]".to_string(), until.clone()));
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
