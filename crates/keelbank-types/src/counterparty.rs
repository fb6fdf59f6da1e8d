//! Counterparty types
//!
//! Counterparties are the external bank accounts payments settle against.
//! The stored resource (`achCounterparty`) is created either from explicit
//! routing details or from a Plaid processor token; payments additionally
//! embed lightweight inline counterparty shapes in their attributes.

use crate::codec::{self, FromJsonApi};
use crate::document::Document;
use crate::error::DecodeError;
use crate::relationship::Relationships;
use crate::sort::Sort;
use crate::Tags;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Bank account type of a counterparty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    Checking,
    Savings,
}

/// Legal classification of the account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CounterpartyType {
    Business,
    Person,
    Unknown,
}

/// Directions a counterparty may be used in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CounterpartyPermissions {
    CreditOnly,
    DebitOnly,
    CreditAndDebit,
}

impl CounterpartyPermissions {
    /// Wire value, used when rendering filter parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditOnly => "CreditOnly",
            Self::DebitOnly => "DebitOnly",
            Self::CreditAndDebit => "CreditAndDebit",
        }
    }
}

/// Inline ACH counterparty embedded in payment attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchCounterparty {
    pub routing_number: String,
    pub account_number: String,
    pub account_type: AccountType,
    pub name: String,
}

/// Postal address of a wire beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub postal_code: String,
    pub country: String,
}

/// Inline wire counterparty embedded in wire payment attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCounterparty {
    pub routing_number: String,
    pub account_number: String,
    pub name: String,
    pub address: Address,
}

/// A stored counterparty resource (`achCounterparty`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counterparty {
    pub id: String,
    pub attributes: CounterpartyAttributes,
    #[serde(default, skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
}

/// Attributes of a stored counterparty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterpartyAttributes {
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub routing_number: String,
    /// Bank name, resolved from the routing number when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    pub account_number: String,
    pub account_type: AccountType,
    #[serde(rename = "type")]
    pub counterparty_type: CounterpartyType,
    pub permissions: CounterpartyPermissions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl FromJsonApi for Counterparty {
    fn from_json_api(node: &Value) -> Result<Self, DecodeError> {
        match codec::resource_type(node)? {
            "achCounterparty" => codec::from_node(node),
            other => Err(DecodeError::unknown_type(other)),
        }
    }
}

/// Request to create a counterparty from explicit routing details.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAchCounterpartyRequest {
    pub name: String,
    pub routing_number: String,
    pub account_number: String,
    pub account_type: AccountType,
    #[serde(rename = "type")]
    pub counterparty_type: CounterpartyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(skip)]
    pub relationships: Relationships,
}

impl CreateAchCounterpartyRequest {
    pub fn new(
        name: impl Into<String>,
        routing_number: impl Into<String>,
        account_number: impl Into<String>,
        account_type: AccountType,
        counterparty_type: CounterpartyType,
        relationships: Relationships,
    ) -> Self {
        Self {
            name: name.into(),
            routing_number: routing_number.into(),
            account_number: account_number.into(),
            account_type,
            counterparty_type,
            tags: None,
            idempotency_key: None,
            relationships,
        }
    }

    pub fn tags(mut self, tags: Tags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    pub fn to_json_api(&self) -> Document<&Self> {
        Document::new("achCounterparty", self, self.relationships.clone())
    }
}

/// Request to create a counterparty from a Plaid processor token.
///
/// The token identifies the external account; routing details are resolved
/// server-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaidCounterpartyRequest {
    #[serde(rename = "type")]
    pub counterparty_type: CounterpartyType,
    pub plaid_processor_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<CounterpartyPermissions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(skip)]
    pub relationships: Relationships,
}

impl CreatePlaidCounterpartyRequest {
    pub fn new(
        counterparty_type: CounterpartyType,
        plaid_processor_token: impl Into<String>,
        relationships: Relationships,
    ) -> Self {
        Self {
            counterparty_type,
            plaid_processor_token: plaid_processor_token.into(),
            verify_name: None,
            permissions: None,
            tags: None,
            idempotency_key: None,
            relationships,
        }
    }

    pub fn verify_name(mut self, verify: bool) -> Self {
        self.verify_name = Some(verify);
        self
    }

    pub fn permissions(mut self, permissions: CounterpartyPermissions) -> Self {
        self.permissions = Some(permissions);
        self
    }

    pub fn tags(mut self, tags: Tags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    pub fn to_json_api(&self) -> Document<&Self> {
        Document::new("achCounterparty", self, self.relationships.clone())
    }
}

/// Either way of creating a counterparty.
#[derive(Debug, Clone)]
pub enum CreateCounterpartyRequest {
    Ach(CreateAchCounterpartyRequest),
    Plaid(CreatePlaidCounterpartyRequest),
}

impl CreateCounterpartyRequest {
    pub fn to_json_api(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Ach(request) => serde_json::to_value(request.to_json_api()),
            Self::Plaid(request) => serde_json::to_value(request.to_json_api()),
        }
    }
}

impl From<CreateAchCounterpartyRequest> for CreateCounterpartyRequest {
    fn from(request: CreateAchCounterpartyRequest) -> Self {
        Self::Ach(request)
    }
}

impl From<CreatePlaidCounterpartyRequest> for CreateCounterpartyRequest {
    fn from(request: CreatePlaidCounterpartyRequest) -> Self {
        Self::Plaid(request)
    }
}

/// Attributes-only patch for a stored counterparty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchCounterpartyRequest {
    #[serde(skip)]
    pub counterparty_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plaid_processor_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<CounterpartyPermissions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl PatchCounterpartyRequest {
    pub fn new(counterparty_id: impl Into<String>) -> Self {
        Self {
            counterparty_id: counterparty_id.into(),
            plaid_processor_token: None,
            verify_name: None,
            permissions: None,
            tags: None,
        }
    }

    pub fn plaid_processor_token(mut self, token: impl Into<String>) -> Self {
        self.plaid_processor_token = Some(token.into());
        self
    }

    pub fn verify_name(mut self, verify: bool) -> Self {
        self.verify_name = Some(verify);
        self
    }

    pub fn permissions(mut self, permissions: CounterpartyPermissions) -> Self {
        self.permissions = Some(permissions);
        self
    }

    pub fn tags(mut self, tags: Tags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn to_json_api(&self) -> Document<&Self> {
        Document::attributes_only("counterparty", self)
    }
}

/// Query parameters for listing counterparties.
#[derive(Debug, Clone)]
pub struct ListCounterpartyParams {
    pub limit: u32,
    pub offset: u32,
    pub customer_id: Option<String>,
    pub account_number: Option<String>,
    pub tags: Option<Tags>,
    pub sort: Option<Sort>,
}

impl Default for ListCounterpartyParams {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
            customer_id: None,
            account_number: None,
            tags: None,
            sort: None,
        }
    }
}

impl ListCounterpartyParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, offset: u32, limit: u32) -> Self {
        self.offset = offset;
        self.limit = limit;
        self
    }

    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = Some(account_number.into());
        self
    }

    pub fn tags(mut self, tags: Tags) -> Self {
        self.tags = Some(tags);
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
        if let Some(account_number) = &self.account_number {
            params.push(("filter[accountNumber]".to_string(), account_number.clone()));
        }
        if let Some(tags) = &self.tags {
            if let Ok(tags) = serde_json::to_string(tags) {
                params.push(("filter[tags]".to_string(), tags));
            }
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
    use crate::relationship::Relationship;
    use serde_json::json;

    #[test]
    fn test_create_request_minimal_attribute_keys() {
        let request = CreateAchCounterpartyRequest::new(
            "Acme Supplies",
            "011000138",
            "123456789",
            AccountType::Checking,
            CounterpartyType::Business,
            Relationships::new().with("customer", Relationship::customer("42")),
        );
        let value = serde_json::to_value(request.to_json_api()).unwrap();
        assert_eq!(value["data"]["type"], "achCounterparty");
        let attributes = value["data"]["attributes"].as_object().unwrap();
        let mut keys: Vec<&str> = attributes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["accountNumber", "accountType", "name", "routingNumber", "type"]
        );
        assert_eq!(value["data"]["relationships"]["customer"]["data"]["id"], "42");
    }

    #[test]
    fn test_plaid_create_request_includes_set_optionals() {
        let request = CreatePlaidCounterpartyRequest::new(
            CounterpartyType::Person,
            "processor-sandbox-token",
            Relationships::new().with("customer", Relationship::customer("42")),
        )
        .verify_name(true)
        .permissions(CounterpartyPermissions::CreditOnly);
        let value = serde_json::to_value(request.to_json_api()).unwrap();
        let attributes = &value["data"]["attributes"];
        assert_eq!(attributes["plaidProcessorToken"], "processor-sandbox-token");
        assert_eq!(attributes["verifyName"], true);
        assert_eq!(attributes["permissions"], "CreditOnly");
        assert!(attributes.get("tags").is_none());
    }

    #[test]
    fn test_patch_request_is_attributes_only() {
        let request = PatchCounterpartyRequest::new("77").permissions(CounterpartyPermissions::CreditAndDebit);
        let value = serde_json::to_value(request.to_json_api()).unwrap();
        assert_eq!(value["data"]["type"], "counterparty");
        assert!(value["data"].get("relationships").is_none());
        let attributes = value["data"]["attributes"].as_object().unwrap();
        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes["permissions"], "CreditAndDebit");
    }

    #[test]
    fn test_decode_counterparty() {
        let node = json!({
            "type": "achCounterparty",
            "id": "9",
            "attributes": {
                "createdAt": "2023-02-14T12:39:52.123Z",
                "name": "Acme Supplies",
                "routingNumber": "011000138",
                "bank": "First Example Bank",
                "accountNumber": "123456789",
                "accountType": "Checking",
                "type": "Business",
                "permissions": "CreditAndDebit"
            },
            "relationships": {
                "customer": {"data": {"type": "customer", "id": "42"}}
            }
        });
        let counterparty = Counterparty::from_json_api(&node).unwrap();
        assert_eq!(counterparty.id, "9");
        assert_eq!(counterparty.attributes.counterparty_type, CounterpartyType::Business);
        assert_eq!(counterparty.attributes.bank.as_deref(), Some("First Example Bank"));
        assert_eq!(counterparty.relationships.get("customer").unwrap().id(), "42");
    }

    #[test]
    fn test_decode_rejects_foreign_type() {
        let err = Counterparty::from_json_api(&json!({"type": "wireCounterparty", "id": "1"})).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnknownType { ref resource_type } if resource_type == "wireCounterparty"
        ));
    }

    #[test]
    fn test_list_params_query() {
        let params = ListCounterpartyParams::new()
            .page(40, 20)
            .customer_id("42")
            .sort(Sort::CreatedAtDesc);
        let query = params.to_query();
        assert!(query.contains(&("page[limit]".to_string(), "20".to_string())));
        assert!(query.contains(&("page[offset]".to_string(), "40".to_string())));
        assert!(query.contains(&("filter[customerId]".to_string(), "42".to_string())));
        assert!(query.contains(&("sort".to_string(), "-createdAt".to_string())));
    }
}
