//! Resource façade tests over a mock transport
//!
//! Each test drives a façade method end to end: the mock records the
//! exchange the SDK would put on the wire and plays back a canned response.

use async_trait::async_trait;
use keelbank_sdk::{
    CreateAchCounterpartyRequest, CreateBookPaymentRequest, Error, HttpTransport, Keelbank,
    ListEventParams, ListPaymentParams, PatchAchPaymentRequest, Payment, Relationship,
    Relationships, TransportResponse,
};
use keelbank_types::{AccountType, CounterpartyType, PaymentStatus, Tags};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct RecordedCall {
    method: &'static str,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

#[derive(Default)]
struct MockTransport {
    responses: Mutex<VecDeque<TransportResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    fn respond_with(status: u16, body: Value) -> Arc<Self> {
        let transport = Arc::new(Self::default());
        transport.queue(status, body);
        transport
    }

    fn queue(&self, status: u16, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(TransportResponse { status, body });
    }

    fn record(&self, call: RecordedCall) -> keelbank_sdk::Result<TransportResponse> {
        self.calls.lock().unwrap().push(call);
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("mock transport has no queued response"))
    }

    fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> keelbank_sdk::Result<TransportResponse> {
        self.record(RecordedCall {
            method: "GET",
            path: path.to_string(),
            query: query.to_vec(),
            body: None,
        })
    }

    async fn post(&self, path: &str, body: Option<Value>) -> keelbank_sdk::Result<TransportResponse> {
        self.record(RecordedCall {
            method: "POST",
            path: path.to_string(),
            query: Vec::new(),
            body,
        })
    }

    async fn patch(&self, path: &str, body: Value) -> keelbank_sdk::Result<TransportResponse> {
        self.record(RecordedCall {
            method: "PATCH",
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body),
        })
    }

    async fn delete(&self, path: &str) -> keelbank_sdk::Result<TransportResponse> {
        self.record(RecordedCall {
            method: "DELETE",
            path: path.to_string(),
            query: Vec::new(),
            body: None,
        })
    }
}

fn book_payment_node(id: &str, amount: i64) -> Value {
    json!({
        "type": "bookPayment",
        "id": id,
        "attributes": {
            "createdAt": "2023-01-01T00:00:00Z",
            "status": "Sent",
            "direction": "Credit",
            "description": "rent",
            "amount": amount
        }
    })
}

#[tokio::test]
async fn create_book_payment_posts_document_and_decodes_dto() {
    let transport = MockTransport::respond_with(201, json!({"data": book_payment_node("123", 5000)}));
    let bank = Keelbank::with_transport(transport.clone());

    let payment = bank
        .payments()
        .create(CreateBookPaymentRequest::new(
            5000,
            "rent",
            Relationships::new().with("account", Relationship::account("10001")),
        ))
        .await
        .unwrap();

    assert_eq!(payment.id(), "123");
    assert_eq!(payment.amount(), 5000);
    assert_eq!(payment.status(), PaymentStatus::Sent);

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "payments");
    let body = calls[0].body.as_ref().unwrap();
    assert_eq!(body["data"]["type"], "bookPayment");
    let attributes = body["data"]["attributes"].as_object().unwrap();
    let mut keys: Vec<&str> = attributes.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["amount", "description", "direction"]);
}

#[tokio::test]
async fn non_2xx_response_surfaces_api_error() {
    let transport = MockTransport::respond_with(
        400,
        json!({"errors": [{"title": "Bad Request", "status": "400"}]}),
    );
    let bank = Keelbank::with_transport(transport);

    let err = bank
        .payments()
        .create(CreateBookPaymentRequest::new(5000, "rent", Relationships::new()))
        .await
        .unwrap_err();

    let errors = err.api_errors().expect("expected an api error");
    let first = errors.first().unwrap();
    assert_eq!(first.title, "Bad Request");
    assert_eq!(first.status_code(), Some(400));
}

#[tokio::test]
async fn get_payment_hits_resource_path() {
    let transport = MockTransport::respond_with(200, json!({"data": book_payment_node("42", 100)}));
    let bank = Keelbank::with_transport(transport.clone());

    let payment = bank.payments().get("42").await.unwrap();
    assert_eq!(payment.id(), "42");

    let calls = transport.calls();
    assert_eq!(calls[0].method, "GET");
    assert_eq!(calls[0].path, "payments/42");
}

#[tokio::test]
async fn update_payment_patches_tags_only() {
    let transport = MockTransport::respond_with(200, json!({"data": book_payment_node("42", 100)}));
    let bank = Keelbank::with_transport(transport.clone());

    bank.payments()
        .update(PatchAchPaymentRequest::new(
            "42",
            Tags::from([("purpose".to_string(), "rent".to_string())]),
        ))
        .await
        .unwrap();

    let calls = transport.calls();
    assert_eq!(calls[0].method, "PATCH");
    assert_eq!(calls[0].path, "payments/42");
    let body = calls[0].body.as_ref().unwrap();
    assert_eq!(body["data"]["type"], "achPayment");
    assert_eq!(body["data"]["attributes"]["tags"]["purpose"], "rent");
    assert!(body["data"].get("relationships").is_none());
}

#[tokio::test]
async fn list_payments_passes_pagination_and_preserves_order() {
    let transport = MockTransport::respond_with(
        200,
        json!({"data": [book_payment_node("1", 100), book_payment_node("2", 200)]}),
    );
    let bank = Keelbank::with_transport(transport.clone());

    let payments = bank
        .payments()
        .list(&ListPaymentParams::new().page(20, 10).account_id("10001"))
        .await
        .unwrap();

    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0].id(), "1");
    assert_eq!(payments[1].id(), "2");

    let calls = transport.calls();
    assert_eq!(calls[0].path, "payments");
    assert!(calls[0].query.contains(&("page[limit]".to_string(), "10".to_string())));
    assert!(calls[0].query.contains(&("page[offset]".to_string(), "20".to_string())));
    assert!(calls[0].query.contains(&("filter[accountId]".to_string(), "10001".to_string())));
}

#[tokio::test]
async fn unknown_discriminant_in_success_response_is_a_decode_error() {
    let transport = MockTransport::respond_with(
        200,
        json!({"data": {"type": "cryptoPayment", "id": "1", "attributes": {}}}),
    );
    let bank = Keelbank::with_transport(transport);

    let err = bank.payments().get("1").await.unwrap_err();
    match err {
        Error::Decode(decode) => {
            assert_eq!(decode.to_string(), "unknown resource type `cryptoPayment`");
        }
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_counterparty_and_delete() {
    let transport = MockTransport::respond_with(
        201,
        json!({"data": {
            "type": "achCounterparty",
            "id": "9",
            "attributes": {
                "createdAt": "2023-02-14T12:39:52Z",
                "name": "Acme Supplies",
                "routingNumber": "011000138",
                "accountNumber": "123456789",
                "accountType": "Checking",
                "type": "Business",
                "permissions": "CreditAndDebit"
            }
        }}),
    );
    transport.queue(204, Value::Null);
    let bank = Keelbank::with_transport(transport.clone());

    let counterparty = bank
        .counterparties()
        .create(CreateAchCounterpartyRequest::new(
            "Acme Supplies",
            "011000138",
            "123456789",
            AccountType::Checking,
            CounterpartyType::Business,
            Relationships::new().with("customer", Relationship::customer("42")),
        ))
        .await
        .unwrap();
    assert_eq!(counterparty.id, "9");

    bank.counterparties().delete("9").await.unwrap();

    let calls = transport.calls();
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "counterparties");
    assert_eq!(
        calls[0].body.as_ref().unwrap()["data"]["relationships"]["customer"]["data"]["id"],
        "42"
    );
    assert_eq!(calls[1].method, "DELETE");
    assert_eq!(calls[1].path, "counterparties/9");
}

#[tokio::test]
async fn fire_event_posts_without_body() {
    let transport = MockTransport::respond_with(200, Value::Null);
    let bank = Keelbank::with_transport(transport.clone());

    bank.events().fire("9001").await.unwrap();

    let calls = transport.calls();
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "events/9001");
    assert!(calls[0].body.is_none());
}

#[tokio::test]
async fn list_events_expands_indexed_type_filter() {
    let transport = MockTransport::respond_with(200, json!({"data": []}));
    let bank = Keelbank::with_transport(transport.clone());

    let events = bank
        .events()
        .list(&ListEventParams::new().event_type(vec![
            "payment.sent".to_string(),
            "payment.returned".to_string(),
        ]))
        .await
        .unwrap();
    assert!(events.is_empty());

    let calls = transport.calls();
    assert!(calls[0]
        .query
        .contains(&("filter[type][0]".to_string(), "payment.sent".to_string())));
    assert!(calls[0]
        .query
        .contains(&("filter[type][1]".to_string(), "payment.returned".to_string())));
}

#[tokio::test]
async fn advance_received_payment_hits_action_path() {
    let transport = MockTransport::respond_with(
        200,
        json!({"data": {
            "type": "achReceivedPayment",
            "id": "555",
            "attributes": {
                "createdAt": "2023-03-14T09:00:00Z",
                "status": "Advanced",
                "wasAdvanced": true,
                "amount": 2500,
                "description": "payroll",
                "companyName": "Acme Payroll Co",
                "counterpartyRoutingNumber": "011000138",
                "traceNumber": "021000021234567"
            }
        }}),
    );
    let bank = Keelbank::with_transport(transport.clone());

    let payment = bank.received_payments().advance("555").await.unwrap();
    assert!(payment.attributes.was_advanced);

    let calls = transport.calls();
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "received-payments/555/advance");
}

#[tokio::test]
async fn mixed_payment_list_decodes_every_variant() {
    let ach = json!({
        "type": "achPayment",
        "id": "7",
        "attributes": {
            "createdAt": "2023-02-21T11:31:03Z",
            "status": "Clearing",
            "counterparty": {
                "routingNumber": "011000138",
                "accountNumber": "123456789",
                "accountType": "Checking",
                "name": "Jane Doe"
            },
            "direction": "Credit",
            "description": "payout",
            "amount": 1700
        }
    });
    let transport =
        MockTransport::respond_with(200, json!({"data": [ach, book_payment_node("8", 900)]}));
    let bank = Keelbank::with_transport(transport);

    let payments = bank.payments().list(&ListPaymentParams::new()).await.unwrap();
    assert!(matches!(payments[0], Payment::Ach(_)));
    assert!(matches!(payments[1], Payment::Book(_)));
}
