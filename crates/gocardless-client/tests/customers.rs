//! Customer operations against a wiremock stand-in for the GoCardless API.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gocardless_client::{
    ClientError, ClientOptions, Customer, CustomerApi, GoCardlessClient, API_VERSION,
};

const TOKEN: &str = "test-access-token";

fn client(server: &MockServer) -> GoCardlessClient {
    GoCardlessClient::with_base_url(TOKEN, server.uri(), &ClientOptions::default()).unwrap()
}

/// Mount-time matchers for the four headers every request must carry.
fn standard_headers(mock: wiremock::MockBuilder) -> wiremock::MockBuilder {
    mock.and(header("Authorization", format!("Bearer {TOKEN}")))
        .and(header("GoCardless-Version", API_VERSION))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
}

fn customer_json() -> serde_json::Value {
    json!({
        "customers": {
            "id": "CU123",
            "created_at": "2014-05-08T17:01:06.000Z",
            "email": "user@example.com",
            "given_name": "Frank",
            "family_name": "Osborne",
            "address_line1": "27 Acer Road",
            "address_line2": "Apt 2",
            "address_line3": null,
            "city": "London",
            "region": null,
            "postal_code": "E8 3GX",
            "country_code": "GB",
            "language": "en",
            "swedish_identity_number": null,
            "metadata": {
                "salesforce_id": "ABCD1234"
            }
        }
    })
}

fn validation_error_json() -> serde_json::Value {
    json!({
        "error": {
            "documentation_url": "https://developer.gocardless.com/#validation_failed",
            "message": "Validation failed",
            "type": "validation_failed",
            "code": 422,
            "request_id": "dd50eaaf-8213-48fe-90d6-5466872efbc4",
            "errors": [
                {
                    "message": "is invalid",
                    "field": "email",
                    "request_pointer": "/customers/email"
                }
            ]
        }
    })
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn create_customer_populates_id() {
    let server = MockServer::start().await;

    standard_headers(Mock::given(method("POST")).and(path("/customers")))
        .and(body_json(json!({
            "customers": {
                "email": "user@example.com",
                "given_name": "Frank",
                "family_name": "Osborne"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(customer_json()))
        .expect(1)
        .mount(&server)
        .await;

    let mut customer = Customer::new()
        .with_email("user@example.com")
        .with_name("Frank", "Osborne");
    client(&server).create_customer(&mut customer).await.unwrap();

    assert_eq!(customer.id.as_deref(), Some("CU123"));
    assert!(customer.created_at.is_some());
    assert_eq!(customer.city.as_deref(), Some("London"));
}

#[tokio::test]
async fn create_customer_rejects_non_created_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(422).set_body_json(validation_error_json()))
        .mount(&server)
        .await;

    let mut customer = Customer::new().with_email("not-an-email");
    let err = client(&server)
        .create_customer(&mut customer)
        .await
        .unwrap_err();

    match &err {
        ClientError::Api { status, error } => {
            assert_eq!(*status, 422);
            let error = error.as_ref().unwrap();
            assert_eq!(error.error_type, "validation_failed");
            assert_eq!(error.details[0].field, "email");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(err.to_string().contains("Validation failed"));
    assert!(customer.id.is_none());
}

#[tokio::test]
async fn create_customer_treats_200_as_unexpected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json()))
        .mount(&server)
        .await;

    let err = client(&server)
        .create_customer(&mut Customer::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 200, .. }));
}

#[tokio::test]
async fn create_customer_tolerates_unparsable_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server)
        .create_customer(&mut Customer::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 500, error: None }));
    assert_eq!(
        err.to_string(),
        "API error: status 500: no error details available"
    );
}

// ============================================================================
// Get
// ============================================================================

#[tokio::test]
async fn get_customer_returns_customer() {
    let server = MockServer::start().await;

    standard_headers(Mock::given(method("GET")).and(path("/customers/CU123")))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json()))
        .expect(1)
        .mount(&server)
        .await;

    let customer = client(&server).get_customer("CU123").await.unwrap();

    assert_eq!(customer.id.as_deref(), Some("CU123"));
    assert_eq!(customer.email.as_deref(), Some("user@example.com"));
    assert_eq!(customer.metadata.get("salesforce_id").map(String::as_str), Some("ABCD1234"));
    assert!(customer.swedish_identity_number.is_none());
}

#[tokio::test]
async fn get_customer_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/CU404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "message": "Resource not found",
                "type": "invalid_api_usage",
                "code": 404,
                "request_id": "req-1",
                "documentation_url": "https://developer.gocardless.com/#resource_not_found",
                "errors": []
            }
        })))
        .mount(&server)
        .await;

    let err = client(&server).get_customer("CU404").await.unwrap_err();
    assert_eq!(err.api_error().unwrap().code, 404);
}

#[tokio::test]
async fn get_customer_rejects_empty_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server).get_customer("").await.unwrap_err();
    assert!(matches!(err, ClientError::MissingId));
}

#[tokio::test]
async fn get_customer_keeps_id_under_customers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/mandates/MD1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"mandates": {}})))
        .expect(0)
        .mount(&server)
        .await;

    standard_headers(Mock::given(method("GET")).and(path("/customers/..%2Fmandates%2FMD1")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"message": "Resource not found", "code": 404, "errors": []}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .get_customer("../mandates/MD1")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 404, .. }));
}

#[tokio::test]
async fn get_customer_rejects_dot_segment_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server).get_customer("..").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidId(ref id) if id == ".."));
}

#[tokio::test]
async fn get_customer_malformed_body_is_serialization_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/CU123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).get_customer("CU123").await.unwrap_err();
    assert!(matches!(err, ClientError::Serialization(_)));
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn list_customers_decodes_envelope() {
    let server = MockServer::start().await;

    standard_headers(Mock::given(method("GET")).and(path("/customers")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customers": [
                { "id": "CU001", "email": "one@example.com" },
                { "id": "CU002", "company_name": "Acme Ltd" }
            ],
            "meta": {
                "cursors": { "before": null, "after": null },
                "limit": 50
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let customers = client(&server).list_customers().await.unwrap();

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].id.as_deref(), Some("CU001"));
    assert_eq!(customers[1].company_name.as_deref(), Some("Acme Ltd"));
}

#[tokio::test]
async fn list_customers_rejects_bare_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "CU001" }])))
        .mount(&server)
        .await;

    let err = client(&server).list_customers().await.unwrap_err();
    assert!(matches!(err, ClientError::Serialization(_)));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn update_customer_replaces_record() {
    let server = MockServer::start().await;

    standard_headers(Mock::given(method("PUT")).and(path("/customers/CU123")))
        .and(body_json(json!({
            "customers": { "id": "CU123", "city": "London" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json()))
        .expect(1)
        .mount(&server)
        .await;

    let mut customer = Customer {
        id: Some("CU123".to_string()),
        city: Some("London".to_string()),
        ..Customer::default()
    };
    client(&server).update_customer(&mut customer).await.unwrap();

    assert_eq!(customer.given_name.as_deref(), Some("Frank"));
    assert_eq!(customer.postal_code.as_deref(), Some("E8 3GX"));
}

#[tokio::test]
async fn update_customer_checks_status() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/customers/CU123"))
        .respond_with(ResponseTemplate::new(422).set_body_json(validation_error_json()))
        .mount(&server)
        .await;

    let mut customer = Customer {
        id: Some("CU123".to_string()),
        email: Some("bad".to_string()),
        ..Customer::default()
    };
    let err = client(&server)
        .update_customer(&mut customer)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 422, .. }));
    assert_eq!(customer.email.as_deref(), Some("bad"));
}

#[tokio::test]
async fn update_customer_requires_id() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server)
        .update_customer(&mut Customer::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::MissingId));
}

#[tokio::test]
async fn update_customer_encodes_id() {
    let server = MockServer::start().await;

    standard_headers(Mock::given(method("PUT")).and(path("/customers/CU%2F1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"customers": {"id": "CU/1"}})))
        .expect(1)
        .mount(&server)
        .await;

    let mut customer = Customer {
        id: Some("CU/1".to_string()),
        ..Customer::default()
    };
    client(&server).update_customer(&mut customer).await.unwrap();
    assert_eq!(customer.id.as_deref(), Some("CU/1"));
}

// ============================================================================
// Trait object
// ============================================================================

#[tokio::test]
async fn client_works_through_customer_api_trait() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/CU123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json()))
        .mount(&server)
        .await;

    let api: Box<dyn CustomerApi> = Box::new(client(&server));
    let customer = api.get_customer("CU123").await.unwrap();
    assert_eq!(customer.id.as_deref(), Some("CU123"));
}
