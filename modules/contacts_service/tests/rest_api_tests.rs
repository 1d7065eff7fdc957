//! HTTP contract tests driving the router in-process

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use contacts_service::api::rest::{
    build_router,
    dto::{ContactListResponse, ContactResponse, MessageResponse},
    error::Problem,
};
use contacts_service::contract::{MANDATORY_FIELDS_MESSAGE, NOT_FOUND_MESSAGE};
use contacts_service::domain::Service;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use tower::ServiceExt;

mod common;
use common::{FailingStore, RecordingStore};

fn test_router(store: Arc<RecordingStore>) -> Router {
    build_router(Arc::new(Service::new(store)))
}

fn failing_router(message: &str) -> Router {
    build_router(Arc::new(Service::new(Arc::new(FailingStore::new(message)))))
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn parse<T: DeserializeOwned>(body: Value) -> T {
    serde_json::from_value(body).unwrap()
}

async fn create(router: &Router, name: &str, email: &str, phone: &str) -> ContactResponse {
    let (status, body) = send(
        router,
        Method::POST,
        "/api/contacts",
        Some(json!({"name": name, "email": email, "phone": phone})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    parse(body)
}

#[tokio::test]
async fn create_returns_201_with_envelope() {
    let router = test_router(Arc::new(RecordingStore::new()));

    let created = create(&router, "Ada", "ada@example.com", "123").await;

    assert!(!created.data.id.is_empty());
    assert_eq!(created.data.name, "Ada");
    assert_eq!(created.data.email, "ada@example.com");
    assert_eq!(created.data.phone, "123");
    assert_eq!(created.message, "create a new contact");
}

#[tokio::test]
async fn create_with_missing_fields_is_rejected_without_store_call() {
    let store = Arc::new(RecordingStore::new());
    let router = test_router(store.clone());

    let bodies = [
        json!({"email": "ada@example.com", "phone": "123"}),
        json!({"name": null, "email": "ada@example.com", "phone": "123"}),
        json!({"name": "Ada", "email": "", "phone": "123"}),
        json!({"name": "Ada", "email": "ada@example.com"}),
        json!({"name": false, "email": "ada@example.com", "phone": "123"}),
        json!({"name": "Ada", "email": "ada@example.com", "phone": 0}),
        json!({}),
    ];

    for body in bodies {
        let (status, response) = send(&router, Method::POST, "/api/contacts", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let problem: Problem = parse(response);
        assert_eq!(problem.message, MANDATORY_FIELDS_MESSAGE);
        assert_eq!(problem.status, 400);
    }

    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn create_without_body_reports_mandatory_fields() {
    let store = Arc::new(RecordingStore::new());
    let router = test_router(store.clone());

    let (status, body) = send(&router, Method::POST, "/api/contacts", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], MANDATORY_FIELDS_MESSAGE);
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn create_with_empty_json_body_reports_mandatory_fields() {
    let store = Arc::new(RecordingStore::new());
    let router = test_router(store.clone());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contacts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let problem: Problem = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(problem.message, MANDATORY_FIELDS_MESSAGE);
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn create_stores_truthy_scalars_as_text() {
    let router = test_router(Arc::new(RecordingStore::new()));

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/contacts",
        Some(json!({"name": "Ada", "email": "ada@example.com", "phone": 5551234})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let created: ContactResponse = parse(body);
    assert_eq!(created.data.phone, "5551234");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let router = test_router(Arc::new(RecordingStore::new()));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contacts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let problem: Problem = serde_json::from_slice(&bytes).unwrap();
    assert!(!problem.message.is_empty());
}

#[tokio::test]
async fn get_after_create_returns_the_record() {
    let router = test_router(Arc::new(RecordingStore::new()));
    let created = create(&router, "Grace", "grace@example.com", "456").await;
    let uri = format!("/api/contacts/{}", created.data.id);

    let (status, body) = send(&router, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    let fetched: ContactResponse = parse(body);
    assert_eq!(fetched.data, created.data);
    assert_eq!(fetched.message, format!("Get contacts for {}", created.data.id));
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let router = test_router(Arc::new(RecordingStore::new()));

    let (status, body) = send(&router, Method::GET, "/api/contacts/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let problem: Problem = parse(body);
    assert_eq!(problem.message, NOT_FOUND_MESSAGE);
    assert_eq!(problem.title, "Not Found");
}

#[tokio::test]
async fn get_store_failure_is_404_with_fixed_message() {
    let router = failing_router("invalid input syntax for type bigint: \"nope\"");

    let (status, body) = send(&router, Method::GET, "/api/contacts/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn update_phone_leaves_other_fields() {
    let router = test_router(Arc::new(RecordingStore::new()));
    let created = create(&router, "Ada", "ada@example.com", "123").await;
    let uri = format!("/api/contacts/{}", created.data.id);

    let (status, body) = send(&router, Method::PUT, &uri, Some(json!({"phone": "999"}))).await;
    assert_eq!(status, StatusCode::OK);
    let updated: ContactResponse = parse(body);
    assert_eq!(updated.data.phone, "999");
    assert_eq!(updated.message, format!("Update contacts for {}", created.data.id));

    let (_, body) = send(&router, Method::GET, &uri, None).await;
    let fetched: ContactResponse = parse(body);
    assert_eq!(fetched.data.phone, "999");
    assert_eq!(fetched.data.name, "Ada");
    assert_eq!(fetched.data.email, "ada@example.com");
}

#[tokio::test]
async fn update_rejects_unknown_fields_and_bad_types() {
    let store = Arc::new(RecordingStore::new());
    let router = test_router(store.clone());

    let bodies = [
        json!({"id": "other"}),
        json!({"nickname": "Ada"}),
        json!({"phone": 999}),
        json!({"name": ""}),
        json!({}),
    ];

    for body in bodies {
        let (status, response) =
            send(&router, Method::PUT, "/api/contacts/1", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body} should be rejected");
        assert!(response["message"].is_string());
    }

    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let router = test_router(Arc::new(RecordingStore::new()));

    let (status, body) = send(
        &router,
        Method::PUT,
        "/api/contacts/missing",
        Some(json!({"name": "Eve"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let router = test_router(Arc::new(RecordingStore::new()));
    let created = create(&router, "Alan", "alan@example.com", "789").await;
    let uri = format!("/api/contacts/{}", created.data.id);

    let (status, body) = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let deleted: MessageResponse = parse(body.clone());
    assert_eq!(deleted.message, format!("Delete contacts for {}", created.data.id));
    assert!(body.get("data").is_none());

    let (status, _) = send(&router, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_contains_live_contacts() {
    let router = test_router(Arc::new(RecordingStore::new()));
    let ada = create(&router, "Ada", "ada@example.com", "1").await;
    let bob = create(&router, "Bob", "bob@example.com", "2").await;
    let eve = create(&router, "Eve", "eve@example.com", "3").await;
    send(
        &router,
        Method::DELETE,
        &format!("/api/contacts/{}", bob.data.id),
        None,
    )
    .await;

    let (status, body) = send(&router, Method::GET, "/api/contacts", None).await;

    assert_eq!(status, StatusCode::OK);
    let list: ContactListResponse = parse(body);
    assert_eq!(list.message, "Get all contacts");
    let ids: HashSet<String> = list.data.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, HashSet::from([ada.data.id, eve.data.id]));
}

#[tokio::test]
async fn store_errors_become_400_with_store_message() {
    let message = "duplicate key value violates unique constraint \"contacts_email_key\"";
    let router = failing_router(message);

    let cases = [
        (Method::GET, "/api/contacts", None),
        (
            Method::POST,
            "/api/contacts",
            Some(json!({"name": "Ada", "email": "ada@example.com", "phone": "1"})),
        ),
        (Method::PUT, "/api/contacts/1", Some(json!({"phone": "2"}))),
        (Method::DELETE, "/api/contacts/1", None),
    ];

    for (method, uri, body) in cases {
        let (status, response) = send(&router, method.clone(), uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(response["message"], message);
        assert_eq!(response["title"], "Store Error");
    }
}

#[tokio::test]
async fn unmatched_requests_fall_through() {
    let router = test_router(Arc::new(RecordingStore::new()));

    let (status, _) = send(&router, Method::PATCH, "/api/contacts/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&router, Method::GET, "/api/people", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let router = test_router(Arc::new(RecordingStore::new()));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/contacts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let router = test_router(Arc::new(RecordingStore::new()));

    let (status, body) = send(&router, Method::GET, "/api-doc/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/contacts/{id}"].is_object());
}
