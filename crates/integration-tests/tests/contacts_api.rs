//! Integration tests for the contact CRUD API.
//!
//! Run with: cargo test -p contact-book-integration-tests

#![allow(clippy::unwrap_used)]

use contact_book_integration_tests::TestServer;
use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

fn contact_payload(first_name: &str, email: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": "Lee",
        "email": email,
        "phone": "555",
    })
}

async fn list(server: &TestServer) -> Vec<Value> {
    let resp = server
        .client()
        .get(server.url("/todos"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.unwrap()
}

async fn create(server: &TestServer, payload: &Value) -> reqwest::Response {
    server
        .client()
        .post(server.url("/todos"))
        .json(payload)
        .send()
        .await
        .unwrap()
}

fn find<'a>(contacts: &'a [Value], id: &Value) -> Option<&'a Value> {
    contacts.iter().find(|c| &c["id"] == id)
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_assigns_fresh_ids() {
    let server = TestServer::start().await;

    let mut ids = Vec::new();
    for name in ["Ana", "Ben", "Cleo"] {
        let resp = create(&server, &contact_payload(name, "a@b.co")).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["firstName"], name);
        let id = body["id"].as_str().unwrap().to_owned();
        assert!(Uuid::parse_str(&id).is_ok());
        assert!(!ids.contains(&id));
        ids.push(id);
    }
}

#[tokio::test]
async fn test_create_rejects_invalid_payloads_without_persisting() {
    let server = TestServer::start().await;
    let before = list(&server).await.len();

    let invalid = [
        json!({ "lastName": "Lee", "email": "a@b.co", "phone": "555" }),
        json!({ "firstName": "Ana", "email": "a@b.co", "phone": "555" }),
        json!({ "firstName": "Ana", "lastName": "Lee", "phone": "555" }),
        json!({ "firstName": "Ana", "lastName": "Lee", "email": "a@b.co" }),
        json!({ "firstName": "", "lastName": "Lee", "email": "a@b.co", "phone": "555" }),
        contact_payload("Ana", "not-an-email"),
        contact_payload("Ana", "a@b"),
    ];

    for payload in &invalid {
        let resp = create(&server, payload).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload: {payload}");
    }

    if TestServer::is_isolated() {
        assert_eq!(list(&server).await.len(), before);
    }
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let server = TestServer::start().await;

    let resp = server
        .client()
        .post(server.url("/todos"))
        .header("content-type", "application/json")
        .body("{\"firstName\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_replaces_fields() {
    let server = TestServer::start().await;
    let created: Value = create(&server, &contact_payload("Ana", "a@b.co"))
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let replacement = json!({
        "firstName": "Anna",
        "lastName": "Lindqvist",
        "email": "anna@example.se",
        "phone": "+46 8 123 456",
    });
    let resp = server
        .client()
        .put(server.url(&format!("/todos/{id}")))
        .json(&replacement)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["lastName"], "Lindqvist");

    let contacts = list(&server).await;
    let stored = find(&contacts, &created["id"]).unwrap();
    assert_eq!(stored, &updated);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let server = TestServer::start().await;
    let before = list(&server).await;

    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_owned()] {
        let resp = server
            .client()
            .put(server.url(&format!("/todos/{id}")))
            .json(&contact_payload("Ghost", "ghost@example.com"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    if TestServer::is_isolated() {
        assert_eq!(list(&server).await, before);
    }
}

#[tokio::test]
async fn test_update_revalidates_fields() {
    let server = TestServer::start().await;
    let created: Value = create(&server, &contact_payload("Ana", "a@b.co"))
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let resp = server
        .client()
        .put(server.url(&format!("/todos/{id}")))
        .json(&contact_payload("Ana", "broken"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let contacts = list(&server).await;
    assert_eq!(find(&contacts, &created["id"]).unwrap(), &created);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_always_succeeds() {
    let server = TestServer::start().await;
    let created: Value = create(&server, &contact_payload("Ana", "a@b.co"))
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap().to_owned();

    for target in [id, Uuid::new_v4().to_string(), "not-a-uuid".to_owned()] {
        let resp = server
            .client()
            .delete(server.url(&format!("/todos/{target}")))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(resp.bytes().await.unwrap().is_empty());
    }

    assert!(find(&list(&server).await, &created["id"]).is_none());
}

// ============================================================================
// Walkthrough
// ============================================================================

#[tokio::test]
async fn test_contact_lifecycle() {
    let server = TestServer::start().await;

    let resp = create(&server, &contact_payload("Ana", "a@b.co")).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_owned();
    assert_eq!(
        created,
        json!({
            "id": id,
            "firstName": "Ana",
            "lastName": "Lee",
            "email": "a@b.co",
            "phone": "555",
        })
    );

    let contacts = list(&server).await;
    assert_eq!(find(&contacts, &created["id"]), Some(&created));
    if TestServer::is_isolated() {
        assert_eq!(contacts.len(), 1);
    }

    let resp = server
        .client()
        .put(server.url(&format!("/todos/{id}")))
        .json(&contact_payload("Anna", "a@b.co"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["firstName"], "Anna");

    let contacts = list(&server).await;
    assert_eq!(find(&contacts, &created["id"]).unwrap()["firstName"], "Anna");

    let resp = server
        .client()
        .delete(server.url(&format!("/todos/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let contacts = list(&server).await;
    assert!(find(&contacts, &created["id"]).is_none());
    if TestServer::is_isolated() {
        assert!(contacts.is_empty());
    }
}

// ============================================================================
// Front-end and docs
// ============================================================================

#[tokio::test]
async fn test_frontend_and_docs_are_served() {
    let server = TestServer::start().await;

    let resp = server.client().get(server.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("/app.js"));

    let resp = server
        .client()
        .get(server.url("/api-docs/openapi.json"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let doc: Value = resp.json().await.unwrap();
    assert!(doc["paths"]["/todos/{id}"]["put"].is_object());
}
