//! End-to-end tests of the API response contract.
//!
//! Every endpoint must answer with one of the three envelope shapes:
//! success (`{ success, timestamp, data }`), paginated success (same plus
//! `pagination`), or error (`{ success, timestamp, error }`).

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use chrono::DateTime;
use rstest::rstest;
use serde_json::{json, Value};

use backend::models::NewUser;
use backend::server;
use backend::storage::UserStore;

async fn spawn_app(
    store: UserStore,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(store))
            .configure(server::configure),
    )
    .await
}

fn seeded_store(count: usize) -> UserStore {
    let store = UserStore::connected();
    for i in 1..=count {
        store
            .insert(NewUser {
                email: format!("user{i}@example.com"),
                name: format!("User {i}"),
                avatar_url: None,
            })
            .expect("seed user");
    }
    store
}

fn assert_error_envelope(body: &Value, status: u16, code: &str) {
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["status"], json!(status));
    assert_eq!(body["error"]["code"], json!(code));
    assert!(
        body["error"]["message"]
            .as_str()
            .is_some_and(|message| !message.is_empty()),
        "error message must be a non-empty string"
    );
    assert_timestamp(body);
}

fn assert_timestamp(body: &Value) {
    let raw = body["timestamp"].as_str().expect("timestamp is a string");
    DateTime::parse_from_rfc3339(raw).expect("timestamp is RFC 3339");
}

#[actix_web::test]
async fn health_returns_an_enveloped_report() {
    let app = spawn_app(UserStore::connected()).await;
    let response =
        test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["status"], json!("ok"));
    assert!(body["data"]["version"].is_string());
    assert!(body["data"]["timestamp"].is_string());
    assert_timestamp(&body);
}

#[actix_web::test]
async fn list_users_returns_the_requested_window() {
    let app = spawn_app(seeded_store(3)).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/users?page=2&limit=1")
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"][0]["id"], json!(2));
    assert_eq!(
        body["pagination"],
        json!({
            "total_items": 3,
            "total_pages": 3,
            "current_page": 2,
            "page_size": 1,
            "has_more": true,
        })
    );
    assert_timestamp(&body);
}

#[actix_web::test]
async fn list_users_is_paginated_even_when_empty() {
    let app = spawn_app(UserStore::connected()).await;
    let response =
        test::call_service(&app, test::TestRequest::get().uri("/api/users").to_request()).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["total_items"], json!(0));
    assert_eq!(body["pagination"]["has_more"], json!(false));
}

#[rstest]
#[case("/api/users?page=-1")]
#[case("/api/users?page=0")]
#[case("/api/users?page=abc")]
#[case("/api/users?limit=999")]
#[case("/api/users?limit=0")]
#[actix_web::test]
async fn list_users_rejects_invalid_pagination(#[case] uri: &str) {
    let app = spawn_app(seeded_store(1)).await;
    let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(response.status().as_u16(), 422);

    let body: Value = test::read_body_json(response).await;
    assert_error_envelope(&body, 422, "VALIDATION_ERROR");
}

#[actix_web::test]
async fn list_users_reports_503_without_a_database() {
    let app = spawn_app(UserStore::disconnected()).await;
    let response =
        test::call_service(&app, test::TestRequest::get().uri("/api/users").to_request()).await;
    assert_eq!(response.status().as_u16(), 503);

    let body: Value = test::read_body_json(response).await;
    assert_error_envelope(&body, 503, "SERVICE_UNAVAILABLE");
}

#[actix_web::test]
async fn validation_runs_before_the_store_is_touched() {
    // An invalid window must surface as 422 even while the store is down.
    let app = spawn_app(UserStore::disconnected()).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/users?page=-1")
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 422);
}

#[rstest]
#[case("invalid")]
#[case("-1")]
#[case("0")]
#[actix_web::test]
async fn get_user_rejects_malformed_ids(#[case] id: &str) {
    let app = spawn_app(seeded_store(1)).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/users/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = test::read_body_json(response).await;
    assert_error_envelope(&body, 400, "BAD_REQUEST");
}

#[actix_web::test]
async fn get_user_reports_missing_users() {
    let app = spawn_app(UserStore::connected()).await;
    let response =
        test::call_service(&app, test::TestRequest::get().uri("/api/users/1").to_request()).await;
    assert_eq!(response.status().as_u16(), 404);

    let body: Value = test::read_body_json(response).await;
    assert_error_envelope(&body, 404, "NOT_FOUND");
}

#[actix_web::test]
async fn get_user_returns_the_requested_user() {
    let app = spawn_app(seeded_store(2)).await;
    let response =
        test::call_service(&app, test::TestRequest::get().uri("/api/users/2").to_request()).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["data"]["id"], json!(2));
    assert_eq!(body["data"]["email"], json!("user2@example.com"));
}

#[actix_web::test]
async fn create_user_returns_the_created_record() {
    let app = spawn_app(UserStore::connected()).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "email": "ada@example.com", "name": "Ada Lovelace" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["id"], json!(1));
    assert_eq!(body["data"]["email"], json!("ada@example.com"));
    assert_eq!(body["data"]["is_active"], json!(true));
    assert_timestamp(&body);
}

#[rstest]
#[case(json!({}))]
#[case(json!({ "email": "not-an-email", "name": "Test User" }))]
#[case(json!({ "email": "test@example.com", "name": "A" }))]
#[actix_web::test]
async fn create_user_rejects_invalid_bodies(#[case] payload: Value) {
    let app = spawn_app(UserStore::connected()).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 422);

    let body: Value = test::read_body_json(response).await;
    assert_error_envelope(&body, 422, "VALIDATION_ERROR");
}

#[actix_web::test]
async fn create_user_rejects_duplicate_emails() {
    let app = spawn_app(seeded_store(1)).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "email": "user1@example.com", "name": "Imposter" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 409);

    let body: Value = test::read_body_json(response).await;
    assert_error_envelope(&body, 409, "CONFLICT");
}

#[actix_web::test]
async fn malformed_json_bodies_use_the_error_envelope() {
    let app = spawn_app(UserStore::connected()).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = test::read_body_json(response).await;
    assert_error_envelope(&body, 400, "BAD_REQUEST");
}
