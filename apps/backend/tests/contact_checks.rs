mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use backend_test_support::unique_helpers::unique_email;
use serde_json::{json, Value};

use crate::common::read_json;
use crate::support::factory::contact_body;
use crate::support::{create_test_app, memory_state};

#[actix_web::test]
async fn count_tracks_creates_and_deletes() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::get().uri("/contacts/count").to_request();
    let count: Value = read_json(test::call_service(&app, req).await).await;
    assert_eq!(count, json!({"count": 0}));

    let mut ids = Vec::new();
    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/api/v1/contacts")
            .set_json(contact_body("Ada", &unique_email("ada")))
            .to_request();
        let created: Value = read_json(test::call_service(&app, req).await).await;
        ids.push(created["id"].as_i64().unwrap());
    }

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/contacts/{}", ids[0]))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/contacts/count").to_request();
    let count: Value = read_json(test::call_service(&app, req).await).await;
    assert_eq!(count, json!({"count": 2}));
}

#[actix_web::test]
async fn unused_email_is_available_for_new_contact() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::get()
        .uri("/contacts/new/email?email=free%40example.test")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_json(resp).await;
    assert_eq!(body, json!({"email": "free@example.test", "available": true}));
}

#[actix_web::test]
async fn taken_email_conflicts_except_for_its_owner() {
    let app = create_test_app(memory_state().await).await;

    let email = unique_email("taken");
    let req = test::TestRequest::post()
        .uri("/api/v1/contacts")
        .set_json(contact_body("Ada", &email))
        .to_request();
    let created: Value = read_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/contacts/new/email?email={email}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "DUPLICATE_EMAIL", StatusCode::CONFLICT, None).await;

    let req = test::TestRequest::get()
        .uri(&format!("/contacts/{id}/email?email={email}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn empty_email_is_a_field_error() {
    let app = create_test_app(memory_state().await).await;

    for uri in ["/contacts/new/email?email=", "/contacts/new/email"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let problem =
            assert_problem_details(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST, None).await;
        assert_eq!(problem.errors.unwrap()["email"], "Email is required.");
    }
}

#[actix_web::test]
async fn unknown_contact_id_is_not_found() {
    let app = create_test_app(memory_state().await).await;

    let req = test::TestRequest::get()
        .uri("/contacts/999/email?email=a%40b.test")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "CONTACT_NOT_FOUND", StatusCode::NOT_FOUND, None).await;

    let req = test::TestRequest::get()
        .uri("/contacts/nope/email?email=a%40b.test")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "INVALID_CONTACT_ID", StatusCode::BAD_REQUEST, None).await;
}
