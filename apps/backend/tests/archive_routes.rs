mod common;
mod support;

use std::sync::Arc;

use actix_web::http::{header, StatusCode};
use actix_web::test;
use contacts_backend::domain::archive::Archiver;
use contacts_backend::infra::state::build_state;
use serde_json::{json, Value};

use crate::common::read_json;
use crate::support::{create_test_app, state_without_db};

#[actix_web::test]
async fn first_poll_creates_waiting_job_then_advances() {
    let app = create_test_app(state_without_db().await).await;

    let req = test::TestRequest::get().uri("/contacts/archive").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let view: Value = read_json(resp).await;
    assert_eq!(
        view,
        json!({
            "status": "Waiting",
            "progress_units": 0,
            "fraction": 0.0,
            "owner_id": "anonymous",
            "artifact": "archive.json",
        })
    );

    let req = test::TestRequest::post().uri("/contacts/archive").to_request();
    let view: Value = read_json(test::call_service(&app, req).await).await;
    assert_eq!(view["status"], "Running");
    assert_eq!(view["progress_units"], 1);
    assert_eq!(view["fraction"], 0.1);
}

#[actix_web::test]
async fn owner_is_taken_from_the_creating_poll_only() {
    let app = create_test_app(state_without_db().await).await;

    let req = test::TestRequest::get()
        .uri("/contacts/archive?owner=alice")
        .to_request();
    let created: Value = read_json(test::call_service(&app, req).await).await;
    assert_eq!(created["owner_id"], "alice");
    assert_eq!(created["progress_units"], 0);

    let req = test::TestRequest::post()
        .uri("/contacts/archive?owner=bob")
        .to_request();
    let advanced: Value = read_json(test::call_service(&app, req).await).await;
    assert_eq!(advanced["owner_id"], "alice");
    assert_eq!(advanced["progress_units"], 1);
}

#[actix_web::test]
async fn blank_owner_falls_back_to_anonymous() {
    let app = create_test_app(state_without_db().await).await;

    let req = test::TestRequest::get()
        .uri("/contacts/archive?owner=")
        .to_request();
    let created: Value = read_json(test::call_service(&app, req).await).await;
    assert_eq!(created["owner_id"], "anonymous");
}

#[actix_web::test]
async fn eleventh_poll_completes_and_twelfth_wraps() {
    let app = create_test_app(state_without_db().await).await;

    let mut last = Value::Null;
    for _ in 0..11 {
        let req = test::TestRequest::get().uri("/contacts/archive").to_request();
        last = read_json(test::call_service(&app, req).await).await;
    }
    assert_eq!(last["status"], "Complete");
    assert_eq!(last["progress_units"], 10);
    assert_eq!(last["fraction"], 1.0);

    let req = test::TestRequest::get().uri("/contacts/archive").to_request();
    let wrapped: Value = read_json(test::call_service(&app, req).await).await;
    assert_eq!(wrapped["status"], "Waiting");
    assert_eq!(wrapped["progress_units"], 0);
}

#[actix_web::test]
async fn delete_resets_to_waiting() {
    let archiver = Arc::new(Archiver::new());
    let state = build_state()
        .with_archiver(Arc::clone(&archiver))
        .build()
        .await
        .unwrap();
    let app = create_test_app(state).await;

    for _ in 0..5 {
        let req = test::TestRequest::get().uri("/contacts/archive").to_request();
        test::call_service(&app, req).await;
    }
    assert_eq!(archiver.peek().unwrap().progress_units(), 4);

    let req = test::TestRequest::delete().uri("/contacts/archive").to_request();
    let view: Value = read_json(test::call_service(&app, req).await).await;
    assert_eq!(view["status"], "Waiting");
    assert_eq!(view["progress_units"], 0);
    assert_eq!(archiver.peek().unwrap().progress_units(), 0);

    let req = test::TestRequest::get().uri("/contacts/archive").to_request();
    let view: Value = read_json(test::call_service(&app, req).await).await;
    assert_eq!(view["progress_units"], 1);
}

#[actix_web::test]
async fn delete_before_any_poll_creates_a_waiting_job() {
    let app = create_test_app(state_without_db().await).await;

    let req = test::TestRequest::delete().uri("/contacts/archive").to_request();
    let view: Value = read_json(test::call_service(&app, req).await).await;
    assert_eq!(view["status"], "Waiting");
    assert_eq!(view["progress_units"], 0);
}

#[actix_web::test]
async fn archive_file_is_a_json_attachment() {
    let app = create_test_app(state_without_db().await).await;

    let req = test::TestRequest::get()
        .uri("/contacts/archive/file")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains("filename=\"archive.json\""));

    let body: Value = read_json(resp).await;
    assert!(body.is_object());
}

#[actix_web::test]
async fn archive_file_does_not_touch_progress() {
    let archiver = Arc::new(Archiver::new());
    let state = build_state()
        .with_archiver(Arc::clone(&archiver))
        .build()
        .await
        .unwrap();
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/contacts/archive/file")
        .to_request();
    test::call_service(&app, req).await;
    assert!(archiver.peek().is_none());
}
