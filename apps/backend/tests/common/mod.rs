#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use serde::de::DeserializeOwned;

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Read a successful response body as JSON.
pub async fn read_json<T: DeserializeOwned>(resp: ServiceResponse<BoxBody>) -> T {
    let body = actix_web::test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "response body is not the expected JSON ({e}): {}",
            String::from_utf8_lossy(&body)
        )
    })
}

/// The `x-trace-id` header of a response.
pub fn trace_id_header(resp: &ServiceResponse<BoxBody>) -> String {
    resp.headers()
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8")
        .to_string()
}
