//! Contact form endpoint.

use meteen_integration_tests::TestContext;
use meteen_site::services::{FAILURE_MESSAGE, SUCCESS_MESSAGE};
use meteen_site::supabase::Table;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn post(ctx: &TestContext, body: &Value) -> (StatusCode, Value) {
    let resp = ctx
        .client
        .post(ctx.url("/api/contact"))
        .json(body)
        .send()
        .await
        .expect("Request failed");
    let status = resp.status();
    (status, resp.json().await.expect("Body is not JSON"))
}

#[tokio::test]
async fn test_contact_success_stores_row() {
    let ctx = TestContext::new().await;
    let (status, body) = post(
        &ctx,
        &json!({"name": "A", "email": "a@b.com", "subject": "", "message": "hi"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], SUCCESS_MESSAGE);
    assert_eq!(body["notice_duration_secs"], 5);
    assert_eq!(
        ctx.source.rows(Table::ContactMessages),
        vec![json!({"name": "A", "email": "a@b.com", "subject": null, "message": "hi"})]
    );
}

#[tokio::test]
async fn test_contact_validation_error_is_specific() {
    let ctx = TestContext::new().await;
    let (status, body) = post(
        &ctx,
        &json!({"name": "A", "email": "not-an-email", "message": "hi"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Alamat email tidak valid.");
    assert_eq!(ctx.source.insert_count(), 0);
}

#[tokio::test]
async fn test_contact_backend_rejection_is_generic() {
    let ctx = TestContext::new().await;
    ctx.source.set_fail_writes(true);
    let (status, body) = post(
        &ctx,
        &json!({"name": "A", "email": "a@b.com", "message": "hi"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_contact_malformed_json_is_bad_request() {
    let ctx = TestContext::new().await;
    let (status, body) = post(&ctx, &json!({"name": "A"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
