//! Team endpoints.

use meteen_integration_tests::{SARI_ID, TestContext};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_team_in_display_order() {
    let ctx = TestContext::seeded().await;
    let resp = ctx
        .client
        .get(ctx.url("/api/team"))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Body is not JSON");
    assert_eq!(body["items"][0]["name"], "Sari");
    assert_eq!(body["items"][1]["name"], "Budi");
    assert_eq!(
        body["items"][0]["instagram_url"],
        "https://instagram.com/sari.masak"
    );
}

#[tokio::test]
async fn test_member_detail() {
    let ctx = TestContext::seeded().await;
    let resp = ctx
        .client
        .get(ctx.url(&format!("/api/team/{SARI_ID}")))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Body is not JSON");
    assert_eq!(body["role"], "Head Chef");
    assert_eq!(body["image"], "https://example.com/sari.jpg");
}

#[tokio::test]
async fn test_unknown_or_malformed_member_is_not_found() {
    let ctx = TestContext::seeded().await;
    for id in ["00000000-0000-4000-8000-0000000000ff", "not-a-uuid"] {
        let resp = ctx
            .client
            .get(ctx.url(&format!("/api/team/{id}")))
            .send()
            .await
            .expect("Request failed");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "id {id}");
    }
}

#[tokio::test]
async fn test_member_backend_failure_is_bad_gateway() {
    let ctx = TestContext::seeded().await;
    ctx.source.set_fail_reads(true);
    let resp = ctx
        .client
        .get(ctx.url(&format!("/api/team/{SARI_ID}")))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
