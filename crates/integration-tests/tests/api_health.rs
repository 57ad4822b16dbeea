//! Health checks and response headers.

use meteen_integration_tests::TestContext;
use reqwest::StatusCode;

#[tokio::test]
async fn test_liveness_and_readiness() {
    let ctx = TestContext::new().await;

    let resp = ctx.client.get(ctx.url("/health")).send().await.expect("Request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Body"), "ok");

    let resp = ctx.client.get(ctx.url("/health/ready")).send().await.expect("Request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    ctx.source.set_fail_reads(true);
    let resp = ctx.client.get(ctx.url("/health/ready")).send().await.expect("Request failed");
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_request_id_and_security_headers() {
    let ctx = TestContext::new().await;
    let resp = ctx
        .client
        .get(ctx.url("/api/site"))
        .header("x-request-id", "it-123")
        .send()
        .await
        .expect("Request failed");

    let headers = resp.headers();
    assert_eq!(headers["x-request-id"], "it-123");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
}
