//! E2E tests for the basic endpoint contract.

mod helpers;

use axum::http::StatusCode;
use helpers::TestHarness;

/// /health always returns 200 with the exact constant body.
#[tokio::test]
async fn e2e_health_exact_body() {
    let h = TestHarness::new();

    let (status, body) = h.get_raw("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, br#"{"status":"ok"}"#);
}

/// Unknown paths fall through to the default 404.
#[tokio::test]
async fn e2e_unknown_path_404() {
    let h = TestHarness::new();

    for path in ["/", "/healthz", "/load", "/load/100/extra"] {
        let (status, _) = h.get_raw(path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
    }
}

/// Known paths only accept GET.
#[tokio::test]
async fn e2e_wrong_method_405() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let h = TestHarness::new();
    let response = h
        .router
        .clone()
        .oneshot(Request::post("/down").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
