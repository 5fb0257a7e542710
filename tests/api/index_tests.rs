//! Index and fallback route tests.

use super::helpers::{TestApp, app, message};
use axum::http::{Method, StatusCode};
use eyre::{Result, ensure};
use rstest::rstest;
use serde_json::Value;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn index_lists_every_resource(app: TestApp) -> Result<()> {
    let (status, body) = app.send(Method::GET, "/", None).await?;

    ensure!(status == StatusCode::OK, "unexpected status {status}");
    for resource in ["projects", "tasks", "users"] {
        let listed = body
            .pointer(&format!("/available_json_apis/{resource}"))
            .is_some_and(Value::is_array);
        ensure!(listed, "index should list {resource}");
    }
    Ok(())
}

#[rstest]
#[case(Method::GET, "/nowhere")]
#[case(Method::DELETE, "/users/unknown/extra")]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_routes_are_not_found(
    app: TestApp,
    #[case] method: Method,
    #[case] uri: &str,
) -> Result<()> {
    let (status, body) = app.send(method, uri, None).await?;

    ensure!(status == StatusCode::NOT_FOUND, "unexpected status {status}");
    ensure!(message(&body) == "resource not found", "unexpected body {body}");
    Ok(())
}
