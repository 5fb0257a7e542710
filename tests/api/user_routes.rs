//! User route tests.

use super::helpers::{TestApp, app, message};
use axum::http::{Method, StatusCode};
use eyre::{Result, ensure};
use rstest::rstest;
use serde_json::json;
use trackboard::user::domain::{User, UserId};

#[rstest]
#[case("/users", 2)]
#[case("/users?active=", 2)]
#[case("/users?active=true", 1)]
#[case("/users?active=false", 1)]
#[case("/users?active=anything", 1)]
#[tokio::test(flavor = "multi_thread")]
async fn list_applies_active_query(
    app: TestApp,
    #[case] uri: &str,
    #[case] expected: usize,
) -> Result<()> {
    app.add_user(User::new("Ada", "Lovelace", "Engineer", true))
        .await?;
    app.add_user(User::new("Charles", "Babbage", "Owner", false))
        .await?;

    let (status, body) = app.send(Method::GET, uri, None).await?;

    ensure!(status == StatusCode::OK, "unexpected status {status}");
    let count = body.as_array().map_or(0, Vec::len);
    ensure!(count == expected, "expected {expected} users, got {count}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn put_toggles_active_flag(app: TestApp) -> Result<()> {
    let user = app
        .add_user(User::new("Ada", "Lovelace", "Engineer", true))
        .await?;
    let uri = format!("/users/{}", user.id());

    let (status, body) = app
        .send(Method::PUT, &uri, Some(&json!({ "active": false, "title": "Ignored" })))
        .await?;

    ensure!(status == StatusCode::OK, "unexpected status {status}");
    ensure!(body.get("active") == Some(&json!(false)), "active should be false");
    ensure!(body.get("title") == Some(&json!("Engineer")), "title must not change");
    Ok(())
}

#[rstest]
#[case(json!({ "title": "Director" }))]
#[case(json!({}))]
#[tokio::test(flavor = "multi_thread")]
async fn put_without_active_is_rejected(
    app: TestApp,
    #[case] request: serde_json::Value,
) -> Result<()> {
    let user = app
        .add_user(User::new("Ada", "Lovelace", "Engineer", true))
        .await?;
    let uri = format!("/users/{}", user.id());

    let (status, body) = app.send(Method::PUT, &uri, Some(&request)).await?;

    ensure!(status == StatusCode::BAD_REQUEST, "unexpected status {status}");
    ensure!(
        message(&body) == "missing active property (the only one updateable)",
        "unexpected message {body}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_user_is_not_found(app: TestApp) -> Result<()> {
    let uri = format!("/users/{}", UserId::new());

    let (status, _) = app
        .send(Method::PUT, &uri, Some(&json!({ "active": true })))
        .await?;

    ensure!(status == StatusCode::NOT_FOUND, "unexpected status {status}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_user_id_is_a_server_error(app: TestApp) -> Result<()> {
    let (status, body) = app
        .send(Method::GET, "/users/not-a-uuid", None)
        .await?;

    ensure!(
        status == StatusCode::INTERNAL_SERVER_ERROR,
        "unexpected status {status}"
    );
    ensure!(message(&body).contains("invalid user identifier"), "unexpected body {body}");
    Ok(())
}
