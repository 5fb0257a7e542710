//! Task route tests.

use super::helpers::{TestApp, app, message};
use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use eyre::{Result, ensure};
use rstest::rstest;
use serde_json::{Value, json};
use trackboard::{
    task::domain::TaskStatus,
    user::domain::User,
};

#[rstest]
#[case("/tasks/enum_status", json!(["assigned", "in progress", "in review", "completed"]))]
#[case("/tasks/enum_priority", json!(["low", "medium", "high"]))]
#[tokio::test(flavor = "multi_thread")]
async fn enumeration_endpoints_list_allowed_values(
    app: TestApp,
    #[case] uri: &str,
    #[case] expected: Value,
) -> Result<()> {
    let (status, body) = app.send(Method::GET, uri, None).await?;

    ensure!(status == StatusCode::OK, "unexpected status {status}");
    ensure!(body == expected, "unexpected body {body}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn post_creates_task(app: TestApp) -> Result<()> {
    let manager = app.add_user(User::new("Grace", "Hopper", "Director", true)).await?;
    let project = app.add_project("Flow-Matic", &manager).await?;
    let body = json!({
        "name": "Compiler",
        "priority": "high",
        "status": "assigned",
        "project_id": project.id().to_string(),
        "timeline": { "date_assigned": "2024-03-01", "date_due": null },
    });

    let (status, created) = app.send(Method::POST, "/tasks", Some(&body)).await?;

    ensure!(status == StatusCode::CREATED, "unexpected status {status}");
    ensure!(created.get("priority") == Some(&json!("high")), "unexpected body {created}");
    ensure!(created.get("status") == Some(&json!("assigned")), "unexpected body {created}");
    ensure!(
        created.pointer("/timeline/date_updated").is_some_and(|value| !value.is_null()),
        "date_updated should be stamped"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_priority_lists_allowed_values(app: TestApp) -> Result<()> {
    let manager = app.add_user(User::new("Grace", "Hopper", "Director", true)).await?;
    let project = app.add_project("Flow-Matic", &manager).await?;
    let body = json!({
        "name": "Compiler",
        "priority": "urgent",
        "status": "assigned",
        "project_id": project.id().to_string(),
    });

    let (status, response) = app.send(Method::POST, "/tasks", Some(&body)).await?;

    ensure!(status == StatusCode::BAD_REQUEST, "unexpected status {status}");
    ensure!(
        message(&response) == "priority urgent is not any valid priorities of low, medium, high",
        "unexpected body {response}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mismatched_assignee_is_rejected(app: TestApp) -> Result<()> {
    let manager = app.add_user(User::new("Grace", "Hopper", "Director", true)).await?;
    let home = app.add_project("Flow-Matic", &manager).await?;
    let other = app.add_project("A-0", &manager).await?;
    let worker = app
        .add_user(User::new("Jean", "Sammet", "Engineer", true).with_project(home.id()))
        .await?;
    let body = json!({
        "name": "Compiler",
        "priority": "low",
        "status": "assigned",
        "project_id": other.id().to_string(),
        "user_id": worker.id().to_string(),
    });

    let (status, response) = app.send(Method::POST, "/tasks", Some(&body)).await?;

    ensure!(status == StatusCode::BAD_REQUEST, "unexpected status {status}");
    ensure!(
        message(&response).contains("is not assigned to project"),
        "unexpected body {response}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_project_reference_is_not_found(app: TestApp) -> Result<()> {
    let body = json!({
        "name": "Compiler",
        "priority": "low",
        "status": "assigned",
        "project_id": "6f1c2a7e-0000-4000-8000-000000000000",
    });

    let (status, _) = app.send(Method::POST, "/tasks", Some(&body)).await?;

    ensure!(status == StatusCode::NOT_FOUND, "unexpected status {status}");
    Ok(())
}

#[rstest]
#[case(json!({ "status": "completed" }), StatusCode::OK)]
#[case(json!({ "name": "Renamed" }), StatusCode::BAD_REQUEST)]
#[case(json!({ "status": "completed", "details": "late" }), StatusCode::BAD_REQUEST)]
#[tokio::test(flavor = "multi_thread")]
async fn in_progress_task_only_accepts_status(
    app: TestApp,
    #[case] body: Value,
    #[case] expected: StatusCode,
) -> Result<()> {
    let manager = app.add_user(User::new("Grace", "Hopper", "Director", true)).await?;
    let project = app.add_project("Flow-Matic", &manager).await?;
    let task = app.add_task(&project, TaskStatus::InProgress).await?;

    let (status, response) = app
        .send(Method::PUT, &format!("/tasks/{}", task.id()), Some(&body))
        .await?;

    ensure!(status == expected, "unexpected status {status}: {response}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigned_task_accepts_any_field(app: TestApp) -> Result<()> {
    let manager = app.add_user(User::new("Grace", "Hopper", "Director", true)).await?;
    let project = app.add_project("Flow-Matic", &manager).await?;
    let task = app.add_task(&project, TaskStatus::Assigned).await?;

    let (status, body) = app
        .send(
            Method::PUT,
            &format!("/tasks/{}", task.id()),
            Some(&json!({ "name": "Renamed", "priority": "low" })),
        )
        .await?;

    ensure!(status == StatusCode::OK, "unexpected status {status}");
    ensure!(body.get("name") == Some(&json!("Renamed")), "unexpected body {body}");
    ensure!(body.get("priority") == Some(&json!("low")), "unexpected body {body}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_populates_references(app: TestApp) -> Result<()> {
    let manager = app.add_user(User::new("Grace", "Hopper", "Director", true)).await?;
    let project = app.add_project("Flow-Matic", &manager).await?;
    let task = app.add_task(&project, TaskStatus::Assigned).await?;

    let (status, body) = app
        .send(Method::GET, &format!("/tasks/{}", task.id()), None)
        .await?;

    ensure!(status == StatusCode::OK, "unexpected status {status}");
    ensure!(
        body.pointer("/project_id/name") == Some(&json!("Flow-Matic")),
        "unexpected body {body}"
    );
    ensure!(
        body.get("user_id").is_some_and(Value::is_null),
        "unassigned task should have a null user"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_confirms_and_forgets(app: TestApp) -> Result<()> {
    let manager = app.add_user(User::new("Grace", "Hopper", "Director", true)).await?;
    let project = app.add_project("Flow-Matic", &manager).await?;
    let task = app.add_task(&project, TaskStatus::Completed).await?;
    let uri = format!("/tasks/{}", task.id());

    let (deleted, body) = app.send(Method::DELETE, &uri, None).await?;
    let (again, _) = app.send(Method::DELETE, &uri, None).await?;

    ensure!(deleted == StatusCode::OK, "unexpected status {deleted}");
    ensure!(
        message(&body) == format!("task {} deleted", task.id()),
        "unexpected body {body}"
    );
    ensure!(again == StatusCode::NOT_FOUND, "unexpected status {again}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn non_object_body_is_rejected(app: TestApp) -> Result<()> {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/tasks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("[1, 2, 3]"))?;

    let (status, body) = app.send_request(request).await?;

    ensure!(status == StatusCode::BAD_REQUEST, "unexpected status {status}");
    ensure!(!message(&body).is_empty(), "error body should carry a message");
    Ok(())
}
