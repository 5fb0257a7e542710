//! Project route tests.

use super::helpers::{TestApp, app, message, set_field};
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

fn create_body(manager: &User, name: &str) -> Value {
    json!({
        "name": name,
        "description": "Route tests",
        "repository": "git://routes",
        "manager_id": manager.id().to_string(),
    })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn post_creates_project(app: TestApp) -> Result<()> {
    let manager = app.add_user(User::new("Grace", "Hopper", "Director", true)).await?;

    let (status, body) = app
        .send(Method::POST, "/projects", Some(&create_body(&manager, "Flow-Matic")))
        .await?;

    ensure!(status == StatusCode::CREATED, "unexpected status {status}");
    ensure!(body.get("name") == Some(&json!("Flow-Matic")), "unexpected body {body}");
    ensure!(body.get("task_ids").is_none(), "task_ids must not be stored");
    Ok(())
}

#[rstest]
#[case("Flow-Matic")]
#[case("FLOW-MATIC")]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_name_is_rejected(app: TestApp, #[case] second: &str) -> Result<()> {
    let manager = app.add_user(User::new("Grace", "Hopper", "Director", true)).await?;
    app.send(Method::POST, "/projects", Some(&create_body(&manager, "Flow-Matic")))
        .await?;

    let (status, body) = app
        .send(Method::POST, "/projects", Some(&create_body(&manager, second)))
        .await?;

    ensure!(status == StatusCode::BAD_REQUEST, "unexpected status {status}");
    ensure!(message(&body).contains("not unique"), "unexpected body {body}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_body_is_rejected(app: TestApp) -> Result<()> {
    let (status, body) = app.send(Method::POST, "/projects", Some(&json!({}))).await?;

    ensure!(status == StatusCode::BAD_REQUEST, "unexpected status {status}");
    ensure!(message(&body) == "input data is empty", "unexpected body {body}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unparseable_json_is_a_client_error(app: TestApp) -> Result<()> {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/projects")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))?;

    let (status, body) = app.send_request(request).await?;

    ensure!(status == StatusCode::BAD_REQUEST, "unexpected status {status}");
    ensure!(!message(&body).is_empty(), "error body should carry a message");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_task_ids_are_rejected(app: TestApp) -> Result<()> {
    let manager = app.add_user(User::new("Grace", "Hopper", "Director", true)).await?;
    let host = app.add_project("Host", &manager).await?;
    let task = app.add_task(&host, TaskStatus::Assigned).await?;
    let mut body = create_body(&manager, "Flow-Matic");
    set_field(&mut body, "task_ids", json!([task.id().to_string(), task.id().to_string()]));

    let (status, response) = app.send(Method::POST, "/projects", Some(&body)).await?;

    ensure!(status == StatusCode::BAD_REQUEST, "unexpected status {status}");
    ensure!(message(&response).contains("duplicate id"), "unexpected body {response}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_reports_stable_counts(app: TestApp) -> Result<()> {
    let manager = app.add_user(User::new("Grace", "Hopper", "Director", true)).await?;
    let project = app.add_project("Flow-Matic", &manager).await?;
    app.add_task(&project, TaskStatus::Assigned).await?;
    app.add_task(&project, TaskStatus::Completed).await?;
    app.add_user(User::new("Jean", "Sammet", "Engineer", true).with_project(project.id()))
        .await?;
    let uri = format!("/projects/{}", project.id());

    let (first_status, first) = app.send(Method::GET, &uri, None).await?;
    let (_, second) = app.send(Method::GET, &uri, None).await?;

    ensure!(first_status == StatusCode::OK, "unexpected status {first_status}");
    ensure!(first == second, "re-fetch should be identical");
    ensure!(first.get("taskCount") == Some(&json!(2)), "unexpected taskCount in {first}");
    ensure!(first.get("userCount") == Some(&json!(1)), "unexpected userCount in {first}");
    ensure!(
        first.pointer("/manager/first_name") == Some(&json!("Grace")),
        "manager should be populated"
    );
    ensure!(
        first.get("tasks").and_then(Value::as_array).is_some_and(|tasks| tasks.len() == 2),
        "tasks should be populated"
    );
    Ok(())
}

#[rstest]
#[case("/projects?name=MATIC", 1)]
#[case("/projects?name=", 2)]
#[case("/projects", 2)]
#[case("/projects?name=cobol", 0)]
#[tokio::test(flavor = "multi_thread")]
async fn list_filters_by_name(
    app: TestApp,
    #[case] uri: &str,
    #[case] expected: usize,
) -> Result<()> {
    let manager = app.add_user(User::new("Grace", "Hopper", "Director", true)).await?;
    app.add_project("Flow-Matic", &manager).await?;
    app.add_project("A-0", &manager).await?;

    let (status, body) = app.send(Method::GET, uri, None).await?;

    ensure!(status == StatusCode::OK, "unexpected status {status}");
    let count = body.as_array().map_or(0, Vec::len);
    ensure!(count == expected, "expected {expected} projects, got {count}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn put_updates_fields(app: TestApp) -> Result<()> {
    let manager = app.add_user(User::new("Grace", "Hopper", "Director", true)).await?;
    let project = app.add_project("Flow-Matic", &manager).await?;
    let uri = format!("/projects/{}", project.id());

    let (status, body) = app
        .send(Method::PUT, &uri, Some(&json!({ "description": "B-0" })))
        .await?;

    ensure!(status == StatusCode::OK, "unexpected status {status}");
    ensure!(body.get("description") == Some(&json!("B-0")), "unexpected body {body}");
    ensure!(body.get("name") == Some(&json!("Flow-Matic")), "name should be kept");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_is_refused_while_referenced(app: TestApp) -> Result<()> {
    let manager = app.add_user(User::new("Grace", "Hopper", "Director", true)).await?;
    let project = app.add_project("Flow-Matic", &manager).await?;
    let task = app.add_task(&project, TaskStatus::Assigned).await?;
    let project_uri = format!("/projects/{}", project.id());

    let (refused, _) = app.send(Method::DELETE, &project_uri, None).await?;
    app.send(Method::DELETE, &format!("/tasks/{}", task.id()), None).await?;
    let (deleted, body) = app.send(Method::DELETE, &project_uri, None).await?;
    let (gone, _) = app.send(Method::GET, &project_uri, None).await?;

    ensure!(refused == StatusCode::BAD_REQUEST, "unexpected status {refused}");
    ensure!(deleted == StatusCode::OK, "unexpected status {deleted}");
    ensure!(message(&body).ends_with("deleted"), "unexpected body {body}");
    ensure!(gone == StatusCode::NOT_FOUND, "unexpected status {gone}");
    Ok(())
}
