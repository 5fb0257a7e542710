//! API index.

use axum::Json;
use serde_json::{Value, json};

/// Lists the available JSON APIs.
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub async fn index() -> Json<Value> {
    Json(json!({
        "available_json_apis": {
            "projects": [
                "GET projects[?name]",
                "GET projects/:id",
                "POST projects",
                "PUT projects/:id",
                "DELETE projects/:id",
            ],
            "tasks": [
                "GET tasks",
                "GET tasks/:id",
                "GET tasks/enum_status",
                "GET tasks/enum_priority",
                "POST tasks",
                "PUT tasks/:id",
                "DELETE tasks/:id",
            ],
            "users": ["GET users[?active]", "GET users/:id", "PUT users/:id"],
        }
    }))
}
