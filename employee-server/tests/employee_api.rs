//! End-to-end API tests: full router over a real database on an ephemeral
//! port, exercised through an HTTP client.

use employee_server::{Config, ServerState, api};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Spin up the app on 127.0.0.1:0 and return its base URL.
///
/// The TempDir must stay alive for the duration of the test, otherwise the
/// database directory disappears underneath the server.
async fn spawn_server() -> (TempDir, String) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::with_overrides(dir.path().to_string_lossy(), 0);
    let state = ServerState::initialize(&config)
        .await
        .expect("Failed to initialize server state");

    let app = api::router().with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (dir, format!("http://{addr}"))
}

#[tokio::test]
async fn test_employee_crud_round_trip() {
    let (_dir, base) = spawn_server().await;
    let client = reqwest::Client::new();

    // Create
    let created: Value = client
        .post(format!("{base}/api/v1/employees"))
        .json(&json!({"name": "Alice", "salary": 1000, "department": "Engineering"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Alice");

    // List contains it
    let listed: Value = client
        .get(format!("{base}/api/v1/employees"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Read it back
    let fetched: Value = client
        .get(format!("{base}/api/v1/employees/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    // Full-replacement update
    let updated: Value = client
        .put(format!("{base}/api/v1/employees/{id}"))
        .json(&json!({"name": "Alicia", "salary": 1200, "department": "Engineering"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["id"].as_i64().unwrap(), id);
    assert_eq!(updated["name"], "Alicia");

    let fetched: Value = client
        .get(format!("{base}/api/v1/employees/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["name"], "Alicia");

    // Delete, then reads are 404
    let deleted = client
        .delete(format!("{base}/api/v1/employees/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), 200);

    let missing = client
        .get(format!("{base}/api/v1/employees/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
}

#[tokio::test]
async fn test_missing_id_responses() {
    let (_dir, base) = spawn_server().await;
    let client = reqwest::Client::new();

    let get = client
        .get(format!("{base}/api/v1/employees/99"))
        .send()
        .await
        .unwrap();
    assert_eq!(get.status(), 404);
    let body: Value = get.json().await.unwrap();
    assert_eq!(body["code"], "E0003");

    // PUT checks existence before updating
    let put = client
        .put(format!("{base}/api/v1/employees/99"))
        .json(&json!({"name": "Ghost", "salary": 0, "department": "None"}))
        .send()
        .await
        .unwrap();
    assert_eq!(put.status(), 404);

    let delete = client
        .delete(format!("{base}/api/v1/employees/99"))
        .send()
        .await
        .unwrap();
    assert_eq!(delete.status(), 404);
}

#[tokio::test]
async fn test_update_ignores_body_id() {
    let (_dir, base) = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/api/v1/employees"))
        .json(&json!({"name": "Alice", "salary": 1000, "department": "Engineering"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    // Body claims a different id; the path id must win.
    let updated: Value = client
        .put(format!("{base}/api/v1/employees/{id}"))
        .json(&json!({"id": 555, "name": "Alice", "salary": 1100, "department": "Engineering"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["id"].as_i64().unwrap(), id);

    // No record was created under the body's id.
    let ghost = client
        .get(format!("{base}/api/v1/employees/555"))
        .send()
        .await
        .unwrap();
    assert_eq!(ghost.status(), 404);
}

#[tokio::test]
async fn test_health_reports_cache_population() {
    let (_dir, base) = spawn_server().await;
    let client = reqwest::Client::new();

    let health: Value = client
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["database"]["status"], "ok");
    assert_eq!(health["cached_records"].as_u64().unwrap(), 0);

    // A write goes through the cache, so the entry count rises.
    client
        .post(format!("{base}/api/v1/employees"))
        .json(&json!({"name": "Alice", "salary": 1000, "department": "Engineering"}))
        .send()
        .await
        .unwrap();

    let health: Value = client
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["cached_records"].as_u64().unwrap(), 1);
}
