use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use namecheck::{ServerConfig, create_app};
use tower::ServiceExt;

fn create_test_app() -> axum::Router {
    create_app(&ServerConfig {
        simulate_latency: false,
    })
}

async fn request(
    app: axum::Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Option<serde_json::Value>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            builder = builder.header("content-type", "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        None
    } else {
        serde_json::from_slice(&bytes).ok()
    };
    (status, json)
}

#[tokio::test]
async fn test_history_starts_empty() {
    let app = create_test_app();

    let (status, json) = request(app, Method::GET, "/api/history", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.unwrap().as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_history_add_and_list() {
    let app = create_test_app();

    let (status, json) = request(
        app.clone(),
        Method::POST,
        "/api/history",
        Some(r#"{"usernames": ["john"], "results": []}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let entry = json.unwrap();
    assert!(entry["id"].as_str().is_some());
    assert!(entry["timestamp"].as_str().is_some());
    assert_eq!(entry["usernames"][0], "john");

    let (_, json) = request(app, Method::GET, "/api/history", None).await;
    let entries = json.unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 1);
    assert_eq!(entries[0]["usernames"][0], "john");
}

#[tokio::test]
async fn test_history_caps_at_twenty_newest_first() {
    let app = create_test_app();

    for i in 0..25 {
        let body = format!(r#"{{"usernames": ["user{i}"], "results": []}}"#);
        let (status, _) =
            request(app.clone(), Method::POST, "/api/history", Some(&body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, json) = request(app, Method::GET, "/api/history", None).await;
    let entries = json.unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 20);
    assert_eq!(entries[0]["usernames"][0], "user24");
    assert_eq!(entries[19]["usernames"][0], "user5");
}

#[tokio::test]
async fn test_history_clear() {
    let app = create_test_app();

    request(
        app.clone(),
        Method::POST,
        "/api/history",
        Some(r#"{"usernames": ["john"], "results": []}"#),
    )
    .await;

    let (status, _) = request(app.clone(), Method::DELETE, "/api/history", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, json) = request(app, Method::GET, "/api/history", None).await;
    assert_eq!(json.unwrap().as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_history_stores_real_results() {
    let app = create_test_app();

    // Run a real check, then store its results verbatim
    let (_, check) = request(
        app.clone(),
        Method::POST,
        "/api/check-availability",
        Some(r#"{"usernames": ["john"]}"#),
    )
    .await;
    let check = check.unwrap();
    let body = serde_json::json!({
        "usernames": ["john"],
        "results": check["results"],
    })
    .to_string();

    let (status, json) = request(app, Method::POST, "/api/history", Some(&body)).await;

    assert_eq!(status, StatusCode::CREATED);
    let entry = json.unwrap();
    assert_eq!(entry["results"][0]["username"], "john");
    assert_eq!(entry["results"][0]["platforms"], check["results"][0]["platforms"]);
}

#[tokio::test]
async fn test_snapshot_save_with_default_name() {
    let app = create_test_app();

    let (status, json) = request(
        app,
        Method::POST,
        "/api/snapshots",
        Some(r#"{"usernames": ["john"], "results": []}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let snapshot = json.unwrap();
    assert!(snapshot["name"].as_str().unwrap().starts_with("Results - "));
}

#[tokio::test]
async fn test_snapshot_save_with_explicit_name() {
    let app = create_test_app();

    let (status, json) = request(
        app,
        Method::POST,
        "/api/snapshots",
        Some(r#"{"usernames": ["john"], "results": [], "name": "my picks"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json.unwrap()["name"], "my picks");
}

#[tokio::test]
async fn test_snapshot_rename() {
    let app = create_test_app();

    let (_, json) = request(
        app.clone(),
        Method::POST,
        "/api/snapshots",
        Some(r#"{"usernames": [], "results": []}"#),
    )
    .await;
    let id = json.unwrap()["id"].as_str().unwrap().to_string();

    let (status, _) = request(
        app.clone(),
        Method::PUT,
        &format!("/api/snapshots/{id}"),
        Some(r#"{"name": "renamed"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, json) = request(app, Method::GET, "/api/snapshots", None).await;
    assert_eq!(json.unwrap()[0]["name"], "renamed");
}

#[tokio::test]
async fn test_snapshot_rename_missing_is_404() {
    let app = create_test_app();

    let id = uuid::Uuid::new_v4();
    let (status, _) = request(
        app,
        Method::PUT,
        &format!("/api/snapshots/{id}"),
        Some(r#"{"name": "renamed"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_snapshot_invalid_uuid_is_400() {
    let app = create_test_app();

    let (status, _) = request(
        app,
        Method::DELETE,
        "/api/snapshots/not-a-uuid",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_snapshot_delete() {
    let app = create_test_app();

    let (_, json) = request(
        app.clone(),
        Method::POST,
        "/api/snapshots",
        Some(r#"{"usernames": [], "results": []}"#),
    )
    .await;
    let id = json.unwrap()["id"].as_str().unwrap().to_string();

    let (status, _) = request(
        app.clone(),
        Method::DELETE,
        &format!("/api/snapshots/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Deleting again is a 404
    let (status, _) = request(
        app.clone(),
        Method::DELETE,
        &format!("/api/snapshots/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, json) = request(app, Method::GET, "/api/snapshots", None).await;
    assert_eq!(json.unwrap().as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_snapshot_caps_at_fifty() {
    let app = create_test_app();

    for i in 0..55 {
        let body = format!(r#"{{"usernames": ["user{i}"], "results": []}}"#);
        let (status, _) =
            request(app.clone(), Method::POST, "/api/snapshots", Some(&body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, json) = request(app, Method::GET, "/api/snapshots", None).await;
    let snapshots = json.unwrap();
    let snapshots = snapshots.as_array().unwrap();
    assert_eq!(snapshots.len(), 50);
    assert_eq!(snapshots[0]["usernames"][0], "user54");
}

#[tokio::test]
async fn test_snapshot_clear_all() {
    let app = create_test_app();

    for _ in 0..3 {
        request(
            app.clone(),
            Method::POST,
            "/api/snapshots",
            Some(r#"{"usernames": [], "results": []}"#),
        )
        .await;
    }

    let (status, _) = request(app.clone(), Method::DELETE, "/api/snapshots", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, json) = request(app, Method::GET, "/api/snapshots", None).await;
    assert_eq!(json.unwrap().as_array().unwrap().len(), 0);
}
