mod common;

use auth::Claims;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_sign_up_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice",
            "email_address": "alice@example.com",
            "password": "Secret123!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["email"], "alice@example.com");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
    // The password never appears in any shape
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_sign_up_duplicate_username() {
    let app = TestApp::spawn().await;

    app.sign_up_user("alice", "Secret123!").await;

    // Same username, different password and email
    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice",
            "email_address": "alice2@example.com",
            "password": "Other456!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_sign_up_duplicate_email() {
    let app = TestApp::spawn().await;

    app.sign_up_user("alice", "Secret123!").await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice2",
            "email_address": "alice@example.com",
            "password": "Other456!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_sign_up_invalid_username() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "username": "al",
            "email_address": "al@example.com",
            "password": "Secret123!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("minimum 4 characters"));
}

#[tokio::test]
async fn test_sign_up_short_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice",
            "email_address": "alice@example.com",
            "password": "short"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("password"));
}

#[tokio::test]
async fn test_sign_up_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice",
            "email_address": "not-an-email",
            "password": "Secret123!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sign_in_success() {
    let app = TestApp::spawn().await;

    let user_id = app.sign_up_user("alice", "Secret123!").await;

    let response = app
        .post("/api/auth/signin")
        .json(&json!({
            "username": "alice",
            "password": "Secret123!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert_eq!(body["data"]["user"]["username"], "alice");

    // The issued token verifies and carries the right claim
    let claims: Claims = app.jwt_handler.decode(token).expect("Token did not verify");
    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.username, "alice");
}

#[tokio::test]
async fn test_sign_in_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.sign_up_user("alice", "Secret123!").await;

    let wrong_password = app
        .post("/api/auth/signin")
        .json(&json!({
            "username": "alice",
            "password": "WrongPass1!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let unknown_user = app
        .post("/api/auth/signin")
        .json(&json!({
            "username": "charlie",
            "password": "Secret123!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    // Byte-identical bodies: a caller cannot tell which credential was wrong
    let wrong_password_body = wrong_password.text().await.unwrap();
    let unknown_user_body = unknown_user.text().await.unwrap();
    assert_eq!(wrong_password_body, unknown_user_body);
}

#[tokio::test]
async fn test_protected_route_with_valid_token() {
    let app = TestApp::spawn().await;

    app.sign_up_user("alice", "Secret123!").await;
    let token = app.sign_in_user("alice", "Secret123!").await;

    let response = app
        .get_authenticated("/api/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "alice");
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_truncated_token() {
    let app = TestApp::spawn().await;

    app.sign_up_user("alice", "Secret123!").await;
    let token = app.sign_in_user("alice", "Secret123!").await;
    let truncated = &token[..token.len() - 1];

    let response = app
        .get_authenticated("/api/users/me", truncated)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let app = TestApp::spawn().await;

    let user_id = app.sign_up_user("alice", "Secret123!").await;

    // Same signing key as the server, but the TTL already elapsed
    let expired_claims = Claims::for_user(&user_id, "alice".to_string(), -1);
    let expired_token = app
        .jwt_handler
        .encode(&expired_claims)
        .expect("Failed to encode token");

    let response = app
        .get_authenticated("/api/users/me", &expired_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_after_user_deleted() {
    let app = TestApp::spawn().await;

    let user_id = app.sign_up_user("alice", "Secret123!").await;
    let token = app.sign_in_user("alice", "Secret123!").await;

    // Remove the user out-of-band; the still-valid token must now be dead
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(uuid::Uuid::parse_str(&user_id).unwrap())
        .execute(&app.db.pool)
        .await
        .expect("Failed to delete user");

    let response = app
        .get_authenticated("/api/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_concurrent_sign_ups_single_winner() {
    let app = TestApp::spawn().await;

    // Five simultaneous sign-ups for one username: the unique index
    // must let exactly one through
    let mut handles = Vec::new();
    for i in 0..5 {
        let request = app.post("/api/auth/signup").json(&json!({
            "username": "alice",
            "email_address": format!("alice{}@example.com", i),
            "password": "Secret123!"
        }));
        handles.push(tokio::spawn(request.send()));
    }

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        let response = handle
            .await
            .expect("Task panicked")
            .expect("Request failed");
        match response.status() {
            StatusCode::CREATED => created += 1,
            StatusCode::CONFLICT => conflicts += 1,
            other => panic!("Unexpected status: {}", other),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 4);
}

#[tokio::test]
async fn test_task_crud_flow() {
    let app = TestApp::spawn().await;

    app.sign_up_user("alice", "Secret123!").await;
    let token = app.sign_in_user("alice", "Secret123!").await;

    // Create
    let response = app
        .post_authenticated("/api/tasks", &token)
        .json(&json!({
            "title": "Write the report",
            "description": "Quarterly numbers",
            "priority": 5
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["title"], "Write the report");
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["priority"], 5);
    let task_id = body["data"]["id"].as_str().unwrap().to_string();

    // Read back
    let response = app
        .get_authenticated(&format!("/api/tasks/{}", task_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // Partial update
    let response = app
        .patch_authenticated(&format!("/api/tasks/{}", task_id), &token)
        .json(&json!({ "status": "completed" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["status"], "completed");
    assert_eq!(body["data"]["title"], "Write the report");

    // Delete
    let response = app
        .delete_authenticated(&format!("/api/tasks/{}", task_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone
    let response = app
        .get_authenticated(&format!("/api/tasks/{}", task_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_tasks_filters() {
    let app = TestApp::spawn().await;

    app.sign_up_user("alice", "Secret123!").await;
    let token = app.sign_in_user("alice", "Secret123!").await;

    for (title, status, priority) in [
        ("Low pending", "pending", 1),
        ("High pending", "pending", 8),
        ("Done", "completed", 9),
    ] {
        let response = app
            .post_authenticated("/api/tasks", &token)
            .json(&json!({ "title": title, "status": status, "priority": priority }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Status filter
    let response = app
        .get_authenticated("/api/tasks?status=pending", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // Combined filter; ordering is priority-descending
    let response = app
        .get_authenticated("/api/tasks?priority=5", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let tasks = body["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["priority"], 9);
    assert_eq!(tasks[1]["priority"], 8);

    // Unknown status value is a validation failure
    let response = app
        .get_authenticated("/api/tasks?status=bogus", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tasks_are_owner_scoped() {
    let app = TestApp::spawn().await;

    app.sign_up_user("alice", "Secret123!").await;
    app.sign_up_user("bob0", "Secret456!").await;
    let alice_token = app.sign_in_user("alice", "Secret123!").await;
    let bob_token = app.sign_in_user("bob0", "Secret456!").await;

    let response = app
        .post_authenticated("/api/tasks", &alice_token)
        .json(&json!({ "title": "Alice's task" }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let task_id = body["data"]["id"].as_str().unwrap().to_string();

    // Bob's listing does not contain it
    let response = app
        .get_authenticated("/api/tasks", &bob_token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"].as_array().unwrap().is_empty());

    // Reading it as Bob reads as absent
    let response = app
        .get_authenticated(&format!("/api/tasks/{}", task_id), &bob_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Writing it as Bob is forbidden
    let response = app
        .patch_authenticated(&format!("/api/tasks/{}", task_id), &bob_token)
        .json(&json!({ "status": "completed" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/health")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");

    let response = app
        .get("/health/ready")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["ready"], true);
}

#[tokio::test]
async fn test_metrics_counts_requests() {
    let app = TestApp::spawn().await;

    // Generate one known 401
    let response = app
        .get("/api/users/me")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .get("/metrics")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["http_requests_total"].as_u64().unwrap() >= 1);
    assert!(body["http_requests_by_status"]["401"].as_u64().unwrap() >= 1);
}
