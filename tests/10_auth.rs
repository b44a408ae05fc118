mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::TestServer;

#[tokio::test]
async fn login_returns_token_and_user() -> Result<()> {
    let server = TestServer::start().await?;

    let res = server
        .client
        .post(server.url("/api/auth/login"))
        .json(&json!({ "email": "staff@miami.edu", "password": "staff123" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert!(body["token"].as_str().is_some_and(|t| t.split('.').count() == 3));
    assert_eq!(body["user"]["email"], "staff@miami.edu");
    assert_eq!(body["user"]["role"], "staff");
    assert_eq!(body["user"]["fullName"], "Staff Member");
    assert!(body["user"].get("passwordHash").is_none());
    Ok(())
}

#[tokio::test]
async fn wrong_password_is_unauthorized() -> Result<()> {
    let server = TestServer::start().await?;

    for (email, password) in [("admin@miami.edu", "wrong"), ("nobody@miami.edu", "admin123")] {
        let res = server
            .client
            .post(server.url("/api/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = res.json().await?;
        assert_eq!(body["message"], "Invalid email or password");
    }
    Ok(())
}

#[tokio::test]
async fn malformed_login_is_bad_request() -> Result<()> {
    let server = TestServer::start().await?;

    let res = server
        .client
        .post(server.url("/api/auth/login"))
        .json(&json!({ "email": "not-an-email" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"].get("email").is_some());
    assert!(body["field_errors"].get("password").is_some());

    let res = server
        .client
        .post(server.url("/api/auth/login"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "INVALID_JSON");
    Ok(())
}

#[tokio::test]
async fn profile_reflects_the_login() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.viewer_token().await?;

    let (status, body) = server.get("/api/auth/profile", &token).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "viewer@miami.edu");
    assert_eq!(body["role"], "viewer");
    assert_eq!(body["isActive"], true);
    assert!(body["lastLogin"].is_string(), "login should record a timestamp: {}", body);
    Ok(())
}

#[tokio::test]
async fn garbage_token_is_unauthorized() -> Result<()> {
    let server = TestServer::start().await?;

    let (status, body) = server.get("/api/auth/profile", "not.a.token").await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], true);

    let res = server.client.get(server.url("/api/auth/profile")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
