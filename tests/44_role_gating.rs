mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::TestServer;

fn new_record() -> Value {
    json!({
        "termID": 9,
        "programID": 3,
        "academicCareer": "Undergraduate",
        "admitType": "New Student",
        "totalApplied": 10
    })
}

#[tokio::test]
async fn viewer_cannot_write() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.viewer_token().await?;

    let res = server
        .client
        .post(server.url("/api/admissionsdata"))
        .bearer_auth(&token)
        .json(&new_record())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "FORBIDDEN");

    let res = server
        .client
        .put(server.url("/api/admissionsdata/1"))
        .bearer_auth(&token)
        .json(&json!({
            "totalApplied": 1, "totalAdmitted": 1, "totalDenied": 0,
            "totalGrossDeposited": 0, "totalNetDeposited": 0
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Reads stay open to every role
    let (status, _) = server.get("/api/admissionsdata", &token).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn staff_cannot_delete() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.staff_token().await?;

    let res = server
        .client
        .delete(server.url("/api/admissionsdata/1"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let (_, rows) = server.get("/api/admissionsdata", &token).await?;
    assert_eq!(rows.as_array().map(Vec::len), Some(4), "nothing was deleted");
    Ok(())
}

#[tokio::test]
async fn no_token_is_unauthorized_before_role_check() -> Result<()> {
    let server = TestServer::start().await?;

    let res = server
        .client
        .post(server.url("/api/admissionsdata"))
        .json(&new_record())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = server.client.delete(server.url("/api/admissionsdata/1")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn diagnostics_are_admin_only() -> Result<()> {
    let server = TestServer::start().await?;

    let staff = server.staff_token().await?;
    let (status, _) = server.get("/api/health/diagnostics", &staff).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = server.admin_token().await?;
    let (status, body) = server.get("/api/health/diagnostics", &admin).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"]["status"], "ok");
    assert_eq!(body["counts"]["admissionRecords"], 4);
    Ok(())
}
