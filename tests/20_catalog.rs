mod common;

use anyhow::Result;
use reqwest::StatusCode;

use common::TestServer;

#[tokio::test]
async fn health_and_info_are_public() -> Result<()> {
    let server = TestServer::start().await?;

    let body: serde_json::Value = server.client.get(server.url("/api/health")).send().await?.json().await?;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "SEHD API is running successfully!");

    let body: serde_json::Value = server.client.get(server.url("/api/health/info")).send().await?.json().await?;
    assert_eq!(body["environment"], "Development");
    assert!(body["endpoints"].as_array().is_some_and(|e| !e.is_empty()));
    Ok(())
}

#[tokio::test]
async fn departments_and_programs() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.viewer_token().await?;

    let (status, departments) = server.get("/api/departments", &token).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(departments.as_array().map(Vec::len), Some(4));

    let kin = departments
        .as_array()
        .and_then(|all| all.iter().find(|d| d["departmentCode"] == "KIN"))
        .cloned()
        .expect("KIN department");
    let id = kin["departmentID"].as_i64().expect("department id");

    let (status, detail) = server.get(&format!("/api/departments/{}", id), &token).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["academicPrograms"].as_array().map(Vec::len), Some(2));

    let (status, _) = server.get("/api/departments/9999", &token).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, programs) = server.get("/api/programs/department/KIN", &token).await?;
    assert_eq!(programs[0]["department"]["departmentCode"], "KIN");

    let (_, programs) = server.get("/api/programs/type/Bachelor's", &token).await?;
    assert_eq!(programs.as_array().map(Vec::len), Some(6));
    Ok(())
}

#[tokio::test]
async fn terms_and_goals() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.viewer_token().await?;

    let (_, terms) = server.get("/api/terms", &token).await?;
    assert_eq!(terms.as_array().map(Vec::len), Some(9));
    assert_eq!(terms[0]["termCode"], "Fall24");

    let (status, term) = server.get("/api/terms/Spring23", &token).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(term["termName"], "Spring 2023");

    let (status, _) = server.get("/api/terms/Winter99", &token).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, terms) = server.get("/api/terms/year/2023", &token).await?;
    assert_eq!(terms.as_array().map(Vec::len), Some(3));

    let (status, _) = server.get("/api/terms/year/twenty", &token).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, goals) = server.get("/api/enrollmentgoals/term/Fall24", &token).await?;
    assert_eq!(goals.as_array().map(Vec::len), Some(2));
    Ok(())
}
