mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::TestServer;

// Seeded ids follow insertion order
const FALL24: i64 = 9;
const EXPS_BSEXP: i64 = 1;
const SADM_BSED: i64 = 2;

fn len(value: &Value) -> usize {
    value.as_array().map(Vec::len).unwrap_or(0)
}

#[tokio::test]
async fn list_and_term_views() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.viewer_token().await?;

    let (status, all) = server.get("/api/admissionsdata", &token).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(len(&all), 4);

    let (_, fall24) = server.get("/api/admissionsdata/term/Fall24", &token).await?;
    assert_eq!(len(&fall24), 2);
    let row = &fall24[0];
    assert_eq!(row["term"], "Fall24");
    assert_eq!(row["academicYear"], "2023-24");
    assert_eq!(row["department"], "KIN");
    assert_eq!(row["program"], "Bachelor's");
    assert_eq!(row["academicPlanCode"], "EXPS_BSEXP");

    let (status, body) = server.get("/api/admissionsdata/term/Summer22", &token).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    // Term lookups match the code exactly; "All" is only a filter wildcard
    let (status, _) = server.get("/api/admissionsdata/term/All", &token).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn academic_year_view() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.viewer_token().await?;

    let (status, rows) = server.get("/api/admissionsdata/academic-year/2023-24", &token).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(len(&rows), 3, "Fall24 pair plus Spring24");

    let (status, _) = server.get("/api/admissionsdata/academic-year/2030-31", &token).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = server.get("/api/admissionsdata/academic-year/2023", &token).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"].get("academicYear").is_some());
    Ok(())
}

#[tokio::test]
async fn filter_treats_all_as_unconstrained() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.viewer_token().await?;

    let (status, rows) = server
        .get("/api/admissionsdata/filter?term=Fall24&department=All&admitType=Transfer%20Student", &token)
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(len(&rows), 1);
    assert_eq!(rows[0]["admitTypeDescription"], "Transfer Student");

    let (_, rows) = server.get("/api/admissionsdata/filter?term=All&department=All", &token).await?;
    assert_eq!(len(&rows), 4);

    let (status, _) = server.get("/api/admissionsdata/filter?department=TAL", &token).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn fall24_summary() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.viewer_token().await?;

    let (status, summary) = server.get("/api/admissionsdata/summary/Fall24", &token).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["recordCount"], 2);
    assert_eq!(summary["totalApplied"], 633);
    assert_eq!(summary["totalAdmitted"], 143);
    assert_eq!(summary["totalDenied"], 204);
    assert_eq!(summary["totalGrossDeposited"], 53);
    assert_eq!(summary["totalNetDeposited"], 47);

    let rate = |key: &str| summary[key].as_f64().unwrap_or(f64::NAN);
    assert!((rate("admissionRate") - 22.59).abs() < 0.01);
    assert!((rate("denialRate") - 32.23).abs() < 0.01);
    assert!((rate("depositRate") - 32.87).abs() < 0.01);

    let (status, _) = server.get("/api/admissionsdata/summary/Spring22", &token).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn create_then_conflict_leaves_original_unchanged() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.staff_token().await?;

    let body = json!({
        "termID": FALL24,
        "programID": SADM_BSED,
        "academicCareer": "Undergraduate",
        "admitType": "New Student",
        "totalApplied": 50,
        "totalAdmitted": 20
    });
    let res = server
        .client
        .post(server.url("/api/admissionsdata"))
        .bearer_auth(&token)
        .json(&body)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let created: Value = res.json().await?;
    assert!(created["admissionID"].as_i64().is_some());
    assert_eq!(created["totalApplied"], 50);
    assert_eq!(created["totalDenied"], 0);

    let duplicate = json!({
        "termID": FALL24,
        "programID": EXPS_BSEXP,
        "academicCareer": "Undergraduate",
        "admitType": "New Student",
        "totalApplied": 1
    });
    let res = server
        .client
        .post(server.url("/api/admissionsdata"))
        .bearer_auth(&token)
        .json(&duplicate)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let (_, summary) = server.get("/api/admissionsdata/summary/Fall24", &token).await?;
    assert_eq!(summary["totalApplied"], 683, "633 seeded plus the 50 created");
    Ok(())
}

#[tokio::test]
async fn create_rejects_bad_input() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.admin_token().await?;

    let cases = [
        json!({ "termID": 999, "programID": 1, "academicCareer": "Undergraduate", "admitType": "New Student" }),
        json!({ "termID": FALL24, "programID": 3, "academicCareer": "Undergraduate", "admitType": "New Student", "totalApplied": -1 }),
        json!({ "termID": FALL24, "programID": 3, "academicCareer": "Undergraduate", "admitType": "Readmit" }),
    ];
    for body in cases {
        let res = server
            .client
            .post(server.url("/api/admissionsdata"))
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body: {}", body);
    }
    Ok(())
}

#[tokio::test]
async fn update_is_idempotent_on_counters() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.staff_token().await?;

    let counters = json!({
        "totalApplied": 600,
        "totalAdmitted": 130,
        "totalDenied": 200,
        "totalGrossDeposited": 45,
        "totalNetDeposited": 40
    });

    let mut previous: Option<Value> = None;
    for _ in 0..2 {
        let res = server
            .client
            .put(server.url("/api/admissionsdata/1"))
            .bearer_auth(&token)
            .json(&counters)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
        let record: Value = res.json().await?;
        assert_eq!(record["totalApplied"], 600);
        assert_eq!(record["totalNetDeposited"], 40);
        if let Some(previous) = &previous {
            assert_eq!(previous["totalAdmitted"], record["totalAdmitted"]);
            assert_eq!(previous["admitType"], record["admitType"]);
        }
        previous = Some(record);
    }

    let res = server
        .client
        .put(server.url("/api/admissionsdata/4242"))
        .bearer_auth(&token)
        .json(&counters)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn delete_then_missing() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.admin_token().await?;

    let res = server
        .client
        .delete(server.url("/api/admissionsdata/2"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = server
        .client
        .delete(server.url("/api/admissionsdata/2"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let (_, rows) = server.get("/api/admissionsdata/term/Fall24", &token).await?;
    assert_eq!(len(&rows), 1);
    Ok(())
}
