use super::{fetch_activities, parse_payload, FetchError};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;

fn sample_payload() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "date": "2024-01-01",
            "name": "Alice",
            "commits": 3,
            "pull_requests_opened": 1,
            "pull_requests_merged": 0,
            "meetings": 2,
            "documentation": 1
        },
        {
            "id": 2,
            "date": "2024-01-01",
            "name": "Bob",
            "commits": 5,
            "pull_requests_opened": 0,
            "pull_requests_merged": 2,
            "meetings": 1,
            "documentation": 0
        }
    ])
}

#[test]
fn test_parse_bare_array_payload() {
    let records = parse_payload(sample_payload()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Alice");
    assert_eq!(records[1].commits, 5);
}

#[test]
fn test_parse_wrapped_object_payload() {
    let wrapped = json!({ "activities": sample_payload() });
    let records = parse_payload(wrapped).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, "2024-01-01");
}

#[test]
fn test_parse_rejects_non_array_shapes() {
    for body in [
        json!(42),
        json!("activities"),
        json!({ "data": [] }),
        json!({ "activities": "not-an-array" }),
    ] {
        assert!(matches!(parse_payload(body), Err(FetchError::Shape(_))));
    }
}

#[test]
fn test_parse_rejects_undecodable_record() {
    let body = json!([{ "id": 1, "date": "2024-01-01" }]);
    assert!(matches!(parse_payload(body), Err(FetchError::Decode(_))));
}

#[test]
fn test_missing_metric_fields_default_to_zero() {
    let body = json!([{ "date": "2024-01-01", "name": "Alice", "commits": 3 }]);
    let records = parse_payload(body).unwrap();
    assert_eq!(records[0].id, 0);
    assert_eq!(records[0].commits, 3);
    assert_eq!(records[0].meetings, 0);
    assert_eq!(records[0].documentation, 0);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let body = json!([{
        "id": 7,
        "date": "2024-01-01",
        "name": "Alice",
        "commits": 1,
        "pull_requests_opened": 0,
        "pull_requests_merged": 0,
        "meetings": 0,
        "documentation": 0,
        "team": "platform",
        "reviewed": true
    }]);
    let records = parse_payload(body).unwrap();
    assert_eq!(records[0].id, 7);
    assert_eq!(records[0].commits, 1);
}

#[tokio::test]
async fn test_fetch_decodes_wrapped_payload() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/db.json");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "activities": sample_payload() }));
        })
        .await;

    let records = fetch_activities(&server.url("/db.json"), Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].name, "Bob");
}

#[tokio::test]
async fn test_fetch_reports_server_error() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/db.json");
            then.status(500);
        })
        .await;

    let result = fetch_activities(&server.url("/db.json"), Duration::from_secs(5)).await;
    assert!(matches!(result, Err(FetchError::Status(status)) if status.as_u16() == 500));
}

#[tokio::test]
async fn test_fetch_reports_shape_error() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/db.json");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "records": [] }));
        })
        .await;

    let result = fetch_activities(&server.url("/db.json"), Duration::from_secs(5)).await;
    assert!(matches!(result, Err(FetchError::Shape(_))));
}
