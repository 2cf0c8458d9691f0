use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::types::Activity;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),
    #[error("undecodable activity record: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetch the activity feed with a single GET to `url`.
///
/// Errors stay at this boundary: callers log them and keep whatever record
/// set they already hold.
pub async fn fetch_activities(url: &str, timeout: Duration) -> Result<Vec<Activity>, FetchError> {
    let client = Client::builder().timeout(timeout).build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body: Value = response.json().await?;
    let records = parse_payload(body)?;
    debug!("decoded {} activity records", records.len());
    Ok(records)
}

/// Extract the record array from either accepted payload shape.
///
/// The endpoint has served both `{"activities": [...]}` and a bare top-level
/// array; both decode identically.
pub fn parse_payload(body: Value) -> Result<Vec<Activity>, FetchError> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut fields) => match fields.remove("activities") {
            Some(Value::Array(items)) => items,
            Some(_) => return Err(FetchError::Shape("`activities` is not an array")),
            None => return Err(FetchError::Shape("missing `activities` array")),
        },
        _ => return Err(FetchError::Shape("expected an array or wrapping object")),
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value::<Activity>(item))
        .collect::<Result<Vec<_>, _>>()
        .map_err(FetchError::from)
}
