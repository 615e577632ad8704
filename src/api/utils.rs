use std::time::Duration;

use anyhow::{Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Upper bound on any single provider call so a run cannot hang forever.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub async fn make_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    params: &str,
) -> Result<Value> {
    let url = format!("{}/{}?{}", base_url, endpoint, params);
    let res = client.get(&url).timeout(REQUEST_TIMEOUT).send().await?;

    if !res.status().is_success() {
        return Err(Error::msg(format!("Request failed: {}", res.status())));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)?;

    Ok(data)
}

/// Rows that fail to deserialize are skipped; an empty array is a valid
/// (if quiet) trading day, not an error.
pub fn parse_response_array<T>(data: Value) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    match data {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Err(Error::msg("Unexpected API response format: not an array")),
    }
}
