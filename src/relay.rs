use serde_json::{json, Value};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Analysis endpoint returned status {0}")]
    Upstream(reqwest::StatusCode),
    #[error("{0}")]
    Request(String),
}

/// Forward `text` to the sentiment-analysis endpoint and return its JSON
/// body verbatim. Nothing is retried.
pub async fn analyze(
    client: &reqwest::Client,
    endpoint: &str,
    text: &str,
) -> Result<Value, RelayError> {
    let response = client
        .post(endpoint)
        .json(&json!({ "text": text }))
        .send()
        .await
        .map_err(|e| RelayError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(RelayError::Upstream(status));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| RelayError::Request(e.to_string()))
}
