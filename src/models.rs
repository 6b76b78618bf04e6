use serde::Deserialize;

/// Body of `POST /analyze-url`. The field is optional so a missing `url`
/// reaches the handler and gets the 400 body instead of a deserialization
/// rejection.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
}
