//! Gemini (`generateContent`) API client module
//!
//! Encapsulates the single outbound call behind every assist operation.

use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use super::schema::ResponseSchema;
use crate::errors::AssistError;

/// Model used when no override is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Gemini API client. One request per call; no retries, no caching, no
/// component-level timeout beyond the HTTP client's request timeout.
pub struct GeminiClient {
    api_key: String,
    model_name: String,
}

impl GeminiClient {
    #[must_use]
    pub fn new(api_key: String, model_name: Option<String>) -> Self {
        Self {
            api_key,
            model_name: model_name.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    pub(crate) fn build_request_body(prompt: &str, schema: Option<&ResponseSchema>) -> Value {
        let mut body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        if let Some(schema) = schema {
            body["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": schema,
            });
        }
        body
    }

    /// Send one `generateContent` request and return the reply text. With a
    /// schema, the request declares `application/json` output constrained to
    /// that shape; the returned string is the raw JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API answers non-2xx,
    /// or the response carries no text.
    pub async fn generate_content(
        &self,
        prompt: &str,
        schema: Option<&ResponseSchema>,
    ) -> Result<String, AssistError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{prompt}");

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Generating content with a {} character prompt (structured: {})",
            prompt.len(),
            schema.is_some()
        );

        let request_body = Self::build_request_body(prompt, schema);

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AssistError::Http(format!("Failed to build Gemini HTTP client: {e}")))?;

        let mut headers = reqwest::header::HeaderMap::new();
        let key_value = self
            .api_key
            .parse()
            .map_err(|e| AssistError::Http(format!("Invalid x-goog-api-key header: {e}")))?;
        headers.insert("x-goog-api-key", key_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| AssistError::Http(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        let url = format!("{API_BASE_URL}/{}:generateContent", self.model_name);

        let response = client
            .post(&url)
            .headers(headers)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AssistError::Http(format!("Gemini API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(AssistError::Api(format!(
                "Gemini API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| AssistError::Api(format!("Failed to parse Gemini response: {e}")))?;

        extract_text(&response_json)
            .ok_or_else(|| AssistError::Api("No text in response".to_string()))
    }
}

/// Pull the reply text out of a `generateContent` response: the `text` parts
/// of the first candidate, joined with newlines. `None` when the response
/// carries no text part at all.
pub(crate) fn extract_text(response_json: &Value) -> Option<String> {
    let parts = response_json
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())?;

    let collected: Vec<&str> = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n"))
    }
}
