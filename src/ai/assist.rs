//! The AI assist facade: three stateless operations (summarize, search,
//! find-similar) that build a prompt from supplied records, issue one
//! remote call, and parse the reply into a typed result.
//!
//! Every public operation is total. Internals use `Result` plumbing; at the
//! boundary each failure is logged and converted to the operation's fixed
//! fallback value, so the app stays usable with zero AI availability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use super::client::GeminiClient;
use super::schema::ResponseSchema;
use crate::core::config::AppConfig;
use crate::core::models::{Comment, Thread, Vendor};
use crate::errors::AssistError;
use crate::prompt;

/// Summarize fallback when no API key is configured.
pub const SUMMARY_MISSING_KEY: &str =
    "API Key is missing. Please configure the environment variable.";
/// Summarize fallback when the reply carries no usable text.
pub const SUMMARY_EMPTY: &str = "Could not generate summary.";
/// Summarize fallback on any call failure.
pub const SUMMARY_ERROR: &str = "An error occurred while generating the summary.";
/// Search answer when no API key is configured.
pub const SEARCH_MISSING_KEY: &str = "API Key missing. Cannot perform AI search.";
/// Search answer on any call or parse failure.
pub const SEARCH_ERROR: &str = "Sorry, I couldn't process your search at this time.";

/// Answer to a community search: natural-language reply plus the ids of the
/// threads and vendors the model found relevant. Callers resolve the ids
/// against their own collections and must drop any that do not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub answer: String,
    pub relevant_thread_ids: Vec<String>,
    pub relevant_vendor_ids: Vec<String>,
}

impl SearchResult {
    fn fallback(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            relevant_thread_ids: Vec::new(),
            relevant_vendor_ids: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SimilarThreads {
    similar_thread_ids: Vec<String>,
}

fn search_schema() -> ResponseSchema {
    ResponseSchema::object([
        ("answer", ResponseSchema::string()),
        (
            "relevantThreadIds",
            ResponseSchema::array_of(ResponseSchema::string()),
        ),
        (
            "relevantVendorIds",
            ResponseSchema::array_of(ResponseSchema::string()),
        ),
    ])
}

fn similar_threads_schema() -> ResponseSchema {
    ResponseSchema::object([(
        "similarThreadIds",
        ResponseSchema::array_of(ResponseSchema::string()),
    )])
}

/// Transport seam for the one outbound text-generation call. Implemented by
/// [`GeminiClient`]; tests substitute deterministic stubs.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        schema: Option<&ResponseSchema>,
    ) -> Result<String, AssistError>;
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        schema: Option<&ResponseSchema>,
    ) -> Result<String, AssistError> {
        self.generate_content(prompt, schema).await
    }
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for std::sync::Arc<T> {
    async fn generate(
        &self,
        prompt: &str,
        schema: Option<&ResponseSchema>,
    ) -> Result<String, AssistError> {
        (**self).generate(prompt, schema).await
    }
}

/// Stateless facade over the text-generation transport. Holds no data and
/// no mutable state; collections are passed into each call and only read.
pub struct AssistService {
    generator: Option<Box<dyn TextGenerator>>,
}

impl AssistService {
    /// Service backed by the given transport.
    #[must_use]
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Service with no transport: every operation returns its fallback.
    #[must_use]
    pub fn disabled() -> Self {
        Self { generator: None }
    }

    /// Build from configuration. A missing API key yields the disabled
    /// service, not an error.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.gemini_api_key {
            Some(key) => Self::new(Box::new(GeminiClient::new(
                key.clone(),
                config.gemini_model.clone(),
            ))),
            None => Self::disabled(),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.generator.is_some()
    }

    fn generator(&self) -> Result<&dyn TextGenerator, AssistError> {
        self.generator.as_deref().ok_or(AssistError::MissingApiKey)
    }

    /// Summarize a thread into a concise bulleted list. Returns the reply
    /// verbatim, or a fixed fallback string on missing credential, empty
    /// reply, or any call failure.
    pub async fn summarize_thread(
        &self,
        title: &str,
        content: &str,
        comments: &[Comment],
    ) -> String {
        match self.try_summarize(title, content, comments).await {
            Ok(text) if text.trim().is_empty() => SUMMARY_EMPTY.to_string(),
            Ok(text) => text,
            Err(AssistError::MissingApiKey) => SUMMARY_MISSING_KEY.to_string(),
            Err(e) => {
                error!("Error summarizing thread: {e}");
                SUMMARY_ERROR.to_string()
            }
        }
    }

    async fn try_summarize(
        &self,
        title: &str,
        content: &str,
        comments: &[Comment],
    ) -> Result<String, AssistError> {
        let generator = self.generator()?;
        let prompt = prompt::summary_prompt(title, content, comments);
        generator.generate(&prompt, None).await
    }

    /// Answer a free-text query over the supplied collections. Always
    /// returns the three-field result shape; on missing credential or any
    /// failure the answer is a fixed string and both id sets are empty.
    pub async fn search_community(
        &self,
        query: &str,
        threads: &[Thread],
        vendors: &[Vendor],
    ) -> SearchResult {
        match self.try_search(query, threads, vendors).await {
            Ok(result) => result,
            Err(AssistError::MissingApiKey) => SearchResult::fallback(SEARCH_MISSING_KEY),
            Err(e) => {
                error!("Search error: {e}");
                SearchResult::fallback(SEARCH_ERROR)
            }
        }
    }

    async fn try_search(
        &self,
        query: &str,
        threads: &[Thread],
        vendors: &[Vendor],
    ) -> Result<SearchResult, AssistError> {
        let generator = self.generator()?;
        let schema = search_schema();
        let prompt = prompt::search_prompt(query, threads, vendors);
        let raw = generator.generate(&prompt, Some(&schema)).await?;
        parse_structured(&raw, &schema)
    }

    /// Best-effort duplicate hinting: ids of existing threads covering the
    /// same or a very similar topic as the draft. Empty on missing
    /// credential, call failure, or schema violation; a new post then
    /// proceeds as if no similar thread existed.
    pub async fn find_similar_threads(
        &self,
        new_title: &str,
        new_content: &str,
        existing_threads: &[Thread],
    ) -> Vec<String> {
        match self
            .try_find_similar(new_title, new_content, existing_threads)
            .await
        {
            Ok(parsed) => parsed.similar_thread_ids,
            Err(AssistError::MissingApiKey) => Vec::new(),
            Err(e) => {
                error!("Error finding similar threads: {e}");
                Vec::new()
            }
        }
    }

    async fn try_find_similar(
        &self,
        new_title: &str,
        new_content: &str,
        existing_threads: &[Thread],
    ) -> Result<SimilarThreads, AssistError> {
        let generator = self.generator()?;
        let schema = similar_threads_schema();
        let prompt = prompt::similar_threads_prompt(new_title, new_content, existing_threads);
        let raw = generator.generate(&prompt, Some(&schema)).await?;
        parse_structured(&raw, &schema)
    }
}

/// Parse a structured reply: JSON, then schema validation, then the typed
/// shape. Any step failing is a schema violation.
fn parse_structured<T>(raw: &str, schema: &ResponseSchema) -> Result<T, AssistError>
where
    T: serde::de::DeserializeOwned,
{
    let value: Value = serde_json::from_str(raw)?;
    schema.validate(&value).map_err(AssistError::Schema)?;
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_structured_valid_search_body() {
        let raw = r#"{"answer":"ok","relevantThreadIds":["1"],"relevantVendorIds":[]}"#;
        let result: SearchResult = parse_structured(raw, &search_schema()).unwrap();
        assert_eq!(result.answer, "ok");
        assert_eq!(result.relevant_thread_ids, vec!["1".to_string()]);
        assert!(result.relevant_vendor_ids.is_empty());
    }

    #[test]
    fn test_parse_structured_rejects_invalid_json() {
        let err = parse_structured::<SearchResult>("not json", &search_schema()).unwrap_err();
        assert!(matches!(err, AssistError::Schema(_)));
    }

    #[test]
    fn test_parse_structured_rejects_schema_mismatch() {
        let raw = r#"{"answer":42,"relevantThreadIds":[],"relevantVendorIds":[]}"#;
        let err = parse_structured::<SearchResult>(raw, &search_schema()).unwrap_err();
        assert!(matches!(err, AssistError::Schema(_)));

        let raw = r#"{"similarThreadIds":"1"}"#;
        let err = parse_structured::<SimilarThreads>(raw, &similar_threads_schema()).unwrap_err();
        assert!(matches!(err, AssistError::Schema(_)));
    }
}
