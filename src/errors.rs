use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("Gemini API key is not configured")]
    MissingApiKey,

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Failed to access Gemini API: {0}")]
    Api(String),

    #[error("Response did not match the declared schema: {0}")]
    Schema(String),
}

impl From<reqwest::Error> for AssistError {
    fn from(error: reqwest::Error) -> Self {
        AssistError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for AssistError {
    fn from(error: serde_json::Error) -> Self {
        AssistError::Schema(error.to_string())
    }
}
