use std::env;

/// Process-wide configuration, read once at startup.
///
/// A missing API key is a valid configuration: every AI assist operation
/// then short-circuits to its fixed fallback value without any network
/// activity.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            gemini_model: env::var("GEMINI_MODEL").ok().filter(|m| !m.is_empty()),
        }
    }
}
