//! All AI/LLM functionality

pub mod assist;
pub mod client;
pub mod schema;

// Re-export main types for convenience
pub use assist::{AssistService, SearchResult, TextGenerator};
pub use client::GeminiClient;
pub use schema::ResponseSchema;
