//! CommunityConnect core - the data model and AI assist layer behind a
//! mobile-styled community app (discussion hub, vendor directory, local
//! marketplace).
//!
//! The crate has three parts:
//! 1. Plain in-memory records for threads, vendors and stores, plus the
//!    [`core::state::CommunityState`] container the UI layer owns
//! 2. An [`ai::AssistService`] facade exposing three AI-backed operations:
//!    thread summarization, semantic search over the local collections, and
//!    duplicate-thread detection
//! 3. A Gemini `generateContent` client with schema-constrained generation
//!    for the structured operations
//!
//! The assist operations are total: when no API key is configured, or when
//! the remote call fails, each one degrades to a fixed fallback value. A
//! fully offline, no-credential session is a supported mode, not an error.
//!
//! # Example
//!
//! ```no_run
//! use community_connect::ai::AssistService;
//! use community_connect::core::config::AppConfig;
//! use community_connect::core::state::CommunityState;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Set up structured logging
//!     community_connect::setup_logging();
//!
//!     let config = AppConfig::from_env();
//!     let assist = AssistService::from_config(&config);
//!     let state = CommunityState::seeded();
//!
//!     let result = assist
//!         .search_community("best plumber", &state.threads, &state.vendors)
//!         .await;
//!     println!("{}", result.answer);
//!     for thread in state.resolve_threads(&result.relevant_thread_ids) {
//!         println!("- {}", thread.title);
//!     }
//! }
//! ```

// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod prompt;

/// Configure structured logging for the process.
///
/// Sets up tracing-subscriber with a fmt layer and an env-filter (`RUST_LOG`,
/// defaulting to `info`). Call once at startup.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
