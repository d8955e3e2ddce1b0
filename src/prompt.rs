//! Prompt construction for the AI assist operations, plus sanitization of
//! user free text before it is interpolated into a prompt.

use serde::Serialize;

use crate::core::models::{Comment, Thread, ThreadCategory, Vendor};

/// Hard cap for user free text interpolated into a prompt.
pub const MAX_FREE_TEXT_LEN: usize = 2000;

/// Remove control characters (newlines excepted) and hard-truncate.
/// Applied to search queries and draft titles/bodies before they reach a
/// prompt.
#[must_use]
pub fn sanitize_free_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .take(MAX_FREE_TEXT_LEN)
        .collect()
}

/// Reduced thread projection embedded in the search prompt: id plus salient
/// fields only.
#[derive(Serialize)]
struct ThreadDigest<'a> {
    id: &'a str,
    title: &'a str,
    content: &'a str,
    #[serde(rename = "type")]
    category: ThreadCategory,
}

/// Reduced vendor projection embedded in the search prompt.
#[derive(Serialize)]
struct VendorDigest<'a> {
    id: &'a str,
    name: &'a str,
    category: &'a str,
    rating: f32,
}

/// Minimal thread projection for duplicate detection: id, title, content.
#[derive(Serialize)]
struct ThreadStub<'a> {
    id: &'a str,
    title: &'a str,
    content: &'a str,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "[]".to_string())
}

/// Prompt instructing the model to produce a concise bulleted summary of a
/// thread, emphasizing the main issue, viewpoints, and any consensus reached.
#[must_use]
pub fn summary_prompt(title: &str, content: &str, comments: &[Comment]) -> String {
    let comments_text = comments
        .iter()
        .map(|c| format!("{} (Unit {}): {}", c.author, c.unit, c.content))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an AI assistant for a community management app.\n\
         Summarize the following discussion thread into a concise, bulleted list.\n\
         Focus on the main issue, key viewpoints, and any consensus or resolution reached.\n\
         \n\
         Thread Title: {title}\n\
         Original Post: {content}\n\
         \n\
         Comments:\n\
         {comments_text}"
    )
}

/// Prompt asking the model to answer a query over the supplied collections
/// and identify the relevant thread/vendor ids.
#[must_use]
pub fn search_prompt(query: &str, threads: &[Thread], vendors: &[Vendor]) -> String {
    let query = sanitize_free_text(query);

    let thread_digests: Vec<ThreadDigest<'_>> = threads
        .iter()
        .map(|t| ThreadDigest {
            id: &t.id,
            title: &t.title,
            content: &t.content,
            category: t.category,
        })
        .collect();
    let vendor_digests: Vec<VendorDigest<'_>> = vendors
        .iter()
        .map(|v| VendorDigest {
            id: &v.id,
            name: &v.name,
            category: &v.category,
            rating: v.rating,
        })
        .collect();

    format!(
        "User Query: \"{query}\"\n\
         \n\
         You are an intelligent assistant for a community app called CommunityConnect.\n\
         1. Answer the user's query directly based on the provided Threads and Vendors data. \
         If they ask about a service, recommend the best vendor. \
         If they ask about an issue, summarize the situation from the threads.\n\
         2. Identify the IDs of the Threads and Vendors that are most relevant to the query \
         so we can show them to the user.\n\
         \n\
         Data:\n\
         Threads: {}\n\
         Vendors: {}",
        to_json(&thread_digests),
        to_json(&vendor_digests),
    )
}

/// Prompt asking the model to flag existing threads covering the same or a
/// very similar topic as a draft post.
#[must_use]
pub fn similar_threads_prompt(new_title: &str, new_content: &str, threads: &[Thread]) -> String {
    let new_title = sanitize_free_text(new_title);
    let new_content = sanitize_free_text(new_content);

    let stubs: Vec<ThreadStub<'_>> = threads
        .iter()
        .map(|t| ThreadStub {
            id: &t.id,
            title: &t.title,
            content: &t.content,
        })
        .collect();

    format!(
        "I am a user trying to post a new discussion in a community app.\n\
         \n\
         My Draft Post:\n\
         Title: \"{new_title}\"\n\
         Content: \"{new_content}\"\n\
         \n\
         Existing Threads:\n\
         {}\n\
         \n\
         Task:\n\
         Analyze the Existing Threads. If any of them are about the same topic or very similar \
         to My Draft Post, return their IDs.\n\
         If no similar threads are found, return an empty array.\n\
         \n\
         Only return the list of IDs.",
        to_json(&stubs),
    )
}
