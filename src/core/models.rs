use serde::{Deserialize, Serialize};
use std::fmt;

/// Discussion topic categories. The serialized labels are the ones shown in
/// the app and embedded in search prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreadCategory {
    #[serde(rename = "RWA Issue")]
    RwaIssue,
    #[serde(rename = "Lost & Found")]
    LostFound,
    General,
    Event,
}

impl fmt::Display for ThreadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ThreadCategory::RwaIssue => "RWA Issue",
            ThreadCategory::LostFound => "Lost & Found",
            ThreadCategory::General => "General",
            ThreadCategory::Event => "Event",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreadStatus {
    Open,
    Resolved,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl fmt::Display for ThreadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ThreadStatus::Open => "Open",
            ThreadStatus::Resolved => "Resolved",
            ThreadStatus::InProgress => "In Progress",
        };
        write!(f, "{label}")
    }
}

/// A reply inside a thread. Comment ids are unique within their thread;
/// nothing assumes global uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub timestamp: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    pub label: String,
    pub votes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub total_votes: u32,
}

/// A discussion topic: the original post plus its ordered comments and an
/// optional poll. Timestamps are opaque display strings ("2 hrs ago").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub author: String,
    pub unit: String,
    #[serde(rename = "type")]
    pub category: ThreadCategory,
    pub status: ThreadStatus,
    pub content: String,
    pub timestamp: String,
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorReview {
    pub id: String,
    pub author: String,
    pub unit: String,
    pub rating: u32,
    pub text: String,
}

/// A third-party service provider listed in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub category: String,
    pub contact: String,
    pub rating: f32,
    pub review_count: u32,
    pub used_by_count: u32,
    pub image_url: String,
    pub reviews: Vec<VendorReview>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub image_url: String,
}

/// A resident-run marketplace listing and its sellable items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    pub owner_name: String,
    pub unit: String,
    pub category: String,
    pub image_url: String,
    pub products: Vec<Product>,
}
