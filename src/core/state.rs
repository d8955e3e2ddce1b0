//! The in-memory application state container. Owned by the UI layer and
//! passed by handle wherever rendering needs it; the AI assist service never
//! reads it directly, all data flows in as explicit parameters.

use uuid::Uuid;

use crate::core::mock;
use crate::core::models::{Comment, Store, Thread, ThreadCategory, ThreadStatus, Vendor};

#[derive(Debug, Clone, Default)]
pub struct CommunityState {
    pub threads: Vec<Thread>,
    pub vendors: Vec<Vendor>,
    pub stores: Vec<Store>,
}

impl CommunityState {
    /// State preloaded with the seeded mock records.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            threads: mock::threads(),
            vendors: mock::vendors(),
            stores: mock::stores(),
        }
    }

    /// Create a new thread and insert it at the front of the list (newest
    /// first). Returns the minted thread id.
    pub fn add_thread(
        &mut self,
        title: &str,
        content: &str,
        category: ThreadCategory,
        author: &str,
        unit: &str,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        let thread = Thread {
            id: id.clone(),
            title: title.to_string(),
            content: content.to_string(),
            category,
            author: author.to_string(),
            unit: unit.to_string(),
            status: ThreadStatus::Open,
            timestamp: "Just now".to_string(),
            comments: Vec::new(),
            poll: None,
        };
        self.threads.insert(0, thread);
        id
    }

    /// Append a comment to a thread. Returns the stored comment, or `None`
    /// when the thread id does not resolve (dangling ids are skipped, not
    /// errors).
    pub fn add_comment(
        &mut self,
        thread_id: &str,
        author: &str,
        unit: &str,
        content: &str,
        avatar: &str,
    ) -> Option<&Comment> {
        let thread = self.threads.iter_mut().find(|t| t.id == thread_id)?;
        let comment = Comment {
            id: format!("c-{}", Uuid::new_v4().simple()),
            author: author.to_string(),
            unit: unit.to_string(),
            content: content.to_string(),
            timestamp: "Just now".to_string(),
            avatar: avatar.to_string(),
        };
        thread.comments.push(comment);
        thread.comments.last()
    }

    /// Record one vote for a poll option. Returns `false` when the thread,
    /// its poll, or the option index does not resolve.
    pub fn record_poll_vote(&mut self, thread_id: &str, option_index: usize) -> bool {
        let Some(thread) = self.threads.iter_mut().find(|t| t.id == thread_id) else {
            return false;
        };
        let Some(poll) = thread.poll.as_mut() else {
            return false;
        };
        let Some(option) = poll.options.get_mut(option_index) else {
            return false;
        };
        option.votes += 1;
        poll.total_votes += 1;
        true
    }

    #[must_use]
    pub fn thread(&self, id: &str) -> Option<&Thread> {
        self.threads.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn vendor(&self, id: &str) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == id)
    }

    /// Resolve a set of thread ids (e.g. from a search result) against the
    /// collection, preserving collection order. Unknown ids are silently
    /// dropped so a render over the result can never fail.
    #[must_use]
    pub fn resolve_threads(&self, ids: &[String]) -> Vec<&Thread> {
        self.threads
            .iter()
            .filter(|t| ids.iter().any(|id| *id == t.id))
            .collect()
    }

    /// Resolve a set of vendor ids against the collection; unknown ids are
    /// silently dropped.
    #[must_use]
    pub fn resolve_vendors(&self, ids: &[String]) -> Vec<&Vendor> {
        self.vendors
            .iter()
            .filter(|v| ids.iter().any(|id| *id == v.id))
            .collect()
    }
}
