//! In-memory transcript of the current session.
//!
//! This is an opinionated concrete implementation; in contrast to the other
//! services, it does not expose a generic trait interface. Nothing is
//! persisted and entries are never removed.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::base::types::{Message, Void};

/// Ordered, append-only sequence of displayed messages.
///
/// It is designed to be trivially cloneable; clones share the same entries.
#[derive(Clone, Default)]
pub struct Transcript {
    entries: Arc<RwLock<Vec<Message>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the transcript.
    pub async fn append(&self, message: Message) {
        self.entries.write().await.push(message);
    }

    /// Append a message and hand it to `show` while still holding the write lock.
    ///
    /// The message is kept even when `show` fails. Readers going through
    /// [`Transcript::with_entries`] never observe it appended but not yet shown.
    pub async fn append_with<F>(&self, message: Message, show: F) -> Void
    where
        F: FnOnce(&Message) -> Void,
    {
        let mut entries = self.entries.write().await;

        let shown = show(&message);
        entries.push(message);

        shown
    }

    /// Run `f` over all entries while holding the read lock.
    pub async fn with_entries<R>(&self, f: impl FnOnce(&[Message]) -> R) -> R {
        f(&self.entries.read().await)
    }

    /// Copy of all entries, oldest first.
    pub async fn snapshot(&self) -> Vec<Message> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

// Tests.
