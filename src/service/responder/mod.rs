pub mod keyword;

use std::{ops::Deref, sync::Arc};

use crate::base::types::Topic;

// Traits.

/// Generic responder trait that implementations must satisfy.
///
/// A responder maps free text to a [`Topic`] and a topic to its canned reply.
/// Both operations are total and stateless: they never fail and never mutate
/// the underlying response table.
pub trait GenericResponder: Send + Sync + 'static {
    /// Classify user-typed text into a topic.
    ///
    /// Always returns a topic; text that matches nothing yields [`Topic::Default`].
    fn classify(&self, input: &str) -> Topic;

    /// Look up the literal response text for a topic.
    ///
    /// The returned text still carries its `**` emphasis markers and `\n`
    /// breaks; rendering them is the host's concern.
    fn respond(&self, topic: Topic) -> &str;
}

// Structs.

/// Responder for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Responder {
    inner: Arc<dyn GenericResponder>,
}

impl Deref for Responder {
    type Target = dyn GenericResponder;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl Responder {
    pub fn new(inner: Arc<dyn GenericResponder>) -> Self {
        Self { inner }
    }

    /// Classify then respond in one step.
    pub fn answer(&self, input: &str) -> &str {
        self.respond(self.classify(input))
    }
}
