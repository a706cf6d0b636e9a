pub mod html;
pub mod terminal;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::{
    base::types::{Message, Void},
    runtime::Runtime,
};

// Traits.

/// Generic presentation host trait that hosts must implement.
///
/// The host owns everything visual: the bubble, the panel, message bubbles and
/// input capture. The runtime injects messages and visibility changes through
/// this trait instead of touching any ambient state.
#[async_trait]
pub trait GenericHost: Send + Sync + 'static {
    /// Start the host input loop.
    ///
    /// The host captures user input (Enter, Send, quick-reply buttons, the
    /// bubble) and invokes the matching runtime operation. Returns when the
    /// session ends.
    async fn start(&self, runtime: Runtime) -> Void;

    /// Display a message that was just appended to the transcript.
    fn show_message(&self, message: &Message) -> Void;

    /// Reflect a change of panel visibility.
    ///
    /// The full transcript is passed so a host can redraw it when the panel opens.
    fn set_panel_visible(&self, visible: bool, transcript: &[Message]) -> Void;
}

// Structs.

/// Host client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct HostClient {
    inner: Arc<dyn GenericHost>,
}

impl Deref for HostClient {
    type Target = dyn GenericHost;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl HostClient {
    pub fn new(inner: Arc<dyn GenericHost>) -> Self {
        Self { inner }
    }
}
