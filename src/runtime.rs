//! Runtime services and shared state for the support widget.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{error, info, instrument};

use crate::{
    base::{
        config::Config,
        types::{Res, Topic, Void},
    },
    interaction,
    service::{host::HostClient, responder::Responder, transcript::Transcript},
};

/// Runtime service context that can be shared across the application.
///
/// This is the widget controller: it holds the responder, the transcript, the
/// injected host and the panel state, and exposes one method per user action.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The responder instance.
    pub responder: Responder,
    /// The session transcript.
    pub transcript: Transcript,
    /// The presentation host.
    pub host: HostClient,
    /// Whether the chat panel is open.
    panel_open: Arc<AtomicBool>,
    /// Bot replies that have been scheduled but may not have landed yet.
    pending: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl Runtime {
    /// Create a runtime from its parts.
    pub fn new(config: Config, responder: Responder, transcript: Transcript, host: HostClient) -> Self {
        Self {
            config,
            responder,
            transcript,
            host,
            panel_open: Arc::new(AtomicBool::new(false)),
            pending: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a runtime with the keyword responder and the terminal host.
    #[instrument(skip_all)]
    pub fn terminal(config: Config) -> Self {
        let responder = Responder::keyword(&config);
        let host = HostClient::terminal(&config);

        Self::new(config, responder, Transcript::new(), host)
    }

    /// Run the host until the session ends, then let outstanding replies land.
    pub async fn start(&self) -> Void {
        if self.config.start_open && !self.is_panel_open() {
            self.toggle_panel().await?;
        }

        self.host.start(self.clone()).await?;
        self.drain().await;

        Ok(())
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open.load(Ordering::SeqCst)
    }

    /// Flip panel visibility. Returns the new state.
    #[instrument(skip_all)]
    pub async fn toggle_panel(&self) -> Res<bool> {
        // Flip and notify under the transcript lock so no reply lands in between.
        let open = self
            .transcript
            .with_entries(|entries| {
                let open = !self.panel_open.fetch_xor(true, Ordering::SeqCst);
                self.host.set_panel_visible(open, entries).map(|_| open)
            })
            .await?;

        info!("Panel {} ...", if open { "opened" } else { "closed" });

        Ok(open)
    }

    /// Quick reply: post the topic's echo, then reply with that topic.
    pub async fn ask_question(&self, topic: Topic) -> Void {
        let handle = interaction::quick_reply::handle_quick_reply(topic, self.reply_delay(), self.responder.clone(), self.transcript.clone(), self.host.clone()).await?;

        self.track(handle).await;

        Ok(())
    }

    /// Free text: post it and reply to its classification.
    ///
    /// Returns `false` when the input was blank and therefore ignored.
    pub async fn send_message(&self, input: &str) -> Res<bool> {
        let handle = interaction::free_text::handle_free_text(input, self.reply_delay(), self.responder.clone(), self.transcript.clone(), self.host.clone()).await?;

        let Some(handle) = handle else {
            return Ok(false);
        };

        self.track(handle).await;

        Ok(true)
    }

    /// Wait for every scheduled reply to land.
    pub async fn drain(&self) {
        let handles = std::mem::take(&mut *self.pending.lock().await);

        // Reply tasks log their own errors; this only catches panics and aborts.
        for result in futures::future::join_all(handles).await {
            if let Err(err) = result {
                error!("Reply task failed: {}", err);
            }
        }
    }

    async fn track(&self, handle: JoinHandle<()>) {
        let mut pending = self.pending.lock().await;

        pending.retain(|handle| !handle.is_finished());
        pending.push(handle);
    }

    fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.config.reply_delay_ms)
    }
}

// Tests.
