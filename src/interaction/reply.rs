//! The deferred bot reply.
//!
//! The delay only simulates typing; classification and lookup are synchronous.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{Instrument, error, info, instrument};

use crate::{
    base::types::{Message, Topic, Void},
    service::{host::HostClient, responder::Responder, transcript::Transcript},
};

use super::post;

/// What the bot is replying to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// A quick-reply button, which already names the topic.
    QuickReply(Topic),
    /// Case-folded, trimmed free text still to be classified.
    FreeText(String),
}

/// Schedules the bot reply to a query.
///
/// The reply is appended after `delay`. Errors are logged, never propagated.
#[instrument(skip_all)]
pub fn handle_reply(query: Query, delay: Duration, responder: Responder, transcript: Transcript, host: HostClient) -> JoinHandle<()> {
    tokio::spawn(async move {
        // Process the query.
        let result = handle_reply_internal(query, delay, &responder, &transcript, &host).in_current_span().await;

        // Log any errors.
        if let Err(err) = &result {
            error!("Error while replying: {}", err);
        }
    })
}

#[instrument(skip_all)]
async fn handle_reply_internal(query: Query, delay: Duration, responder: &Responder, transcript: &Transcript, host: &HostClient) -> Void {
    tokio::time::sleep(delay).await;

    let topic = match query {
        Query::QuickReply(topic) => topic,
        Query::FreeText(text) => responder.classify(&text),
    };

    info!("Replying with topic `{}` ...", topic);

    post(Message::bot(responder.respond(topic)), transcript, host).await
}
