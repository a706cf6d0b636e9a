//! Quick-reply buttons.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, instrument};

use crate::{
    base::types::{Message, Res, Topic},
    service::{host::HostClient, responder::Responder, transcript::Transcript},
};

use super::{
    post,
    reply::{Query, handle_reply},
};

/// Handles a quick-reply click.
///
/// Posts the topic's echo text as the user message right away, then schedules
/// the bot reply for that topic, bypassing classification.
#[instrument(skip(delay, responder, transcript, host))]
pub async fn handle_quick_reply(topic: Topic, delay: Duration, responder: Responder, transcript: Transcript, host: HostClient) -> Res<JoinHandle<()>> {
    info!("Quick reply selected ...");

    post(Message::user(topic.echo()), &transcript, &host).await?;

    Ok(handle_reply(Query::QuickReply(topic), delay, responder, transcript, host))
}
