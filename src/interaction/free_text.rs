//! Free text typed into the input box.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use crate::{
    base::types::{Message, Res},
    service::{host::HostClient, responder::Responder, transcript::Transcript},
};

use super::{
    post,
    reply::{Query, handle_reply},
};

/// Trim and case-fold typed text for classification.
pub fn fold(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Handles text sent with Enter or the Send button.
///
/// Blank input is ignored: nothing is appended and no reply is scheduled, so
/// this returns `None`. Otherwise the text is posted exactly as typed and the
/// reply is scheduled against its folded form.
#[instrument(skip_all)]
pub async fn handle_free_text(input: &str, delay: Duration, responder: Responder, transcript: Transcript, host: HostClient) -> Res<Option<JoinHandle<()>>> {
    let folded = fold(input);

    if folded.is_empty() {
        debug!("Ignoring blank input.");
        return Ok(None);
    }

    info!("Received free text ...");

    post(Message::user(input), &transcript, &host).await?;

    Ok(Some(handle_reply(Query::FreeText(folded), delay, responder, transcript, host)))
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_trims_and_lowercases() {
        assert_eq!(fold("  How MUCH?\n"), "how much?");
        assert_eq!(fold(" \t "), "");
    }
}
