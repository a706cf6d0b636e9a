//! User interactions for the support widget.
//!
//! This module provides the handlers behind each user action:
//! - Quick replies, which name a topic directly
//! - Free text typed into the input box
//! - The deferred bot reply that follows either one

pub mod free_text;
pub mod quick_reply;
pub mod reply;

use crate::{
    base::types::{Message, Void},
    service::{host::HostClient, transcript::Transcript},
};

/// Append a message to the transcript and hand it to the host for display.
///
/// Both happen under the transcript lock, so a panel toggle sees the message
/// either in its replay or through `show_message`, never both or neither.
pub(crate) async fn post(message: Message, transcript: &Transcript, host: &HostClient) -> Void {
    transcript.append_with(message, |message| host.show_message(message)).await
}
