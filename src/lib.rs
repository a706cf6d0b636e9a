//! Library root for `support-widget`.
//!
//! Support-widget is a floating support chat that answers from a fixed table of
//! canned topics:
//! - Classifies typed questions by ordered keyword rules
//! - Offers quick-reply buttons that pick a topic directly
//! - Keeps an append-only transcript for the session
//!
//! Presentation is injected: a host (the terminal one ships with the crate)
//! displays messages and captures input, while the runtime owns the widget's
//! behavior. Nothing is persisted.

pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;

use std::path::Path;

use base::{config::Config, types::Void};
use service::host::html;
use tracing::info;

/// Public async entry for the binary crate.
///
/// Builds the runtime with the terminal host, runs the session until input
/// ends, and optionally writes a snapshot of the final widget state.
pub async fn start(config: Config, snapshot: Option<&Path>) -> Void {
    info!("Starting support-widget ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::terminal(config);

    // Start the runtime.
    runtime.start().await?;

    // Write the snapshot, if asked for.
    if let Some(path) = snapshot {
        write_snapshot(&runtime, path).await?;
    }

    Ok(())
}

/// Write the widget state to `path`.
///
/// A `.json` path receives the transcript as JSON; anything else receives the
/// rendered HTML widget.
pub async fn write_snapshot(runtime: &runtime::Runtime, path: &Path) -> Void {
    let transcript = runtime.transcript.snapshot().await;

    let contents = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::to_string_pretty(&transcript)?
    } else {
        html::render_widget(&runtime.config, &transcript, runtime.is_panel_open())?
    };

    tokio::fs::write(path, contents).await?;

    info!("Wrote snapshot to {} ...", path.display());

    Ok(())
}
