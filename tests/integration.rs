#![cfg(test)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use mockall::{Sequence, mock};
use support_widget::{
    base::{
        config::{Config, ConfigInner},
        responses,
        types::{Message, Role, Topic, Void},
    },
    runtime::Runtime,
    service::{
        host::{GenericHost, HostClient},
        responder::Responder,
        transcript::Transcript,
    },
};

// Mocks.

// Mock host for testing.

mock! {
    pub Host {}

    #[async_trait]
    impl GenericHost for Host {
        async fn start(&self, runtime: Runtime) -> Void;
        fn show_message(&self, message: &Message) -> Void;
        fn set_panel_visible(&self, visible: bool, transcript: &[Message]) -> Void;
    }
}

fn get_mock_host() -> MockHost {
    let mut mock = MockHost::new();

    mock.expect_start().returning(|_| Ok(()));
    mock.expect_show_message().returning(|_| Ok(()));
    mock.expect_set_panel_visible().returning(|_, _| Ok(()));

    mock
}

/// Host that records what it was asked to display.
#[derive(Default)]
struct RecordingHost {
    shown: Mutex<Vec<Message>>,
    visibility: Mutex<Vec<bool>>,
}

#[async_trait]
impl GenericHost for RecordingHost {
    async fn start(&self, _runtime: Runtime) -> Void {
        Ok(())
    }

    fn show_message(&self, message: &Message) -> Void {
        self.shown.lock().unwrap().push(message.clone());
        Ok(())
    }

    fn set_panel_visible(&self, visible: bool, _transcript: &[Message]) -> Void {
        self.visibility.lock().unwrap().push(visible);
        Ok(())
    }
}

/// Host that mirrors what a visible panel would currently display.
#[derive(Default)]
struct PanelHost {
    visible: Mutex<bool>,
    view: Mutex<Vec<Message>>,
}

#[async_trait]
impl GenericHost for PanelHost {
    async fn start(&self, _runtime: Runtime) -> Void {
        Ok(())
    }

    fn show_message(&self, message: &Message) -> Void {
        if *self.visible.lock().unwrap() {
            self.view.lock().unwrap().push(message.clone());
        }
        Ok(())
    }

    fn set_panel_visible(&self, visible: bool, transcript: &[Message]) -> Void {
        *self.visible.lock().unwrap() = visible;
        if visible {
            *self.view.lock().unwrap() = transcript.to_vec();
        }
        Ok(())
    }
}

fn create_test_config(reply_delay_ms: u64) -> Config {
    Config {
        inner: Arc::new(ConfigInner {
            reply_delay_ms,
            ..Default::default()
        }),
    }
}

/// Helper function to setup the test environment.
fn setup_test_runtime(config: Config, host: Arc<dyn GenericHost>) -> Runtime {
    let responder = Responder::keyword(&config);

    Runtime::new(config, responder, Transcript::new(), HostClient::new(host))
}

/// Wait for the transcript to reach a given length.
async fn wait_for_transcript_len(transcript: &Transcript, len: usize, max_attempts: u32, delay_ms: u64) -> Result<Vec<Message>, anyhow::Error> {
    for _ in 0..max_attempts {
        let entries = transcript.snapshot().await;
        if entries.len() >= len {
            return Ok(entries);
        }

        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    Err(anyhow::anyhow!("Timeout waiting for {len} transcript entries"))
}

#[tokio::test]
async fn test_quick_reply_refund() {
    let host = Arc::new(RecordingHost::default());
    let runtime = setup_test_runtime(create_test_config(0), host.clone());

    runtime.ask_question(Topic::Refund).await.unwrap();

    let entries = wait_for_transcript_len(&runtime.transcript, 2, 50, 20).await.expect("Failed waiting for the reply");

    assert_eq!(entries[0].role, Role::User);
    assert_eq!(entries[0].text, "Refund");
    assert_eq!(entries[1].role, Role::Bot);
    assert_eq!(entries[1].text, responses::REFUND);
    assert!(entries[1].text.contains("support@tradingbrainz.com"));

    // The host saw the same messages, in the same order.
    let shown = host.shown.lock().unwrap().clone();
    assert_eq!(shown, entries);
}

#[tokio::test]
async fn test_free_text_bundle_cost_is_pricing() {
    let runtime = setup_test_runtime(create_test_config(0), Arc::new(get_mock_host()));

    let sent = runtime.send_message("How much does the bundle cost?").await.unwrap();
    assert!(sent);

    let entries = wait_for_transcript_len(&runtime.transcript, 2, 50, 20).await.expect("Failed waiting for the reply");

    // The user message is kept exactly as typed.
    assert_eq!(entries[0].text, "How much does the bundle cost?");
    assert_eq!(entries[1].text, responses::PRICING);
}

#[tokio::test]
async fn test_free_text_without_keywords_gets_fallback() {
    let runtime = setup_test_runtime(create_test_config(0), Arc::new(get_mock_host()));

    runtime.send_message("  What is the WEATHER today  ").await.unwrap();

    let entries = wait_for_transcript_len(&runtime.transcript, 2, 50, 20).await.expect("Failed waiting for the reply");

    assert_eq!(entries[0].text, "  What is the WEATHER today  ");
    assert_eq!(entries[1].text, responses::DEFAULT);
}

#[tokio::test]
async fn test_blank_input_is_ignored() {
    let mut host = MockHost::new();
    host.expect_show_message().times(0);

    let runtime = setup_test_runtime(create_test_config(0), Arc::new(host));

    for input in ["", "   ", "\t\n"] {
        let sent = runtime.send_message(input).await.unwrap();
        assert!(!sent, "Blank input should not be sent: {input:?}");
    }

    runtime.drain().await;

    assert!(runtime.transcript.is_empty().await);
}

#[tokio::test]
async fn test_user_message_lands_before_reply() {
    let runtime = setup_test_runtime(create_test_config(200), Arc::new(get_mock_host()));

    runtime.send_message("refund please").await.unwrap();

    // The user message is appended right away; the reply is still "typing".
    let entries = runtime.transcript.snapshot().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].role, Role::User);

    runtime.drain().await;

    let entries = runtime.transcript.snapshot().await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].text, responses::REFUND);
}

#[tokio::test]
async fn test_replies_keep_interaction_order() {
    let runtime = setup_test_runtime(create_test_config(10), Arc::new(get_mock_host()));

    runtime.ask_question(Topic::Contact).await.unwrap();
    runtime.drain().await;
    runtime.send_message("which api keys do i need").await.unwrap();
    runtime.drain().await;

    let texts = runtime.transcript.snapshot().await.into_iter().map(|m| m.text).collect::<Vec<_>>();

    assert_eq!(texts, vec!["Contact".to_string(), responses::CONTACT.to_string(), "which api keys do i need".to_string(), responses::REQUIREMENTS.to_string()]);
}

#[tokio::test]
async fn test_toggle_panel_twice() {
    let mut host = MockHost::new();
    let mut seq = Sequence::new();

    host.expect_set_panel_visible().withf(|visible, _| *visible).times(1).in_sequence(&mut seq).returning(|_, _| Ok(()));
    host.expect_set_panel_visible().withf(|visible, _| !*visible).times(1).in_sequence(&mut seq).returning(|_, _| Ok(()));

    let runtime = setup_test_runtime(create_test_config(0), Arc::new(host));

    assert!(!runtime.is_panel_open());
    assert!(runtime.toggle_panel().await.unwrap());
    assert!(runtime.is_panel_open());
    assert!(!runtime.toggle_panel().await.unwrap());
    assert!(!runtime.is_panel_open());
}

#[tokio::test]
async fn test_start_opens_panel_when_configured() {
    let config = Config {
        inner: Arc::new(ConfigInner {
            start_open: true,
            ..Default::default()
        }),
    };

    let host = Arc::new(RecordingHost::default());
    let runtime = setup_test_runtime(config, host.clone());

    runtime.start().await.unwrap();

    assert!(runtime.is_panel_open());
    assert_eq!(*host.visibility.lock().unwrap(), vec![true]);
}

#[tokio::test]
async fn test_host_start_receives_runtime() {
    let mut host = MockHost::new();
    host.expect_start().times(1).returning(|runtime| {
        assert!(!runtime.is_panel_open());
        Ok(())
    });

    let runtime = setup_test_runtime(create_test_config(0), Arc::new(host));

    runtime.start().await.unwrap();
}

#[tokio::test]
async fn test_host_errors_do_not_propagate_from_replies() {
    let mut host = MockHost::new();
    host.expect_show_message().withf(|message| message.role == Role::User && message.text == "Bundle").returning(|_| Ok(()));
    host.expect_show_message().returning(|_| Err(anyhow::anyhow!("display went away")));

    let runtime = setup_test_runtime(create_test_config(0), Arc::new(host));

    runtime.ask_question(Topic::Bundle).await.unwrap();
    runtime.drain().await;

    // The reply is still recorded even though the host failed to show it.
    let entries = runtime.transcript.snapshot().await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].text, responses::BUNDLE);
}

#[tokio::test]
async fn test_write_snapshot_html_and_json() {
    let runtime = setup_test_runtime(create_test_config(0), Arc::new(get_mock_host()));

    runtime.ask_question(Topic::Pricing).await.unwrap();
    runtime.drain().await;

    let dir = tempfile::tempdir().unwrap();

    let html_path = dir.path().join("widget.html");
    support_widget::write_snapshot(&runtime, &html_path).await.unwrap();
    let html = std::fs::read_to_string(&html_path).unwrap();
    assert!(html.contains(r#"<div class="user-message">Pricing</div>"#));
    assert!(html.contains("<strong>Pricing Options:</strong>"));

    let json_path = dir.path().join("transcript.json");
    support_widget::write_snapshot(&runtime, &json_path).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json[0]["role"], "user");
    assert_eq!(json[1]["role"], "bot");
    assert_eq!(json[1]["text"], responses::PRICING);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_toggle_during_replies_shows_every_message_once() {
    let host = Arc::new(PanelHost::default());
    let runtime = setup_test_runtime(create_test_config(0), host.clone());

    assert!(runtime.toggle_panel().await.unwrap());

    for _ in 0..50 {
        runtime.send_message("how much").await.unwrap();
        runtime.toggle_panel().await.unwrap();
        runtime.toggle_panel().await.unwrap();
    }

    runtime.drain().await;

    assert!(runtime.is_panel_open());

    let entries = runtime.transcript.snapshot().await;
    assert_eq!(entries.len(), 100);
    assert_eq!(*host.view.lock().unwrap(), entries);
}
