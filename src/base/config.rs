//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use crate::base::responses;

use super::types::{Res, Topic};

/// Largest accepted reply delay, in milliseconds.
const MAX_REPLY_DELAY_MS: u64 = 10_000;

/// Default panel title.
fn default_title() -> String {
    responses::TITLE.to_string()
}

/// Default greeting shown above the quick replies.
fn default_greeting() -> String {
    responses::GREETING.to_string()
}

/// Default simulated typing delay before a bot reply.
fn default_reply_delay_ms() -> u64 {
    500
}

fn default_pricing_response() -> String {
    responses::PRICING.to_string()
}

fn default_requirements_response() -> String {
    responses::REQUIREMENTS.to_string()
}

fn default_bundle_response() -> String {
    responses::BUNDLE.to_string()
}

fn default_refund_response() -> String {
    responses::REFUND.to_string()
}

fn default_contact_response() -> String {
    responses::CONTACT.to_string()
}

fn default_default_response() -> String {
    responses::DEFAULT.to_string()
}

/// Configuration for the support widget.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Panel header title (`TITLE`).
    #[serde(default = "default_title")]
    pub title: String,
    /// Greeting shown when the panel opens (`GREETING`).
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Simulated typing delay before each bot reply, in milliseconds (`REPLY_DELAY_MS`).
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    /// Whether the panel starts open (`START_OPEN`).
    #[serde(default)]
    pub start_open: bool,
    /// Response for the pricing topic (`PRICING_RESPONSE`).
    #[serde(default = "default_pricing_response")]
    pub pricing_response: String,
    /// Response for the requirements topic (`REQUIREMENTS_RESPONSE`).
    #[serde(default = "default_requirements_response")]
    pub requirements_response: String,
    /// Response for the bundle topic (`BUNDLE_RESPONSE`).
    #[serde(default = "default_bundle_response")]
    pub bundle_response: String,
    /// Response for the refund topic (`REFUND_RESPONSE`).
    #[serde(default = "default_refund_response")]
    pub refund_response: String,
    /// Response for the contact topic (`CONTACT_RESPONSE`).
    #[serde(default = "default_contact_response")]
    pub contact_response: String,
    /// Fallback response when no keyword matches (`DEFAULT_RESPONSE`).
    #[serde(default = "default_default_response")]
    pub default_response: String,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            title: default_title(),
            greeting: default_greeting(),
            reply_delay_ms: default_reply_delay_ms(),
            start_open: false,
            pricing_response: default_pricing_response(),
            requirements_response: default_requirements_response(),
            bundle_response: default_bundle_response(),
            refund_response: default_refund_response(),
            contact_response: default_contact_response(),
            default_response: default_default_response(),
        }
    }
}

impl ConfigInner {
    /// The configured response text for a topic.
    pub fn response(&self, topic: Topic) -> &str {
        match topic {
            Topic::Pricing => &self.pricing_response,
            Topic::Requirements => &self.requirements_response,
            Topic::Bundle => &self.bundle_response,
            Topic::Refund => &self.refund_response,
            Topic::Contact => &self.contact_response,
            Topic::Default => &self.default_response,
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        Self::load_with(config::Environment::default().prefix("SUPPORT_WIDGET"), explicit_path)
    }

    /// Load from an explicit environment source, then the config file.
    ///
    /// Env values stay strings until deserialization so response texts are kept verbatim.
    fn load_with(environment: config::Environment, explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(environment);

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Check the invariants the rest of the widget relies on.
    pub fn validate(&self) -> Res<()> {
        if self.title.trim().is_empty() {
            return Err(anyhow::anyhow!("Widget title must not be empty."));
        }

        if self.reply_delay_ms > MAX_REPLY_DELAY_MS {
            return Err(anyhow::anyhow!("Reply delay must be between 0 and {MAX_REPLY_DELAY_MS} ms."));
        }

        if let Some(topic) = Topic::ALL.into_iter().find(|topic| self.response(*topic).trim().is_empty()) {
            return Err(anyhow::anyhow!("Response for topic `{topic}` must not be empty."));
        }

        Ok(())
    }
}

// Tests.
