//! Keyword-table responder.
//!
//! Classification is a plain substring scan over an ordered rule list. The
//! rules overlap ("how much does the bundle cost" hits both pricing and
//! bundle), so the order is the tie-break: the first matching rule wins.

use std::sync::Arc;

use tracing::debug;

use crate::base::{config::Config, types::Topic};

use super::{GenericResponder, Responder};

/// Ordered classification rules. First match wins.
const RULES: &[(Topic, &[&str])] = &[
    (Topic::Pricing, &["price", "cost", "how much"]),
    (Topic::Requirements, &["require", "need", "api"]),
    (Topic::Bundle, &["bundle", "7 day", "lifetime"]),
    (Topic::Refund, &["refund", "money back"]),
    (Topic::Contact, &["contact", "email", "support", "help"]),
];

// Extra methods on `Responder` applied by the keyword implementation.

impl Responder {
    /// Creates a keyword responder over the configured response texts.
    pub fn keyword(config: &Config) -> Self {
        Self::new(Arc::new(KeywordResponder::new(ResponseTable::from_config(config))))
    }
}

// Structs.

/// Read-only mapping from every topic to its response text.
///
/// One slot per topic, so the table is total by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTable {
    texts: [String; Topic::ALL.len()],
}

impl ResponseTable {
    /// Builds the table from configuration, which falls back to the built-in texts.
    pub fn from_config(config: &Config) -> Self {
        Self {
            texts: Topic::ALL.map(|topic| config.response(topic).to_string()),
        }
    }

    pub fn get(&self, topic: Topic) -> &str {
        &self.texts[topic as usize]
    }
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Keyword responder implementation.
#[derive(Debug, Clone, Default)]
pub struct KeywordResponder {
    table: ResponseTable,
}

impl KeywordResponder {
    pub fn new(table: ResponseTable) -> Self {
        Self { table }
    }
}

impl GenericResponder for KeywordResponder {
    fn classify(&self, input: &str) -> Topic {
        let folded = input.to_lowercase();

        let topic = RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| folded.contains(keyword)))
            .map(|(topic, _)| *topic)
            .unwrap_or(Topic::Default);

        debug!("Classified input as `{}`.", topic);

        topic
    }

    fn respond(&self, topic: Topic) -> &str {
        self.table.get(topic)
    }
}

// Tests.
