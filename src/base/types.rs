use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// A support subject that selects one canned response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Pricing,
    Requirements,
    Bundle,
    Refund,
    Contact,
    Default,
}

impl Topic {
    /// Every topic, fallback included.
    pub const ALL: [Topic; 6] = [Topic::Pricing, Topic::Requirements, Topic::Bundle, Topic::Refund, Topic::Contact, Topic::Default];

    /// Topics offered as quick-reply buttons, in display order.
    pub const QUICK_REPLIES: [Topic; 5] = [Topic::Pricing, Topic::Requirements, Topic::Bundle, Topic::Refund, Topic::Contact];

    /// The lowercase key used by quick replies and configuration.
    pub fn key(self) -> &'static str {
        match self {
            Topic::Pricing => "pricing",
            Topic::Requirements => "requirements",
            Topic::Bundle => "bundle",
            Topic::Refund => "refund",
            Topic::Contact => "contact",
            Topic::Default => "default",
        }
    }

    /// The quick-reply button label.
    pub fn label(self) -> &'static str {
        match self {
            Topic::Pricing => "Pricing & Plans",
            Topic::Requirements => "Requirements",
            Topic::Bundle => "Bundle Details",
            Topic::Refund => "Refund Policy",
            Topic::Contact => "Contact Support",
            Topic::Default => "Other",
        }
    }

    /// The text posted on the user's behalf when the quick reply is clicked.
    ///
    /// This is the key with its first letter upper-cased (`refund` -> `Refund`).
    pub fn echo(self) -> String {
        let key = self.key();
        let mut chars = key.chars();

        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Topic {
    type Err = Err;

    fn from_str(s: &str) -> Res<Self> {
        Topic::ALL
            .into_iter()
            .find(|topic| topic.key() == s.trim())
            .ok_or_else(|| anyhow::anyhow!("Unknown topic: {s}. Must be one of: pricing, requirements, bundle, refund, contact, default"))
    }
}

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}

// Tests.
