//! Built-in widget texts.
//!
//! Every response may be overridden through configuration; these are the defaults.
//! Spans wrapped in `**` are emphasis, rendered by the host.

/// Panel header title.
pub const TITLE: &str = "TradingBrainz Support";

/// First bot line shown above the quick replies.
pub const GREETING: &str = "Hi! 👋 How can I help you today? Choose a topic or type your question:";

pub const PRICING: &str = "**Pricing Options:**\n\n• **Trading Bots:** $99/mo (1 bot), $79/mo (2 bots), $59/mo (3+ bots)\n• **Trading Brain:** $497 one-time\n• **Complete Bundle:** $697 one-time (Brain + 2 lifetime bots)\n\nThe Bundle is the best value - you save over $500!";

pub const REQUIREMENTS: &str = "**System Requirements:**\n\n• Windows 10/11\n• Python 3.10+\n• 8GB RAM (16GB recommended)\n• Internet connection\n\n**API Keys Needed:**\n• Anthropic (Claude AI) - for strategy extraction\n• QuantConnect - for backtesting\n• Tradovate - for live trading";

pub const BUNDLE: &str = "**Complete Bundle ($697):**\n\n✓ Trading Brain (full AI system)\n✓ 2 Lifetime Trading Bots\n✓ All prop firm profiles\n✓ Lifetime updates\n\n⚠️ **Important:** You must activate your 2 bots within 7 days of purchase. Unused bot slots are forfeited after the activation window.";

pub const REFUND: &str = "**Refund Policy:**\n\nDue to the digital nature of our products, all sales are final. We recommend reviewing the FAQ and requirements carefully before purchasing.\n\nIf you have technical issues, our support team will help resolve them at support@tradingbrainz.com";

pub const CONTACT: &str = "**Contact Us:**\n\n📧 Email: support@tradingbrainz.com\n\nWe typically respond within 24 hours. For faster help, check our FAQ page first!";

/// Fallback when nothing matches.
pub const DEFAULT: &str = "I'm not sure about that specific question. Here are some options:\n\n• Check our **FAQ page** for detailed answers\n• Email **support@tradingbrainz.com**\n• Ask about: pricing, requirements, bundle, or refunds";
